use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/refs");

    let hash = command_output("git", &["rev-parse", "--short", "HEAD"])
        .filter(|hash| !hash.is_empty())
        .unwrap_or_else(|| "unknown".into());
    export("HASH", &hash);

    let status = match command_output("git", &["status", "--porcelain"]) {
        Some(changes) if changes.is_empty() => "clean",
        Some(_) => "dirty",
        None => "unknown",
    };
    export("STATUS", status);

    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
    export("TIMESTAMP", &timestamp);

    export(
        "TARGET",
        &env::var("TARGET").unwrap_or_else(|_| "unknown-target".into()),
    );
    export(
        "PROFILE",
        &env::var("PROFILE").unwrap_or_else(|_| "unknown-profile".into()),
    );

    let rustc = command_output("rustc", &["--version"]).unwrap_or_else(|| "unknown".into());
    export("RUSTC", &rustc);
}

fn export(suffix: &str, value: &str) {
    println!("cargo:rustc-env=WALLET_BUILD_{suffix}={value}");
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    String::from_utf8(output.stdout)
        .ok()
        .map(|text| text.trim().to_string())
}
