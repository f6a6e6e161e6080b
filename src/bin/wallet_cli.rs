use std::process::ExitCode;

fn main() -> ExitCode {
    wallet_core::init();
    match wallet_core::cli::run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            wallet_core::cli::output::error(&err);
            tracing::error!(error = %err, "shell terminated");
            ExitCode::FAILURE
        }
    }
}
