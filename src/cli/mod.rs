//! Line-oriented shell that renders the statement and forwards user
//! commands to [`StatementStore`](crate::statement::StatementStore).

pub mod output;
pub mod render;
pub mod shell;
pub mod shell_context;

use thiserror::Error;

use crate::errors::{ConfigError, FormError, StatementError, StorageError};

pub use shell::run_cli;
pub use shell_context::ShellContext;

/// Environment variable switching the shell to non-interactive script mode.
pub const SCRIPT_ENV: &str = "WALLET_CLI_SCRIPT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Fatal shell errors; the process exits with status 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from a single command; reported and the shell keeps running.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Statement(#[from] StatementError),
    #[error(transparent)]
    Form(#[from] FormError),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("{0}")]
    Usage(String),
}
