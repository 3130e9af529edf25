//! CLI error types.

use recurra_core::recurrence::RecurrenceError;
use recurra_core::validation::ValidationError;
use thiserror::Error;

/// Result type alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur while running a command.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid recurrence rule: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Recurrence(#[from] RecurrenceError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
