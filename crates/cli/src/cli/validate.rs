//! Validate command.

use std::path::PathBuf;

use clap::Parser;

/// Validate one event read from a file or stdin.
#[derive(Debug, Parser)]
pub struct ValidateCommand {
    /// JSON file holding the event (reads stdin when omitted).
    #[arg(long, short)]
    pub input: Option<PathBuf>,
}
