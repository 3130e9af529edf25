//! Series command.

use std::path::PathBuf;

use clap::Parser;

/// Select the events sharing a series id.
#[derive(Debug, Parser)]
pub struct SeriesCommand {
    /// JSON file holding an array of events (reads stdin when omitted).
    #[arg(long, short)]
    pub input: Option<PathBuf>,
    /// Series identifier (`repeat.id`).
    #[arg(long)]
    pub repeat_id: String,
    /// Print a batch-delete payload of the selected event ids instead.
    #[arg(long)]
    pub delete_payload: bool,
}
