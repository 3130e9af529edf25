//! Expand command.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

/// Expand one event read from a file or stdin.
#[derive(Debug, Parser)]
pub struct ExpandCommand {
    /// JSON file holding the seed event (reads stdin when omitted).
    #[arg(long, short)]
    pub input: Option<PathBuf>,
    /// Horizon for rules without an end date (YYYY-MM-DD).
    #[arg(long, env = "RECURRA_DEFAULT_HORIZON")]
    pub horizon: Option<NaiveDate>,
    /// Wrap the occurrences in a batch-create payload.
    #[arg(long)]
    pub batch: bool,
    /// Expand even if the rule violates the interval policy or end date check.
    #[arg(long)]
    pub skip_validation: bool,
}
