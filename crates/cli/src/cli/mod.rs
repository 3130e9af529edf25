//! CLI command definitions.

pub mod dates;
pub mod expand;
pub mod series;
pub mod validate;

use clap::{Parser, Subcommand, ValueEnum};

/// Expand and validate recurring calendar events.
#[derive(Debug, Parser)]
#[command(name = "recurra")]
#[command(version, about = "Expand and validate recurring calendar events", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Expand a recurring event into its occurrences.
    Expand(expand::ExpandCommand),
    /// Check a recurring event against the rule policy.
    Validate(validate::ValidateCommand),
    /// Print the occurrence dates of a bare rule.
    Dates(dates::DatesCommand),
    /// Select the events of one series from a list.
    Series(series::SeriesCommand),
}
