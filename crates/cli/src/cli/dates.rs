//! Dates command.

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use recurra_core::recurrence::RecurrenceType;

/// Print the occurrence dates of a rule without an event record.
#[derive(Debug, Parser)]
pub struct DatesCommand {
    /// Anchor date (YYYY-MM-DD).
    #[arg(long)]
    pub date: NaiveDate,
    /// Recurrence cadence.
    #[arg(long = "type", value_enum)]
    pub kind: Cadence,
    /// Units between occurrences.
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    pub interval: i32,
    /// Inclusive end date (YYYY-MM-DD).
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    /// Horizon for rules without an end date (YYYY-MM-DD).
    #[arg(long, env = "RECURRA_DEFAULT_HORIZON")]
    pub horizon: Option<NaiveDate>,
}

/// CLI cadence (with clap ValueEnum). `none` is not offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Cadence {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl From<Cadence> for RecurrenceType {
    fn from(c: Cadence) -> Self {
        match c {
            Cadence::Daily => RecurrenceType::Daily,
            Cadence::Weekly => RecurrenceType::Weekly,
            Cadence::Monthly => RecurrenceType::Monthly,
            Cadence::Yearly => RecurrenceType::Yearly,
        }
    }
}
