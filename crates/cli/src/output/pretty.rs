//! Pretty output formatting.

use chrono::NaiveDate;
use recurra_core::recurrence::{EventForm, RecurrenceType};

use crate::report::ValidationReport;

fn cadence_unit(kind: RecurrenceType) -> &'static str {
    match kind {
        RecurrenceType::Daily => "day(s)",
        RecurrenceType::Weekly => "week(s)",
        RecurrenceType::Monthly => "month(s)",
        RecurrenceType::Yearly => "year(s)",
        RecurrenceType::None => "never",
    }
}

/// Format a single occurrence for display.
pub fn format_occurrence(event: &EventForm) -> String {
    let mut output = format!("{} {}", event.date, event.title);
    if !event.start_time.is_empty() || !event.end_time.is_empty() {
        output.push_str(&format!(" ({}-{})", event.start_time, event.end_time));
    }
    if !event.location.is_empty() {
        output.push_str(&format!(" @ {}", event.location));
    }
    output
}

/// Format the occurrences of one series for display.
pub fn format_occurrences(repeat_id: Option<&str>, events: &[EventForm]) -> String {
    if events.is_empty() {
        return "No occurrences.".to_string();
    }
    let mut output = format!("OCCURRENCES ({})\n", events.len());
    if let Some(first) = events.first() {
        output.push_str(&format!(
            "  Rule: every {} {}",
            first.repeat.effective_interval(),
            cadence_unit(first.repeat.kind)
        ));
        if let Some(end) = first.repeat.end_date {
            output.push_str(&format!(" until {}", end));
        }
        output.push('\n');
    }
    if let Some(id) = repeat_id {
        output.push_str(&format!("  Series: {}\n", id));
    }
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_occurrence(event)));
    }
    output
}

/// Format bare dates, one per line.
pub fn format_dates(dates: &[NaiveDate]) -> String {
    if dates.is_empty() {
        return "No occurrences.".to_string();
    }
    dates
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a validation report for display.
pub fn format_report(report: &ValidationReport) -> String {
    if report.valid {
        return "valid".to_string();
    }
    let mut output = format!("INVALID ({})", report.violations.len());
    for violation in &report.violations {
        output.push_str(&format!("\n  - {}", violation.message));
    }
    output
}
