//! Command execution.
//!
//! Each command takes its raw input as a string and returns the text to
//! print, so the binary only deals with reading input and writing output.

use std::io::Read;
use std::path::Path;

use recurra_core::recurrence::{
    filter_by_repeat_id, occurrence_dates, prepare_series, BatchCreateRequest, BatchDeleteRequest,
    EventForm, RecurrenceRule,
};
use recurra_core::validation::{rule_violations, validate_rule};

use crate::cli::dates::DatesCommand;
use crate::cli::expand::ExpandCommand;
use crate::cli::series::SeriesCommand;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{format_output, pretty, render};
use crate::report::ValidationReport;

/// Reads command input from `path`, or from stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let input = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if input.trim().is_empty() {
        return Err(CliError::InvalidInput("no event data provided".to_string()));
    }
    Ok(input)
}

/// Validates and expands one event.
pub fn run_expand(
    input: &str,
    cmd: &ExpandCommand,
    config: &Config,
    format: OutputFormat,
) -> Result<String> {
    let event: EventForm = serde_json::from_str(input)?;

    if cmd.skip_validation {
        tracing::debug!("skipping rule validation");
    } else if let Err(error) = validate_rule(&event, &config.policy()) {
        tracing::warn!(title = %event.title, %error, "rejected recurring event");
        return Err(error.into());
    }

    let series = prepare_series(event, &config.engine())?;
    tracing::info!(
        repeat_id = %series.repeat_id,
        occurrences = series.len(),
        "expanded recurring event"
    );

    let output = if cmd.batch {
        format_output(&BatchCreateRequest::from(series), format)
    } else {
        render(series.occurrences.as_slice(), format, |events| {
            pretty::format_occurrences(Some(&series.repeat_id), events)
        })
    };
    Ok(output)
}

/// Checks one event against the rule policy.
pub fn run_validate(input: &str, config: &Config) -> Result<ValidationReport> {
    let event: EventForm = serde_json::from_str(input)?;
    let violations = rule_violations(&event, &config.policy());
    for error in &violations {
        tracing::warn!(title = %event.title, %error, "rule violation");
    }
    Ok(ValidationReport::from_errors(&violations))
}

/// Renders a validation report.
pub fn render_report(report: &ValidationReport, format: OutputFormat) -> String {
    render(report, format, pretty::format_report)
}

/// Computes the bare occurrence dates of a rule.
pub fn run_dates(cmd: &DatesCommand, config: &Config, format: OutputFormat) -> Result<String> {
    let mut rule = RecurrenceRule::new(cmd.kind.into()).with_interval(cmd.interval);
    if let Some(end) = cmd.end_date {
        rule = rule.with_end_date(end);
    }

    let dates = occurrence_dates(cmd.date, &rule, config.default_horizon)?;
    tracing::debug!(count = dates.len(), "computed occurrence dates");

    Ok(render(dates.as_slice(), format, pretty::format_dates))
}

/// Selects the events of one series from a JSON array of events.
pub fn run_series(input: &str, cmd: &SeriesCommand, format: OutputFormat) -> Result<String> {
    let events: Vec<EventForm> = serde_json::from_str(input)?;
    let selected = filter_by_repeat_id(&events, &cmd.repeat_id);
    tracing::info!(
        repeat_id = %cmd.repeat_id,
        selected = selected.len(),
        total = events.len(),
        "selected series"
    );

    if cmd.delete_payload {
        let ids = selected.iter().filter_map(|e| e.id.clone()).collect();
        return Ok(format_output(&BatchDeleteRequest::new(ids), format));
    }

    let selected: Vec<EventForm> = selected.into_iter().cloned().collect();
    Ok(render(selected.as_slice(), format, |events| {
        pretty::format_occurrences(Some(&cmd.repeat_id), events)
    }))
}
