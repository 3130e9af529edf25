//! Output formatting functions.

pub mod pretty;

use crate::cli::OutputFormat;

/// Format a value as compact JSON, or indented JSON for `Pretty`.
pub fn format_output<T: serde::Serialize>(value: &T, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => serde_json::to_string(value).unwrap_or_default(),
        OutputFormat::Pretty => serde_json::to_string_pretty(value).unwrap_or_default(),
    }
}

/// Format a value as JSON, or through `pretty` for human-readable output.
pub fn render<T, F>(value: &T, format: OutputFormat, pretty: F) -> String
where
    T: serde::Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    match format {
        OutputFormat::Json => format_output(&value, format),
        OutputFormat::Pretty => pretty(value),
    }
}
