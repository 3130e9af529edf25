//! Validation report returned by the `validate` command.

use recurra_core::validation::ValidationError;
use serde::Serialize;

/// One failed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub message: String,
    /// Message as shown by the Korean event form.
    pub message_ko: String,
}

impl From<&ValidationError> for Violation {
    fn from(error: &ValidationError) -> Self {
        Self {
            message: error.to_string(),
            message_ko: error.message_ko(),
        }
    }
}

/// Outcome of validating one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Builds a report from the violations found.
    pub fn from_errors(errors: &[ValidationError]) -> Self {
        Self {
            valid: errors.is_empty(),
            violations: errors.iter().map(Violation::from).collect(),
        }
    }
}
