use thiserror::Error;

use super::types::RecurrenceType;

/// Errors that can occur when expanding a recurrence rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("Cannot expand a non-recurring rule (type: {0})")]
    NotRecurring(RecurrenceType),
}

/// Result type for recurrence operations.
pub type Result<T> = std::result::Result<T, RecurrenceError>;
