use chrono::NaiveDate;
use thiserror::Error;

/// Message shown by the Korean event form when the end date check fails.
pub const REPEAT_END_DATE_MESSAGE_KO: &str = "종료일은 시작일보다 늦어야 합니다.";

/// Errors reported when a recurrence rule fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Event does not repeat")]
    NotRecurring,
    #[error("Repeat interval {interval} is outside the allowed range ({min} to {max})")]
    IntervalOutOfRange { interval: i32, min: i32, max: i32 },
    #[error("End date must be later than the start date")]
    EndDateNotAfterStart { start: NaiveDate, end: NaiveDate },
}

impl ValidationError {
    /// The message the Korean event form displays for this error.
    pub fn message_ko(&self) -> String {
        match self {
            ValidationError::NotRecurring => "반복 정보가 없습니다.".to_string(),
            ValidationError::IntervalOutOfRange { min, max, .. } => {
                format!("반복 간격은 {min}에서 {max} 사이여야 합니다.")
            }
            ValidationError::EndDateNotAfterStart { .. } => REPEAT_END_DATE_MESSAGE_KO.to_string(),
        }
    }
}
