//! Serde helper functions for form deserialization.
//!
//! Event forms submit empty strings for fields the user left blank. These
//! helpers treat those as `None` so that an empty end date means "no end
//! date" and an empty series id means "not assigned yet".

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Wire format for calendar dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Deserialize an optional string, treating empty strings as None.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    Ok(s.filter(|s| !s.trim().is_empty()))
}

/// Deserialize an optional NaiveDate, treating empty strings as None.
/// Expects format: YYYY-MM-DD
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if !s.trim().is_empty() => parse_date(s.trim())
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}

/// Deserialize a recurrence interval, treating null as the default of 1.
pub fn deserialize_interval<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let interval: Option<i32> = Option::deserialize(deserializer)?;
    Ok(interval.unwrap_or(1))
}

/// Parses a `YYYY-MM-DD` calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
}
