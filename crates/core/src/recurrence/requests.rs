//! Request payloads for persisting recurring series.
//!
//! Pure data types with no I/O, shared by anything that talks to the event
//! collection endpoints.

use serde::{Deserialize, Serialize};

use super::series::RecurringSeries;

/// Body for creating many events in one request: `{"events": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchCreateRequest<T> {
    pub events: Vec<T>,
}

impl<T> BatchCreateRequest<T> {
    /// Create a request for the given events.
    pub fn new(events: Vec<T>) -> Self {
        Self { events }
    }
}

impl<T> From<RecurringSeries<T>> for BatchCreateRequest<T> {
    fn from(series: RecurringSeries<T>) -> Self {
        Self::new(series.occurrences)
    }
}

/// Body for deleting many events in one request: `{"eventIds": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDeleteRequest {
    pub event_ids: Vec<String>,
}

impl BatchDeleteRequest {
    /// Create a request for the given event ids.
    pub fn new(event_ids: Vec<String>) -> Self {
        Self { event_ids }
    }
}
