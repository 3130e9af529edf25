use uuid::Uuid;

use super::config::EngineConfig;
use super::error::{RecurrenceError, Result};
use super::expand::expand_with;
use super::types::Recurring;

/// The expanded occurrences of one recurring series.
#[derive(Debug, Clone, PartialEq)]
pub struct RecurringSeries<T> {
    /// Identifier shared by every occurrence (`repeat.id`).
    pub repeat_id: String,
    pub occurrences: Vec<T>,
}

impl<T> RecurringSeries<T> {
    /// Returns the number of occurrences in the series.
    pub fn len(&self) -> usize {
        self.occurrences.len()
    }

    /// Returns true if the series produced no occurrences.
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_empty()
    }

    /// Consumes the series, returning the occurrences.
    pub fn into_occurrences(self) -> Vec<T> {
        self.occurrences
    }
}

/// Returns a series id: the seed's own if it has one, otherwise a fresh one.
pub fn assign_repeat_id<T: Recurring>(seed: &mut T) -> String {
    seed.repeat_mut()
        .id
        .get_or_insert_with(|| Uuid::new_v4().to_string())
        .clone()
}

/// Prepares a recurring series for persistence.
///
/// Rejects non-recurring seeds, stamps a series id onto the rule when it has
/// none, and expands the seed so every occurrence carries that id.
pub fn prepare_series<T: Recurring>(
    mut seed: T,
    config: &EngineConfig,
) -> Result<RecurringSeries<T>> {
    if !seed.is_recurring() {
        return Err(RecurrenceError::NotRecurring(seed.repeat().kind));
    }

    let repeat_id = assign_repeat_id(&mut seed);
    let occurrences = expand_with(&seed, config)?;

    Ok(RecurringSeries {
        repeat_id,
        occurrences,
    })
}

/// Selects the events that belong to the series `repeat_id`.
pub fn filter_by_repeat_id<'a, T: Recurring>(events: &'a [T], repeat_id: &str) -> Vec<&'a T> {
    events
        .iter()
        .filter(|event| event.repeat().id.as_deref() == Some(repeat_id))
        .collect()
}
