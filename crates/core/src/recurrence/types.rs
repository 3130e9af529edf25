use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::serde::{deserialize_interval, deserialize_optional_date, deserialize_optional_string};

/// The cadence unit of a recurrence rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceType {
    /// Not recurring. Never expanded.
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl RecurrenceType {
    /// Returns true for every cadence except `None`.
    pub fn is_recurring(&self) -> bool {
        !matches!(self, RecurrenceType::None)
    }

    /// Returns the lowercase name used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurrenceType::None => "none",
            RecurrenceType::Daily => "daily",
            RecurrenceType::Weekly => "weekly",
            RecurrenceType::Monthly => "monthly",
            RecurrenceType::Yearly => "yearly",
        }
    }
}

impl std::fmt::Display for RecurrenceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_interval() -> i32 {
    1
}

/// "Every `interval` units of `kind`, until `end_date`."
///
/// `interval` is signed: zero and negative values deserialize, then get
/// rejected by validation or floored to 1 by the expander. A missing or null
/// interval means 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRule {
    #[serde(rename = "type")]
    pub kind: RecurrenceType,
    #[serde(default = "default_interval", deserialize_with = "deserialize_interval")]
    pub interval: i32,
    /// Inclusive horizon. Empty strings from form input count as absent.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_date",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<NaiveDate>,
    /// Series identifier shared by every occurrence of the series.
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
}

impl RecurrenceRule {
    /// Creates a rule with the given cadence, interval 1 and no end date.
    pub fn new(kind: RecurrenceType) -> Self {
        Self {
            kind,
            interval: 1,
            end_date: None,
            id: None,
        }
    }

    /// A non-recurring rule.
    pub fn none() -> Self {
        Self::new(RecurrenceType::None)
    }

    pub fn daily() -> Self {
        Self::new(RecurrenceType::Daily)
    }

    pub fn weekly() -> Self {
        Self::new(RecurrenceType::Weekly)
    }

    pub fn monthly() -> Self {
        Self::new(RecurrenceType::Monthly)
    }

    pub fn yearly() -> Self {
        Self::new(RecurrenceType::Yearly)
    }

    /// Sets the interval between occurrences.
    pub fn with_interval(mut self, interval: i32) -> Self {
        self.interval = interval;
        self
    }

    /// Sets the inclusive end date.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Sets the series identifier.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// The interval used for stepping. Anything below 1 is treated as 1 so
    /// that expansion always terminates.
    pub fn effective_interval(&self) -> u32 {
        u32::try_from(self.interval).unwrap_or(0).max(1)
    }

    /// The end date, or `default_horizon` when the rule has none.
    pub fn horizon(&self, default_horizon: NaiveDate) -> NaiveDate {
        self.end_date.unwrap_or(default_horizon)
    }
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self::none()
    }
}

/// Anything that can seed a recurring series.
///
/// Implementors expose the anchor date and the rule, and know how to produce
/// an independent copy of themselves with a different date. Every other
/// field is carried over unchanged.
pub trait Recurring: Clone {
    /// The anchor (start) date.
    fn date(&self) -> NaiveDate;

    /// The recurrence rule.
    fn repeat(&self) -> &RecurrenceRule;

    /// Mutable access to the rule, used to stamp a series id.
    fn repeat_mut(&mut self) -> &mut RecurrenceRule;

    /// Returns true if the rule describes an actual series.
    fn is_recurring(&self) -> bool {
        self.repeat().kind.is_recurring()
    }

    /// Returns a copy of `self` with `date` replaced.
    fn with_date(&self, date: NaiveDate) -> Self {
        let mut occurrence = self.clone();
        occurrence.set_date(date);
        occurrence
    }

    /// Replaces the date in place.
    fn set_date(&mut self, date: NaiveDate);
}

/// A calendar event as submitted by the event form.
///
/// Fields the engine does not know about are kept in `extra` and written
/// back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    /// Server-assigned identifier, present once the event was persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_time: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_time: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub location: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub category: String,
    /// Minutes before the start at which the user is notified.
    #[serde(default)]
    pub notification_time: u32,
    #[serde(default)]
    pub repeat: RecurrenceRule,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl EventForm {
    /// Creates a new event with the given title and date and no recurrence.
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: None,
            title: title.into(),
            date,
            start_time: String::new(),
            end_time: String::new(),
            description: String::new(),
            location: String::new(),
            category: String::new(),
            notification_time: 0,
            repeat: RecurrenceRule::none(),
            extra: Map::new(),
        }
    }

    /// Sets the time range, formatted as `HH:MM`.
    pub fn with_times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = start.into();
        self.end_time = end.into();
        self
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the location for this event.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the category for this event.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the notification lead time in minutes.
    pub fn with_notification_time(mut self, minutes: u32) -> Self {
        self.notification_time = minutes;
        self
    }

    /// Sets the recurrence rule.
    pub fn with_repeat(mut self, repeat: RecurrenceRule) -> Self {
        self.repeat = repeat;
        self
    }
}

impl Recurring for EventForm {
    fn date(&self) -> NaiveDate {
        self.date
    }

    fn repeat(&self) -> &RecurrenceRule {
        &self.repeat
    }

    fn repeat_mut(&mut self) -> &mut RecurrenceRule {
        &mut self.repeat
    }

    fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }
}
