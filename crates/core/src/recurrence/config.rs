use chrono::NaiveDate;

/// Horizon used when a rule carries no end date.
pub const DEFAULT_HORIZON: NaiveDate = match NaiveDate::from_ymd_opt(2025, 9, 30) {
    Some(date) => date,
    None => panic!("invalid default horizon"),
};

/// Settings for recurrence expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Inclusive upper bound for rules without an end date.
    pub default_horizon: NaiveDate,
}

impl EngineConfig {
    /// Creates a config with the given default horizon.
    pub fn new(default_horizon: NaiveDate) -> Self {
        Self { default_horizon }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HORIZON)
    }
}
