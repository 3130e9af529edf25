use std::env;

use chrono::NaiveDate;
use recurra_core::recurrence::{EngineConfig, DEFAULT_HORIZON};
use recurra_core::serde::parse_date;
use recurra_core::validation::RulePolicy;

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Horizon for rules without an end date (default: 2025-09-30)
    pub default_horizon: NaiveDate,
    /// Smallest accepted repeat interval (default: 1)
    pub min_interval: i32,
    /// Largest accepted repeat interval (default: 12)
    pub max_interval: i32,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RECURRA_DEFAULT_HORIZON` - Horizon date, YYYY-MM-DD (default: 2025-09-30)
    /// - `RECURRA_MIN_INTERVAL` - Smallest accepted interval (default: 1)
    /// - `RECURRA_MAX_INTERVAL` - Largest accepted interval (default: 12)
    ///
    /// Missing or unparsable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let policy = RulePolicy::default();
        Self {
            default_horizon: lookup("RECURRA_DEFAULT_HORIZON")
                .and_then(|v| parse_date(v.trim()).ok())
                .unwrap_or(DEFAULT_HORIZON),
            min_interval: lookup("RECURRA_MIN_INTERVAL")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(policy.min_interval),
            max_interval: lookup("RECURRA_MAX_INTERVAL")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(policy.max_interval),
        }
    }

    /// Returns a copy with the horizon replaced when `horizon` is set.
    pub fn with_horizon(mut self, horizon: Option<NaiveDate>) -> Self {
        if let Some(horizon) = horizon {
            self.default_horizon = horizon;
        }
        self
    }

    /// Engine settings derived from this config.
    pub fn engine(&self) -> EngineConfig {
        EngineConfig::new(self.default_horizon)
    }

    /// Rule policy derived from this config.
    pub fn policy(&self) -> RulePolicy {
        RulePolicy::new(self.min_interval, self.max_interval)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
