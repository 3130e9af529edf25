use super::error::ValidationError;
use super::range::{is_number_in_range, NumberRange};
use crate::recurrence::Recurring;

/// Which recurrence rules the product accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulePolicy {
    /// Smallest accepted interval (inclusive).
    pub min_interval: i32,
    /// Largest accepted interval (inclusive).
    pub max_interval: i32,
}

impl RulePolicy {
    /// Creates a policy accepting intervals in `min..=max`.
    pub fn new(min_interval: i32, max_interval: i32) -> Self {
        Self {
            min_interval,
            max_interval,
        }
    }

    /// The interval bounds as a [`NumberRange`].
    pub fn interval_range(&self) -> NumberRange {
        NumberRange::new(f64::from(self.min_interval), f64::from(self.max_interval))
    }
}

impl Default for RulePolicy {
    /// Intervals from 1 to 12, as offered by the event form.
    fn default() -> Self {
        Self::new(1, 12)
    }
}

/// Checks that the repeat end date, if any, falls strictly after the event
/// date. An end date equal to the start date is rejected.
pub fn validate_repeat_end_date<T: Recurring>(event: &T) -> Result<(), ValidationError> {
    let start = event.date();
    match event.repeat().end_date {
        Some(end) if end <= start => Err(ValidationError::EndDateNotAfterStart { start, end }),
        _ => Ok(()),
    }
}

/// Checks the rule interval against the policy bounds.
pub fn validate_interval<T: Recurring>(
    event: &T,
    policy: &RulePolicy,
) -> Result<(), ValidationError> {
    let interval = event.repeat().interval;
    if is_number_in_range(f64::from(interval), policy.interval_range()) {
        Ok(())
    } else {
        Err(ValidationError::IntervalOutOfRange {
            interval,
            min: policy.min_interval,
            max: policy.max_interval,
        })
    }
}

/// Returns every rule violation of `event`, in check order.
pub fn rule_violations<T: Recurring>(event: &T, policy: &RulePolicy) -> Vec<ValidationError> {
    if !event.is_recurring() {
        return vec![ValidationError::NotRecurring];
    }

    [validate_interval(event, policy), validate_repeat_end_date(event)]
        .into_iter()
        .filter_map(Result::err)
        .collect()
}

/// Validates a recurring event before expansion, stopping at the first
/// violation.
pub fn validate_rule<T: Recurring>(event: &T, policy: &RulePolicy) -> Result<(), ValidationError> {
    match rule_violations(event, policy).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
