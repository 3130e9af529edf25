//! Pre-expansion checks for recurrence rules.
//!
//! The expander trusts its input apart from flooring the interval; bounds
//! such as "1 to 12" are product policy and live here.

mod error;
mod range;
mod rules;

pub use error::{ValidationError, REPEAT_END_DATE_MESSAGE_KO};
pub use range::{is_number_in_range, is_value_in_range, NumberRange};
pub use rules::{
    rule_violations, validate_interval, validate_repeat_end_date, validate_rule, RulePolicy,
};
