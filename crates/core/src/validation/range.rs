use serde_json::Value;

/// An inclusive numeric range. Either bound may be infinite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberRange {
    pub min: f64,
    pub max: f64,
}

impl NumberRange {
    /// Accepts every finite number.
    pub const UNBOUNDED: NumberRange = NumberRange {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Creates a range with both bounds inclusive.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range with only a lower bound.
    pub fn at_least(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// Range with only an upper bound.
    pub fn at_most(max: f64) -> Self {
        Self::new(f64::NEG_INFINITY, max)
    }

    /// Returns true if `value` is finite and within the bounds.
    pub fn contains(&self, value: f64) -> bool {
        is_number_in_range(value, *self)
    }
}

impl Default for NumberRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Returns true if `value` is a finite number inside `range` (inclusive).
///
/// NaN and the infinities are rejected whatever the bounds are.
pub fn is_number_in_range(value: f64, range: NumberRange) -> bool {
    if !value.is_finite() {
        return false;
    }
    !(value < range.min || value > range.max)
}

/// Same as [`is_number_in_range`] for untyped input such as a form field
/// decoded from JSON. Anything that is not a JSON number is rejected,
/// including numeric-looking strings.
pub fn is_value_in_range(value: &Value, range: NumberRange) -> bool {
    match value {
        Value::Number(n) => n.as_f64().is_some_and(|v| is_number_in_range(v, range)),
        _ => false,
    }
}
