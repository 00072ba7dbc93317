//! Numeric range rules
//!
//! Numbers and numeric text are compared; anything else fails. The empty
//! string passes so optional fields stay optional.

use crate::codes;
use rusty_forms_engine::{ErrorParams, FieldValue, Outcome, Rule};
use serde_json::{Number, Value};

/// Value must be within `min..=max`
pub fn number_between(min: f64, max: f64) -> Rule {
    Rule::named(codes::NUMBER_BETWEEN, move |value: &FieldValue| {
        if value.is_empty_text() || value.as_number().is_some_and(|n| n >= min && n <= max) {
            Outcome::Pass
        } else {
            Outcome::fail_with(
                codes::NUMBER_BETWEEN,
                ErrorParams::new()
                    .with("min", number_param(min))
                    .with("max", number_param(max)),
            )
        }
    })
}

/// Value must be strictly below `max`
pub fn number_below(max: f64) -> Rule {
    Rule::named(codes::NUMBER_BELOW, move |value: &FieldValue| {
        if value.is_empty_text() || value.as_number().is_some_and(|n| n < max) {
            Outcome::Pass
        } else {
            Outcome::fail_with(codes::NUMBER_BELOW, ErrorParams::new().with("max", number_param(max)))
        }
    })
}

/// Value must be strictly above `min`
pub fn number_above(min: f64) -> Rule {
    Rule::named(codes::NUMBER_ABOVE, move |value: &FieldValue| {
        if value.is_empty_text() || value.as_number().is_some_and(|n| n > min) {
            Outcome::Pass
        } else {
            Outcome::fail_with(codes::NUMBER_ABOVE, ErrorParams::new().with("min", number_param(min)))
        }
    })
}

/// Whole numbers become JSON integers so messages read "18", not "18.0"
pub(crate) fn number_param(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        Value::from(n as i64)
    } else {
        Number::from_f64(n).map_or(Value::Null, Value::Number)
    }
}

pub(crate) fn value_param(value: &FieldValue) -> Value {
    match value {
        FieldValue::Text(s) => Value::String(s.clone()),
        FieldValue::Number(n) => number_param(*n),
        FieldValue::Bool(b) => Value::Bool(*b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(FieldValue::from(18), true)]
    #[case(FieldValue::from(65), true)]
    #[case(FieldValue::from(40), true)]
    #[case(FieldValue::from(10), false)]
    #[case(FieldValue::from(66), false)]
    #[case(FieldValue::from("30"), true)]
    #[case(FieldValue::from("abc"), false)]
    #[case(FieldValue::from(""), true)]
    #[case(FieldValue::from(true), false)]
    fn test_number_between(#[case] value: FieldValue, #[case] passes: bool) {
        assert_eq!(number_between(18.0, 65.0).apply(&value).is_pass(), passes);
    }

    #[test]
    fn test_number_between_params() {
        let outcome = number_between(18.0, 65.0).apply(&FieldValue::from(10));
        let failure = outcome.failure().unwrap();
        assert_eq!(failure.code, "numberBetween");
        assert_eq!(failure.params.get("min"), Some(&Value::from(18)));
        assert_eq!(failure.params.get("max"), Some(&Value::from(65)));
    }

    #[test]
    fn test_bounds_are_strict_for_below_and_above() {
        assert!(number_below(10.0).apply(&FieldValue::from(9.5)).is_pass());
        assert!(!number_below(10.0).apply(&FieldValue::from(10)).is_pass());

        assert!(number_above(0.0).apply(&FieldValue::from(0.1)).is_pass());
        assert!(!number_above(0.0).apply(&FieldValue::from(0)).is_pass());
    }

    #[test]
    fn test_number_param() {
        assert_eq!(number_param(18.0), Value::from(18));
        assert_eq!(number_param(2.5).to_string(), "2.5");
        assert_eq!(number_param(f64::NAN), Value::Null);
    }
}
