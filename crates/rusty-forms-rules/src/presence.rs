//! Required-value rules

use crate::codes;
use rusty_forms_engine::{FieldValue, Outcome, Rule, RuleSpec};

/// Fails on empty text, `0`, `NaN` and `false`
pub fn required() -> Rule {
    Rule::named(codes::REQUIRED, |value: &FieldValue| {
        if value.is_truthy() {
            Outcome::Pass
        } else {
            Outcome::fail(codes::REQUIRED)
        }
    })
}

/// [`required`] when `condition` holds, otherwise an entry that never runs
pub fn required_if(condition: bool) -> RuleSpec {
    if condition {
        required().into()
    } else {
        RuleSpec::Skip
    }
}
