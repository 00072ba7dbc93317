//! Equality rule

use crate::codes;
use crate::numeric::value_param;
use rusty_forms_engine::{ErrorParams, FieldValue, Outcome, Rule};

/// The value must equal `target` exactly (same kind, same content)
///
/// For "confirm password" style checks the caller passes the other field's
/// current value as `target` and its name as `target_field_name`, so a
/// message can say which field must match.
pub fn equals(target: impl Into<FieldValue>, target_field_name: impl Into<String>) -> Rule {
    let target = target.into();
    let target_field_name = target_field_name.into();

    Rule::named(codes::EQUALS, move |value: &FieldValue| {
        if *value == target {
            Outcome::Pass
        } else {
            Outcome::fail_with(
                codes::EQUALS,
                ErrorParams::new()
                    .with("targetValue", value_param(&target))
                    .with("targetFieldName", target_field_name.as_str()),
            )
        }
    })
}
