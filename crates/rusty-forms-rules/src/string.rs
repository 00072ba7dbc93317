//! String rules: length bounds and pattern matching
//!
//! All of them let an empty string through; pair them with `required()` to
//! make the field mandatory.

use crate::codes;
use regex::Regex;
use rusty_forms_engine::{ErrorParams, FieldValue, Outcome, Rule};
use std::borrow::Cow;

/// Length (in characters) must be within `min..=max`
pub fn length_between(min: usize, max: usize) -> Rule {
    Rule::named(codes::LENGTH_BETWEEN, move |value: &FieldValue| {
        let len = value.char_len();
        if value.is_empty_text() || (len >= min && len <= max) {
            Outcome::Pass
        } else {
            Outcome::fail_with(
                codes::LENGTH_BETWEEN,
                ErrorParams::new().with("min", min).with("max", max),
            )
        }
    })
}

/// At least `min` characters
pub fn min_length(min: usize) -> Rule {
    Rule::named(codes::MIN_LENGTH, move |value: &FieldValue| {
        if value.is_empty_text() || value.char_len() >= min {
            Outcome::Pass
        } else {
            Outcome::fail_with(codes::MIN_LENGTH, ErrorParams::new().with("min", min))
        }
    })
}

/// At most `max` characters
pub fn max_length(max: usize) -> Rule {
    Rule::named(codes::MAX_LENGTH, move |value: &FieldValue| {
        if value.is_empty_text() || value.char_len() <= max {
            Outcome::Pass
        } else {
            Outcome::fail_with(codes::MAX_LENGTH, ErrorParams::new().with("max", max))
        }
    })
}

/// The rendered value must contain a match of `regex`
///
/// `human_readable_format` is passed to the message as an example of the
/// expected input, and `code` names the failure (`"match"` for ad-hoc patterns).
pub fn matches(
    regex: Regex,
    human_readable_format: impl Into<String>,
    code: impl Into<Cow<'static, str>>,
) -> Rule {
    let human_readable_format = human_readable_format.into();
    let code = code.into();

    Rule::named(code.clone(), move |value: &FieldValue| {
        let found = match value.as_text() {
            Some("") => true,
            Some(text) => regex.is_match(text),
            None => regex.is_match(&value.to_string()),
        };

        if found {
            Outcome::Pass
        } else {
            Outcome::fail_with(
                code.clone(),
                ErrorParams::new().with("humanReadableFormat", human_readable_format.as_str()),
            )
        }
    })
}

/// Compile `pattern` and build a [`matches`] rule under the default `match` code
pub fn matches_pattern(pattern: &str, human_readable_format: impl Into<String>) -> Result<Rule, regex::Error> {
    Ok(matches(Regex::new(pattern)?, human_readable_format, codes::MATCH))
}
