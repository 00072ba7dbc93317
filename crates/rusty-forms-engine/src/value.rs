//! Field values as supplied by the caller

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single form field value
///
/// Values deserialize untagged, so a JSON form body like
/// `{"name": "Ada", "age": 36, "newsletter": true}` maps straight onto
/// `Text`, `Number` and `Bool`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    /// Get the text content, if this is a text value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric view of the value
    ///
    /// Numbers are returned as-is and text is parsed after trimming, since
    /// HTML inputs always submit strings. Booleans have no numeric view.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse::<f64>().ok(),
            FieldValue::Bool(_) => None,
        }
    }

    /// True only for the empty string; optional rules skip such values
    pub fn is_empty_text(&self) -> bool {
        matches!(self, FieldValue::Text(s) if s.is_empty())
    }

    /// Loose truthiness: empty text, zero, NaN and `false` are falsy
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Number(n) => *n != 0.0 && !n.is_nan(),
            FieldValue::Bool(b) => *b,
        }
    }

    /// Number of characters in the rendered value
    pub fn char_len(&self) -> usize {
        match self {
            FieldValue::Text(s) => s.chars().count(),
            other => other.to_string().chars().count(),
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Text(String::new())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            // 18.0 renders as "18", like an HTML number input would
            FieldValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(f64::from(n))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}
