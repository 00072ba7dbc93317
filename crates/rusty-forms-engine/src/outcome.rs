//! Rule outcomes and the parameters carried by a failure

use crate::value::FieldValue;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Named values a failed rule hands to the message resolver
///
/// `numberBetween` for example reports `{min, max}` so a resolver can render
/// "Must be between 18 and 65".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorParams(BTreeMap<String, Value>);

impl ErrorParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Parameter rendered for display: strings unquoted, whole floats without
    /// a fraction (`5.0` reads "5"), everything else as JSON
    pub fn display(&self, name: &str) -> Option<String> {
        self.0.get(name).map(|value| match value {
            Value::String(s) => s.clone(),
            Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() => FieldValue::Number(f).to_string(),
                _ => n.to_string(),
            },
            other => other.to_string(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

/// A failed rule: its error code plus the parameters for its message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Failure {
    pub code: Cow<'static, str>,
    #[serde(default)]
    pub params: ErrorParams,
}

/// Result of running one rule against one value
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Pass,
    Fail(Failure),
}

impl Outcome {
    /// Failure without parameters
    pub fn fail(code: impl Into<Cow<'static, str>>) -> Self {
        Self::fail_with(code, ErrorParams::new())
    }

    pub fn fail_with(code: impl Into<Cow<'static, str>>, params: ErrorParams) -> Self {
        Outcome::Fail(Failure {
            code: code.into(),
            params,
        })
    }

    /// The failure, if any
    ///
    /// A failure with an empty code counts as a pass.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            Outcome::Fail(failure) if !failure.code.is_empty() => Some(failure),
            _ => None,
        }
    }

    pub fn is_pass(&self) -> bool {
        self.failure().is_none()
    }
}

impl From<Option<Failure>> for Outcome {
    fn from(failure: Option<Failure>) -> Self {
        failure.map_or(Outcome::Pass, Outcome::Fail)
    }
}
