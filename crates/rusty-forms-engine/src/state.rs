// File: src/state.rs
// Purpose: Caller-owned form state (value + current error per field) and its accessors

use crate::form::{ErrorSink, FormErrors, FormValues};
use crate::value::FieldValue;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Value and displayed error of one field
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FieldState {
    pub value: FieldValue,
    #[serde(default)]
    pub error: String,
}

impl FieldState {
    pub fn new(value: FieldValue) -> Self {
        Self {
            value,
            error: String::new(),
        }
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }
}

/// State of a whole form, in field declaration order
///
/// Serializes as `{"email": {"value": "...", "error": ""}, ...}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    fields: Vec<(String, FieldState)>,
}

impl FormState {
    /// Create empty form state
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial state from default values; every error starts empty
    pub fn from_defaults<I, K, V>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let mut state = Self::new();
        for (name, value) in defaults {
            state.insert(name, FieldState::new(value.into()));
        }
        state
    }

    /// Add or replace a field; replacing keeps its position
    pub fn insert(&mut self, name: impl Into<String>, field: FieldState) {
        let name = name.into();
        match self.field_state_mut(&name) {
            Some(slot) => *slot = field,
            None => self.fields.push((name, field)),
        }
    }

    pub fn field_state(&self, name: &str) -> Option<&FieldState> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, field)| field)
    }

    fn field_state_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields
            .iter_mut()
            .find(|(existing, _)| existing == name)
            .map(|(_, field)| field)
    }

    /// Current value of a field
    pub fn field_value(&self, name: &str) -> Option<&FieldValue> {
        self.field_state(name).map(|field| &field.value)
    }

    /// Current error of a field; empty when valid
    pub fn field_error(&self, name: &str) -> Option<&str> {
        self.field_state(name).map(|field| field.error.as_str())
    }

    /// Set a field's value, keeping its current error
    ///
    /// Unknown fields are added with an empty error.
    pub fn set_field_value(&mut self, name: &str, value: impl Into<FieldValue>) {
        let value = value.into();
        match self.field_state_mut(name) {
            Some(field) => field.value = value,
            None => self.fields.push((name.to_string(), FieldState::new(value))),
        }
    }

    /// Plain name -> value map for validation or submission
    pub fn values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value.clone()))
            .collect()
    }

    /// Check if any field currently shows an error
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|(_, field)| field.has_error())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldState)> {
        self.fields.iter().map(|(name, field)| (name.as_str(), field))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Applies each listed message to its field; unlisted fields keep their error
impl ErrorSink for FormState {
    fn set_errors(&mut self, errors: &FormErrors) {
        for (name, message) in errors.iter() {
            if let Some(field) = self.field_state_mut(name) {
                field.error = message.to_string();
            }
        }
    }
}

impl Serialize for FormState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, field) in &self.fields {
            map.serialize_entry(name, field)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FormState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FormStateVisitor;

        impl<'de> Visitor<'de> for FormStateVisitor {
            type Value = FormState;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of field name to {value, error}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<FormState, A::Error> {
                let mut state = FormState::new();
                while let Some((name, field)) = access.next_entry::<String, FieldState>()? {
                    state.insert(name, field);
                }
                Ok(state)
            }
        }

        deserializer.deserialize_map(FormStateVisitor)
    }
}
