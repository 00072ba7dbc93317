// File: src/form.rs
// Purpose: Form-level validation: run every field's rules, build the error map, notify the sink

use crate::error::ValidationError;
use crate::field::validate_field;
use crate::outcome::ErrorParams;
use crate::resolver::MessageResolver;
use crate::rule::FieldRules;
use crate::state::FormState;
use crate::value::FieldValue;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Field values looked up by name
pub type FormValues = HashMap<String, FieldValue>;

/// Validator-wide configuration
#[derive(Debug, Clone, Default)]
pub struct ValidatorOptions {
    get_error_message: Option<MessageResolver>,
}

impl ValidatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Message resolver used when the failing rule has none of its own
    pub fn with_error_message<F>(self, func: F) -> Self
    where
        F: Fn(&str, &ErrorParams) -> String + Send + Sync + 'static,
    {
        self.with_resolver(MessageResolver::new(func))
    }

    /// Same as [`with_error_message`](Self::with_error_message) for any resolver,
    /// e.g. a [`MessageCatalog`](crate::MessageCatalog)
    pub fn with_resolver(mut self, resolver: impl Into<MessageResolver>) -> Self {
        self.get_error_message = Some(resolver.into());
        self
    }

    pub fn error_message_resolver(&self) -> Option<&MessageResolver> {
        self.get_error_message.as_ref()
    }
}

/// Field name to error message, in rule declaration order
///
/// Every validated field has an entry; an empty message means valid, so a
/// UI can display `errors[field]` unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    entries: Vec<(String, String)>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry; callers keep names unique
    pub(crate) fn push(&mut self, field: String, message: String) {
        self.entries.push((field, message));
    }

    /// Message for `field`; `Some("")` when the field is valid
    pub fn get(&self, field: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.get(field).is_some_and(|message| !message.is_empty())
    }

    /// True when no entry carries a message
    pub fn is_valid(&self) -> bool {
        self.entries.iter().all(|(_, message)| message.is_empty())
    }

    /// First invalid field in declaration order, the one a UI should focus
    pub fn first_invalid(&self) -> Option<&str> {
        self.invalid_fields().next()
    }

    pub fn invalid_fields(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, message)| (name.as_str(), message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Only the failing fields, keyed by name
    pub fn to_map(&self) -> HashMap<String, String> {
        self.entries
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .cloned()
            .collect()
    }
}

impl Serialize for FormErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, message) in &self.entries {
            map.serialize_entry(name, message)?;
        }
        map.end()
    }
}

/// Receives the freshly computed error map after each validation run
pub trait ErrorSink {
    fn set_errors(&mut self, errors: &FormErrors);
}

impl<F> ErrorSink for F
where
    F: FnMut(&FormErrors),
{
    fn set_errors(&mut self, errors: &FormErrors) {
        self(errors)
    }
}

/// Keeps the last published map
impl ErrorSink for Option<FormErrors> {
    fn set_errors(&mut self, errors: &FormErrors) {
        *self = Some(errors.clone());
    }
}

/// Discards notifications
impl ErrorSink for () {
    fn set_errors(&mut self, _errors: &FormErrors) {}
}

/// Configured validation engine
///
/// Holds nothing but its options; rules and values come with each run.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    options: ValidatorOptions,
}

impl Validator {
    pub fn new(options: ValidatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ValidatorOptions {
        &self.options
    }

    /// Bind rules, values and a sink into a run
    ///
    /// The run owns `sink`; get it back with [`ValidationRun::into_sink`].
    /// To keep a sink you own, lend it through a closure such as
    /// `|errors: &FormErrors| state.set_errors(errors)`.
    pub fn bind<'a, S: ErrorSink>(
        &'a self,
        rules: &'a FieldRules,
        values: &'a FormValues,
        sink: S,
    ) -> ValidationRun<'a, S> {
        ValidationRun {
            validator: self,
            rules,
            values,
            sink,
            errors: FormErrors::new(),
        }
    }

    /// Compute the error map without notifying anyone
    pub fn check(&self, rules: &FieldRules, values: &FormValues) -> Result<FormErrors, ValidationError> {
        self.compute(rules, |name| values.get(name))
    }

    /// Validate the values held in `state` and write the messages back into it
    pub fn validate_state(&self, rules: &FieldRules, state: &mut FormState) -> Result<bool, ValidationError> {
        let errors = self.compute(rules, |name| state.field_value(name))?;
        state.set_errors(&errors);
        Ok(errors.is_valid())
    }

    #[instrument(skip_all, fields(fields = rules.len()))]
    fn compute<'v, L>(&self, rules: &FieldRules, lookup: L) -> Result<FormErrors, ValidationError>
    where
        L: Fn(&str) -> Option<&'v FieldValue>,
    {
        let mut errors = FormErrors::new();

        for (name, specs) in rules.iter() {
            let value = lookup(name).ok_or_else(|| ValidationError::MissingField {
                field: name.to_string(),
            })?;

            let message = validate_field(specs, value, &self.options).unwrap_or_default();
            errors.push(name.to_string(), message);
        }

        debug!(
            invalid = errors.invalid_fields().count(),
            "form validated"
        );
        Ok(errors)
    }
}

/// One form's rules and values bound to a validator and an error sink
pub struct ValidationRun<'a, S> {
    validator: &'a Validator,
    rules: &'a FieldRules,
    values: &'a FormValues,
    sink: S,
    errors: FormErrors,
}

impl<'a, S: ErrorSink> ValidationRun<'a, S> {
    /// Validate every field and publish the new error map to the sink
    ///
    /// Returns whether the whole form is valid. A field with rules but no
    /// value is a configuration error; the sink is then left untouched.
    pub fn validate(&mut self) -> Result<bool, ValidationError> {
        let errors = self.validator.check(self.rules, self.values)?;
        self.sink.set_errors(&errors);
        self.errors = errors;
        Ok(self.errors.is_valid())
    }

    /// Map from the last successful `validate()`, empty before the first one
    ///
    /// A failed `validate()` does not clear it.
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}
