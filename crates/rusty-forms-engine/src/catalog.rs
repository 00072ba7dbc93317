// File: src/catalog.rs
// Purpose: Code -> message template tables, usable as the validator-wide resolver

use crate::error::CatalogError;
use crate::outcome::ErrorParams;
use crate::resolver::{render_template, MessageResolver};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Message templates keyed by error code
///
/// Loaded from a flat JSON object or TOML table:
///
/// ```toml
/// required = "This field is required"
/// numberBetween = "Must be between {min} and {max}"
/// ```
///
/// Codes missing from the catalog are declined, so the raw code shows through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(source: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        Ok(toml::from_str(source)?)
    }

    /// Builder-style insert
    pub fn with(mut self, code: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(code, template);
        self
    }

    pub fn insert(&mut self, code: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(code.into(), template.into());
    }

    /// Entries of `other` override entries of `self`
    pub fn merge(&mut self, other: MessageCatalog) {
        self.messages.extend(other.messages);
    }

    pub fn template(&self, code: &str) -> Option<&str> {
        self.messages.get(code).map(String::as_str)
    }

    /// Render the message for `code`, if the catalog knows it
    pub fn resolve(&self, code: &str, params: &ErrorParams) -> Option<String> {
        self.template(code)
            .map(|template| render_template(template, params))
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl From<MessageCatalog> for MessageResolver {
    fn from(catalog: MessageCatalog) -> Self {
        MessageResolver::partial(move |code, params| catalog.resolve(code, params))
    }
}
