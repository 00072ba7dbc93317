// File: src/error.rs
// Purpose: Error types for the validation engine

use thiserror::Error;

/// Fatal problems with a validation run
///
/// A failing rule is not an error; it ends up in the error map. These are
/// caller/engine mismatches that must surface instead of being validated
/// against a made-up value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field \"{field}\" has validation rules but no value in the form")]
    MissingField { field: String },
}

/// Failure to load a message catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid JSON message catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML message catalog: {0}")]
    Toml(#[from] toml::de::Error),
}
