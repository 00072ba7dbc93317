use thiserror::Error;

/// Failure to load a rule schema document
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("invalid JSON rule schema: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML rule schema: {0}")]
    Toml(#[from] toml::de::Error),
}
