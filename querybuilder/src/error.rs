//! Error types for the query builder

use thiserror::Error;

/// Query builder errors
///
/// Building clauses never fails. Only the final encode step and
/// configuration loading can produce an error.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Config error: {0}")]
    Config(String),
}
