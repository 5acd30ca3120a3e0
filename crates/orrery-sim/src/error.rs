//! Error types for catalog loading and clock access

use thiserror::Error;

/// Result type for orrery operations
pub type Result<T> = std::result::Result<T, OrreryError>;

/// Errors raised outside the numeric core.
///
/// Position queries never fail; these cover the configuration layer.
#[derive(Error, Debug)]
pub enum OrreryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate body in catalog: {0}")]
    DuplicateBody(String),

    #[error("Body not found: {0}")]
    UnknownBody(String),

    #[error("System clock unavailable: {0}")]
    Clock(String),
}
