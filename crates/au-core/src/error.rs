//! Error types for anutils

use thiserror::Error;

/// anutils error type
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed caller input (length mismatch, empty totals, bad binning, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A keyed object does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
