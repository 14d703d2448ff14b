//! Error types for the loader and renderer
//!
//! The derivations themselves (full type, version, URL, ordering) cannot
//! fail; only reading input records and producing output can.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Input is not valid JSON or has the wrong overall shape
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A single record is missing or has a malformed field
    #[error("Invalid resource record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// Result type alias for resdoc operations
pub type Result<T> = std::result::Result<T, Error>;
