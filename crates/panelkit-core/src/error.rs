//! Error handling for PanelKit.
//!
//! All error types use `thiserror`. The core deliberately keeps the taxonomy
//! small: malformed persisted data is the only failure a caller is expected
//! to branch on, everything numeric is sanitized rather than rejected.

use thiserror::Error;

/// Serialization error type
///
/// Raised when a persisted or imported payload cannot be turned back into a
/// panel model. Callers catch this at the boundary of each user-initiated
/// action (save/load/import) and leave the in-memory model untouched.
#[derive(Error, Debug)]
pub enum SerializationError {
    /// The payload is not valid JSON, is structurally wrong, or carries a
    /// version newer than this reader supports.
    #[error("Payload does not match the panel schema")]
    SchemaMismatch,

    /// Encoding a model to JSON failed.
    #[error("Failed to encode panel model: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Top-level error type for PanelKit operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Serialization error
    #[error(transparent)]
    Serialization(#[from] SerializationError),
}

/// Result type alias for PanelKit operations.
pub type Result<T> = std::result::Result<T, Error>;
