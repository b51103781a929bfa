//! Error handling for EntityKit
//!
//! The geometry and report pipeline never fails: malformed input degrades
//! into `NaN` coordinates or empty sections. Errors only exist at the host
//! boundary, where snapshots are decoded and clipboard writes happen.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for EntityKit
#[derive(Error, Debug)]
pub enum Error {
    /// A host frame or scene snapshot could not be decoded
    #[error("Invalid snapshot: {reason}")]
    Snapshot {
        /// Why the snapshot was rejected.
        reason: String,
    },

    /// Writing to the system clipboard failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a snapshot error
    pub fn snapshot(reason: impl Into<String>) -> Self {
        Error::Snapshot {
            reason: reason.into(),
        }
    }

    /// Check if this error came from decoding host data
    pub fn is_snapshot_error(&self) -> bool {
        matches!(self, Error::Snapshot { .. } | Error::Json(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
