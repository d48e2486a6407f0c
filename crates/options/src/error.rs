//! Option-store Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use derive_more::{Display, Error};
use serde_json::Error as JsonError;
use std::io::Error as IoError;

/// An option-store error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for option-store operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Underlying I/O error while reading or writing the snapshot
    #[display("I/O error: {_0}")]
    Io(IoError),
    /// The on-disk snapshot is not valid JSON
    #[display("malformed option snapshot: {_0}")]
    Malformed(JsonError),
}
impl From<IoError> for ErrorKind {
    fn from(err: IoError) -> Self {
        Self::Io(err)
    }
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
