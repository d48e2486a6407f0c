//! File-system Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use crate::path::BookPath;
use derive_more::{Display, Error};
use std::io::Error as IoError;

/// A file-system error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for file-system operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// File does not exist
    #[display("file not found: {_0}")]
    NotFound(#[error(not(source))] BookPath),
    /// Underlying I/O error
    #[display("I/O error: {_0}")]
    Io(IoError),
    /// Contents of an archive entry were requested, but no archive codec
    /// is wired into this file system
    #[display("archive entry access is not supported: {_0}")]
    Unsupported(#[error(not(source))] BookPath),
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
