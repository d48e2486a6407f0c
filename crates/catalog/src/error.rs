//! Catalog Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.
//!
//! Every expected failure of a load is a typed variant rather than a bare
//! "absent" result, so callers can tell a missing file from a parse
//! failure. None of these corrupt catalog state: a failed load leaves at
//! most a partial record in the cache, still marked incomplete for retry.

use derive_more::{Display, Error};
use folio_filesystem::BookPath;

/// A catalog error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The requested file (or its archive container) does not exist.
    #[display("book file not found: {_0}")]
    NotFound(#[error(not(source))] BookPath),
    /// No registered format plugin claims the file.
    #[display("no format plugin for: {_0}")]
    UnsupportedFormat(#[error(not(source))] BookPath),
    /// A plugin claimed the file but failed to extract metadata from it.
    #[display("metadata extraction failed: {_0}")]
    Extraction(#[error(not(source))] BookPath),
    /// The file system could not answer the existence check.
    #[display("file system error for: {_0}")]
    Filesystem(#[error(not(source))] BookPath),
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // Extraction stays retryable on purpose: the persisted record is
        // still marked incomplete, so a later open attempts it again.
        matches!(self, Self::Extraction(_) | Self::Filesystem(_))
    }
}
