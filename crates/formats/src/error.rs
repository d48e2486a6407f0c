//! Format-plugin Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction.

use derive_more::{Display, Error};
use folio_filesystem::BookPath;

/// A format-plugin error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for format-plugin operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The file could not be read at all.
    #[display("unreadable book file: {_0}")]
    Unreadable(#[error(not(source))] BookPath),
    /// The file was read but its contents do not match the claimed format.
    #[display("malformed {path}: {detail}")]
    Malformed {
        path: BookPath,
        detail: String,
    },
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // A fresh attempt only helps when the read itself failed; malformed
        // contents stay malformed.
        matches!(self, Self::Unreadable(_))
    }
}
