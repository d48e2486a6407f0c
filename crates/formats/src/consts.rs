//! Sentinel values shared with the persisted option format.
//!
//! These literals predate this implementation; changing them breaks round
//! trips with previously written option snapshots.

/// Language value recorded when no language was extracted.
pub const UNKNOWN_LANGUAGE: &str = "unknown";

/// Encoding value meaning "detect at open time".
pub const AUTO_ENCODING: &str = "auto";

/// Display name credited to books whose author could not be determined.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";
