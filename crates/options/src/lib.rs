//! Persisted per-file option storage.
//!
//! Options are string values keyed by `(category, scope, name)`, where the
//! scope is usually a book's path. Typed handles ([`StringOption`],
//! [`IntRangeOption`], [`BoolOption`]) wrap one key each with a default
//! value and do the parsing, clamping and default fallback so callers only
//! ever see well-formed values.
//!
//! The store itself is an in-memory map with a JSON snapshot on disk; the
//! snapshot is the durable format other reader components already wrote,
//! so keys and values survive round trips byte-for-byte.

pub mod error;
mod option;
mod store;

pub use crate::option::{BoolOption, IntRangeOption, StringOption};
pub use crate::store::{OptionKey, OptionStore};
use std::sync::Arc;

pub type StoreHandle = Arc<OptionStore>;
