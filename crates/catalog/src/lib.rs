//! Book metadata cache/loader.
//!
//! The catalog keeps one in-memory [`BookRecord`] per known file path. A
//! record is populated from the persisted per-file options when those are
//! complete, and otherwise by running the file's format plugin and writing
//! the result back to the options so the next open skips extraction. The
//! in-memory record is authoritative; the persisted mirror exists only to
//! make re-opening cheap.
//!
//! The cache is not process-global: construct a [`Catalog`] at
//! application start, pass it around by reference, and drop it at
//! shutdown.

mod catalog;
pub mod error;
mod info;

pub use crate::catalog::{BookHandle, Catalog, CheckFile};
pub use folio_formats::models::{Author, BookRecord, SingleAuthor};
