//! Book metadata model and format-plugin registry.
//!
//! This crate owns the in-memory shape of a book's catalog metadata
//! ([`models::BookRecord`], [`models::Author`]) and the seam through which
//! format-specific parsers populate it: the [`FormatPlugin`] trait and the
//! [`PluginRegistry`] that resolves a plugin for a given file.
//!
//! Actual e-book format parsers live elsewhere; the only built-in is the
//! trivial [`PlainTextPlugin`], since plain text carries no embedded
//! metadata to parse.

pub mod consts;
pub mod error;
pub mod models;
mod plugin;
mod registry;
mod txt;

pub use crate::plugin::{FormatPlugin, PluginHandle};
pub use crate::registry::PluginRegistry;
pub use crate::txt::PlainTextPlugin;
