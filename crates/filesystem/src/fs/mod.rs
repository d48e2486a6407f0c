//! File-system trait and implementations.
//!
//! This module defines the `FileSystem` trait, the narrow slice of the
//! platform file system the catalog touches: an existence check that
//! understands archive indirection, and whole-file reads for format
//! plugins.

mod local;
#[cfg(feature = "mock")]
mod mock;

pub use self::local::LocalFileSystem;
#[cfg(feature = "mock")]
pub use self::mock::MockFileSystem;
use crate::error::Result;
use crate::path::BookPath;
use async_trait::async_trait;

/// Unified interface to the file systems books are read from.
///
/// Paths follow the [`BookPath`] addressing convention: an archive member
/// is written as `container.zip:entry` and resolves to the container for
/// existence checks.
#[async_trait]
pub trait FileSystem: Send + Sync {
    /// Check whether the physical file behind `path` exists.
    ///
    /// For archive entries this checks the *container* file; whether the
    /// entry itself is present is a question for the format plugin that
    /// opens the container.
    async fn exists(&self, path: &BookPath) -> Result<bool>;

    /// Read the contents of a plain file.
    ///
    /// Returns [`Unsupported`](crate::error::ErrorKind::Unsupported) for
    /// archive-entry paths: no archive codec is wired in here, format
    /// plugins that understand a container open it themselves.
    async fn read(&self, path: &BookPath) -> Result<Vec<u8>>;
}
