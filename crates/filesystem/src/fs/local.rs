//! Local file system.
//!
//! Books live wherever the platform put them, so unlike a managed library
//! root there is no path validation layer here: paths are used as-is.

use crate::error::{ErrorKind, Result};
use crate::fs::FileSystem;
use crate::path::BookPath;
use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

/// File system backed by `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    pub fn new() -> Self {
        Self
    }

    fn map_io_error(e: std::io::Error, path: &BookPath) -> ErrorKind {
        match e.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound(path.clone()),
            _ => ErrorKind::Io(e),
        }
    }
}

#[async_trait]
impl FileSystem for LocalFileSystem {
    async fn exists(&self, path: &BookPath) -> Result<bool> {
        let physical = path.physical();
        Ok(fs::try_exists(Path::new(physical.as_str())).await.map_err(ErrorKind::Io)?)
    }

    async fn read(&self, path: &BookPath) -> Result<Vec<u8>> {
        if path.is_archive_entry() {
            tracing::debug!(path = %path, "refusing direct read of an archive entry");
            exn::bail!(ErrorKind::Unsupported(path.clone()));
        }
        Ok(fs::read(Path::new(path.as_str())).await.map_err(|e| Self::map_io_error(e, path))?)
    }
}
