pub mod error;
mod fs;
mod path;

#[cfg(feature = "mock")]
pub use crate::fs::MockFileSystem;
pub use crate::fs::{FileSystem, LocalFileSystem};
pub use crate::path::BookPath;
use std::sync::Arc;

pub type FileSystemHandle = Arc<dyn FileSystem + Send + Sync>;
