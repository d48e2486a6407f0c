//! In-memory file system for testing.

use crate::error::{ErrorKind, Result};
use crate::fs::FileSystem;
use crate::path::BookPath;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory file system for testing.
///
/// Holds its files in a locked map, so a test can keep one shared instance
/// and add or remove files mid-test to simulate changes behind the
/// catalog's back. Nothing ever touches the disk.
///
/// Archive entries behave as they do on the local file system: existence
/// checks resolve to the container file, and direct entry reads are
/// rejected.
#[derive(Debug, Default)]
pub struct MockFileSystem {
    files: RwLock<HashMap<BookPath, Vec<u8>>>,
}

impl MockFileSystem {
    /// Create a mock file system pre-populated with files.
    ///
    /// # Example
    ///
    /// ```
    /// use folio_filesystem::MockFileSystem;
    ///
    /// let fs = MockFileSystem::with_files([
    ///     ("shelf/one.txt", &b"data file 1"[..]),
    ///     ("shelf/two.txt", &b"data file 2"[..]),
    /// ]);
    /// ```
    pub fn with_files(files: impl IntoIterator<Item = (impl Into<BookPath>, impl Into<Vec<u8>>)>) -> Self {
        let map = files.into_iter().map(|(path, data)| (path.into(), data.into())).collect();
        Self { files: RwLock::new(map) }
    }

    /// Add a file after construction.
    pub async fn add_file(&self, path: impl Into<BookPath>, data: impl Into<Vec<u8>>) {
        self.files.write().await.insert(path.into(), data.into());
    }

    /// Remove a file, simulating deletion behind the catalog's back.
    pub async fn remove_file(&self, path: &BookPath) {
        self.files.write().await.remove(path);
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn exists(&self, path: &BookPath) -> Result<bool> {
        let physical = path.physical();
        Ok(self.files.read().await.contains_key(&physical))
    }

    async fn read(&self, path: &BookPath) -> Result<Vec<u8>> {
        if path.is_archive_entry() {
            exn::bail!(ErrorKind::Unsupported(path.clone()));
        }
        self.files
            .read()
            .await
            .get(path)
            .cloned()
            .ok_or_else(|| exn::Exn::from(ErrorKind::NotFound(path.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_files() {
        let fs = MockFileSystem::with_files([("a.txt", &b"one"[..]), ("b.txt", &b"two"[..])]);
        assert!(fs.exists(&BookPath::new("a.txt")).await.unwrap());
        assert!(fs.exists(&BookPath::new("b.txt")).await.unwrap());
        assert!(!fs.exists(&BookPath::new("c.txt")).await.unwrap());
    }

    #[tokio::test]
    async fn test_read() {
        let fs = MockFileSystem::with_files([("a.txt", &b"one"[..])]);
        assert_eq!(fs.read(&BookPath::new("a.txt")).await.unwrap(), b"one");
        let err = fs.read(&BookPath::new("missing.txt")).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::NotFound(_)));
    }

    #[tokio::test]
    async fn test_archive_entry_resolves_to_container() {
        let fs = MockFileSystem::with_files([("shelf/pack.zip", &b"PK"[..])]);
        let entry = BookPath::new("shelf/pack.zip:novel.fb2");
        assert!(fs.exists(&entry).await.unwrap());
        let err = fs.read(&entry).await.unwrap_err();
        assert!(matches!(&*err, ErrorKind::Unsupported(_)));
    }

    #[tokio::test]
    async fn test_add_and_remove_file() {
        let fs = MockFileSystem::default();
        let path = BookPath::new("late.txt");
        assert!(!fs.exists(&path).await.unwrap());
        fs.add_file("late.txt", &b"data"[..]).await;
        assert!(fs.exists(&path).await.unwrap());
        fs.remove_file(&path).await;
        assert!(!fs.exists(&path).await.unwrap());
    }
}
