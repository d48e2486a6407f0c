//! The metadata cache/loader.

use crate::error::{ErrorKind, Result};
use crate::info::BookInfo;
use exn::{OptionExt, ResultExt};
use folio_filesystem::{BookPath, FileSystemHandle};
use folio_formats::PluginRegistry;
use folio_formats::consts::AUTO_ENCODING;
use folio_formats::models::{Author, BookRecord, SingleAuthor};
use folio_options::StoreHandle;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::instrument;

/// Shared reference to a cached book record.
///
/// The same handle is returned for every open of the same path, so edits
/// through the write half are visible to all holders.
pub type BookHandle = Arc<RwLock<BookRecord>>;

/// Whether [`Catalog::open_with`] verifies the physical file before loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckFile {
    /// Fail with [`NotFound`](ErrorKind::NotFound) when the physical file
    /// is missing.
    #[default]
    Require,
    /// Trust the caller and load from the persisted options without
    /// touching the disk. Used when rebuilding a library view from saved
    /// state, where files may be on unmounted media.
    Skip,
}

/// In-memory cache of book metadata, one record per file path.
///
/// Entries live for the catalog's lifetime; there is no eviction. All
/// state is owned by the instance — construct one at application start
/// and share it by reference.
pub struct Catalog {
    fs: FileSystemHandle,
    store: StoreHandle,
    plugins: PluginRegistry,
    // One lock guards the map across the whole load sequence. The
    // insert-placeholder-first pattern below only defends against
    // re-entrancy within one task, not against concurrent loads of the
    // same path.
    books: Mutex<HashMap<BookPath, BookHandle>>,
}

impl Catalog {
    pub fn new(fs: FileSystemHandle, store: StoreHandle, plugins: PluginRegistry) -> Self {
        Self {
            fs,
            store,
            plugins,
            books: Mutex::new(HashMap::new()),
        }
    }

    /// The option store backing the persisted records.
    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Whether a record is cached for `path`, without loading anything.
    pub async fn is_cached(&self, path: &BookPath) -> bool {
        self.books.lock().await.contains_key(path)
    }

    /// Number of cached records.
    pub async fn len(&self) -> usize {
        self.books.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.lock().await.is_empty()
    }

    /// Open a book, verifying the physical file exists.
    pub async fn open(&self, path: impl Into<BookPath>) -> Result<BookHandle> {
        self.load(path.into(), CheckFile::default()).await
    }

    /// Open a book with explicit control over the existence check.
    pub async fn open_with(&self, path: impl Into<BookPath>, check: CheckFile) -> Result<BookHandle> {
        self.load(path.into(), check).await
    }

    /// The full load sequence.
    ///
    /// 1. Resolve the physical file and (optionally) check it exists.
    /// 2. Insert a placeholder record into the cache before any population,
    ///    so the entry is visible immediately.
    /// 3. Fast path: a complete persisted record is loaded and returned
    ///    without running a plugin.
    /// 4. Slow path: invalidate a stale container record if needed, run the
    ///    format plugin, normalize defaults, and mirror the result back to
    ///    the persisted options.
    #[instrument(skip(self), fields(path = %path))]
    async fn load(&self, path: BookPath, check: CheckFile) -> Result<BookHandle> {
        let physical = path.physical();
        if check == CheckFile::Require
            && !self.fs.exists(&physical).await.or_raise(|| ErrorKind::Filesystem(path.clone()))?
        {
            exn::bail!(ErrorKind::NotFound(path));
        }

        let mut books = self.books.lock().await;
        let handle = books
            .entry(path.clone())
            .or_insert_with(|| Arc::new(RwLock::new(BookRecord::new(path.clone()))))
            .clone();

        let info = BookInfo::new(&self.store, &path);
        if check == CheckFile::Skip || BookInfo::new(&self.store, &physical).is_complete() {
            let complete = {
                let mut record = handle.write().await;
                info.load_into(&mut record);
                info.is_complete()
            };
            if complete {
                tracing::debug!(path = %path, "served from persisted record");
                return Ok(handle);
            }
        } else {
            if physical != path {
                // A member lookup that got this far means the container's
                // cached completeness can no longer be trusted.
                BookInfo::new(&self.store, &physical).reset();
            }
            // Write the still-incomplete snapshot now, recording that an
            // extraction attempt is pending for this file.
            info.save_from(&*handle.read().await);
        }

        let plugin =
            self.plugins.resolve(&path).ok_or_raise(|| ErrorKind::UnsupportedFormat(path.clone()))?;
        {
            let mut record = handle.write().await;
            plugin
                .read_metadata(&self.fs, &path, &mut record)
                .await
                .or_raise(|| ErrorKind::Extraction(path.clone()))?;

            if record.title().is_empty() {
                record.set_title(path.display_name(true));
            }
            if record.author().is_none_or(|author| author.display_name().is_empty()) {
                record.set_author(Author::Single(SingleAuthor::unknown()));
            }
            if record.encoding().is_empty() {
                record.set_encoding(AUTO_ENCODING);
            }
            info.save_from(&record);
            info.mark_sequence_defined();
            tracing::info!(
                path = %path,
                plugin = plugin.name(),
                title = record.title(),
                "extracted book metadata"
            );
        }
        Ok(handle)
    }
}
