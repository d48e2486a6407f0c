use crate::error::Result;
use crate::models::BookRecord;
use async_trait::async_trait;
use folio_filesystem::{BookPath, FileSystemHandle};
use std::sync::Arc;

/// Shared reference to a registered format plugin.
pub type PluginHandle = Arc<dyn FormatPlugin>;

/// Capability to turn one on-disk book format into catalog metadata.
///
/// Plugins are matched to files in two passes: a relaxed pass that only
/// looks at the extension, and a strict pass that confirms the claim by
/// inspecting contents. Extraction mutates the passed record in place and
/// leaves untouched whatever fields the format does not carry — the
/// caller applies defaults afterwards.
#[async_trait]
pub trait FormatPlugin: Send + Sync {
    /// Short format name, used for logging only.
    fn name(&self) -> &str;

    /// Relaxed match: claim files by extension without touching contents.
    fn supports_extension(&self, extension: &str) -> bool;

    /// Strict match: confirm the claim by inspecting file contents.
    ///
    /// The default implementation trusts the extension.
    async fn matches_content(&self, _fs: &FileSystemHandle, path: &BookPath) -> Result<bool> {
        Ok(self.supports_extension(&path.extension()))
    }

    /// Populate `record` from the file at `path`.
    async fn read_metadata(
        &self,
        fs: &FileSystemHandle,
        path: &BookPath,
        record: &mut BookRecord,
    ) -> Result<()>;
}
