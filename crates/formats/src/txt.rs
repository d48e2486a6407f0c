use crate::error::{ErrorKind, Result};
use crate::models::BookRecord;
use crate::plugin::FormatPlugin;
use async_trait::async_trait;
use exn::ResultExt;
use folio_filesystem::{BookPath, FileSystemHandle};

/// The plain-text "format".
///
/// Text files carry no embedded metadata, so extraction only verifies the
/// file is readable and leaves every field empty for the caller's
/// defaulting pass (title from file name, unknown author, auto encoding).
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextPlugin;

#[async_trait]
impl FormatPlugin for PlainTextPlugin {
    fn name(&self) -> &str {
        "txt"
    }

    fn supports_extension(&self, extension: &str) -> bool {
        extension == "txt"
    }

    async fn read_metadata(
        &self,
        fs: &FileSystemHandle,
        path: &BookPath,
        _record: &mut BookRecord,
    ) -> Result<()> {
        fs.read(path).await.or_raise(|| ErrorKind::Unreadable(path.clone()))?;
        Ok(())
    }
}
