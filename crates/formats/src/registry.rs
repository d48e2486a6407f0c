use crate::error::Result;
use crate::plugin::{FormatPlugin, PluginHandle};
use folio_filesystem::{BookPath, FileSystemHandle};
use std::sync::Arc;

/// Ordered collection of format plugins.
///
/// Resolution is first-match, so registration order doubles as priority
/// when two plugins claim the same extension.
#[derive(Clone, Default)]
pub struct PluginRegistry {
    plugins: Vec<PluginHandle>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, plugin: impl FormatPlugin + 'static) {
        self.plugins.push(Arc::new(plugin));
    }

    pub fn register_handle(&mut self, plugin: PluginHandle) {
        self.plugins.push(plugin);
    }

    /// Relaxed resolution: the first plugin claiming the file's extension.
    pub fn resolve(&self, path: &BookPath) -> Option<PluginHandle> {
        let extension = path.extension();
        let found = self.plugins.iter().find(|plugin| plugin.supports_extension(&extension)).cloned();
        if found.is_none() {
            tracing::debug!(path = %path, extension, "no format plugin claims this file");
        }
        found
    }

    /// Strict resolution: the first plugin whose content check passes.
    ///
    /// Content checks run in registration order; a plugin error aborts the
    /// search rather than silently falling through to a worse match.
    pub async fn resolve_strict(&self, fs: &FileSystemHandle, path: &BookPath) -> Result<Option<PluginHandle>> {
        for plugin in &self.plugins {
            if plugin.matches_content(fs, path).await? {
                return Ok(Some(plugin.clone()));
            }
        }
        Ok(None)
    }

    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }
}
