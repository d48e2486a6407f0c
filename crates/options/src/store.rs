//! Raw key-value storage behind the typed option handles.

use crate::StoreHandle;
use crate::error::{ErrorKind, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

/// Fully-qualified option key: category, file scope, option name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionKey {
    pub category: String,
    pub scope: String,
    pub name: String,
}

impl OptionKey {
    pub fn new(category: impl Into<String>, scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            scope: scope.into(),
            name: name.into(),
        }
    }
}

/// On-disk shape: category → scope → name → value. A `BTreeMap` keeps the
/// snapshot stable across saves so it diffs cleanly.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct Snapshot(BTreeMap<String, BTreeMap<String, BTreeMap<String, String>>>);

/// In-memory option map with a JSON snapshot on disk.
///
/// The internal lock is held only for the duration of a single raw read or
/// write, never across I/O, so option access from async code is safe.
/// Unset options are simply absent; typed handles supply defaults.
#[derive(Debug, Default)]
pub struct OptionStore {
    values: RwLock<BTreeMap<OptionKey, String>>,
}

impl OptionStore {
    /// Create an empty store.
    pub fn new() -> StoreHandle {
        Arc::new(Self::default())
    }

    /// Load a snapshot from disk. A missing file yields an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<StoreHandle> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no option snapshot on disk, starting empty");
            return Ok(Self::new());
        }
        let bytes = std::fs::read(path).map_err(ErrorKind::Io)?;
        let snapshot: Snapshot = serde_json::from_slice(&bytes).map_err(ErrorKind::Malformed)?;
        let mut values = BTreeMap::new();
        for (category, scopes) in snapshot.0 {
            for (scope, names) in scopes {
                for (name, value) in names {
                    values.insert(OptionKey::new(category.clone(), scope.clone(), name), value);
                }
            }
        }
        tracing::debug!(path = %path.display(), options = values.len(), "loaded option snapshot");
        Ok(Arc::new(Self { values: RwLock::new(values) }))
    }

    /// Write the current contents as a JSON snapshot.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let snapshot = {
            let values = self.read_guard();
            let mut snapshot = Snapshot::default();
            for (key, value) in values.iter() {
                snapshot
                    .0
                    .entry(key.category.clone())
                    .or_default()
                    .entry(key.scope.clone())
                    .or_default()
                    .insert(key.name.clone(), value.clone());
            }
            snapshot
        };
        let json = serde_json::to_vec_pretty(&snapshot).map_err(ErrorKind::Malformed)?;
        std::fs::write(path.as_ref(), json).map_err(ErrorKind::Io)?;
        Ok(())
    }

    // Option access is best-effort shared state; a poisoned lock still
    // holds a coherent map, so recover it instead of propagating a panic.
    fn read_guard(&self) -> std::sync::RwLockReadGuard<'_, BTreeMap<OptionKey, String>> {
        self.values.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> std::sync::RwLockWriteGuard<'_, BTreeMap<OptionKey, String>> {
        self.values.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Raw string value of an option, `None` if unset.
    pub fn raw_value(&self, key: &OptionKey) -> Option<String> {
        self.read_guard().get(key).cloned()
    }

    pub fn set_raw(&self, key: OptionKey, value: impl Into<String>) {
        self.write_guard().insert(key, value.into());
    }

    pub fn unset(&self, key: &OptionKey) {
        self.write_guard().remove(key);
    }

    pub fn is_set(&self, key: &OptionKey) -> bool {
        self.read_guard().contains_key(key)
    }

    /// Number of persisted entries. Defaults are not stored, so this is
    /// the count of options that differ from their defaults.
    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> OptionKey {
        OptionKey::new("Books", "shelf/book.txt", name)
    }

    #[test]
    fn test_raw_round_trip() {
        let store = OptionStore::new();
        assert_eq!(store.raw_value(&key("Title")), None);
        store.set_raw(key("Title"), "A Study in Scarlet");
        assert_eq!(store.raw_value(&key("Title")).as_deref(), Some("A Study in Scarlet"));
        store.unset(&key("Title"));
        assert_eq!(store.raw_value(&key("Title")), None);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let snapshot_path = temp_dir.path().join("options.json");
        let store = OptionStore::new();
        store.set_raw(key("Title"), "A Study in Scarlet");
        store.set_raw(key("Language"), "en");
        store.set_raw(OptionKey::new("State", "shelf/book.txt", "Position"), "42");
        store.save(&snapshot_path).unwrap();

        let reloaded = OptionStore::load(&snapshot_path).unwrap();
        assert_eq!(reloaded.len(), 3);
        assert_eq!(reloaded.raw_value(&key("Title")).as_deref(), Some("A Study in Scarlet"));
        assert_eq!(
            reloaded.raw_value(&OptionKey::new("State", "shelf/book.txt", "Position")).as_deref(),
            Some("42")
        );
    }

    #[test]
    fn test_load_missing_file_yields_empty_store() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = OptionStore::load(temp_dir.path().join("absent.json")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_malformed_snapshot() {
        let temp_dir = tempfile::tempdir().unwrap();
        let snapshot_path = temp_dir.path().join("options.json");
        std::fs::write(&snapshot_path, b"not json {").unwrap();
        let err = OptionStore::load(&snapshot_path).unwrap_err();
        assert!(matches!(&*err, ErrorKind::Malformed(_)));
    }

    #[test]
    fn test_snapshot_groups_by_category_and_scope() {
        let temp_dir = tempfile::tempdir().unwrap();
        let snapshot_path = temp_dir.path().join("options.json");
        let store = OptionStore::new();
        store.set_raw(key("Title"), "T");
        store.set_raw(key("Encoding"), "utf-8");
        store.save(&snapshot_path).unwrap();
        let json: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&snapshot_path).unwrap()).unwrap();
        assert_eq!(json["Books"]["shelf/book.txt"]["Title"], "T");
        assert_eq!(json["Books"]["shelf/book.txt"]["Encoding"], "utf-8");
    }
}
