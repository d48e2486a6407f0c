//! Typed option handles.
//!
//! Each handle names one `(category, scope, name)` key and carries its
//! default. Values are persisted as strings; handles parse on read and
//! fall back to the default when the stored value is absent or garbage.
//! Writing a value equal to the default removes the persisted entry,
//! which keeps snapshots minimal.

use crate::StoreHandle;
use crate::store::OptionKey;

/// A string-valued option with a literal default.
#[derive(Debug, Clone)]
pub struct StringOption {
    store: StoreHandle,
    key: OptionKey,
    default: String,
}

impl StringOption {
    pub fn new(
        store: &StoreHandle,
        category: impl Into<String>,
        scope: impl Into<String>,
        name: impl Into<String>,
        default: impl Into<String>,
    ) -> Self {
        Self {
            store: store.clone(),
            key: OptionKey::new(category, scope, name),
            default: default.into(),
        }
    }

    pub fn value(&self) -> String {
        self.store.raw_value(&self.key).unwrap_or_else(|| self.default.clone())
    }

    pub fn set(&self, value: impl Into<String>) {
        let value = value.into();
        match value == self.default {
            true => self.store.unset(&self.key),
            false => self.store.set_raw(self.key.clone(), value),
        }
    }
}

/// An integer option clamped to an inclusive range.
#[derive(Debug, Clone)]
pub struct IntRangeOption {
    store: StoreHandle,
    key: OptionKey,
    default: i32,
    min: i32,
    max: i32,
}

impl IntRangeOption {
    pub fn new(
        store: &StoreHandle,
        category: impl Into<String>,
        scope: impl Into<String>,
        name: impl Into<String>,
        default: i32,
        min: i32,
        max: i32,
    ) -> Self {
        Self {
            store: store.clone(),
            key: OptionKey::new(category, scope, name),
            default: default.clamp(min, max),
            min,
            max,
        }
    }

    /// Stored value clamped into range; the default when the stored string
    /// is absent or does not parse.
    pub fn value(&self) -> i32 {
        self.store
            .raw_value(&self.key)
            .and_then(|raw| raw.parse::<i32>().ok())
            .map_or(self.default, |value| value.clamp(self.min, self.max))
    }

    pub fn set(&self, value: i32) {
        let value = value.clamp(self.min, self.max);
        match value == self.default {
            true => self.store.unset(&self.key),
            false => self.store.set_raw(self.key.clone(), value.to_string()),
        }
    }
}

/// A boolean option.
///
/// The default may be computed at construction time, e.g. from a file's
/// extension, which is how "assume sequence-defined for structured
/// formats" is expressed without storing anything.
#[derive(Debug, Clone)]
pub struct BoolOption {
    store: StoreHandle,
    key: OptionKey,
    default: bool,
}

impl BoolOption {
    pub fn new(
        store: &StoreHandle,
        category: impl Into<String>,
        scope: impl Into<String>,
        name: impl Into<String>,
        default: bool,
    ) -> Self {
        Self {
            store: store.clone(),
            key: OptionKey::new(category, scope, name),
            default,
        }
    }

    pub fn value(&self) -> bool {
        self.store
            .raw_value(&self.key)
            .and_then(|raw| raw.parse::<bool>().ok())
            .unwrap_or(self.default)
    }

    pub fn set(&self, value: bool) {
        match value == self.default {
            true => self.store.unset(&self.key),
            false => self.store.set_raw(self.key.clone(), value.to_string()),
        }
    }
}
