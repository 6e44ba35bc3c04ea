use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use anyhow::Context as _;

use crate::foundation::error::{FolioError, FolioResult};

/// Durable string key-value store (the browser's local storage).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> FolioResult<()>;
}

/// Read `key`, treating any failure as "no value".
pub fn read_best_effort(store: &dyn KeyValueStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(key, %err, "preference read failed, using default");
            None
        }
    }
}

/// Write `key`, logging and dropping any failure.
pub fn write_best_effort(store: &mut dyn KeyValueStore, key: &str, value: &str) {
    if let Err(err) = store.set(key, value) {
        tracing::warn!(key, %err, "preference write failed");
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> FolioResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store persisted as a flat JSON object on disk, rewritten on every `set`.
#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open `path`; a missing file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> FolioResult<Self> {
        let path = path.into();
        let entries = if path.exists() {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("read preference store '{}'", path.display()))?;
            serde_json::from_str(&text).map_err(|e| {
                FolioError::storage(format!("parse '{}': {e}", path.display()))
            })?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> FolioResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create store dir '{}'", parent.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, text)
            .with_context(|| format!("write preference store '{}'", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> FolioResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> FolioResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/prefs/storage.rs"]
mod tests;
