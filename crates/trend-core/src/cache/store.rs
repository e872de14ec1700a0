//! Deduplication cache of papers that have already been announced.

use super::atomic::{atomic_read_json, atomic_write_json};
use crate::Result;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Persistent mapping from paper id to the raw trend entry it came from.
///
/// The store is loaded once per run, mutated in memory, and written back in
/// full by [`CacheStore::persist`]. Entries are never removed, so the set of
/// ids only grows across runs. There is no locking; two concurrent runs
/// against the same file are not supported.
#[derive(Debug, Clone)]
pub struct CacheStore {
    path: PathBuf,
    entries: BTreeMap<String, Value>,
}

impl CacheStore {
    /// Create an empty store that will persist to `path`.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Load the store from `path`, or start empty if the file does not exist.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries: BTreeMap<String, Value> = atomic_read_json(&path)?.unwrap_or_default();
        info!(
            "Loaded {} cached papers from {}",
            entries.len(),
            path.display()
        );
        Ok(Self { path, entries })
    }

    /// Path the store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the paper has been processed in this or a previous run.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Mark a paper as processed, keeping its raw entry.
    ///
    /// Returns `false` if the id was already present; the existing entry is
    /// left untouched.
    pub fn insert(&mut self, id: impl Into<String>, raw: Value) -> bool {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return false;
        }
        debug!("Caching paper {}", id);
        self.entries.insert(id, raw);
        true
    }

    /// Raw entry stored for a paper.
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.entries.get(id)
    }

    /// Iterate over all cached ids in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the whole store to disk, replacing any previous content.
    pub fn persist(&self) -> Result<()> {
        atomic_write_json(&self.path, &self.entries)?;
        info!(
            "Persisted {} cached papers to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}
