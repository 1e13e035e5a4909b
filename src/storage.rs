//! Key-value persistence for list snapshots.
//!
//! [`KeyValueStore`] is the durable slot abstraction (a directory of JSON files
//! or an in-process map). [`PersistenceAdapter`] serializes [`Snapshot`]s into
//! a single key of such a store. Loading never fails: a missing, unreadable or
//! malformed slot is reported as "no prior data".

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config;
use crate::error::{GroceryError, Result};
use crate::models::Snapshot;

// ---------------------------------------------------------------------------
// KeyValueStore
// ---------------------------------------------------------------------------

/// A durable string slot keyed by name.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// FileStorage
// ---------------------------------------------------------------------------

/// Stores each key as `<dir>/<key>.json`.
pub struct FileStorage {
    /// Directory holding the slot files.
    pub dir: PathBuf,
}

impl FileStorage {
    /// Create a file store rooted at `dir`, creating the directory if needed.
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    /// Writes to a temp file first and renames on success, so an interrupted
    /// write never leaves a truncated slot behind.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let dest = self.path_for(key);
        let tmp_dest = dest.with_extension("json.tmp");

        let result = (|| -> Result<()> {
            fs::write(&tmp_dest, value)?;
            fs::rename(&tmp_dest, &dest)?;
            Ok(())
        })();

        if result.is_err() {
            let _ = fs::remove_file(&tmp_dest);
        }

        result
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// MemoryStorage
// ---------------------------------------------------------------------------

/// Non-durable store, useful for tests and ephemeral lists.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.slots.remove(key);
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// PersistenceAdapter
// ---------------------------------------------------------------------------

/// Saves and loads list snapshots through a [`KeyValueStore`].
pub struct PersistenceAdapter {
    store: Box<dyn KeyValueStore>,
    key: String,
}

impl PersistenceAdapter {
    /// Wrap `store`, using the default `groceryListItems` key.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_key(store, config::STORAGE_KEY)
    }

    pub fn with_key(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Serialize and write `snapshot`.
    ///
    /// Any failure is reported as [`GroceryError::Storage`].
    pub fn save(&mut self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)
            .map_err(|e| GroceryError::Storage(format!("Failed to serialize snapshot: {}", e)))?;
        self.store
            .set(&self.key, &json)
            .map_err(|e| GroceryError::Storage(format!("Failed to save '{}': {}", self.key, e)))?;
        debug!(key = %self.key, items = snapshot.items.len(), "Saved snapshot");
        Ok(())
    }

    /// Read the stored snapshot.
    ///
    /// Returns `None` when nothing is stored or when the slot cannot be read
    /// or parsed; such problems are logged, never returned.
    pub fn load(&self) -> Option<Snapshot> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No stored snapshot");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read stored snapshot");
                return None;
            }
        };

        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) => {
                debug!(key = %self.key, items = snapshot.items.len(), "Loaded snapshot");
                Some(snapshot)
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Stored snapshot is malformed; ignoring it");
                None
            }
        }
    }

    /// Delete the stored snapshot.
    pub fn clear(&mut self) -> Result<()> {
        self.store
            .remove(&self.key)
            .map_err(|e| GroceryError::Storage(format!("Failed to clear '{}': {}", self.key, e)))
    }
}
