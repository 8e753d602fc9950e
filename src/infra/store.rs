//! Key-value storage backends and the quote history kept in them.

use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::Mutex,
};

use serde_json::Error as SerdeError;
use tracing::{debug, info, warn};

use crate::domain::history::{insert_entry, remove_entry, PersistedHistory, QuoteHistoryEntry};
use crate::util::version::{is_compatible, APP_VERSION};

const DATA_DIR_NAME: &str = "freight-quote-engine";
pub const HISTORY_KEY: &str = "quote-history";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error("invalid storage key: {0}")]
    InvalidKey(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}

/// String values addressed by short keys, like browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// One `<key>.json` file per key inside a directory.
#[derive(Clone, Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the platform's local data directory.
    pub fn default_location() -> Result<Self, StoreError> {
        let base = dirs::data_local_dir().ok_or(StoreError::StorageUnavailable)?;
        Ok(Self::new(base.join(DATA_DIR_NAME)))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, value)?;
        debug!("[store] wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Process-local store, for tests and embedders without a filesystem.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_entries<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> T {
        let mut guard = self
            .entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut guard)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.with_entries(|entries| entries.get(key).cloned()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.with_entries(|entries| entries.insert(key.to_string(), value.to_string()));
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.with_entries(|entries| entries.remove(key));
        Ok(())
    }
}

/// Recent quotes, most recent first, capped at
/// [`HISTORY_LIMIT`](crate::domain::history::HISTORY_LIMIT).
///
/// Every mutation is an unlocked read-modify-write against the backing
/// store. It assumes a single writer per store; two writers racing on the
/// same store can lose each other's updates.
#[derive(Debug)]
pub struct QuoteHistoryStore<S> {
    store: S,
}

impl<S: KeyValueStore> QuoteHistoryStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Stored entries. Missing, unreadable or incompatible data reads as empty.
    pub fn get_history(&self) -> Vec<QuoteHistoryEntry> {
        let raw = match self.store.get(HISTORY_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                warn!("[history] failed to read history: {err}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<PersistedHistory>(&raw) {
            Ok(persisted) if is_compatible(&persisted.version) => persisted.entries,
            Ok(persisted) => {
                warn!(
                    "[history] discarding history written by incompatible version {}",
                    persisted.version
                );
                Vec::new()
            }
            Err(err) => {
                warn!("[history] failed to parse history: {err}");
                Vec::new()
            }
        }
    }

    pub fn save_history_entry(
        &self,
        entry: QuoteHistoryEntry,
    ) -> Result<Vec<QuoteHistoryEntry>, StoreError> {
        let mut entries = self.get_history();
        info!("[history] saving quote {}", entry.id);
        insert_entry(&mut entries, entry);
        self.write_history(&entries)?;
        Ok(entries)
    }

    pub fn remove_history_entry(&self, id: &str) -> Result<Vec<QuoteHistoryEntry>, StoreError> {
        let mut entries = self.get_history();
        if remove_entry(&mut entries, id) {
            self.write_history(&entries)?;
        } else {
            debug!("[history] no entry with id {id}");
        }
        Ok(entries)
    }

    pub fn clear_history(&self) -> Result<(), StoreError> {
        info!("[history] clearing history");
        self.store.remove(HISTORY_KEY)
    }

    fn write_history(&self, entries: &[QuoteHistoryEntry]) -> Result<(), StoreError> {
        let persisted = PersistedHistory {
            version: APP_VERSION.to_string(),
            entries: entries.to_vec(),
        };
        let json = serde_json::to_string_pretty(&persisted)?;
        self.store.set(HISTORY_KEY, &json)
    }
}
