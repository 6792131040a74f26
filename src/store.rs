//! # Persistence Port
//!
//! Collections are persisted as opaque JSON blobs keyed by collection name,
//! one writer per process. Writes are synchronous and fire-and-forget: the
//! whole collection is serialized after every mutation, the last write wins,
//! and concurrent writers are not reconciled. Different collections are
//! written independently, so multi-collection updates are not atomic.
//!
//! Corrupt or missing data never reaches callers as a hard failure: loading
//! falls back to the empty collection and logs what was discarded.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Storage backend for JSON blobs keyed by collection name.
pub trait Storage {
    fn read(&self, key: &str) -> Result<Option<String>>;
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store: one pretty-printed JSON file per key under a directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for JsonFileStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Some(contents))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// In-memory store used as a test double for the file backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.lock().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.data
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load a collection, treating missing or corrupt data as empty.
pub fn load_collection<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: Storage,
{
    match store.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!("Discarding corrupt '{}' data: {}", key, e);
                T::default()
            }
        },
        Ok(None) => {
            debug!("No stored '{}' data, starting empty", key);
            T::default()
        }
        Err(e) => {
            warn!("Failed to read '{}', starting empty: {:#}", key, e);
            T::default()
        }
    }
}

/// Serialize and persist a whole collection under its key.
pub fn save_collection<T, S>(store: &S, key: &str, value: &T) -> Result<()>
where
    T: Serialize,
    S: Storage,
{
    let raw = serde_json::to_string_pretty(value)
        .with_context(|| format!("Failed to serialize '{key}'"))?;
    store.write(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_store_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let store = JsonFileStore::new(dir.path())?;

        assert_eq!(store.read("mealPlans")?, None);
        store.write("mealPlans", "[]")?;
        assert_eq!(store.read("mealPlans")?.as_deref(), Some("[]"));

        Ok(())
    }

    #[test]
    fn test_memory_store_round_trip() -> Result<()> {
        let store = MemoryStore::new();
        store.write("shoppingList", r#"[{"x": 1}]"#)?;
        assert_eq!(store.read("shoppingList")?.as_deref(), Some(r#"[{"x": 1}]"#));
        Ok(())
    }

    #[test]
    fn test_corrupt_data_loads_as_empty() {
        let store = MemoryStore::new();
        store.write("mealPlans", "{ not json").unwrap();

        let loaded: Vec<u32> = load_collection(&store, "mealPlans");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_and_load_collection() {
        let store = MemoryStore::new();
        save_collection(&store, "numbers", &vec![1u32, 2, 3]).unwrap();

        let loaded: Vec<u32> = load_collection(&store, "numbers");
        assert_eq!(loaded, vec![1, 2, 3]);
    }
}
