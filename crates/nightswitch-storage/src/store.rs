//! Preference storage backends for NightSwitch
//!
//! This module provides the key/value store the theme preference lives in.
//! A preference is a single named key: present with a marker value, or
//! absent. `FileStore` keeps one file per key under the user's storage
//! directory; `MemoryStore` keeps everything in memory for hosts and tests
//! that must not touch the filesystem.

use std::{
    collections::HashMap,
    fs,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use crate::error::{StorageError, StorageResult};

/// Origin-scoped persistent key/value storage for preferences
///
/// The stored key's existence (and value) is the sole source of truth for a
/// preference across sessions. `remove` of an absent key is a no-op so that
/// callers can clear a preference unconditionally.
pub trait PreferenceStore {
    /// Get the value stored under a key, if any
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store a value under a key, replacing any previous value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove a key and its value; absent keys are ignored
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Check whether a key is present
    fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// File-backed preference store
///
/// Each key is stored as a single file under the storage directory, with the
/// value as the file's contents.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the default storage directory
    /// (`~/.nightswitch/preferences`)
    pub fn new() -> StorageResult<Self> {
        let mut dir = dirs::home_dir().ok_or_else(|| {
            StorageError::path_resolution_error("Home directory not found")
        })?;
        dir.push(".nightswitch");
        dir.push("preferences");
        Self::with_dir(dir)
    }

    /// Create a store rooted at a specific directory, creating it if needed
    pub fn with_dir(dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| StorageError::directory_creation_failed(dir.clone(), e))?;
        tracing::debug!("preference store at {}", dir.display());
        Ok(Self { dir })
    }

    /// The directory keys are stored under
    pub fn dir(&self) -> &PathBuf {
        &self.dir
    }

    /// Resolve the file path for a key, rejecting keys that could escape
    /// the storage directory
    fn key_path(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() {
            return Err(StorageError::invalid_key(key, "key cannot be empty"));
        }
        if key.contains(['/', '\\']) || key == "." || key == ".." {
            return Err(StorageError::invalid_key(
                key,
                "key cannot contain path separators",
            ));
        }
        Ok(self.dir.join(key))
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.key_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.key_path(key)?;
        fs::write(&path, value).map_err(StorageError::Io)?;
        tracing::debug!("stored {} = {:?}", key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.key_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                tracing::debug!("removed {}", key);
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }
}

/// In-memory preference store for tests and embedded hosts
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> StorageResult<usize> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StorageError::internal(format!("Failed to lock entries: {}", e)))?;
        Ok(entries.len())
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| StorageError::internal(format!("Failed to lock entries: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StorageError::internal(format!("Failed to lock entries: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| StorageError::internal(format!("Failed to lock entries: {}", e)))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::with_dir(tmp.path()).unwrap();

        assert_eq!(store.get("darkSwitch").unwrap(), None);
        store.set("darkSwitch", "dark").unwrap();
        assert_eq!(store.get("darkSwitch").unwrap(), Some("dark".to_string()));
        assert!(store.contains("darkSwitch").unwrap());

        store.remove("darkSwitch").unwrap();
        assert_eq!(store.get("darkSwitch").unwrap(), None);
    }

    #[test]
    fn test_file_store_remove_absent_key() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::with_dir(tmp.path()).unwrap();

        // Removing a key that was never set succeeds
        store.remove("darkSwitch").unwrap();
        assert!(!store.contains("darkSwitch").unwrap());
    }

    #[test]
    fn test_file_store_overwrites_value() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::with_dir(tmp.path()).unwrap();

        store.set("darkSwitch", "dark").unwrap();
        store.set("darkSwitch", "darker").unwrap();
        assert_eq!(store.get("darkSwitch").unwrap(), Some("darker".to_string()));
    }

    #[test]
    fn test_file_store_rejects_invalid_keys() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::with_dir(tmp.path()).unwrap();

        assert!(matches!(
            store.get(""),
            Err(StorageError::InvalidKey { .. })
        ));
        assert!(matches!(
            store.set("../escape", "dark"),
            Err(StorageError::InvalidKey { .. })
        ));
        assert!(matches!(
            store.remove("a/b"),
            Err(StorageError::InvalidKey { .. })
        ));
    }

    #[test]
    fn test_file_store_persists_across_instances() {
        let tmp = tempfile::tempdir().unwrap();
        {
            let store = FileStore::with_dir(tmp.path()).unwrap();
            store.set("darkSwitch", "dark").unwrap();
        }
        let store = FileStore::with_dir(tmp.path()).unwrap();
        assert_eq!(store.get("darkSwitch").unwrap(), Some("dark".to_string()));
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert!(store.is_empty().unwrap());

        store.set("darkSwitch", "dark").unwrap();
        assert_eq!(store.get("darkSwitch").unwrap(), Some("dark".to_string()));
        assert_eq!(store.len().unwrap(), 1);

        store.remove("darkSwitch").unwrap();
        assert_eq!(store.get("darkSwitch").unwrap(), None);
        store.remove("darkSwitch").unwrap();
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryStore::new();
        let clone = store.clone();
        store.set("darkSwitch", "dark").unwrap();
        assert_eq!(clone.get("darkSwitch").unwrap(), Some("dark".to_string()));
    }
}
