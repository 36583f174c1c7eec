//! State Store — the key-value mirror that lets a session survive a restart.
//!
//! Values are opaque JSON records; there is no versioning or migration
//! scheme. The store is a shadow of in-memory state, never a source of truth
//! for business rules.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::errors::EngineError;

/// Key-value mirror for session state.
#[async_trait]
pub trait StateStore: Send + Sync {
    async fn save(&self, key: &str, value: Value) -> Result<(), EngineError>;
    async fn load(&self, key: &str) -> Result<Option<Value>, EngineError>;
    async fn remove(&self, key: &str) -> Result<(), EngineError>;
}

/// In-memory store. Used in tests and by hosts that manage persistence
/// themselves.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

#[async_trait]
impl StateStore for MemoryStore {
    async fn save(&self, key: &str, value: Value) -> Result<(), EngineError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| EngineError::Storage(e.to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<Value>, EngineError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| EngineError::Storage(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<(), EngineError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| EngineError::Storage(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON file holding a key → record object,
/// the local analogue of a browser's persisted storage area.
pub struct JsonFileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the backing file.
    lock: tokio::sync::Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore {
            path: path.into(),
            lock: tokio::sync::Mutex::new(()),
        }
    }

    async fn read_map(&self) -> Result<HashMap<String, Value>, EngineError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                serde_json::from_slice(&bytes).map_err(|e| EngineError::Storage(e.to_string()))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(EngineError::Storage(e.to_string())),
        }
    }

    async fn write_map(&self, map: &HashMap<String, Value>) -> Result<(), EngineError> {
        let bytes =
            serde_json::to_vec_pretty(map).map_err(|e| EngineError::Storage(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| EngineError::Storage(e.to_string()))
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn save(&self, key: &str, value: Value) -> Result<(), EngineError> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value);
        self.write_map(&map).await?;
        debug!(key, path = %self.path.display(), "session state saved");
        Ok(())
    }

    async fn load(&self, key: &str) -> Result<Option<Value>, EngineError> {
        let _guard = self.lock.lock().await;
        let map = self.read_map().await?;
        Ok(map.get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<(), EngineError> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        store.save("interview", json!({"index": 3})).await.unwrap();
        let loaded = store.load("interview").await.unwrap();
        assert_eq!(loaded, Some(json!({"index": 3})));
    }

    #[tokio::test]
    async fn test_memory_store_missing_key_is_absent() {
        let store = MemoryStore::new();
        assert_eq!(store.load("nothing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_store_remove() {
        let store = MemoryStore::new();
        store.save("k", json!(1)).await.unwrap();
        store.remove("k").await.unwrap();
        assert_eq!(store.load("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));
        store.save("candidate", json!({"name": "Jane"})).await.unwrap();
        store.save("interview", json!({"index": 2})).await.unwrap();

        let loaded = store.load("interview").await.unwrap();
        assert_eq!(loaded, Some(json!({"index": 2})));
        // Second key must survive the first one's write.
        assert!(store.load("candidate").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        JsonFileStore::new(&path)
            .save("interview", json!({"index": 5}))
            .await
            .unwrap();

        let reopened = JsonFileStore::new(&path);
        assert_eq!(
            reopened.load("interview").await.unwrap(),
            Some(json!({"index": 5}))
        );
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_absent_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("never-written.json"));
        assert_eq!(store.load("interview").await.unwrap(), None);
    }
}
