use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{SnapshotStore, StorageError};

/// In-memory snapshot backing. State dies with the process; used by tests
/// and as an explicitly ephemeral deployment mode.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_reads_none() {
        let store = MemoryStore::new();
        assert_eq!(store.read("jobs").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_write_then_read_round_trips() {
        let store = MemoryStore::new();
        store.write("jobs", "[]").await.unwrap();
        assert_eq!(store.read("jobs").await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_write_replaces_previous_snapshot() {
        let store = MemoryStore::new();
        store.write("jobs", "[1]").await.unwrap();
        store.write("jobs", "[2]").await.unwrap();
        assert_eq!(store.read("jobs").await.unwrap().as_deref(), Some("[2]"));
    }
}
