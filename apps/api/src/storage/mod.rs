//! Snapshot storage port.
//!
//! The job requisition collection is persisted as one opaque JSON document
//! under a single string key, read and rewritten whole on every mutation.
//! Backends are injected at startup; concurrent writers sharing a backing
//! race last-writer-wins.

mod file;
mod memory;
mod redis;

pub use self::file::FileStore;
pub use self::memory::MemoryStore;
pub use self::redis::RedisStore;

use async_trait::async_trait;
use thiserror::Error;

use ::redis::RedisError;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("redis error: {0}")]
    Redis(#[from] RedisError),
}

/// String-keyed snapshot storage: whole-document reads and writes only.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Returns the snapshot stored under `key`, or `None` if the key has
    /// never been written.
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replaces the snapshot stored under `key`.
    async fn write(&self, key: &str, payload: &str) -> Result<(), StorageError>;
}
