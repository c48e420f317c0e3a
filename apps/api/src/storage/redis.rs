use async_trait::async_trait;

use ::redis::{AsyncCommands, Client};

use super::{SnapshotStore, StorageError};

/// Redis-backed snapshot storage: GET/SET of a single string key.
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SnapshotStore for RedisStore {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        Ok(con.get(key).await?)
    }

    async fn write(&self, key: &str, payload: &str) -> Result<(), StorageError> {
        let mut con = self.client.get_multiplexed_async_connection().await?;
        let _: () = con.set(key, payload).await?;
        Ok(())
    }
}
