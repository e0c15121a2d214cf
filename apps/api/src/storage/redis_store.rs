use async_trait::async_trait;
use bytes::Bytes;
use redis::AsyncCommands;

use crate::storage::{BlobStore, StorageError};

/// Stores each slot as a plain Redis string value.
pub struct RedisBlobStore {
    client: redis::Client,
}

impl RedisBlobStore {
    /// Validates the URL; no connection is made until first use.
    pub fn new(url: &str) -> Result<Self, StorageError> {
        Ok(Self {
            client: redis::Client::open(url)?,
        })
    }
}

#[async_trait]
impl BlobStore for RedisBlobStore {
    fn name(&self) -> &'static str {
        "redis"
    }

    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let raw: Option<Vec<u8>> = conn.get(key).await?;
        Ok(raw.map(Bytes::from))
    }

    async fn put(&self, key: &str, blob: Bytes) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(key, &blob[..]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_url() {
        assert!(RedisBlobStore::new("not a url").is_err());
    }

    #[test]
    fn test_accepts_redis_url_without_connecting() {
        assert!(RedisBlobStore::new("redis://127.0.0.1:6399/").is_ok());
    }
}
