//! Blob storage for the persisted ledger.
//!
//! The ledger lives in a single named slot that is overwritten after every
//! mutation. Backends only need whole-value `get` and `put`.

pub mod file;
pub mod memory;
pub mod redis_store;
pub mod s3_store;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

use crate::config::BlobBackend;

pub use file::FileBlobStore;
pub use memory::MemoryBlobStore;
pub use redis_store::RedisBlobStore;
pub use s3_store::S3BlobStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("S3 error: {0}")]
    S3(String),

    #[error("Blocking task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Key-value store holding opaque blobs.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Short backend name for logs.
    fn name(&self) -> &'static str;

    /// Returns `None` when nothing has been stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError>;

    /// Replaces the value under `key`.
    async fn put(&self, key: &str, blob: Bytes) -> Result<(), StorageError>;
}

/// Builds the configured backend.
pub async fn build_blob_store(backend: &BlobBackend) -> Result<Arc<dyn BlobStore>> {
    let store: Arc<dyn BlobStore> = match backend {
        BlobBackend::Memory => Arc::new(MemoryBlobStore::new()),
        BlobBackend::File { data_dir } => Arc::new(FileBlobStore::new(data_dir)?),
        BlobBackend::Redis { url } => Arc::new(RedisBlobStore::new(url)?),
        BlobBackend::S3(s3_config) => Arc::new(S3BlobStore::connect(s3_config).await),
    };
    Ok(store)
}
