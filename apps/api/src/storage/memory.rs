use std::collections::HashMap;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::sync::RwLock;

use crate::storage::{BlobStore, StorageError};

/// Process-local store. Contents are lost on exit.
#[derive(Default)]
pub struct MemoryBlobStore {
    slots: RwLock<HashMap<String, Bytes>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with one slot already populated.
    #[cfg(test)]
    pub fn with_slot(key: &str, blob: impl Into<Bytes>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.to_string(), blob.into());
        Self {
            slots: RwLock::new(slots),
        }
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn get(&self, key: &str) -> Result<Option<Bytes>, StorageError> {
        Ok(self.slots.read().await.get(key).cloned())
    }

    async fn put(&self, key: &str, blob: Bytes) -> Result<(), StorageError> {
        self.slots.write().await.insert(key.to_string(), blob);
        Ok(())
    }
}
