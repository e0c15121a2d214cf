//! Persisted ledger handle.
//!
//! Every mutation is applied in memory first and then the whole entry set is
//! flushed to the blob store. A failed flush is logged and reported through
//! `Mutation::persisted`; the in-memory ledger stays authoritative.

use std::sync::Arc;

use bytes::Bytes;
use tracing::{debug, info, warn};

use crate::ledger::Ledger;
use crate::models::entry::Entry;
use crate::storage::BlobStore;

/// Outcome of a mutation together with whether it reached durable storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<T> {
    pub result: T,
    pub persisted: bool,
}

pub struct LedgerService {
    ledger: Ledger,
    store: Arc<dyn BlobStore>,
    key: String,
}

impl LedgerService {
    /// Hydrates the ledger from the store. Read failures and absent or
    /// malformed content all start an empty ledger.
    pub async fn load(store: Arc<dyn BlobStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let ledger = match store.get(&key).await {
            Ok(Some(raw)) => Ledger::hydrate(&raw),
            Ok(None) => {
                info!("No persisted ledger under '{key}', starting empty");
                Ledger::new()
            }
            Err(e) => {
                warn!("Failed to read persisted ledger '{key}' from {}: {e}", store.name());
                Ledger::new()
            }
        };
        info!(
            "Ledger hydrated from {} backend: {} entries, total {}",
            store.name(),
            ledger.len(),
            ledger.live_total()
        );
        Self { ledger, store, key }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Name of the blob store backend.
    pub fn backend(&self) -> &'static str {
        self.store.name()
    }

    pub async fn insert(&mut self, value: i64) -> Mutation<Entry> {
        let entry = self.ledger.insert(value);
        debug!("Inserted entry {} (value {})", entry.id, entry.value);
        let persisted = self.flush().await;
        Mutation {
            result: entry,
            persisted,
        }
    }

    /// Performs no authorization; callers gate access.
    pub async fn delete_by_id(&mut self, id: &str) -> Mutation<bool> {
        let removed = self.ledger.delete_by_id(id);
        debug!("Delete entry {id}: removed = {removed}");
        let persisted = self.flush().await;
        Mutation {
            result: removed,
            persisted,
        }
    }

    /// Irreversible and unconfirmed; callers gate access and confirm.
    pub async fn clear_all(&mut self) -> Mutation<usize> {
        let removed = self.ledger.clear_all();
        debug!("Cleared ledger ({removed} entries)");
        let persisted = self.flush().await;
        Mutation {
            result: removed,
            persisted,
        }
    }

    async fn flush(&self) -> bool {
        let blob = match self.ledger.to_blob() {
            Ok(blob) => Bytes::from(blob),
            Err(e) => {
                warn!("Failed to serialize ledger for '{}': {e}", self.key);
                return false;
            }
        };
        match self.store.put(&self.key, blob).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    "Failed to persist ledger '{}' to {}; keeping in-memory state: {e}",
                    self.key,
                    self.store.name()
                );
                false
            }
        }
    }
}
