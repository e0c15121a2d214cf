use chrono::Utc;
use serde::Serialize;
use tracing::warn;

use crate::ledger::hydrate::parse_blob;
use crate::ledger::{element_count, UNIT};
use crate::models::entry::{generate_id, Entry};

/// Headline figures derived from the current entry set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LedgerSummary {
    pub total: i64,
    pub entry_count: usize,
    pub element_count: u64,
}

/// In-memory ledger. Entries are kept in insertion order and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a ledger from a persisted blob. Never fails: unreadable or
    /// malformed content yields an empty ledger.
    pub fn hydrate(raw: &[u8]) -> Self {
        match parse_blob(raw) {
            Ok(entries) => Self { entries },
            Err(e) => {
                warn!("Discarding persisted ledger, starting empty: {e}");
                Self::default()
            }
        }
    }

    /// Appends a new entry stamped with the current time.
    ///
    /// Precondition: `value` is a multiple of `UNIT`. The input layer enforces
    /// this; a breach is logged and the value is recorded as given.
    pub fn insert(&mut self, value: i64) -> Entry {
        self.insert_at(value, Utc::now().timestamp_millis())
    }

    /// Appends a new entry with an explicit timestamp (epoch millis).
    ///
    /// The stored timestamp is clamped so it never precedes the latest
    /// existing one.
    pub fn insert_at(&mut self, value: i64, timestamp: i64) -> Entry {
        if value % UNIT != 0 {
            warn!("Inserting value {value} that is not a multiple of {UNIT}");
        }

        let timestamp = self
            .entries
            .iter()
            .map(|e| e.timestamp)
            .max()
            .map_or(timestamp, |latest| latest.max(timestamp));

        let entry = Entry {
            id: self.fresh_id(),
            value,
            timestamp,
            cumulative_at_point: self.live_total().saturating_add(value),
        };
        self.entries.push(entry.clone());
        entry
    }

    /// Removes the entry with the given id. Returns whether anything was removed.
    ///
    /// Ids compare as exact strings; numeric ids were stringified at hydrate.
    pub fn delete_by_id(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Removes every entry, returning how many were removed.
    pub fn clear_all(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    pub fn live_total(&self) -> i64 {
        self.entries
            .iter()
            .fold(0_i64, |acc, e| acc.saturating_add(e.value))
    }

    pub fn element_count(&self) -> u64 {
        element_count(self.live_total())
    }

    /// Most recent first, at most `limit` entries. Equal timestamps are ordered
    /// by insertion, later first.
    pub fn ordered_view(&self, limit: usize) -> Vec<&Entry> {
        let mut view: Vec<(usize, &Entry)> = self.entries.iter().enumerate().collect();
        view.sort_by(|(ia, a), (ib, b)| b.timestamp.cmp(&a.timestamp).then(ib.cmp(ia)));
        view.into_iter().take(limit).map(|(_, e)| e).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary {
            total: self.live_total(),
            entry_count: self.entries.len(),
            element_count: self.element_count(),
        }
    }

    /// Serializes the full entry set in the persisted blob format.
    pub fn to_blob(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.entries)
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = generate_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}
