use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One immutable ledger record.
///
/// Serialized with camelCase field names; this is the persisted blob format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: String,
    /// Signed amount. Expected to be a multiple of `ledger::UNIT`.
    pub value: i64,
    /// Creation instant in epoch milliseconds. Not unique; ordering only.
    pub timestamp: i64,
    /// Live total immediately after this entry was inserted.
    ///
    /// Historical snapshot. It is never recomputed when other entries are
    /// deleted and must not be used as the live total.
    pub cumulative_at_point: i64,
}

/// Generates a fresh opaque entry id.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_camel_case() {
        let entry = Entry {
            id: "abc".to_string(),
            value: 1000,
            timestamp: 1_700_000_000_000,
            cumulative_at_point: 3000,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["value"], 1000);
        assert_eq!(json["timestamp"], 1_700_000_000_000_i64);
        assert_eq!(json["cumulativeAtPoint"], 3000);
    }

    #[test]
    fn test_generate_id_is_unique() {
        let ids: std::collections::HashSet<String> = (0..500).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 500);
    }
}
