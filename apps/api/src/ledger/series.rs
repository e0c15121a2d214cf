use serde::Serialize;

use crate::models::entry::Entry;

/// One point of the cumulative chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub timestamp: i64,
    pub value: i64,
    /// Running total up to and including this point, recomputed from values.
    pub total: i64,
}

/// Oldest first running total over the given entries.
///
/// Equal timestamps keep their insertion order. `cumulative_at_point` is
/// ignored: it may be stale after deletions.
pub fn cumulative_series(entries: &[Entry]) -> Vec<SeriesPoint> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.timestamp);

    let mut total = 0_i64;
    sorted
        .into_iter()
        .map(|e| {
            total = total.saturating_add(e.value);
            SeriesPoint {
                timestamp: e.timestamp,
                value: e.value,
                total,
            }
        })
        .collect()
}
