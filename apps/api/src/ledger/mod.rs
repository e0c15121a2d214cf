// Ledger: entry store, derived views, persistence handle, input validation.
// All derived quantities (total, views, series) are recomputed from the entry
// set on every call.

pub mod handlers;
pub mod hydrate;
pub mod series;
pub mod service;
pub mod store;
pub mod validation;

pub use service::LedgerService;
pub use store::Ledger;

/// Every entry value must be a multiple of this.
pub const UNIT: i64 = 1000;

/// Maximum number of entries returned by the history view.
pub const HISTORY_LIMIT: usize = 50;

/// Number of meadow elements for a given total: `floor(max(0, total) / UNIT)`.
pub fn element_count(total: i64) -> u64 {
    (total.max(0) / UNIT) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_count_floors() {
        assert_eq!(element_count(0), 0);
        assert_eq!(element_count(999), 0);
        assert_eq!(element_count(1000), 1);
        assert_eq!(element_count(2500), 2);
        assert_eq!(element_count(1_500_000), 1500);
    }

    #[test]
    fn test_element_count_clamps_negative_total() {
        assert_eq!(element_count(-1), 0);
        assert_eq!(element_count(-5000), 0);
    }
}
