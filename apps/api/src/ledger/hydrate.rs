//! Parsing and sanitizing of the persisted ledger blob.
//!
//! `parse_blob` is the fallible parse. `Ledger::hydrate` collapses any error
//! into an empty ledger, so callers never see a failure at startup.

use std::collections::HashSet;

use serde_json::{Map, Number, Value};
use thiserror::Error;
use tracing::debug;

use crate::models::entry::{generate_id, Entry};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("persisted ledger is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("persisted ledger is not a sequence of records")]
    NotASequence,
}

/// Parses a persisted blob into sanitized entries.
///
/// - Non-object records are dropped.
/// - `id` is coerced to a string; missing, empty or falsy ids get a fresh one.
///   A repeated id is also replaced so ids stay unique.
/// - Numeric fields accept integers or floats (rounded); anything else is 0.
pub fn parse_blob(raw: &[u8]) -> Result<Vec<Entry>, LedgerError> {
    let parsed: Value = serde_json::from_slice(raw)?;
    let Value::Array(records) = parsed else {
        return Err(LedgerError::NotASequence);
    };

    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    let mut entries = Vec::with_capacity(records.len());

    for (position, record) in records.into_iter().enumerate() {
        let Value::Object(fields) = record else {
            debug!("Dropping non-object ledger record at position {position}");
            continue;
        };

        let mut id = coerce_id(fields.get("id")).unwrap_or_else(generate_id);
        while seen.contains(&id) {
            debug!("Replacing duplicate ledger id '{id}' at position {position}");
            id = generate_id();
        }
        seen.insert(id.clone());

        entries.push(Entry {
            id,
            value: number_field(&fields, "value"),
            timestamp: number_field(&fields, "timestamp"),
            cumulative_at_point: number_field(&fields, "cumulativeAtPoint"),
        });
    }

    Ok(entries)
}

fn coerce_id(raw: Option<&Value>) -> Option<String> {
    match raw? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(number_id(n)),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Integral floats render without a fraction (`1.0` becomes `"1"`).
fn number_id(n: &Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() < 9.2e18 {
                return (f as i64).to_string();
            }
        }
    }
    n.to_string()
}

fn number_field(fields: &Map<String, Value>, name: &str) -> i64 {
    let Some(Value::Number(n)) = fields.get(name) else {
        return 0;
    };
    if let Some(i) = n.as_i64() {
        return i;
    }
    match n.as_f64() {
        // `as` saturates at the i64 bounds.
        Some(f) if f.is_finite() => f.round() as i64,
        _ => 0,
    }
}
