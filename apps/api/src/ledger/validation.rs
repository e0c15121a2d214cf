use serde::Deserialize;
use thiserror::Error;

use crate::ledger::UNIT;

/// Largest magnitude accepted; keeps the f64 → i64 conversion exact.
const MAX_ABS_AMOUNT: f64 = 9_007_199_254_740_000.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AmountError {
    #[error("'{0}' is not a number")]
    NotNumeric(String),

    #[error("amount must be a finite number")]
    NotFinite,

    #[error("amount must be entered in steps of 1000 (e.g. 1000, 2000, -1000), got {0}")]
    NotUnitMultiple(f64),

    #[error("amount {0} is out of range")]
    OutOfRange(f64),
}

/// A user-supplied amount: either a JSON number or typed text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(f64),
    Text(String),
}

impl AmountInput {
    pub fn validate(&self) -> Result<i64, AmountError> {
        match self {
            AmountInput::Number(n) => validate_amount(*n),
            AmountInput::Text(s) => parse_amount(s),
        }
    }
}

/// Parses typed text into a validated amount.
pub fn parse_amount(input: &str) -> Result<i64, AmountError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| AmountError::NotNumeric(trimmed.to_string()))?;
    validate_amount(value)
}

/// Checks that a number is finite, integral and a multiple of `UNIT`.
///
/// Zero passes: it is a multiple of the unit and contributes nothing.
pub fn validate_amount(value: f64) -> Result<i64, AmountError> {
    if !value.is_finite() {
        return Err(AmountError::NotFinite);
    }
    if value.abs() > MAX_ABS_AMOUNT {
        return Err(AmountError::OutOfRange(value));
    }
    if value.fract() != 0.0 || value % (UNIT as f64) != 0.0 {
        return Err(AmountError::NotUnitMultiple(value));
    }
    Ok(value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_multiples_pass() {
        assert_eq!(validate_amount(1000.0), Ok(1000));
        assert_eq!(validate_amount(-3000.0), Ok(-3000));
        assert_eq!(validate_amount(0.0), Ok(0));
    }

    #[test]
    fn test_non_multiple_fails() {
        assert_eq!(
            validate_amount(999.0),
            Err(AmountError::NotUnitMultiple(999.0))
        );
        assert!(matches!(
            validate_amount(-1500.0),
            Err(AmountError::NotUnitMultiple(_))
        ));
        assert!(matches!(
            validate_amount(1000.5),
            Err(AmountError::NotUnitMultiple(_))
        ));
    }

    #[test]
    fn test_non_finite_fails() {
        assert_eq!(validate_amount(f64::NAN), Err(AmountError::NotFinite));
        assert_eq!(validate_amount(f64::INFINITY), Err(AmountError::NotFinite));
    }

    #[test]
    fn test_out_of_range_fails() {
        assert!(matches!(
            validate_amount(1e20),
            Err(AmountError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(parse_amount(" 2000 "), Ok(2000));
        assert_eq!(parse_amount("-1000"), Ok(-1000));
        assert_eq!(
            parse_amount("abc"),
            Err(AmountError::NotNumeric("abc".to_string()))
        );
        assert!(matches!(parse_amount(""), Err(AmountError::NotNumeric(_))));
        assert_eq!(parse_amount("NaN"), Err(AmountError::NotFinite));
    }

    #[test]
    fn test_amount_input_deserializes_number_or_text() {
        let n: AmountInput = serde_json::from_str("3000").unwrap();
        assert_eq!(n.validate(), Ok(3000));
        let t: AmountInput = serde_json::from_str("\"4000\"").unwrap();
        assert_eq!(t.validate(), Ok(4000));
        let bad: AmountInput = serde_json::from_str("\"12.5\"").unwrap();
        assert!(bad.validate().is_err());
    }
}
