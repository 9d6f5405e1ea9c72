//! Error types for currency parsing and conversion.

use thiserror::Error;

/// Currency conversion and parsing errors.
///
/// # Examples
///
/// ```
/// use puzzle_core::types::{Money, MoneyError};
///
/// let err = "12.345".parse::<Money>().unwrap_err();
/// assert!(matches!(err, MoneyError::Parse(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoneyError {
    /// Input string is not a decimal amount with at most two fraction digits.
    #[error("invalid currency amount: {0:?}")]
    Parse(String),

    /// Floating-point input was NaN or infinite.
    #[error("non-finite currency amount: {0}")]
    NonFinite(f64),

    /// Floating-point input does not fit in 64-bit cents.
    #[error("currency amount out of range: {0}")]
    OutOfRange(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = MoneyError::Parse("abc".to_string());
        assert_eq!(err.to_string(), "invalid currency amount: \"abc\"");

        let err = MoneyError::NonFinite(f64::INFINITY);
        assert_eq!(err.to_string(), "non-finite currency amount: inf");
    }

    #[test]
    fn test_error_trait() {
        let err = MoneyError::OutOfRange(1e30);
        let _: &dyn std::error::Error = &err;
    }
}
