//! Validation errors raised before any selection runs.
//!
//! Every variant aborts the computation up front; the allocator itself never
//! fails for well-formed numeric input, so no partial selection can leak out
//! of an invalid run.

use rust_decimal::Decimal;
use thiserror::Error;

/// Input validation failures for market records and share lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required parameter or record field was absent.
    #[error("missing required value: {0}")]
    MissingValue(String),

    /// A count that can never be negative was negative.
    #[error("{field} cannot be negative (got {value})")]
    NegativeCount { field: &'static str, value: i64 },

    /// A count that must be positive was zero.
    #[error("{0} must be positive")]
    ZeroCount(&'static str),

    /// A declared element count disagrees with the supplied list.
    #[error("declared count {declared} does not match list length {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    /// A numeric field failed to parse.
    #[error("{field} is not numeric: {value:?}")]
    NonNumericField { field: &'static str, value: String },

    /// A fraction or price that must be non-negative was negative.
    #[error("value cannot be negative (got {0})")]
    NegativeFraction(Decimal),
}
