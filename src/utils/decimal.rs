//! Decimal arithmetic utilities for financial calculations.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Safe division that returns zero if divisor is zero.
pub fn safe_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    if denominator == Decimal::ZERO {
        Decimal::ZERO
    } else {
        numerator / denominator
    }
}

/// Truncate a decimal toward zero to an integer.
///
/// Saturates at the i64 bounds for out-of-range values.
pub fn truncate_to_i64(value: Decimal) -> i64 {
    let truncated = value.trunc();
    truncated.to_i64().unwrap_or(if truncated.is_sign_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
