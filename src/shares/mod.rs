//! Percentage distribution of ownership shares.
//!
//! Standalone O(N) utility, unrelated to the lot selection pipeline: given a
//! list of share values, express each as its fraction of the total, formatted
//! to three decimal places.

use crate::error::ValidationError;
use crate::utils::decimal::safe_div;
use rust_decimal::Decimal;

/// Validate a share list against its declared count.
///
/// Either argument may be absent, but not both. A declared count must be
/// positive and match the list length; shares must be non-negative.
pub fn validate(
    declared: Option<i64>,
    fractions: Option<&[Decimal]>,
) -> Result<(), ValidationError> {
    if declared.is_none() && fractions.is_none() {
        return Err(ValidationError::MissingValue(
            "share count and share list".to_string(),
        ));
    }

    let fractions = fractions.unwrap_or_default();

    if let Some(declared) = declared {
        if declared < 0 {
            return Err(ValidationError::NegativeCount {
                field: "share count",
                value: declared,
            });
        }
        if declared == 0 {
            return Err(ValidationError::ZeroCount("share count"));
        }
        if declared as usize != fractions.len() {
            return Err(ValidationError::LengthMismatch {
                declared: declared as usize,
                actual: fractions.len(),
            });
        }
    }

    if let Some(negative) = fractions.iter().find(|f| f.is_sign_negative()) {
        return Err(ValidationError::NegativeFraction(*negative));
    }

    Ok(())
}

/// Express each share as its fraction of the total, formatted to three
/// decimal places.
///
/// A zero total falls back to `0.000` for every entry instead of dividing.
pub fn distribute(fractions: &[Decimal]) -> Vec<String> {
    let total: Decimal = fractions.iter().sum();

    fractions
        .iter()
        .map(|fraction| format!("{:.3}", safe_div(*fraction, total)))
        .collect()
}

/// Parse whitespace-style string tokens into share values.
pub fn parse_fractions(tokens: &[String]) -> Result<Vec<Decimal>, ValidationError> {
    tokens
        .iter()
        .map(|token| {
            token
                .parse()
                .map_err(|_| ValidationError::NonNumericField {
                    field: "share value",
                    value: token.clone(),
                })
        })
        .collect()
}
