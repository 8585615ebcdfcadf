//! Market record parsing and validation.
//!
//! Expected text format:
//! ```text
//! N M S
//! day name price quantity
//! day name price quantity
//! ```
//! The first line carries the market parameters (horizon days, daily lot
//! cap, budget). Lot lines follow until a blank line or end of input.

use crate::error::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A purchasable batch of one bond issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lot {
    /// Day the bond is redeemed (1-based).
    pub maturity_day: u32,
    /// Opaque issue name, e.g. "alfa-05".
    pub identifier: String,
    /// Quoted price as a percentage of face value.
    pub quoted_price: Decimal,
    /// Number of bonds in the lot.
    pub quantity: u32,
}

/// Parameters from the header line of a market record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParams {
    /// Trading window length in days (N).
    pub horizon_days: u32,
    /// Maximum lots offered per day (M). Parsed for compatibility; the
    /// allocator does not enforce it.
    pub daily_lot_cap: u32,
    /// Total spendable funds (S).
    pub budget: Decimal,
}

/// Parse a full market record into parameters and lots.
///
/// Any validation failure aborts before allocation runs.
pub fn parse_market(text: &str) -> Result<(MarketParams, Vec<Lot>), ValidationError> {
    let mut lines = text.lines();

    let header = lines
        .by_ref()
        .find(|l| !l.trim().is_empty())
        .ok_or_else(|| ValidationError::MissingValue("header line 'N M S'".to_string()))?;

    let params = parse_header(header)?;

    let mut lots = Vec::new();
    for line in lines {
        // Blank line terminates the lot list.
        if line.trim().is_empty() {
            break;
        }
        lots.push(parse_lot_line(line)?);
    }

    trace!(count = lots.len(), "parsed market record");
    Ok((params, lots))
}

fn parse_header(line: &str) -> Result<MarketParams, ValidationError> {
    let mut fields = line.split_whitespace();

    let horizon_days = parse_count(fields.next(), "horizon days (N)")?;
    let daily_lot_cap = parse_field::<u32>(fields.next(), "daily lot cap (M)")?;
    let budget: Decimal = parse_field(fields.next(), "budget (S)")?;

    if budget < Decimal::ZERO {
        return Err(ValidationError::NegativeFraction(budget));
    }

    Ok(MarketParams {
        horizon_days,
        daily_lot_cap,
        budget,
    })
}

fn parse_lot_line(line: &str) -> Result<Lot, ValidationError> {
    let mut fields = line.split_whitespace();

    let maturity_day = parse_count(fields.next(), "maturity day")?;
    let identifier = fields
        .next()
        .ok_or_else(|| ValidationError::MissingValue("lot identifier".to_string()))?
        .to_string();
    let quoted_price: Decimal = parse_field(fields.next(), "quoted price")?;
    let quantity = parse_count(fields.next(), "quantity")?;

    if quoted_price < Decimal::ZERO {
        return Err(ValidationError::NegativeFraction(quoted_price));
    }

    Ok(Lot {
        maturity_day,
        identifier,
        quoted_price,
        quantity,
    })
}

/// Parse a whitespace-delimited numeric field, mapping failures to the
/// validation taxonomy.
fn parse_field<T: std::str::FromStr>(
    raw: Option<&str>,
    field: &'static str,
) -> Result<T, ValidationError> {
    let raw = raw.ok_or_else(|| ValidationError::MissingValue(field.to_string()))?;
    raw.parse()
        .map_err(|_| ValidationError::NonNumericField {
            field,
            value: raw.to_string(),
        })
}

/// Parse a count that must be a positive integer.
fn parse_count(raw: Option<&str>, field: &'static str) -> Result<u32, ValidationError> {
    let raw = raw.ok_or_else(|| ValidationError::MissingValue(field.to_string()))?;

    // Negative counts are a distinct taxonomy entry, so probe the sign
    // before the unsigned parse swallows it.
    if let Ok(signed) = raw.parse::<i64>() {
        if signed < 0 {
            return Err(ValidationError::NegativeCount {
                field,
                value: signed,
            });
        }
        if signed == 0 {
            return Err(ValidationError::ZeroCount(field));
        }
    }

    raw.parse::<u32>()
        .map_err(|_| ValidationError::NonNumericField {
            field,
            value: raw.to_string(),
        })
}
