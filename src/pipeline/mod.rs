//! End-to-end selection pipeline.
//!
//! Sequences parse → price → allocate → render over one market record.
//! Holds no state between invocations.

use crate::config::PricingConfig;
use crate::error::ValidationError;
use crate::input::{self, Lot, MarketParams};
use crate::pricing::PricingModel;
use crate::report;
use crate::strategy::GreedyAllocator;
use crate::utils::timing::timed;
use std::collections::HashMap;
use tracing::warn;

/// Run one selection pass over a market record and return the rendered
/// report.
///
/// Validation failures abort before any selection is produced.
pub fn run(input_text: &str, pricing: &PricingConfig) -> Result<String, ValidationError> {
    let (params, lots) = timed("parse", || input::parse_market(input_text))?;

    check_daily_cap(&params, &lots);

    let allocator = GreedyAllocator::new(PricingModel::new(pricing.clone()));
    let selection = timed("select", || {
        allocator.select(params.horizon_days, params.budget, &lots)
    });

    Ok(timed("render", || report::render(&selection)))
}

/// Log days whose offered lot count exceeds the declared cap.
///
/// The cap is informational: the allocator does not enforce it, so an
/// over-cap day changes nothing beyond this diagnostic.
fn check_daily_cap(params: &MarketParams, lots: &[Lot]) {
    let mut per_day: HashMap<u32, usize> = HashMap::new();
    for lot in lots {
        *per_day.entry(lot.maturity_day).or_default() += 1;
    }

    for (day, count) in per_day {
        if count > params.daily_lot_cap as usize {
            warn!(
                day,
                count,
                cap = params.daily_lot_cap,
                "day exceeds the declared lot cap"
            );
        }
    }
}
