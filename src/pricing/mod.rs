//! Per-lot income and cost computation.

use crate::config::PricingConfig;
use crate::input::Lot;
use rust_decimal::Decimal;

/// A lot paired with its projected income and purchase cost.
///
/// Computed once per lot per selection pass and discarded afterward.
#[derive(Debug, Clone)]
pub struct CostedLot {
    pub lot: Lot,
    /// Redemption value plus accrued coupons over the remaining days.
    pub income: Decimal,
    /// Purchase cost at the quoted percentage of face value.
    pub cost: Decimal,
}

/// Prices lots against the contract terms and the trading horizon.
#[derive(Debug, Clone)]
pub struct PricingModel {
    config: PricingConfig,
}

impl PricingModel {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Compute income and cost for a single lot.
    ///
    /// `cost = quoted_price / 100 * face_value * quantity`
    ///
    /// `income = face_value * quantity + daily_coupon * quantity * remaining_days`
    ///
    /// where `remaining_days = horizon + grace_period - maturity_day + 1`.
    /// A lot maturing past the extended window has negative remaining days;
    /// the coupon term then pulls income below the redemption value. That
    /// value is deliberately not clamped: callers treat such lots as a known
    /// boundary case, not as rejected input.
    pub fn price(&self, horizon_days: u32, lot: &Lot) -> CostedLot {
        let quantity = Decimal::from(lot.quantity);

        let cost = lot.quoted_price / Decimal::ONE_HUNDRED * self.config.face_value * quantity;

        let remaining_days = i64::from(horizon_days) + i64::from(self.config.grace_period_days)
            - i64::from(lot.maturity_day)
            + 1;

        let redemption = self.config.face_value * quantity;
        let coupons = self.config.daily_coupon * quantity * Decimal::from(remaining_days);

        CostedLot {
            lot: lot.clone(),
            income: redemption + coupons,
            cost,
        }
    }
}

impl Default for PricingModel {
    fn default() -> Self {
        Self::new(PricingConfig::default())
    }
}
