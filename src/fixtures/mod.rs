//! Random market fixture generation.
//!
//! Produces synthetic market records for exercising the selection pipeline.
//! Strictly a test-data tool: the allocator's own correctness tests use
//! hand-picked lots, never generated ones.

use crate::input::Lot;
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One synthetic market record: parameters plus offered lots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    pub horizon_days: u32,
    pub daily_lot_cap: u32,
    pub budget: Decimal,
    pub lots: Vec<Lot>,
}

impl FixtureCase {
    /// Render the case in the market record text format.
    pub fn to_input_text(&self) -> String {
        let mut out = format!(
            "{} {} {}\n",
            self.horizon_days, self.daily_lot_cap, self.budget
        );
        for lot in &self.lots {
            out.push_str(&format!(
                "{} {} {} {}\n",
                lot.maturity_day, lot.identifier, lot.quoted_price, lot.quantity
            ));
        }
        out
    }
}

/// Generate `count` random market cases.
pub fn generate_cases(count: usize, rng: &mut impl Rng) -> Vec<FixtureCase> {
    (0..count)
        .map(|_| FixtureCase {
            horizon_days: rng.gen_range(1..=365),
            daily_lot_cap: rng.gen_range(1..=100),
            budget: Decimal::from(rng.gen_range(1..=100_000u32)),
            lots: (0..rng.gen_range(1..=10)).map(|_| random_lot(rng)).collect(),
        })
        .collect()
}

fn random_lot(rng: &mut impl Rng) -> Lot {
    let identifier: String = (0..3)
        .map(|_| rng.gen_range(b'A'..=b'Z') as char)
        .collect();

    // Price in permille of face value, expressed as a percentage with two
    // decimal places.
    let price = (Decimal::from(rng.gen_range(1..=1000u32)) / Decimal::new(1000, 0)
        * Decimal::ONE_HUNDRED)
        .round_dp(2);

    Lot {
        maturity_day: rng.gen_range(1..=31),
        identifier,
        quoted_price: price,
        quantity: rng.gen_range(1..=10),
    }
}
