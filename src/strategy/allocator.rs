//! Greedy budget allocation across priced lots.

use crate::input::Lot;
use crate::pricing::{CostedLot, PricingModel};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use tracing::debug;

/// Result of one selection pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    /// Accrued income over all admitted lots.
    pub total_income: Decimal,
    /// Admitted lots in admission order (efficiency rank, not input order).
    pub lots: Vec<Lot>,
}

impl Selection {
    fn empty() -> Self {
        Self {
            total_income: Decimal::ZERO,
            lots: Vec::new(),
        }
    }
}

/// Selects lots by descending income/cost efficiency under a budget cap.
///
/// This is a greedy heuristic for a 0/1-knapsack problem: each step admits
/// the most efficient remaining lot that still fits the budget, with no
/// backtracking and no partial admissions. The result is a locally greedy
/// optimum and can differ from the globally maximal income for the same
/// budget. That divergence is intentional, documented behavior.
pub struct GreedyAllocator {
    pricing: PricingModel,
}

impl GreedyAllocator {
    /// Create a new allocator over the given pricing model.
    pub fn new(pricing: PricingModel) -> Self {
        Self { pricing }
    }

    /// Select lots maximizing income under `budget`.
    ///
    /// Guarantees: the admitted lots' total cost never exceeds `budget`,
    /// and identical inputs always produce identical selections (the
    /// efficiency sort is stable, so equal ratios keep input order).
    pub fn select(&self, horizon_days: u32, budget: Decimal, lots: &[Lot]) -> Selection {
        if lots.is_empty() {
            return Selection::empty();
        }

        let mut costed: Vec<CostedLot> = lots
            .iter()
            .map(|lot| self.pricing.price(horizon_days, lot))
            .collect();

        // Vec::sort_by is stable; ties retain input order.
        costed.sort_by(efficiency_order);

        let mut selection = Selection::empty();
        let mut spent = Decimal::ZERO;

        for candidate in costed {
            if spent + candidate.cost > budget {
                // Skipped permanently; later rejections never reopen it.
                continue;
            }
            spent += candidate.cost;
            selection.total_income += candidate.income;
            selection.lots.push(candidate.lot);
        }

        debug!(
            %budget,
            %spent,
            admitted = selection.lots.len(),
            offered = lots.len(),
            "selection complete"
        );

        selection
    }
}

/// Income-per-cost efficiency of a costed lot.
///
/// `None` marks a zero-cost lot: its efficiency is unbounded, since
/// admitting it never consumes budget.
fn efficiency(costed: &CostedLot) -> Option<Decimal> {
    if costed.cost == Decimal::ZERO {
        None
    } else {
        Some(costed.income / costed.cost)
    }
}

/// Ordering for the efficiency ranking: descending ratio, zero-cost lots
/// first. The zero-cost case is an explicit branch rather than a division.
fn efficiency_order(a: &CostedLot, b: &CostedLot) -> Ordering {
    match (efficiency(a), efficiency(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(ratio_a), Some(ratio_b)) => ratio_b.cmp(&ratio_a),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    // =========================================================================
    // Test Helpers
    // =========================================================================

    fn test_allocator() -> GreedyAllocator {
        GreedyAllocator::new(PricingModel::default())
    }

    fn lot(day: u32, name: &str, price: Decimal, quantity: u32) -> Lot {
        Lot {
            maturity_day: day,
            identifier: name.to_string(),
            quoted_price: price,
            quantity,
        }
    }

    fn golden_lots() -> Vec<Lot> {
        vec![
            lot(1, "alfa-05", dec!(100.2), 2),
            lot(2, "alfa-05", dec!(101.5), 5),
            lot(2, "gazprom-17", dec!(100.0), 2),
        ]
    }

    fn total_cost(allocator: &GreedyAllocator, horizon: u32, selection: &Selection) -> Decimal {
        selection
            .lots
            .iter()
            .map(|l| allocator.pricing.price(horizon, l).cost)
            .sum()
    }

    // =========================================================================
    // Golden Scenario
    // =========================================================================

    #[test]
    fn test_golden_scenario_greedy_result() {
        let allocator = test_allocator();
        let selection = allocator.select(2, dec!(8000), &golden_lots());

        // Greedy ranking: gazprom-17 (2062/2000), then alfa-05 day 1
        // (2064/2004), then alfa-05 day 2 (5155/5075) which no longer fits.
        assert_eq!(selection.total_income, dec!(4126));
        assert_eq!(selection.lots.len(), 2);
        assert_eq!(selection.lots[0].identifier, "gazprom-17");
        assert_eq!(selection.lots[1].identifier, "alfa-05");
        assert_eq!(selection.lots[1].maturity_day, 1);
    }

    #[test]
    fn test_golden_scenario_is_not_globally_optimal() {
        // Spending 7075 on the two day-2 lots yields 7217 income, well above
        // the greedy 4126. The greedy-by-ratio heuristic still prefers the
        // two small lots; this is the documented behavior, not a bug.
        let allocator = test_allocator();
        let lots = golden_lots();

        let alternative: Decimal = [&lots[1], &lots[2]]
            .iter()
            .map(|l| allocator.pricing.price(2, l).income)
            .sum();
        let alternative_cost: Decimal = [&lots[1], &lots[2]]
            .iter()
            .map(|l| allocator.pricing.price(2, l).cost)
            .sum();

        assert!(alternative_cost <= dec!(8000));

        let selection = allocator.select(2, dec!(8000), &lots);
        assert!(selection.total_income < alternative);
    }

    // =========================================================================
    // Budget Guarantees
    // =========================================================================

    #[test]
    fn test_total_cost_never_exceeds_budget() {
        let allocator = test_allocator();

        for budget in [dec!(0), dec!(1999), dec!(2000), dec!(4004), dec!(8000)] {
            let selection = allocator.select(2, budget, &golden_lots());
            assert!(
                total_cost(&allocator, 2, &selection) <= budget,
                "budget {budget}"
            );
        }
    }

    #[test]
    fn test_sufficient_budget_selects_everything() {
        let allocator = test_allocator();
        let selection = allocator.select(2, dec!(1_000_000), &golden_lots());
        assert_eq!(selection.lots.len(), 3);
        assert_eq!(selection.total_income, dec!(2062) + dec!(2064) + dec!(5155));
    }

    #[test]
    fn test_zero_budget_admits_only_free_lots() {
        let allocator = test_allocator();

        let selection = allocator.select(2, Decimal::ZERO, &golden_lots());
        assert!(selection.lots.is_empty());
        assert_eq!(selection.total_income, Decimal::ZERO);

        let mut lots = golden_lots();
        lots.push(lot(1, "freebie", dec!(0), 1));
        let selection = allocator.select(2, Decimal::ZERO, &lots);
        assert_eq!(selection.lots.len(), 1);
        assert_eq!(selection.lots[0].identifier, "freebie");
    }

    #[test]
    fn test_zero_cost_lots_rank_first() {
        let allocator = test_allocator();
        let lots = vec![
            lot(1, "paid", dec!(50.0), 1),
            lot(1, "free-a", dec!(0), 1),
            lot(1, "free-b", dec!(0), 2),
        ];

        let selection = allocator.select(2, dec!(500), &lots);
        assert_eq!(selection.lots[0].identifier, "free-a");
        assert_eq!(selection.lots[1].identifier, "free-b");
        assert_eq!(selection.lots[2].identifier, "paid");
    }

    #[test]
    fn test_empty_lots_empty_selection() {
        let allocator = test_allocator();
        let selection = allocator.select(2, dec!(8000), &[]);
        assert!(selection.lots.is_empty());
        assert_eq!(selection.total_income, Decimal::ZERO);
    }

    // =========================================================================
    // Determinism
    // =========================================================================

    #[test]
    fn test_selection_is_deterministic() {
        let allocator = test_allocator();
        let first = allocator.select(2, dec!(8000), &golden_lots());
        let second = allocator.select(2, dec!(8000), &golden_lots());
        assert_eq!(first, second);
    }

    #[test]
    fn test_equal_ratios_keep_input_order() {
        let allocator = test_allocator();

        // Identical terms, so identical ratios; the stable sort must keep
        // the input sequence.
        let lots = vec![
            lot(1, "first", dec!(100.0), 1),
            lot(1, "second", dec!(100.0), 1),
            lot(1, "third", dec!(100.0), 1),
        ];

        let selection = allocator.select(5, dec!(10_000), &lots);
        let names: Vec<&str> = selection.lots.iter().map(|l| l.identifier.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }

    #[test]
    fn test_budget_monotonicity() {
        let allocator = test_allocator();
        let lots = golden_lots();

        let mut previous = Decimal::ZERO;
        for budget in [dec!(0), dec!(2000), dec!(4004), dec!(8000), dec!(9079)] {
            let selection = allocator.select(2, budget, &lots);
            assert!(
                selection.total_income >= previous,
                "income shrank at budget {budget}"
            );
            previous = selection.total_income;
        }
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    fn arb_lot() -> impl Strategy<Value = Lot> {
        (1u32..60, 0u32..2000, 1u32..10).prop_map(|(day, price_tenths, quantity)| Lot {
            maturity_day: day,
            identifier: format!("bond-{day}"),
            quoted_price: Decimal::new(i64::from(price_tenths), 1),
            quantity,
        })
    }

    proptest! {
        #[test]
        fn prop_spend_stays_within_budget(
            lots in prop::collection::vec(arb_lot(), 0..20),
            budget_units in 0u32..50_000,
        ) {
            let allocator = test_allocator();
            let budget = Decimal::from(budget_units);
            let selection = allocator.select(30, budget, &lots);
            prop_assert!(total_cost(&allocator, 30, &selection) <= budget);
        }

        #[test]
        fn prop_income_monotone_in_budget(
            lots in prop::collection::vec(arb_lot(), 0..20),
            budget_units in 0u32..50_000,
            extra in 0u32..50_000,
        ) {
            let allocator = test_allocator();
            let small = allocator.select(30, Decimal::from(budget_units), &lots);
            let large = allocator.select(30, Decimal::from(budget_units + extra), &lots);
            prop_assert!(large.total_income >= small.total_income);
        }
    }
}
