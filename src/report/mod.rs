//! Plain-text rendering of a selection result.

use crate::strategy::Selection;
use crate::utils::decimal::truncate_to_i64;
use std::fmt::Write;

/// Render a selection as the exchange's report format.
///
/// First line is the total income truncated (not rounded) to an integer,
/// followed by one `day name price quantity` line per selected lot in
/// admission order.
pub fn render(selection: &Selection) -> String {
    let mut out = String::new();

    // Infallible for String, so the Result is dropped.
    let _ = writeln!(out, "{}", truncate_to_i64(selection.total_income));
    for lot in &selection.lots {
        let _ = writeln!(
            out,
            "{} {} {} {}",
            lot.maturity_day, lot.identifier, lot.quoted_price, lot.quantity
        );
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Lot;
    use rust_decimal_macros::dec;

    #[test]
    fn test_render_golden_report() {
        let selection = Selection {
            total_income: dec!(4126),
            lots: vec![
                Lot {
                    maturity_day: 2,
                    identifier: "gazprom-17".to_string(),
                    quoted_price: dec!(100.0),
                    quantity: 2,
                },
                Lot {
                    maturity_day: 1,
                    identifier: "alfa-05".to_string(),
                    quoted_price: dec!(100.2),
                    quantity: 2,
                },
            ],
        };

        assert_eq!(render(&selection), "4126\n2 gazprom-17 100.0 2\n1 alfa-05 100.2 2\n");
    }

    #[test]
    fn test_total_income_is_truncated_not_rounded() {
        let selection = Selection {
            total_income: dec!(135.99),
            lots: vec![],
        };
        assert_eq!(render(&selection), "135\n");
    }

    #[test]
    fn test_price_echoes_parsed_scale() {
        let selection = Selection {
            total_income: dec!(0),
            lots: vec![Lot {
                maturity_day: 3,
                identifier: "tiny-01".to_string(),
                quoted_price: dec!(99.50),
                quantity: 1,
            }],
        };
        assert_eq!(render(&selection), "0\n3 tiny-01 99.50 1\n");
    }

    #[test]
    fn test_empty_selection_renders_zero() {
        let selection = Selection {
            total_income: dec!(0),
            lots: vec![],
        };
        assert_eq!(render(&selection), "0\n");
    }
}
