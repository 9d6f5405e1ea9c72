//! Property tests for fixed-point currency arithmetic.

use approx::assert_relative_eq;
use proptest::prelude::*;
use puzzle_core::types::{Money, TOLERANCE};

proptest! {
    /// Display then parse recovers the exact cent count for any amount.
    #[test]
    fn display_parse_roundtrip(cents in -1_000_000_000_000i64..1_000_000_000_000i64) {
        let money = Money::from_cents(cents);
        let reparsed: Money = money.to_string().parse().unwrap();
        prop_assert_eq!(money, reparsed);
    }

    /// The float boundary roundtrips exactly for cent counts well inside
    /// f64's integer-exact range.
    #[test]
    fn float_boundary_roundtrip(cents in -1_000_000_000_000i64..1_000_000_000_000i64) {
        let money = Money::from_cents(cents);
        let back = Money::from_f64(money.as_f64()).unwrap();
        prop_assert_eq!(money, back);
    }

    /// Subtraction from a target is exact: target - p + p == target.
    #[test]
    fn split_is_exact(target in 20_000i64..150_100i64, price in 5_000i64..100_000i64) {
        let target = Money::from_cents(target);
        let price1 = Money::from_cents(price);
        let price2 = target - price1;
        prop_assert_eq!(price1 + price2, target);
        prop_assert!((price1 + price2).abs_diff(target) < TOLERANCE);
    }
}

#[test]
fn as_f64_matches_decimal_value() {
    assert_relative_eq!(Money::from_parts(734, 18).as_f64(), 734.18);
    assert_relative_eq!(Money::from_parts(0, 5).as_f64(), 0.05);
}
