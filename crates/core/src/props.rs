//! Property-based tests for rounding adjusters and queries.
//!
//! - Rounded results land on the increment
//! - Rounding moves the value by less than one increment
//! - Directed modes respect their direction
//! - Minor units agree with the rounded amount

use proptest::prelude::*;
use std::cmp::Ordering;

use tally_shared::{CurrencyUnit, MonetaryAmount, RoundingMode};

use crate::adjust::{rounded_to_increment, rounded_to_whole_unit};
use crate::query::minor_units;

fn usd() -> CurrencyUnit {
    CurrencyUnit::new("USD").unwrap()
}

/// Strategy to generate amounts between -1,000,000 and 1,000,000 with small denominators.
fn amount() -> impl Strategy<Value = MonetaryAmount> {
    (-1_000_000i64..1_000_000, 0i64..1000, 1i64..1000).prop_map(|(w, n, d)| {
        let n = if w < 0 { -n } else { n };
        MonetaryAmount::of(usd(), w, n, d).unwrap()
    })
}

/// Strategy to generate a rounding mode other than UNNECESSARY.
fn rounding_mode() -> impl Strategy<Value = RoundingMode> {
    prop_oneof![
        Just(RoundingMode::Up),
        Just(RoundingMode::Down),
        Just(RoundingMode::Ceiling),
        Just(RoundingMode::Floor),
        Just(RoundingMode::HalfUp),
        Just(RoundingMode::HalfDown),
        Just(RoundingMode::HalfEven),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Whole-unit rounding always yields a fraction of exactly 0/1.
    #[test]
    fn prop_whole_unit_rounding_is_whole(a in amount(), mode in rounding_mode()) {
        let rounded = a.with(&rounded_to_whole_unit(mode)).unwrap();
        prop_assert_eq!(rounded.fraction_numerator(), 0);
        prop_assert_eq!(rounded.fraction_denominator(), 1);
    }

    /// Rounding moves the value by less than one increment.
    #[test]
    fn prop_rounding_error_below_increment(
        a in amount(),
        mode in rounding_mode(),
        increment in 1i64..1000,
    ) {
        let rounded = a.with(&rounded_to_increment(increment, mode)).unwrap();
        let error = rounded.subtract(&a).unwrap().abs().unwrap();
        let step = MonetaryAmount::of(usd(), 0, 1, increment).unwrap();
        prop_assert_eq!(error.compare_to(&step).unwrap(), Ordering::Less);
    }

    /// Rounding an already-rounded amount changes nothing.
    #[test]
    fn prop_rounding_idempotent(a in amount(), mode in rounding_mode(), increment in 1i64..1000) {
        let adjuster = rounded_to_increment(increment, mode);
        let once = a.with(&adjuster).unwrap();
        let twice = once.with(&adjuster).unwrap();
        prop_assert_eq!(once.clone(), twice);
        prop_assert_eq!(
            once.with(&rounded_to_increment(increment, RoundingMode::Unnecessary)).unwrap(),
            once
        );
    }

    /// Ceiling never decreases the value; floor never increases it.
    #[test]
    fn prop_directed_modes(a in amount()) {
        let up = a.with(&rounded_to_whole_unit(RoundingMode::Ceiling)).unwrap();
        let down = a.with(&rounded_to_whole_unit(RoundingMode::Floor)).unwrap();
        prop_assert_ne!(up.compare_to(&a).unwrap(), Ordering::Less);
        prop_assert_ne!(down.compare_to(&a).unwrap(), Ordering::Greater);
    }

    /// DOWN and UP bracket the value toward and away from zero.
    #[test]
    fn prop_down_truncates_toward_zero(a in amount()) {
        let down = a.with(&rounded_to_whole_unit(RoundingMode::Down)).unwrap();
        prop_assert_eq!(down.whole_part(), a.whole_part());
        let magnitude = a.abs().unwrap();
        let up = a.with(&rounded_to_whole_unit(RoundingMode::Up)).unwrap().abs().unwrap();
        prop_assert_ne!(up.compare_to(&magnitude).unwrap(), Ordering::Less);
    }

    /// The minor-unit query agrees with rounding to cents.
    #[test]
    fn prop_minor_units_match_rounded_amount(a in amount(), mode in rounding_mode()) {
        let cents = a.query(&minor_units(2, mode)).unwrap();
        let rounded = a.with(&rounded_to_increment(100, mode)).unwrap();
        prop_assert_eq!(MonetaryAmount::of_minor(usd(), cents, 2).unwrap(), rounded);
    }

    /// Negation commutes with symmetric modes.
    #[test]
    fn prop_symmetric_modes_commute_with_negation(a in amount()) {
        let symmetric = [
            RoundingMode::Up,
            RoundingMode::Down,
            RoundingMode::HalfUp,
            RoundingMode::HalfDown,
            RoundingMode::HalfEven,
        ];
        for mode in symmetric {
            let adjuster = rounded_to_whole_unit(mode);
            let left = a.negate().unwrap().with(&adjuster).unwrap();
            let right = a.with(&adjuster).unwrap().negate().unwrap();
            prop_assert_eq!(left, right, "mode {}", mode);
        }
    }
}
