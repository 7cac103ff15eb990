//! Property-based tests for monetary amount arithmetic.
//!
//! - Normalization idempotence and the sign invariant
//! - Additive identity, commutativity, and inverse
//! - Overflow detection instead of wraparound

use proptest::prelude::*;
use std::cmp::Ordering;

use super::amount::MonetaryAmount;
use super::currency::CurrencyUnit;
use crate::error::MonetaryError;

fn usd() -> CurrencyUnit {
    CurrencyUnit::new("USD").unwrap()
}

/// Strategy to generate sign-consistent raw components.
fn raw_components() -> impl Strategy<Value = (i64, i64, i64)> {
    (
        -1_000_000_000i64..1_000_000_000,
        0i64..10_000,
        1i64..10_000,
    )
        .prop_map(|(whole, magnitude, denominator)| {
            let numerator = if whole < 0 { -magnitude } else { magnitude };
            (whole, numerator, denominator)
        })
}

/// Strategy to generate a valid USD amount.
fn amount() -> impl Strategy<Value = MonetaryAmount> {
    raw_components().prop_map(|(w, n, d)| MonetaryAmount::of(usd(), w, n, d).unwrap())
}

/// Strategy to generate amounts anywhere in the `i64` range with large denominators.
fn wide_amount() -> impl Strategy<Value = MonetaryAmount> {
    (any::<i64>(), any::<i64>(), 1i64..i64::MAX).prop_map(|(whole, raw, denominator)| {
        let magnitude = raw.rem_euclid(denominator);
        let numerator = if whole < 0 { -magnitude } else { magnitude };
        MonetaryAmount::of(usd(), whole, numerator, denominator).unwrap()
    })
}

fn is_canonical(a: &MonetaryAmount) -> bool {
    let (w, n, d) = (a.whole_part(), a.fraction_numerator(), a.fraction_denominator());
    let mut gcd = (n.unsigned_abs(), d.unsigned_abs());
    while gcd.1 != 0 {
        gcd = (gcd.1, gcd.0 % gcd.1);
    }
    d > 0 && n.abs() < d && w.signum() * n.signum() >= 0 && gcd.0 == 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every constructed amount is canonical.
    #[test]
    fn prop_construction_is_canonical((w, n, d) in raw_components()) {
        let a = MonetaryAmount::of(usd(), w, n, d).unwrap();
        prop_assert!(is_canonical(&a), "not canonical: {:?}", a);
    }

    /// Normalizing twice yields the same representation as normalizing once.
    #[test]
    fn prop_normalization_idempotent((w, n, d) in raw_components()) {
        let once = MonetaryAmount::of(usd(), w, n, d).unwrap();
        let twice = MonetaryAmount::of(
            usd(),
            once.whole_part(),
            once.fraction_numerator(),
            once.fraction_denominator(),
        )
        .unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Opposite signs on whole and numerator are rejected at construction.
    #[test]
    fn prop_sign_violation_rejected(w in 1i64..1_000_000, n in 1i64..100, d in 101i64..1000) {
        prop_assert!(
            matches!(
                MonetaryAmount::of(usd(), w, -n, d),
                Err(MonetaryError::InvalidAmount(_))
            ),
            "positive whole with negative numerator must be rejected"
        );
        prop_assert!(
            matches!(
                MonetaryAmount::of(usd(), -w, n, d),
                Err(MonetaryError::InvalidAmount(_))
            ),
            "negative whole with positive numerator must be rejected"
        );
    }

    /// Scaling numerator and denominator by the same factor does not change the value.
    #[test]
    fn prop_equivalent_fractions_are_equal(
        (w, n, d) in raw_components(),
        k in 1i64..1000,
    ) {
        let a = MonetaryAmount::of(usd(), w, n, d).unwrap();
        let b = MonetaryAmount::of(usd(), w, n * k, d * k).unwrap();
        prop_assert_eq!(a.compare_to(&b).unwrap(), Ordering::Equal);
        prop_assert_eq!(a, b);
    }

    /// Zero is the additive identity.
    #[test]
    fn prop_add_zero_identity(a in amount()) {
        prop_assert_eq!(a.add(&MonetaryAmount::zero(usd())).unwrap(), a.clone());
        prop_assert_eq!(MonetaryAmount::zero(usd()).add(&a).unwrap(), a);
    }

    /// Addition is commutative.
    #[test]
    fn prop_add_commutative(a in amount(), b in amount()) {
        prop_assert_eq!(a.add(&b).unwrap(), b.add(&a).unwrap());
    }

    /// Results of addition stay canonical.
    #[test]
    fn prop_add_canonical(a in amount(), b in amount()) {
        let sum = a.add(&b).unwrap();
        prop_assert!(is_canonical(&sum), "not canonical: {:?}", sum);
    }

    /// Subtracting an amount from itself gives zero, and a - b + b == a.
    #[test]
    fn prop_subtract_inverse(a in amount(), b in amount()) {
        prop_assert!(a.subtract(&a).unwrap().is_zero());
        prop_assert_eq!(a.subtract(&b).unwrap().add(&b).unwrap(), a);
    }

    /// Negation flips the ordering against zero and is an involution.
    #[test]
    fn prop_negate_involution(a in amount()) {
        let neg = a.negate().unwrap();
        prop_assert_eq!(neg.signum(), -a.signum());
        prop_assert_eq!(neg.negate().unwrap(), a);
    }

    /// Comparison agrees with the sign of the difference.
    #[test]
    fn prop_compare_matches_difference(a in amount(), b in amount()) {
        let diff = a.subtract(&b).unwrap();
        let expected = diff.signum().cmp(&0);
        prop_assert_eq!(a.compare_to(&b).unwrap(), expected);
    }

    /// Overflowing sums are reported, never wrapped.
    #[test]
    fn prop_add_overflow_detected(x in 1i64..i64::MAX, y in 1i64..i64::MAX) {
        let a = MonetaryAmount::of_whole(usd(), x);
        let b = MonetaryAmount::of_whole(usd(), y);
        match x.checked_add(y) {
            Some(sum) => prop_assert_eq!(a.add(&b).unwrap(), MonetaryAmount::of_whole(usd(), sum)),
            None => prop_assert_eq!(a.add(&b), Err(MonetaryError::overflow("add"))),
        }
    }

    /// Multiplying then dividing by the same factor restores the amount.
    #[test]
    fn prop_multiply_inverse(a in amount(), n in 1i64..10_000, d in 1i64..10_000) {
        let scaled = a.multiply(n, d).unwrap();
        prop_assert_eq!(scaled.multiply(d, n).unwrap(), a);
    }

    /// Subtraction agrees with adding the negation whenever both succeed.
    #[test]
    fn prop_subtract_matches_add_negated(a in wide_amount(), b in wide_amount()) {
        let direct = a.subtract(&b);
        if let Ok(via_negate) = b.negate().and_then(|neg| a.add(&neg)) {
            prop_assert_eq!(direct.clone(), Ok(via_negate));
        }
        if let Ok(diff) = direct {
            prop_assert!(is_canonical(&diff), "not canonical: {:?}", diff);
            prop_assert_eq!(diff.add(&b).unwrap(), a);
        }
    }

    /// Scaling by any unreduced form of one leaves the amount unchanged.
    #[test]
    fn prop_multiply_by_one(a in wide_amount(), k in 1i64..i64::MAX) {
        prop_assert_eq!(a.multiply(k, k).unwrap(), a.clone());
        prop_assert_eq!(a.multiply(-k, -k).unwrap(), a);
    }
}
