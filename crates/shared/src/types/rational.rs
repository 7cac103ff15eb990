//! 128-bit rational helpers behind `MonetaryAmount`.
//!
//! Every amount component is an `i64`, so `whole * denominator + numerator`
//! always fits in an `i128`. Only final parts that do not fit `i64` are
//! reported as overflow.

use crate::error::{MonetaryError, MonetaryResult};

/// Greatest common divisor of the magnitudes; `gcd(0, 0) == 0`.
pub(crate) fn gcd(a: i128, b: i128) -> i128 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        (a, b) = (b, a % b);
    }
    // Only `gcd(i128::MIN, 0)` exceeds i128::MAX; callers never pass a zero denominator.
    i128::try_from(a).unwrap_or(i128::MAX)
}

/// Normalizes `whole + numerator / denominator` into canonical `i64` parts.
///
/// The fraction is reduced to lowest terms, anything at or above one unit
/// is carried into the whole part, and a remainder whose sign disagrees
/// with the whole part is borrowed back. Only the final parts are checked
/// against `i64`, so wide intermediates that reduce to something small
/// are accepted.
pub(crate) fn normalize(
    whole: i128,
    numerator: i128,
    denominator: i128,
    operation: &'static str,
) -> MonetaryResult<(i64, i64, i64)> {
    debug_assert!(denominator > 0, "denominator must be positive");
    let overflow = || MonetaryError::overflow(operation);

    let g = gcd(numerator, denominator);
    let (numerator, denominator) = (numerator / g, denominator / g);

    let mut whole = whole
        .checked_add(numerator / denominator)
        .ok_or_else(overflow)?;
    let mut numerator = numerator % denominator;
    if whole > 0 && numerator < 0 {
        whole -= 1;
        numerator += denominator;
    } else if whole < 0 && numerator > 0 {
        whole += 1;
        numerator -= denominator;
    }

    let denominator = i64::try_from(denominator).map_err(|_| overflow())?;
    let whole = i64::try_from(whole).map_err(|_| overflow())?;
    // |numerator| < denominator <= i64::MAX
    let numerator = i64::try_from(numerator).map_err(|_| overflow())?;

    Ok((whole, numerator, denominator))
}
