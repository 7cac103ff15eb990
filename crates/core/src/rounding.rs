//! Exact rounding of amounts to a fixed increment.
//!
//! An increment of `k` means rounding to a whole number of `1/k` units:
//! `k = 1` rounds to whole currency units, `k = 100` to cents. Rounding
//! works on the exact rational value, so midpoints are detected exactly.

use tally_shared::{MonetaryAmount, MonetaryError, MonetaryResult, RoundingMode};

/// Returns the increment for a number of decimal places (`10^decimal_places`).
///
/// Fails with overflow above 18 places, the most an `i64` increment allows.
pub fn decimal_increment(decimal_places: u32) -> MonetaryResult<i64> {
    10_i64
        .checked_pow(decimal_places)
        .ok_or(MonetaryError::overflow("decimal scale"))
}

/// Rounds `amount` to a whole number of `1/increment` units and returns that count.
///
/// The count is returned as `i128` so callers decide how to fit it: as a
/// new amount, an `i64` of minor units, or a `Decimal`.
///
/// # Example
///
/// ```
/// use tally_core::rounding::round_to_units;
/// use tally_shared::{CurrencyUnit, MonetaryAmount, RoundingMode};
///
/// let usd = CurrencyUnit::new("USD").unwrap();
/// // 12 + 1/8 = 12.125 -> 1213 cents with HALF_UP
/// let amount = MonetaryAmount::of(usd, 12, 1, 8).unwrap();
/// assert_eq!(round_to_units(&amount, 100, RoundingMode::HalfUp).unwrap(), 1213);
/// assert_eq!(round_to_units(&amount, 100, RoundingMode::HalfEven).unwrap(), 1212);
/// ```
pub fn round_to_units(
    amount: &MonetaryAmount,
    increment: i64,
    mode: RoundingMode,
) -> MonetaryResult<i128> {
    if increment <= 0 {
        return Err(MonetaryError::OperationFailed(format!(
            "rounding increment must be positive, got {increment}"
        )));
    }

    let increment = i128::from(increment);
    let denominator = i128::from(amount.fraction_denominator());

    // Fraction expressed in increments: |scaled| < denominator * increment < 2^126
    let scaled = i128::from(amount.fraction_numerator()) * increment;
    let truncated = i128::from(amount.whole_part()) * increment + scaled / denominator;
    let remainder = scaled % denominator;

    if remainder == 0 {
        return Ok(truncated);
    }

    if round_away_from_zero(mode, truncated, remainder, denominator)? {
        Ok(truncated + remainder.signum())
    } else {
        Ok(truncated)
    }
}

/// Decides whether a discarded `remainder / denominator` (same sign as the
/// value, non-zero) pushes the truncated count one step away from zero.
fn round_away_from_zero(
    mode: RoundingMode,
    truncated: i128,
    remainder: i128,
    denominator: i128,
) -> MonetaryResult<bool> {
    let positive = remainder > 0;
    // |remainder| < denominator <= i64::MAX, so doubling stays in range
    let twice = remainder.abs() * 2;

    let away = match mode {
        RoundingMode::Up => true,
        RoundingMode::Down => false,
        RoundingMode::Ceiling => positive,
        RoundingMode::Floor => !positive,
        RoundingMode::HalfUp => twice >= denominator,
        RoundingMode::HalfDown => twice > denominator,
        RoundingMode::HalfEven => {
            twice > denominator || (twice == denominator && truncated % 2 != 0)
        }
        RoundingMode::Unnecessary => {
            tracing::debug!(%mode, "rounding required but not permitted");
            return Err(MonetaryError::OperationFailed(
                "rounding is necessary but the rounding mode is UNNECESSARY".to_string(),
            ));
        }
    };
    Ok(away)
}
