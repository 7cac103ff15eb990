//! Built-in adjusters.
//!
//! Each adjuster is a small immutable value; apply it with
//! [`MonetaryAmount::with`]:
//!
//! ```
//! use tally_core::adjust::{rounded_to_whole_unit, scaled_by};
//! use tally_shared::{AdjusterExt, CurrencyUnit, MonetaryAmount, RoundingMode};
//!
//! let usd = CurrencyUnit::new("USD").unwrap();
//! let amount = MonetaryAmount::of(usd, 12, 75, 100).unwrap();
//!
//! let rounded = amount.with(&rounded_to_whole_unit(RoundingMode::HalfUp)).unwrap();
//! assert_eq!(rounded.whole_part(), 13);
//!
//! // 12.75 * 3 = 38.25, then truncated
//! let chained = scaled_by(3, 1).and_then(rounded_to_whole_unit(RoundingMode::Down));
//! assert_eq!(amount.with(&chained).unwrap().whole_part(), 38);
//! ```

use tally_shared::{Adjuster, MonetaryAmount, MonetaryResult, RoundingConfig, RoundingMode};

use crate::rounding::{decimal_increment, round_to_units};

/// Returns the amount unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Identity;

/// Returns an adjuster that leaves the amount unchanged.
#[must_use]
pub const fn identity() -> Identity {
    Identity
}

impl Adjuster for Identity {
    fn adjust_into(&self, amount: &MonetaryAmount) -> MonetaryResult<MonetaryAmount> {
        Ok(amount.clone())
    }
}

/// Flips the sign of the amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Negated;

/// Returns an adjuster that negates the amount.
#[must_use]
pub const fn negated() -> Negated {
    Negated
}

impl Adjuster for Negated {
    fn adjust_into(&self, amount: &MonetaryAmount) -> MonetaryResult<MonetaryAmount> {
        amount.negate()
    }
}

/// Replaces the amount with its magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Absolute;

/// Returns an adjuster that takes the absolute value.
#[must_use]
pub const fn absolute() -> Absolute {
    Absolute
}

impl Adjuster for Absolute {
    fn adjust_into(&self, amount: &MonetaryAmount) -> MonetaryResult<MonetaryAmount> {
        amount.abs()
    }
}

/// Multiplies the amount by an exact rational factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledBy {
    numerator: i64,
    denominator: i64,
}

/// Returns an adjuster that multiplies by `numerator / denominator`.
///
/// A zero denominator is accepted here and reported as `OperationFailed`
/// when the adjuster is applied.
#[must_use]
pub const fn scaled_by(numerator: i64, denominator: i64) -> ScaledBy {
    ScaledBy {
        numerator,
        denominator,
    }
}

impl Adjuster for ScaledBy {
    fn adjust_into(&self, amount: &MonetaryAmount) -> MonetaryResult<MonetaryAmount> {
        amount.multiply(self.numerator, self.denominator)
    }
}

/// Rounds the amount to a whole number of `1/increment` units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundedToIncrement {
    increment: i64,
    mode: RoundingMode,
}

impl RoundedToIncrement {
    /// The rounding increment (`1` for whole units, `100` for cents).
    #[must_use]
    pub const fn increment(&self) -> i64 {
        self.increment
    }

    /// The rounding mode.
    #[must_use]
    pub const fn mode(&self) -> RoundingMode {
        self.mode
    }
}

/// Returns an adjuster that rounds to whole currency units.
///
/// The result's fraction is exactly `0/1`.
#[must_use]
pub const fn rounded_to_whole_unit(mode: RoundingMode) -> RoundedToIncrement {
    rounded_to_increment(1, mode)
}

/// Returns an adjuster that rounds to the nearest `1/increment` of a unit.
///
/// A non-positive increment is reported as `OperationFailed` when applied.
#[must_use]
pub const fn rounded_to_increment(increment: i64, mode: RoundingMode) -> RoundedToIncrement {
    RoundedToIncrement { increment, mode }
}

/// Returns an adjuster that rounds to `decimal_places` decimal places.
///
/// Fails with overflow above 18 decimal places.
pub fn rounded_to_scale(
    decimal_places: u32,
    mode: RoundingMode,
) -> MonetaryResult<RoundedToIncrement> {
    Ok(rounded_to_increment(decimal_increment(decimal_places)?, mode))
}

/// Returns the scale-rounding adjuster described by configuration.
pub fn rounding_from_config(config: &RoundingConfig) -> MonetaryResult<RoundedToIncrement> {
    rounded_to_scale(config.decimal_places, config.mode)
}

impl Adjuster for RoundedToIncrement {
    fn adjust_into(&self, amount: &MonetaryAmount) -> MonetaryResult<MonetaryAmount> {
        let units = round_to_units(amount, self.increment, self.mode)?;
        amount.with_ratio(units, i128::from(self.increment), "round")
    }
}

/// Turns a closure into an adjuster, pinning down its signature.
///
/// Closures already implement [`Adjuster`]; this only helps type inference
/// when the closure is written inline.
pub fn adjuster_fn<F>(f: F) -> F
where
    F: Fn(&MonetaryAmount) -> MonetaryResult<MonetaryAmount> + Send + Sync,
{
    f
}
