//! Built-in queries.
//!
//! Queries read an amount without changing it. Use them with
//! [`MonetaryAmount::query`].

use std::cmp::Ordering;

use rust_decimal::Decimal;
use tally_shared::{
    AmountParts, MonetaryAmount, MonetaryError, MonetaryResult, Query, RoundingConfig,
    RoundingMode,
};

use crate::rounding::{decimal_increment, round_to_units};

/// Decomposes the amount into its currency code and three integers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parts;

/// Returns a query for the persisted decomposition of an amount.
#[must_use]
pub const fn parts() -> Parts {
    Parts
}

impl Query for Parts {
    type Output = AmountParts;

    fn query_from(&self, amount: &MonetaryAmount) -> AmountParts {
        amount.to_parts()
    }
}

/// The amount as an integer count of minor units (e.g. cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinorUnits {
    decimal_places: u32,
    mode: RoundingMode,
}

/// Returns a query for the amount rounded to `decimal_places` as an integer.
///
/// ```
/// use tally_core::query::minor_units;
/// use tally_shared::{CurrencyUnit, MonetaryAmount, RoundingMode};
///
/// let amount = MonetaryAmount::of(CurrencyUnit::new("USD").unwrap(), 12, 1, 3).unwrap();
/// assert_eq!(amount.query(&minor_units(2, RoundingMode::HalfUp)).unwrap(), 1233);
/// ```
#[must_use]
pub const fn minor_units(decimal_places: u32, mode: RoundingMode) -> MinorUnits {
    MinorUnits {
        decimal_places,
        mode,
    }
}

/// Returns the minor-unit query described by configuration.
#[must_use]
pub const fn minor_units_from_config(config: &RoundingConfig) -> MinorUnits {
    minor_units(config.decimal_places, config.mode)
}

impl Query for MinorUnits {
    type Output = MonetaryResult<i64>;

    fn query_from(&self, amount: &MonetaryAmount) -> MonetaryResult<i64> {
        let increment = decimal_increment(self.decimal_places)?;
        let units = round_to_units(amount, increment, self.mode)?;
        i64::try_from(units).map_err(|_| MonetaryError::overflow("minor units"))
    }
}

/// The amount as a `Decimal` with a fixed number of decimal places.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToDecimal {
    decimal_places: u32,
    mode: RoundingMode,
}

/// Returns a query converting the amount to a `Decimal`, rounded to
/// `decimal_places`.
///
/// This is the bridge to code that stores money as `rust_decimal::Decimal`;
/// values beyond `Decimal`'s 96-bit mantissa fail with overflow.
#[must_use]
pub const fn to_decimal(decimal_places: u32, mode: RoundingMode) -> ToDecimal {
    ToDecimal {
        decimal_places,
        mode,
    }
}

impl Query for ToDecimal {
    type Output = MonetaryResult<Decimal>;

    fn query_from(&self, amount: &MonetaryAmount) -> MonetaryResult<Decimal> {
        let increment = decimal_increment(self.decimal_places)?;
        let units = round_to_units(amount, increment, self.mode)?;
        Decimal::try_from_i128_with_scale(units, self.decimal_places)
            .map_err(|_| MonetaryError::overflow("decimal conversion"))
    }
}

/// The sign of the amount relative to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sign;

/// Returns a query for the sign of an amount.
#[must_use]
pub const fn sign() -> Sign {
    Sign
}

impl Query for Sign {
    type Output = Ordering;

    fn query_from(&self, amount: &MonetaryAmount) -> Ordering {
        amount.signum().cmp(&0)
    }
}

/// Whether the amount has no fractional part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IsWhole;

/// Returns a query testing for a zero fraction.
#[must_use]
pub const fn is_whole() -> IsWhole {
    IsWhole
}

impl Query for IsWhole {
    type Output = bool;

    fn query_from(&self, amount: &MonetaryAmount) -> bool {
        amount.is_whole()
    }
}

/// The amount's currency code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CurrencyCode;

/// Returns a query for the currency code.
#[must_use]
pub const fn currency_code() -> CurrencyCode {
    CurrencyCode
}

impl Query for CurrencyCode {
    type Output = String;

    fn query_from(&self, amount: &MonetaryAmount) -> String {
        amount.currency().code().to_string()
    }
}

/// Turns a closure into a query, pinning down its signature.
pub fn query_fn<F, R>(f: F) -> F
where
    F: Fn(&MonetaryAmount) -> R + Send + Sync,
{
    f
}
