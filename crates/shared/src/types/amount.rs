//! Exact monetary amount: `whole + numerator / denominator` in one currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every operation works on exact rationals with checked 128-bit
//! intermediates and reports overflow instead of wrapping.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::currency::CurrencyUnit;
use super::rational::{gcd, normalize};
use super::strategy::{Adjuster, Query};
use crate::error::{MonetaryError, MonetaryResult};

/// An immutable monetary amount.
///
/// Always stored in canonical form: `0 <= |numerator| < denominator`,
/// the fraction is in lowest terms, and `whole` and `numerator` never have
/// opposite signs. Zero is `0 + 0/1`. Because the form is canonical, the
/// derived equality and hash are value equality: `12 + 25/100` equals
/// `12 + 1/4`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AmountParts", into = "AmountParts")]
pub struct MonetaryAmount {
    currency: CurrencyUnit,
    whole: i64,
    numerator: i64,
    denominator: i64,
}

/// Lossless decomposition of an amount into its currency code and three integers.
///
/// This is what persistence layers store. Parts read back from storage are
/// validated and normalized by [`MonetaryAmount::from_parts`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AmountParts {
    /// Currency code.
    pub currency: String,
    /// Whole units.
    pub whole: i64,
    /// Numerator of the fractional unit.
    pub numerator: i64,
    /// Denominator of the fractional unit.
    pub denominator: i64,
}

impl MonetaryAmount {
    /// Creates an amount from its components, normalizing them.
    ///
    /// `|numerator| >= denominator` is accepted and carried into the whole
    /// part. A non-positive denominator or a whole part and numerator of
    /// opposite signs is rejected.
    pub fn of(
        currency: CurrencyUnit,
        whole: i64,
        numerator: i64,
        denominator: i64,
    ) -> MonetaryResult<Self> {
        if denominator <= 0 {
            return Err(MonetaryError::InvalidAmount(format!(
                "denominator must be positive, got {denominator}"
            )));
        }
        if whole.signum() * numerator.signum() < 0 {
            return Err(MonetaryError::InvalidAmount(format!(
                "whole part {whole} and numerator {numerator} have opposite signs"
            )));
        }

        let total = i128::from(whole) * i128::from(denominator) + i128::from(numerator);
        Self::from_ratio(currency, total, i128::from(denominator), "construct")
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: CurrencyUnit) -> Self {
        Self {
            currency,
            whole: 0,
            numerator: 0,
            denominator: 1,
        }
    }

    /// Creates an amount with no fractional part.
    #[must_use]
    pub fn of_whole(currency: CurrencyUnit, whole: i64) -> Self {
        Self {
            currency,
            whole,
            numerator: 0,
            denominator: 1,
        }
    }

    /// Creates an amount from a count of minor units, e.g. cents with
    /// `decimal_places = 2`.
    pub fn of_minor(
        currency: CurrencyUnit,
        minor_units: i64,
        decimal_places: u32,
    ) -> MonetaryResult<Self> {
        let scale = 10_i64
            .checked_pow(decimal_places)
            .ok_or(MonetaryError::overflow("minor unit scale"))?;
        Self::from_ratio(
            currency,
            i128::from(minor_units),
            i128::from(scale),
            "construct",
        )
    }

    /// Rebuilds an amount from persisted parts.
    pub fn from_parts(parts: AmountParts) -> MonetaryResult<Self> {
        let currency = CurrencyUnit::new(&parts.currency)?;
        Self::of(currency, parts.whole, parts.numerator, parts.denominator)
    }

    /// Decomposes the amount into its persisted parts.
    #[must_use]
    pub fn to_parts(&self) -> AmountParts {
        AmountParts {
            currency: self.currency.code().to_string(),
            whole: self.whole,
            numerator: self.numerator,
            denominator: self.denominator,
        }
    }

    fn from_ratio(
        currency: CurrencyUnit,
        numerator: i128,
        denominator: i128,
        operation: &'static str,
    ) -> MonetaryResult<Self> {
        Self::from_components(currency, 0, numerator, denominator, operation)
    }

    fn from_components(
        currency: CurrencyUnit,
        whole: i128,
        numerator: i128,
        denominator: i128,
        operation: &'static str,
    ) -> MonetaryResult<Self> {
        let (whole, numerator, denominator) = normalize(whole, numerator, denominator, operation)
            .inspect_err(|_| {
                tracing::debug!(currency = %currency, operation, "amount out of range");
            })?;
        Ok(Self {
            currency,
            whole,
            numerator,
            denominator,
        })
    }

    /// Builds an amount of this currency from an exact ratio.
    ///
    /// `denominator` must be positive. Intended for strategies that compute
    /// a new value and need it normalized.
    pub fn with_ratio(
        &self,
        numerator: i128,
        denominator: i128,
        operation: &'static str,
    ) -> MonetaryResult<Self> {
        if denominator <= 0 {
            return Err(MonetaryError::InvalidAmount(format!(
                "denominator must be positive, got {denominator}"
            )));
        }
        Self::from_ratio(self.currency.clone(), numerator, denominator, operation)
    }

    /// Returns the same value denominated in another currency.
    ///
    /// This is the hook for conversion adjusters; the magnitude is untouched.
    #[must_use]
    pub fn with_currency(&self, currency: CurrencyUnit) -> Self {
        Self {
            currency,
            whole: self.whole,
            numerator: self.numerator,
            denominator: self.denominator,
        }
    }

    /// Gets the currency of the amount.
    #[must_use]
    pub const fn currency(&self) -> &CurrencyUnit {
        &self.currency
    }

    /// Gets the number of whole currency units; for `12 + 1/4` this is 12.
    #[must_use]
    pub const fn whole_part(&self) -> i64 {
        self.whole
    }

    /// Gets the numerator of the fractional unit; same sign as the whole part.
    #[must_use]
    pub const fn fraction_numerator(&self) -> i64 {
        self.numerator
    }

    /// Gets the denominator of the fractional unit; always positive.
    #[must_use]
    pub const fn fraction_denominator(&self) -> i64 {
        self.denominator
    }

    /// The exact value as a single `numerator / denominator` ratio.
    #[must_use]
    pub fn as_ratio(&self) -> (i128, i128) {
        let denominator = i128::from(self.denominator);
        (
            i128::from(self.whole) * denominator + i128::from(self.numerator),
            denominator,
        )
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.whole == 0 && self.numerator == 0
    }

    /// Returns true if the amount is below zero.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.whole < 0 || self.numerator < 0
    }

    /// Returns true if the amount is above zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.whole > 0 || self.numerator > 0
    }

    /// Returns -1, 0, or 1 according to the sign of the amount.
    #[must_use]
    pub const fn signum(&self) -> i64 {
        if self.whole != 0 {
            self.whole.signum()
        } else {
            self.numerator.signum()
        }
    }

    /// Returns true if the amount has no fractional part.
    #[must_use]
    pub const fn is_whole(&self) -> bool {
        self.numerator == 0
    }

    fn ensure_same_currency(&self, other: &Self) -> MonetaryResult<()> {
        if self.currency == other.currency {
            return Ok(());
        }
        tracing::debug!(
            expected = %self.currency,
            actual = %other.currency,
            "rejecting cross-currency operation"
        );
        Err(MonetaryError::CurrencyMismatch {
            expected: self.currency.code().to_string(),
            actual: other.currency.code().to_string(),
        })
    }

    /// Adds an amount of the same currency.
    pub fn add(&self, other: &Self) -> MonetaryResult<Self> {
        self.ensure_same_currency(other)?;
        if other.is_zero() {
            return Ok(self.clone());
        }
        self.combine(other, 1, "add")
    }

    /// Subtracts an amount of the same currency.
    ///
    /// Equal in value to `self.add(&other.negate()?)`, but computed directly
    /// so that subtracting `i64::MIN` whole units succeeds whenever the
    /// difference fits.
    pub fn subtract(&self, other: &Self) -> MonetaryResult<Self> {
        self.ensure_same_currency(other)?;
        if other.is_zero() {
            return Ok(self.clone());
        }
        self.combine(other, -1, "subtract")
    }

    /// `self + sign * other`. Whole parts and fractions are summed
    /// separately; the fractions go over the least common multiple of the
    /// denominators, where each scaled numerator stays below that multiple.
    fn combine(&self, other: &Self, sign: i128, operation: &'static str) -> MonetaryResult<Self> {
        let (d1, d2) = (i128::from(self.denominator), i128::from(other.denominator));
        let lcm = d1 / gcd(d1, d2) * d2;

        let whole = i128::from(self.whole) + sign * i128::from(other.whole);
        let numerator = i128::from(self.numerator) * (lcm / d1)
            + sign * i128::from(other.numerator) * (lcm / d2);

        Self::from_components(self.currency.clone(), whole, numerator, lcm, operation)
    }

    /// Flips the sign of the whole part and numerator together.
    ///
    /// Fails only for a whole part of `i64::MIN`, whose negation does not fit.
    pub fn negate(&self) -> MonetaryResult<Self> {
        let whole = self
            .whole
            .checked_neg()
            .ok_or(MonetaryError::overflow("negate"))?;
        Ok(Self {
            currency: self.currency.clone(),
            whole,
            // |numerator| < denominator <= i64::MAX, so this cannot overflow
            numerator: -self.numerator,
            denominator: self.denominator,
        })
    }

    /// Returns the magnitude of the amount.
    pub fn abs(&self) -> MonetaryResult<Self> {
        if self.is_negative() {
            self.negate()
        } else {
            Ok(self.clone())
        }
    }

    /// Multiplies the amount by the exact rational `numerator / denominator`.
    ///
    /// A zero denominator is an undefined operation. The factor is reduced
    /// first, then the whole part and the fraction are scaled separately so
    /// every intermediate fits in 128 bits; overflow is reported only when
    /// the normalized product does not fit.
    pub fn multiply(&self, numerator: i64, denominator: i64) -> MonetaryResult<Self> {
        if denominator == 0 {
            return Err(MonetaryError::OperationFailed(
                "cannot scale by a factor with a zero denominator".to_string(),
            ));
        }

        let (mut sn, mut sd) = (i128::from(numerator), i128::from(denominator));
        if sd < 0 {
            sn = -sn;
            sd = -sd;
        }
        let g = gcd(sn, sd);
        let (sn, sd) = (sn / g, sd / g);

        // whole * sn / sd
        let scaled_whole = i128::from(self.whole) * sn;
        // (numerator / denominator) * sn / sd
        let scaled_fraction = i128::from(self.numerator) * sn;
        let product_denominator = i128::from(self.denominator) * sd;

        let whole = scaled_whole / sd + scaled_fraction / product_denominator;
        let remainder = (scaled_whole % sd) * i128::from(self.denominator)
            + scaled_fraction % product_denominator;

        Self::from_components(
            self.currency.clone(),
            whole,
            remainder,
            product_denominator,
            "multiply",
        )
    }

    /// Compares two amounts of the same currency by exact value.
    ///
    /// Amounts of different currencies have no defined order.
    pub fn compare_to(&self, other: &Self) -> MonetaryResult<Ordering> {
        self.ensure_same_currency(other)?;
        Ok(self.cmp_value(other))
    }

    /// Canonical form means the whole parts decide the order whenever they
    /// differ; otherwise the fractions are cross-multiplied, which cannot
    /// overflow 128 bits for `i64` components.
    fn cmp_value(&self, other: &Self) -> Ordering {
        self.whole.cmp(&other.whole).then_with(|| {
            let left = i128::from(self.numerator) * i128::from(other.denominator);
            let right = i128::from(other.numerator) * i128::from(self.denominator);
            left.cmp(&right)
        })
    }

    /// Sums amounts of one currency, failing on the first mismatch or overflow.
    pub fn checked_sum<'a, I>(currency: CurrencyUnit, amounts: I) -> MonetaryResult<Self>
    where
        I: IntoIterator<Item = &'a Self>,
    {
        amounts
            .into_iter()
            .try_fold(Self::zero(currency), |acc, amount| acc.add(amount))
    }

    /// Queries this amount; the amount itself is never altered.
    pub fn query<Q: Query + ?Sized>(&self, query: &Q) -> Q::Output {
        query.query_from(self)
    }

    /// Returns the result of applying the adjuster to this amount.
    ///
    /// The adjuster only ever sees a shared reference, so `self` is
    /// unchanged whatever it does.
    pub fn with<A: Adjuster + ?Sized>(&self, adjuster: &A) -> MonetaryResult<Self> {
        adjuster.adjust_into(self)
    }
}

impl PartialOrd for MonetaryAmount {
    /// Returns `None` across currencies.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.currency == other.currency).then(|| self.cmp_value(other))
    }
}

impl TryFrom<AmountParts> for MonetaryAmount {
    type Error = MonetaryError;

    fn try_from(parts: AmountParts) -> Result<Self, Self::Error> {
        Self::from_parts(parts)
    }
}

impl From<MonetaryAmount> for AmountParts {
    fn from(amount: MonetaryAmount) -> Self {
        amount.to_parts()
    }
}
