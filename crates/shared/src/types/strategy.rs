//! Adjuster and query capabilities.
//!
//! Strategies are pure functions over an immutable [`MonetaryAmount`]. Both
//! traits require `Send + Sync` so one strategy value can be applied from
//! many threads at once; implementations must not block or mutate shared
//! state.
//!
//! Closures implement the traits directly:
//!
//! ```
//! use tally_shared::types::{CurrencyUnit, MonetaryAmount, MonetaryResult};
//!
//! let usd = CurrencyUnit::new("USD").unwrap();
//! let amount = MonetaryAmount::of(usd, 12, 25, 100).unwrap();
//!
//! let doubled = amount
//!     .with(&|a: &MonetaryAmount| -> MonetaryResult<MonetaryAmount> { a.multiply(2, 1) })
//!     .unwrap();
//! assert_eq!(doubled.whole_part(), 24);
//!
//! let whole = amount.query(&|a: &MonetaryAmount| a.whole_part());
//! assert_eq!(whole, 12);
//! ```

use std::sync::Arc;

use super::amount::MonetaryAmount;
use crate::error::MonetaryResult;

/// Strategy that produces an adjusted copy of an amount.
///
/// Examples are rounding to a whole unit, scaling, or converting to another
/// currency. The input must never be altered.
pub trait Adjuster: Send + Sync {
    /// Returns the adjusted amount.
    ///
    /// Fails with `OperationFailed` when the adjustment is undefined for the
    /// input, or `ArithmeticOverflow` when the result cannot be represented.
    fn adjust_into(&self, amount: &MonetaryAmount) -> MonetaryResult<MonetaryAmount>;
}

/// Strategy that extracts a value from an amount without changing it.
///
/// Fallible queries use a `MonetaryResult` output; queries that may have
/// no answer use an `Option`.
pub trait Query: Send + Sync {
    /// The query result.
    type Output;

    /// Runs the query.
    fn query_from(&self, amount: &MonetaryAmount) -> Self::Output;
}

impl<F> Adjuster for F
where
    F: Fn(&MonetaryAmount) -> MonetaryResult<MonetaryAmount> + Send + Sync,
{
    fn adjust_into(&self, amount: &MonetaryAmount) -> MonetaryResult<MonetaryAmount> {
        self(amount)
    }
}

impl<F, R> Query for F
where
    F: Fn(&MonetaryAmount) -> R + Send + Sync,
{
    type Output = R;

    fn query_from(&self, amount: &MonetaryAmount) -> R {
        self(amount)
    }
}

impl Adjuster for Box<dyn Adjuster> {
    fn adjust_into(&self, amount: &MonetaryAmount) -> MonetaryResult<MonetaryAmount> {
        (**self).adjust_into(amount)
    }
}

impl Adjuster for Arc<dyn Adjuster> {
    fn adjust_into(&self, amount: &MonetaryAmount) -> MonetaryResult<MonetaryAmount> {
        (**self).adjust_into(amount)
    }
}

impl<T> Query for Box<dyn Query<Output = T>> {
    type Output = T;

    fn query_from(&self, amount: &MonetaryAmount) -> T {
        (**self).query_from(amount)
    }
}

impl<T> Query for Arc<dyn Query<Output = T>> {
    type Output = T;

    fn query_from(&self, amount: &MonetaryAmount) -> T {
        (**self).query_from(amount)
    }
}

/// Combinators for adjusters.
pub trait AdjusterExt: Adjuster + Sized {
    /// Applies `self`, then `next` to its result.
    fn and_then<B: Adjuster>(self, next: B) -> AndThen<Self, B> {
        AndThen { first: self, next }
    }
}

impl<A: Adjuster> AdjusterExt for A {}

/// Two adjusters applied in sequence; see [`AdjusterExt::and_then`].
#[derive(Debug, Clone, Copy)]
pub struct AndThen<A, B> {
    first: A,
    next: B,
}

impl<A: Adjuster, B: Adjuster> Adjuster for AndThen<A, B> {
    fn adjust_into(&self, amount: &MonetaryAmount) -> MonetaryResult<MonetaryAmount> {
        let intermediate = self.first.adjust_into(amount)?;
        self.next.adjust_into(&intermediate)
    }
}
