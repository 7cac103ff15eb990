//! Parallel application of one strategy to many amounts.
//!
//! Amounts are immutable and strategies are `Send + Sync`, so a batch is
//! split across rayon's global pool with no locking. Output order always
//! matches input order.

use rayon::prelude::*;
use tally_shared::{Adjuster, CurrencyUnit, MonetaryAmount, MonetaryResult, Query};

/// Applies `adjuster` to every amount, keeping each result separately.
pub fn adjust_all<A>(
    amounts: &[MonetaryAmount],
    adjuster: &A,
) -> Vec<MonetaryResult<MonetaryAmount>>
where
    A: Adjuster + ?Sized,
{
    tracing::debug!(count = amounts.len(), "adjusting batch");
    amounts.par_iter().map(|amount| amount.with(adjuster)).collect()
}

/// Applies `adjuster` to every amount, failing if any adjustment fails.
pub fn try_adjust_all<A>(
    amounts: &[MonetaryAmount],
    adjuster: &A,
) -> MonetaryResult<Vec<MonetaryAmount>>
where
    A: Adjuster + ?Sized,
{
    tracing::debug!(count = amounts.len(), "adjusting batch");
    amounts.par_iter().map(|amount| amount.with(adjuster)).collect()
}

/// Runs `query` against every amount.
pub fn query_all<Q>(amounts: &[MonetaryAmount], query: &Q) -> Vec<Q::Output>
where
    Q: Query + ?Sized,
    Q::Output: Send,
{
    amounts.par_iter().map(|amount| amount.query(query)).collect()
}

/// Sums amounts of one currency.
///
/// Exact addition is associative, so the parallel reduction gives the
/// same result as a sequential sum.
pub fn total(
    currency: &CurrencyUnit,
    amounts: &[MonetaryAmount],
) -> MonetaryResult<MonetaryAmount> {
    amounts
        .par_iter()
        .cloned()
        .map(Ok)
        .try_reduce(
            || MonetaryAmount::zero(currency.clone()),
            |left, right| left.add(&right),
        )
}
