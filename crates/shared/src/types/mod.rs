//! Monetary value types and the strategies that operate on them.

pub mod amount;
pub mod currency;
mod rational;
pub mod rounding;
pub mod strategy;

#[cfg(test)]
mod amount_props;

pub use crate::error::{MonetaryError, MonetaryResult};
pub use amount::{AmountParts, MonetaryAmount};
pub use currency::CurrencyUnit;
pub use rounding::RoundingMode;
pub use strategy::{Adjuster, AdjusterExt, AndThen, Query};
