//! Built-in monetary strategies for Tally.
//!
//! This crate contains pure strategies with ZERO I/O. Everything here works
//! through the public contract of `tally-shared`: amounts go in, amounts or
//! query results come out.
//!
//! # Modules
//!
//! - `rounding` - Exact rounding to an increment
//! - `adjust` - Built-in adjusters (negate, scale, round)
//! - `query` - Built-in queries (parts, minor units, decimal, sign)
//! - `batch` - Parallel application over many amounts

pub mod adjust;
pub mod batch;
pub mod query;
pub mod rounding;

#[cfg(test)]
mod props;
