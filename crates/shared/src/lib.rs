//! Monetary value types, errors, and configuration for Tally.
//!
//! This crate provides the contract every other crate builds on:
//! - `CurrencyUnit` identified by an opaque code
//! - `MonetaryAmount`, an exact `whole + numerator/denominator` value
//! - `Adjuster` and `Query` strategy traits
//! - Monetary error types
//! - Configuration and tracing setup

pub mod config;
pub mod error;
pub mod telemetry;
pub mod types;

pub use config::{RoundingConfig, TallyConfig};
pub use error::{MonetaryError, MonetaryResult};
pub use types::{
    Adjuster, AdjusterExt, AmountParts, CurrencyUnit, MonetaryAmount, Query, RoundingMode,
};
