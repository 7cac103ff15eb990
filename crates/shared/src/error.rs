//! Monetary error types.

use thiserror::Error;

/// Result type alias using `MonetaryError`.
pub type MonetaryResult<T> = Result<T, MonetaryError>;

/// Errors raised by monetary amounts, adjusters, and queries.
///
/// None of these are retryable: every operation is a pure in-memory
/// computation, and a failed operation leaves its operands untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonetaryError {
    /// The operands are denominated in different currencies.
    #[error("Currency mismatch: expected {expected}, got {actual}")]
    CurrencyMismatch {
        /// Currency code of the receiver.
        expected: String,
        /// Currency code of the other operand.
        actual: String,
    },

    /// A whole part, denominator, or intermediate product left the `i64` range.
    #[error("Arithmetic overflow in {operation}")]
    ArithmeticOverflow {
        /// The operation that overflowed.
        operation: &'static str,
    },

    /// The requested adjustment or query is undefined for the input.
    #[error("Monetary operation failed: {0}")]
    OperationFailed(String),

    /// Components do not describe a valid amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Currency code is empty or blank.
    #[error("Invalid currency code: {0:?}")]
    InvalidCurrencyCode(String),
}

impl MonetaryError {
    /// Builds an overflow error for the named operation.
    #[must_use]
    pub const fn overflow(operation: &'static str) -> Self {
        Self::ArithmeticOverflow { operation }
    }

    /// Returns the stable error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CurrencyMismatch { .. } => "CURRENCY_MISMATCH",
            Self::ArithmeticOverflow { .. } => "ARITHMETIC_OVERFLOW",
            Self::OperationFailed(_) => "MONETARY_OPERATION_FAILED",
            Self::InvalidAmount(_) => "INVALID_AMOUNT",
            Self::InvalidCurrencyCode(_) => "INVALID_CURRENCY_CODE",
        }
    }
}
