//! Currency unit identified by an opaque code.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{MonetaryError, MonetaryResult};

/// A currency, identified solely by its code.
///
/// Equality, ordering, and hashing all derive from the code. No registry
/// lookup or case folding is performed: `"usd"` and `"USD"` are different
/// units. Clones share one immutable buffer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyUnit {
    code: Arc<str>,
}

impl CurrencyUnit {
    /// Creates a currency unit from a non-blank code.
    pub fn new(code: impl AsRef<str>) -> MonetaryResult<Self> {
        let code = code.as_ref();
        if code.trim().is_empty() {
            return Err(MonetaryError::InvalidCurrencyCode(code.to_string()));
        }
        Ok(Self { code: code.into() })
    }

    /// Returns the code that uniquely identifies this currency.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

impl std::fmt::Display for CurrencyUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl std::str::FromStr for CurrencyUnit {
    type Err = MonetaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for CurrencyUnit {
    type Error = MonetaryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CurrencyUnit> for String {
    fn from(unit: CurrencyUnit) -> Self {
        unit.code.to_string()
    }
}
