//! Tally configuration management.

use serde::Deserialize;

use crate::types::RoundingMode;

/// Tally configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TallyConfig {
    /// Default rounding policy.
    #[serde(default)]
    pub rounding: RoundingConfig,
}

/// Rounding policy used by the configurable adjusters and queries.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RoundingConfig {
    /// Rounding mode, e.g. `HALF_UP`.
    #[serde(default)]
    pub mode: RoundingMode,
    /// Decimal places kept when rounding to a scale.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
}

fn default_decimal_places() -> u32 {
    2
}

impl Default for RoundingConfig {
    fn default() -> Self {
        Self {
            mode: RoundingMode::default(),
            decimal_places: default_decimal_places(),
        }
    }
}

impl TallyConfig {
    /// Loads configuration from `.env`, config files, and environment.
    ///
    /// Sources, lowest priority first: `config/default`, `config/{RUN_MODE}`,
    /// then `TALLY__*` variables (e.g. `TALLY__ROUNDING__MODE=HALF_EVEN`).
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();

        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TALLY").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
