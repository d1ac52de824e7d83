//! Application configuration
//!
//! Split into focused sub-modules:
//! - `integrations`: OpenWeatherMap settings
//! - `report`: Tariff and default report inputs
//!
//! Sources are layered: built-in defaults, then `solariq.toml` (or an
//! explicit file), then `SOLARIQ_*` environment variables.

mod integrations;
mod report;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use integrations::WeatherAppConfig;
pub use report::{ReportDefaults, TariffConfig};

/// Base name of the optional configuration file in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "solariq";

/// Prefix of environment overrides, e.g. `SOLARIQ_WEATHER__API_KEY`
pub const ENV_PREFIX: &str = "SOLARIQ";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenWeatherMap settings
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Electricity tariff used for savings
    #[serde(default)]
    pub tariff: TariffConfig,

    /// Inputs used when the command line leaves them out
    #[serde(default)]
    pub defaults: ReportDefaults,
}

impl AppConfig {
    /// Load configuration from environment and optional `solariq.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of the default file
    ///
    /// An explicit file must exist; the default one is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or malformed, or a value is
    /// invalid.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Load with an explicit environment map instead of the process environment
    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let builder = config::Config::builder()
            .add_source(file)
            // Override with environment variables (e.g., SOLARIQ_TARIFF__PRICE_PER_KWH)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .source(env),
            );

        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(config = ?config, "Loaded configuration");
        Ok(config)
    }

    /// Check values the deserializer cannot
    ///
    /// # Errors
    ///
    /// Returns a message error naming the offending key.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.weather.base_url.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "weather.base_url must not be empty".to_string(),
            ));
        }
        if self.weather.timeout_secs == 0 {
            return Err(config::ConfigError::Message(
                "weather.timeout_secs must be greater than 0".to_string(),
            ));
        }
        if !self.tariff.price_per_kwh.is_finite() || self.tariff.price_per_kwh < 0.0 {
            return Err(config::ConfigError::Message(format!(
                "tariff.price_per_kwh must be a non-negative number, got {}",
                self.tariff.price_per_kwh
            )));
        }
        Ok(())
    }
}
