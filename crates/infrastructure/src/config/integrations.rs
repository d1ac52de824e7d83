//! Integration configuration: OpenWeatherMap.

use integration_weather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Weather service configuration as read from `[weather]`
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAppConfig")
            .field("base_url", &self.base_url)
            .field(
                "api_key",
                &if self.api_key.is_some() {
                    Some("[REDACTED]")
                } else {
                    None
                },
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn default_weather_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_weather_timeout() -> u64 {
    30
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
            timeout_secs: default_weather_timeout(),
        }
    }
}

impl WeatherAppConfig {
    /// Whether a non-blank API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_ref()
            .is_some_and(|key| !key.expose_secret().trim().is_empty())
    }

    /// Replace the configured key with one given on the command line
    ///
    /// Blank keys are ignored so an empty flag does not clear a key read
    /// from the file or environment.
    pub fn override_api_key(&mut self, key: Option<SecretString>) {
        if let Some(key) = key.filter(|k| !k.expose_secret().trim().is_empty()) {
            self.api_key = Some(key);
        }
    }

    /// Convert to the weather client configuration
    #[must_use]
    pub fn to_client_config(&self) -> WeatherConfig {
        WeatherConfig {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}
