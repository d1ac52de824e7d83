//! OpenWeatherMap weather client
//!
//! HTTP client for the OpenWeatherMap current weather API.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiResponse, CurrentConditions};

/// Unit system requested from the API; the estimator works in Celsius
const UNITS: &str = "metric";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The payload reported a non-success status code
    #[error("{message}")]
    Api {
        /// Value of the payload's `cod` field
        code: String,
        /// Message sent with the status
        message: String,
    },

    /// No API key configured
    #[error("Missing API key: set weather.api_key or OPENWEATHERMAP_API_KEY")]
    MissingApiKey,

    /// Empty location name
    #[error("Location must not be empty")]
    EmptyLocation,
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// OpenWeatherMap API key (sensitive - uses SecretString)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
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

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather client trait for fetching weather data
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a place name
    async fn get_current(&self, location: &str) -> Result<CurrentConditions, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
pub struct OpenWeatherMapClient {
    client: Client,
    api_key: SecretString,
    base_url: String,
}

impl std::fmt::Debug for OpenWeatherMapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl OpenWeatherMapClient {
    /// Create a new OpenWeatherMap client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is missing or blank, or the HTTP
    /// client cannot be initialized.
    pub fn new(config: &WeatherConfig) -> Result<Self, WeatherError> {
        let api_key = config
            .api_key
            .clone()
            .filter(|key| !key.expose_secret().trim().is_empty())
            .ok_or(WeatherError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Endpoint for current conditions
    fn current_weather_url(&self) -> String {
        format!("{}/weather", self.base_url)
    }

    /// Decode a response body, checking the in-payload status rather than
    /// the transport status
    fn parse_body(
        http_status: reqwest::StatusCode,
        body: &str,
    ) -> Result<ApiResponse, WeatherError> {
        serde_json::from_str::<ApiResponse>(body).map_err(|e| {
            if http_status.is_success() {
                WeatherError::ParseError(e.to_string())
            } else {
                WeatherError::RequestFailed(format!("HTTP {http_status}"))
            }
        })
    }

    /// Convert a decoded payload into current conditions
    fn parse_conditions(response: ApiResponse) -> Result<CurrentConditions, WeatherError> {
        if !response.cod.is_success() {
            let message = response
                .message_text()
                .unwrap_or_else(|| format!("status {}", response.cod));
            return Err(WeatherError::Api {
                code: response.cod.to_string(),
                message,
            });
        }

        let main = response
            .main
            .ok_or_else(|| WeatherError::ParseError("No main block in response".to_string()))?;
        let clouds = response
            .clouds
            .ok_or_else(|| WeatherError::ParseError("No clouds block in response".to_string()))?;

        Ok(CurrentConditions {
            temperature: main.temp,
            cloud_cover: clouds.all,
            place_name: response.name.filter(|name| !name.is_empty()),
            observed_at: response.dt.and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self))]
    async fn get_current(&self, location: &str) -> Result<CurrentConditions, WeatherError> {
        let location = location.trim();
        if location.is_empty() {
            return Err(WeatherError::EmptyLocation);
        }

        let url = self.current_weather_url();
        debug!(url = %url, "Fetching current weather");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", location),
                ("appid", self.api_key.expose_secret()),
                ("units", UNITS),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::ParseError(e.without_url().to_string()))?;

        let result = Self::parse_body(status, &body).and_then(Self::parse_conditions);
        if let Err(ref e) = result {
            debug!(http_status = %status, error = %e, "Weather request unsuccessful");
        }
        result
    }
}
