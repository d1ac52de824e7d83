//! Weather data models
//!
//! Types for representing OpenWeatherMap current-weather payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions at a named place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Cloud cover percentage (0-100)
    pub cloud_cover: f64,
    /// Place name as resolved by the service
    pub place_name: Option<String>,
    /// Observation time
    pub observed_at: Option<DateTime<Utc>>,
}

/// The `cod` field, sent as a number on success and as a string on errors
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum ApiStatus {
    Numeric(f64),
    Text(String),
}

impl ApiStatus {
    pub(crate) const SUCCESS: f64 = 200.0;

    /// Only the number 200 counts as success; the text `"200"` does not
    pub(crate) fn is_success(&self) -> bool {
        matches!(self, Self::Numeric(code) if (code - Self::SUCCESS).abs() < f64::EPSILON)
    }
}

impl std::fmt::Display for ApiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Numeric(code) => write!(f, "{code}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Raw API response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiResponse {
    pub cod: ApiStatus,
    #[serde(default)]
    pub message: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dt: Option<i64>,
    #[serde(default)]
    pub main: Option<MainData>,
    #[serde(default)]
    pub clouds: Option<CloudData>,
}

impl ApiResponse {
    /// Error message as text, whatever JSON type it was sent as
    pub(crate) fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

/// `main` block
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct MainData {
    pub temp: f64,
}

/// `clouds` block
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct CloudData {
    pub all: f64,
}
