//! Weather sample entity
//!
//! Current conditions for one location, as needed by the estimator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current temperature and cloud cover for a location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Air temperature in °C
    pub temperature: f64,
    /// Cloud cover percentage (0-100)
    pub cloud_cover_percent: f64,
    /// Observation time reported by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_at: Option<DateTime<Utc>>,
    /// Place name resolved by the service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_name: Option<String>,
}

impl WeatherSample {
    /// Create a sample from the two scalars the estimator uses
    #[must_use]
    pub const fn new(temperature: f64, cloud_cover_percent: f64) -> Self {
        Self {
            temperature,
            cloud_cover_percent,
            observed_at: None,
            place_name: None,
        }
    }

    /// Attach the observation time
    #[must_use]
    pub fn with_observed_at(mut self, observed_at: DateTime<Utc>) -> Self {
        self.observed_at = Some(observed_at);
        self
    }

    /// Attach the resolved place name
    #[must_use]
    pub fn with_place_name(mut self, place_name: impl Into<String>) -> Self {
        self.place_name = Some(place_name.into());
        self
    }
}
