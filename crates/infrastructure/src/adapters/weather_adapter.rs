//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{DomainError, Location, WeatherSample};
use integration_weather::{
    CurrentConditions, OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather services using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherMapClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with custom configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if no API key is set, or an internal
    /// error if the HTTP client fails to initialize.
    pub fn with_config(config: &WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherMapClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::Api { message, .. } => ApplicationError::WeatherUnavailable(message),
            WeatherError::RequestFailed(_) | WeatherError::ParseError(_) => {
                ApplicationError::WeatherUnavailable(err.to_string())
            },
            WeatherError::ConnectionFailed(e) => ApplicationError::Internal(e),
            WeatherError::MissingApiKey => ApplicationError::Configuration(err.to_string()),
            WeatherError::EmptyLocation => ApplicationError::Domain(DomainError::EmptyLocation),
        }
    }

    /// Convert integration conditions to a domain weather sample
    fn map_conditions(conditions: CurrentConditions) -> WeatherSample {
        let mut sample = WeatherSample::new(conditions.temperature, conditions.cloud_cover);
        if let Some(observed_at) = conditions.observed_at {
            sample = sample.with_observed_at(observed_at);
        }
        if let Some(place_name) = conditions.place_name {
            sample = sample.with_place_name(place_name);
        }
        sample
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(location = %location))]
    async fn current_conditions(
        &self,
        location: &Location,
    ) -> Result<WeatherSample, ApplicationError> {
        let result = self
            .client
            .get_current(location.as_str())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    temperature = current.temperature,
                    cloud_cover = current.cloud_cover,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result.map(Self::map_conditions)
    }
}
