//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Weather data could not be obtained for the location
    #[error("Weather data unavailable: {0}")]
    WeatherUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error means no weather sample was produced
    pub const fn is_weather_unavailable(&self) -> bool {
        matches!(self, Self::WeatherUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_unavailable_message() {
        let err = ApplicationError::WeatherUnavailable("city not found".into());
        assert_eq!(err.to_string(), "Weather data unavailable: city not found");
        assert!(err.is_weather_unavailable());
    }

    #[test]
    fn domain_error_is_transparent() {
        let err = ApplicationError::from(DomainError::EmptyLocation);
        assert_eq!(err.to_string(), DomainError::EmptyLocation.to_string());
        assert!(!err.is_weather_unavailable());
    }

    #[test]
    fn configuration_message() {
        let err = ApplicationError::Configuration("missing key".into());
        assert_eq!(err.to_string(), "Configuration error: missing key");
    }
}
