//! Weather service port
//!
//! Defines the interface for current weather retrieval.

use async_trait::async_trait;
use domain::{Location, WeatherSample};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current temperature and cloud cover for a named location
    ///
    /// Every failure, whether transport, decoding or an unsuccessful status
    /// in the payload, is reported as `ApplicationError::WeatherUnavailable`.
    async fn current_conditions(
        &self,
        location: &Location,
    ) -> Result<WeatherSample, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn WeatherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn WeatherPort>();
    }

    #[tokio::test]
    async fn mock_returns_configured_sample() {
        let mut mock = MockWeatherPort::new();
        mock.expect_current_conditions()
            .returning(|_| Ok(WeatherSample::new(22.0, 35.0)));

        let sample = mock
            .current_conditions(&Location::default())
            .await
            .unwrap();
        assert!((sample.cloud_cover_percent - 35.0).abs() < f64::EPSILON);
    }
}
