//! Solar report service
//!
//! Fetches current weather for a location and derives the output estimate,
//! financial metrics and monthly projection from it in one pass.

use std::sync::Arc;

use domain::{Budget, Location, PanelConfig, SolarReport, Tariff, WeatherSample};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::ApplicationError;
use crate::ports::WeatherPort;

/// Inputs for one report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Location to fetch weather for
    pub location: Location,
    /// Panel material and tilt
    pub panel: PanelConfig,
    /// Installation budget
    pub budget: Budget,
}

impl ReportRequest {
    /// Create a report request
    #[must_use]
    pub const fn new(location: Location, panel: PanelConfig, budget: Budget) -> Self {
        Self {
            location,
            panel,
            budget,
        }
    }
}

/// Use case producing a [`SolarReport`]
pub struct SolarReportService {
    weather: Arc<dyn WeatherPort>,
    tariff: Tariff,
}

impl std::fmt::Debug for SolarReportService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolarReportService")
            .field("weather", &"<dyn WeatherPort>")
            .field("tariff", &self.tariff)
            .finish()
    }
}

impl SolarReportService {
    /// Create a service with the default tariff
    #[must_use]
    pub fn new(weather: Arc<dyn WeatherPort>) -> Self {
        Self {
            weather,
            tariff: Tariff::default(),
        }
    }

    /// Use a different electricity tariff
    #[must_use]
    pub fn with_tariff(mut self, tariff: Tariff) -> Self {
        self.tariff = tariff;
        self
    }

    /// Tariff applied to savings
    #[must_use]
    pub const fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    /// Fetch current conditions only
    #[instrument(skip(self), fields(location = %location))]
    pub async fn current_weather(
        &self,
        location: &Location,
    ) -> Result<WeatherSample, ApplicationError> {
        self.weather.current_conditions(location).await
    }

    /// Fetch weather and compute every report figure
    ///
    /// Nothing is computed when the weather fetch fails.
    #[instrument(skip(self, request), fields(location = %request.location))]
    pub async fn generate_report(
        &self,
        request: &ReportRequest,
    ) -> Result<SolarReport, ApplicationError> {
        let sample = self.weather.current_conditions(&request.location).await?;
        debug!(
            temperature = sample.temperature,
            cloud_cover = sample.cloud_cover_percent,
            "Received weather sample"
        );

        let report = SolarReport::build(
            request.location.clone(),
            sample,
            request.panel,
            request.budget,
            self.tariff.clone(),
        );

        info!(
            daily_kwh = report.estimate.daily_kwh,
            payback_years = report.financials.payback_years,
            panel = %request.panel.panel_type,
            tilt = request.panel.tilt.degrees(),
            "Generated solar report"
        );

        Ok(report)
    }
}
