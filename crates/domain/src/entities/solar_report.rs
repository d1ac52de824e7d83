//! Solar report entity
//!
//! Everything one run produces for display.

use serde::{Deserialize, Serialize};

use super::{
    EnergyEstimate, FinancialMetrics, MonthlyProjection, PanelConfig, Tariff, WeatherSample,
};
use crate::value_objects::{Budget, Location};

/// Maintenance advice shown with every report
pub const MAINTENANCE_REMINDER: &str = "Recommended to clean your panels every 6 months.";

/// Complete estimate for one location and panel setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarReport {
    /// Location as entered by the user
    pub location: Location,
    /// Conditions the estimate is based on
    pub weather: WeatherSample,
    /// Panel material and tilt
    pub panel: PanelConfig,
    /// Installation budget
    pub budget: Budget,
    /// Price used to value output
    pub tariff: Tariff,
    /// Daily output estimate
    pub estimate: EnergyEstimate,
    /// Savings and payback
    pub financials: FinancialMetrics,
    /// Month-by-month projection
    pub projection: MonthlyProjection,
    /// Maintenance advice
    pub maintenance_reminder: String,
}

impl SolarReport {
    /// Derive every figure from one weather sample
    #[must_use]
    pub fn build(
        location: Location,
        weather: WeatherSample,
        panel: PanelConfig,
        budget: Budget,
        tariff: Tariff,
    ) -> Self {
        let estimate = EnergyEstimate::from_conditions(&weather, &panel);
        let financials = FinancialMetrics::calculate(&estimate, &tariff, budget);
        let projection = MonthlyProjection::from_daily(&estimate);

        Self {
            location,
            weather,
            panel,
            budget,
            tariff,
            estimate,
            financials,
            projection,
            maintenance_reminder: MAINTENANCE_REMINDER.to_string(),
        }
    }
}
