//! Twelve-month output projection
//!
//! Scales one day's estimate to a 30-day month and applies a fixed seasonal
//! multiplier per calendar month.

use serde::{Deserialize, Serialize};

use super::EnergyEstimate;

/// Days per projected month
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Short month names, January first
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Seasonal multiplier per month, January first
pub const SEASONAL_FACTORS: [f64; 12] =
    [0.9, 1.0, 1.1, 1.1, 1.2, 1.0, 0.9, 0.95, 1.05, 1.1, 1.0, 0.9];

/// Projected output for one month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyOutput {
    /// Short month name
    pub month: String,
    /// Projected output in kWh
    pub kwh: f64,
}

/// Projected output for every month of the year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyProjection {
    /// One entry per month, January first
    pub months: Vec<MonthlyOutput>,
}

impl MonthlyProjection {
    /// Project a daily estimate over the year
    #[must_use]
    pub fn from_daily(estimate: &EnergyEstimate) -> Self {
        let months = MONTH_LABELS
            .iter()
            .zip(SEASONAL_FACTORS)
            .map(|(label, factor)| MonthlyOutput {
                month: (*label).to_string(),
                kwh: factor * estimate.daily_kwh * DAYS_PER_MONTH,
            })
            .collect();
        Self { months }
    }

    /// Largest monthly value, or 0 for an empty projection
    #[must_use]
    pub fn peak_kwh(&self) -> f64 {
        self.months.iter().map(|m| m.kwh).fold(0.0, f64::max)
    }

    /// Sum of all months
    #[must_use]
    pub fn annual_kwh(&self) -> f64 {
        self.months.iter().map(|m| m.kwh).sum()
    }
}
