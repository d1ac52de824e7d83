//! Domain entities

mod energy_estimate;
mod financial_metrics;
mod monthly_projection;
mod panel_config;
mod solar_report;
mod weather_sample;

pub use energy_estimate::EnergyEstimate;
pub use financial_metrics::{FinancialMetrics, Tariff};
pub use monthly_projection::{MONTH_LABELS, MonthlyOutput, MonthlyProjection, SEASONAL_FACTORS};
pub use panel_config::PanelConfig;
pub use solar_report::{MAINTENANCE_REMINDER, SolarReport};
pub use weather_sample::WeatherSample;
