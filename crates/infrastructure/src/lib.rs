//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains the OpenWeatherMap adapter, configuration loading and the
//! report templates.

pub mod adapters;
pub mod config;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, ReportDefaults, TariffConfig, WeatherAppConfig};
pub use templates::{ChartRow, SolarReportData, TemplateEngine, TemplateError, WeatherReportData};
