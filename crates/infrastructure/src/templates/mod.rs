//! Template engine module for rendering terminal reports
//!
//! Uses the Tera templating engine with templates embedded at compile time:
//! - `report/solar.txt`: full output estimate with the monthly chart
//! - `weather/current.txt`: current conditions only
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::{SolarReportData, TemplateEngine};
//!
//! let engine = TemplateEngine::new()?;
//! let data = SolarReportData::from_report(&report, rows);
//! print!("{}", engine.render_solar_report(&data)?);
//! ```

use std::sync::Arc;

use domain::{Location, SolarReport, WeatherSample};
use serde::{Deserialize, Serialize};
use tera::{Context, Tera};
use thiserror::Error;

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }
}

/// Format a decimal the way the report prints it: at least one fractional
/// digit, otherwise the shortest representation
#[must_use]
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Format a percentage, dropping the fraction when it is zero
fn format_percent(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// One pre-rendered row of the monthly chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Month label, padded for alignment
    pub label: String,
    /// Bar glyphs padded to the chart width
    pub bar: String,
    /// Value printed after the bar
    pub value: String,
}

/// Current weather template data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReportData {
    /// Location as entered
    pub location: String,
    /// Name the service resolved the location to, if different
    #[serde(default)]
    pub resolved_name: Option<String>,
    /// Temperature in °C
    pub temperature: String,
    /// Cloud cover in percent
    pub cloud_cover: String,
    /// Observation time, formatted
    #[serde(default)]
    pub observed_at: Option<String>,
}

impl WeatherReportData {
    /// Build from a weather sample
    #[must_use]
    pub fn from_sample(location: &Location, sample: &WeatherSample) -> Self {
        let resolved_name = sample
            .place_name
            .clone()
            .filter(|name| !name.eq_ignore_ascii_case(location.as_str()));

        Self {
            location: location.to_string(),
            resolved_name,
            temperature: format_decimal(sample.temperature),
            cloud_cover: format_percent(sample.cloud_cover_percent),
            observed_at: sample
                .observed_at
                .map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string()),
        }
    }
}

/// Solar report template data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolarReportData {
    /// Current conditions
    pub weather: WeatherReportData,
    /// Panel material name
    pub panel_name: String,
    /// Panel efficiency in percent
    pub efficiency_percent: String,
    /// Tilt in degrees
    pub tilt: u8,
    /// Installation budget
    pub budget: u64,
    /// Currency symbol for money amounts
    pub currency_symbol: String,
    /// Estimated daily output in kWh
    pub daily_kwh: String,
    /// Daily savings, truncated to whole units
    pub daily_savings: i64,
    /// Payback time in years
    pub payback_years: String,
    /// Projected annual output in kWh
    pub annual_kwh: String,
    /// Chart heading
    pub chart_title: String,
    /// Chart axis caption
    pub y_axis_label: String,
    /// One row per month
    pub chart_rows: Vec<ChartRow>,
    /// Maintenance advice
    pub maintenance_reminder: String,
}

impl SolarReportData {
    /// Heading of the monthly chart
    pub const CHART_TITLE: &'static str = "Predicted Solar Output per Month";
    /// Axis caption of the monthly chart
    pub const Y_AXIS_LABEL: &'static str = "Energy (kWh)";

    /// Build from a finished report and its rendered chart rows
    #[must_use]
    pub fn from_report(report: &SolarReport, chart_rows: Vec<ChartRow>) -> Self {
        Self {
            weather: WeatherReportData::from_sample(&report.location, &report.weather),
            panel_name: report.panel.panel_type.display_name().to_string(),
            efficiency_percent: format!("{:.0}", report.panel.efficiency() * 100.0),
            tilt: report.panel.tilt.degrees(),
            budget: report.budget.amount(),
            currency_symbol: report.tariff.currency_symbol.clone(),
            daily_kwh: format_decimal(report.estimate.daily_kwh),
            daily_savings: report.financials.whole_daily_savings(),
            payback_years: format_decimal(report.financials.payback_years),
            annual_kwh: format!("{:.2}", report.projection.annual_kwh()),
            chart_title: Self::CHART_TITLE.to_string(),
            y_axis_label: Self::Y_AXIS_LABEL.to_string(),
            chart_rows,
            maintenance_reminder: report.maintenance_reminder.clone(),
        }
    }
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const CURRENT_WEATHER: &str = r"Current Weather in {{ weather.location }}
{% if weather.resolved_name %}📍 Reported as: {{ weather.resolved_name }}
{% endif %}🌡️ Temperature: {{ weather.temperature }}°C
☁️ Cloud Cover: {{ weather.cloud_cover }}%
{% if weather.observed_at %}🕐 Observed: {{ weather.observed_at }}
{% endif %}";

    pub const SOLAR_REPORT: &str = r#"☀️ SolarIQ: AI-Powered Solar Optimization

{% include "weather/current.txt" %}
🔋 Panel: {{ panel_name }} ({{ efficiency_percent }}% efficiency), tilt {{ tilt }}°
💵 Budget: {{ currency_symbol }}{{ budget }}

⚡ Estimated Daily Output: {{ daily_kwh }} kWh
💸 Daily Savings: {{ currency_symbol }}{{ daily_savings }}
📆 Estimated Payback Time: {{ payback_years }} years

📈 {{ chart_title }}
   {{ y_axis_label }}
{% for row in chart_rows -%}
{{ row.label }} │{{ row.bar }}│ {{ row.value }}
{% endfor %}   Annual total: {{ annual_kwh }} kWh

🛠️ Solar Panel Maintenance
{{ maintenance_reminder }}

---
Built by Praise Adeyeye with ❤️ | Data from OpenWeatherMap | Powered by AI ☀️
"#;
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine").finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a template engine with the embedded templates loaded
    ///
    /// # Errors
    ///
    /// Returns an error if an embedded template fails to compile.
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("weather/current.txt", embedded::CURRENT_WEATHER),
            ("report/solar.txt", embedded::SOLAR_REPORT),
        ])
        .map_err(|e| TemplateError::Compile(e.to_string()))?;

        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template with the given context
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or rendering fails.
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render current conditions only
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_weather_report(&self, data: &WeatherReportData) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("weather", data);

        self.render("weather/current.txt", &ctx)
    }

    /// Render the full solar report
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn render_solar_report(&self, data: &SolarReportData) -> Result<String, TemplateError> {
        let mut ctx = TemplateContext::new();
        ctx.insert("weather", &data.weather);
        ctx.insert("panel_name", &data.panel_name);
        ctx.insert("efficiency_percent", &data.efficiency_percent);
        ctx.insert("tilt", &data.tilt);
        ctx.insert("budget", &data.budget);
        ctx.insert("currency_symbol", &data.currency_symbol);
        ctx.insert("daily_kwh", &data.daily_kwh);
        ctx.insert("daily_savings", &data.daily_savings);
        ctx.insert("payback_years", &data.payback_years);
        ctx.insert("annual_kwh", &data.annual_kwh);
        ctx.insert("chart_title", &data.chart_title);
        ctx.insert("y_axis_label", &data.y_axis_label);
        ctx.insert("chart_rows", &data.chart_rows);
        ctx.insert("maintenance_reminder", &data.maintenance_reminder);

        self.render("report/solar.txt", &ctx)
    }

    /// Check if a template exists
    #[must_use]
    pub fn template_exists(&self, name: &str) -> bool {
        self.tera.get_template_names().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Budget, PanelConfig, PanelType, Tariff, TiltAngle};

    fn sample_report() -> SolarReport {
        SolarReport::build(
            Location::new("Lagos").unwrap(),
            WeatherSample::new(29.4, 75.0).with_place_name("Lagos"),
            PanelConfig::new(PanelType::Monocrystalline, TiltAngle::new(30).unwrap()),
            Budget::default(),
            Tariff::default(),
        )
    }

    fn rows() -> Vec<ChartRow> {
        vec![
            ChartRow {
                label: "Jan".to_string(),
                bar: "███ ".to_string(),
                value: "0.27".to_string(),
            },
            ChartRow {
                label: "Feb".to_string(),
                bar: "████".to_string(),
                value: "0.30".to_string(),
            },
        ]
    }

    #[test]
    fn engine_loads_embedded_templates() {
        let engine = TemplateEngine::new().unwrap();
        assert!(engine.template_exists("report/solar.txt"));
        assert!(engine.template_exists("weather/current.txt"));
        assert!(!engine.template_exists("missing.txt"));
    }

    #[test]
    fn unknown_template_is_not_found() {
        let engine = TemplateEngine::new().unwrap();
        let err = engine
            .render("missing.txt", &TemplateContext::new())
            .unwrap_err();
        assert!(matches!(err, TemplateError::NotFound(_)));
    }

    #[test]
    fn format_decimal_keeps_one_fraction_digit() {
        assert_eq!(format_decimal(2.0), "2.0");
        assert_eq!(format_decimal(0.01), "0.01");
        assert_eq!(format_decimal(2732.2), "2732.2");
        assert_eq!(format_decimal(0.0), "0.0");
    }

    #[test]
    fn format_percent_drops_zero_fraction() {
        assert_eq!(format_percent(75.0), "75");
        assert_eq!(format_percent(22.5), "22.5");
    }

    #[test]
    fn weather_data_from_sample() {
        let location = Location::new("Lagos").unwrap();
        let data = WeatherReportData::from_sample(&location, &WeatherSample::new(30.0, 40.0));
        assert_eq!(data.location, "Lagos");
        assert_eq!(data.temperature, "30.0");
        assert_eq!(data.cloud_cover, "40");
        assert!(data.resolved_name.is_none());
        assert!(data.observed_at.is_none());
    }

    #[test]
    fn weather_data_keeps_different_resolved_name() {
        let location = Location::new("ikeja").unwrap();
        let sample = WeatherSample::new(30.0, 40.0).with_place_name("Ikeja");
        assert!(
            WeatherReportData::from_sample(&location, &sample)
                .resolved_name
                .is_none()
        );

        let location = Location::new("Lagos,NG").unwrap();
        let sample = WeatherSample::new(30.0, 40.0).with_place_name("Lagos");
        assert_eq!(
            WeatherReportData::from_sample(&location, &sample)
                .resolved_name
                .as_deref(),
            Some("Lagos")
        );
    }

    #[test]
    fn render_weather_report() {
        let engine = TemplateEngine::new().unwrap();
        let location = Location::new("Kano").unwrap();
        let data = WeatherReportData::from_sample(&location, &WeatherSample::new(33.5, 10.0));

        let output = engine.render_weather_report(&data).unwrap();
        assert!(output.contains("Current Weather in Kano"));
        assert!(output.contains("Temperature: 33.5°C"));
        assert!(output.contains("Cloud Cover: 10%"));
        assert!(!output.contains("Observed"));
    }

    #[test]
    fn solar_data_from_report() {
        let report = sample_report();
        let data = SolarReportData::from_report(&report, rows());

        assert_eq!(data.panel_name, "Monocrystalline");
        assert_eq!(data.efficiency_percent, "22");
        assert_eq!(data.tilt, 30);
        assert_eq!(data.budget, 1_000_000);
        assert_eq!(data.currency_symbol, "₦");
        assert_eq!(data.daily_savings, report.financials.whole_daily_savings());
        assert_eq!(data.chart_rows.len(), 2);
        assert_eq!(data.chart_title, "Predicted Solar Output per Month");
        assert_eq!(data.y_axis_label, "Energy (kWh)");
    }

    #[test]
    fn render_solar_report_contains_sections() {
        let engine = TemplateEngine::new().unwrap();
        let report = sample_report();
        let data = SolarReportData::from_report(&report, rows());

        let output = engine.render_solar_report(&data).unwrap();
        assert!(output.contains("Current Weather in Lagos"));
        assert!(output.contains("Temperature: 29.4°C"));
        assert!(output.contains("Cloud Cover: 75%"));
        assert!(output.contains(&format!("Estimated Daily Output: {} kWh", data.daily_kwh)));
        assert!(output.contains(&format!("Daily Savings: ₦{}", data.daily_savings)));
        assert!(output.contains(&format!(
            "Estimated Payback Time: {} years",
            data.payback_years
        )));
        assert!(output.contains("Predicted Solar Output per Month"));
        assert!(output.contains("Energy (kWh)"));
        assert!(output.contains("Jan │███ │ 0.27"));
        assert!(output.contains("Feb │████│ 0.30"));
        assert!(output.contains("Recommended to clean your panels every 6 months."));
        assert!(output.contains("Data from OpenWeatherMap"));
    }

    #[test]
    fn render_solar_report_title_and_credits() {
        let engine = TemplateEngine::new().unwrap();
        let data = SolarReportData::from_report(&sample_report(), rows());

        let output = engine.render_solar_report(&data).unwrap();
        assert!(output.starts_with("☀️ SolarIQ: AI-Powered Solar Optimization\n"));
        assert!(output.trim_end().ends_with(
            "Built by Praise Adeyeye with ❤️ | Data from OpenWeatherMap | Powered by AI ☀️"
        ));
    }

    #[test]
    fn render_does_not_escape_currency() {
        let engine = TemplateEngine::new().unwrap();
        let mut report = sample_report();
        report.tariff = Tariff::new(100.0, "<$>");
        let data = SolarReportData::from_report(&report, Vec::new());

        let output = engine.render_solar_report(&data).unwrap();
        assert!(output.contains("Daily Savings: <$>"));
    }
}
