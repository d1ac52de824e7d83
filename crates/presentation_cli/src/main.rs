//! SolarIQ CLI
//!
//! Estimates daily solar output, savings and payback time from live weather.

#![allow(clippy::print_stdout, clippy::print_stderr)]

mod chart;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use application::{ApplicationError, ReportRequest, SolarReportService};
use clap::{Parser, Subcommand, ValueEnum};
use domain::{Budget, Location, PanelConfig, PanelType, TiltAngle};
use infrastructure::{
    AppConfig, SolarReportData, TemplateEngine, WeatherAdapter, WeatherReportData,
};
use secrecy::SecretString;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Line printed after every weather failure
const WEATHER_FAILURE_HINT: &str =
    "Couldn't fetch weather data. Please check your location or API key.";

/// SolarIQ CLI
#[derive(Parser)]
#[command(name = "solariq")]
#[command(author, version, about = "SolarIQ solar output estimator", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: ./solariq.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate output, savings and payback for a location
    ///
    /// Example: solariq report --location Abuja --panel polycrystalline --tilt 15
    Report {
        /// Location name sent to OpenWeatherMap
        #[arg(short, long)]
        location: Option<Location>,

        /// Panel material
        #[arg(short, long)]
        panel: Option<PanelType>,

        /// Tilt from horizontal in degrees (0-90)
        #[arg(short, long, value_parser = parse_tilt)]
        tilt: Option<TiltAngle>,

        /// Installation budget (100000-5000000)
        #[arg(short, long, value_parser = parse_budget)]
        budget: Option<Budget>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// OpenWeatherMap API key
        #[arg(long, env = "OPENWEATHERMAP_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// Show current weather for a location
    Weather {
        /// Location name sent to OpenWeatherMap
        #[arg(short, long)]
        location: Option<Location>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// OpenWeatherMap API key
        #[arg(long, env = "OPENWEATHERMAP_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
    },

    /// List panel types and their efficiencies
    Panels {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// How results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Panel listing entry for JSON output
#[derive(Debug, Serialize)]
struct PanelInfo {
    id: &'static str,
    name: &'static str,
    efficiency: f64,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Parse a tilt angle argument
fn parse_tilt(value: &str) -> Result<TiltAngle, String> {
    let degrees: i64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a whole number of degrees"))?;
    TiltAngle::new(degrees).map_err(|e| e.to_string())
}

/// Parse a budget argument
fn parse_budget(value: &str) -> Result<Budget, String> {
    let amount: u64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a whole amount"))?;
    Budget::new(amount).map_err(|e| e.to_string())
}

/// Message shown after "Error fetching data:"
fn failure_message(err: &ApplicationError) -> String {
    match err {
        ApplicationError::WeatherUnavailable(message)
        | ApplicationError::Configuration(message)
        | ApplicationError::Internal(message) => message.clone(),
        ApplicationError::Domain(e) => e.to_string(),
    }
}

/// Lines printed when no weather sample could be obtained
fn weather_failure_lines(err: &ApplicationError) -> Vec<String> {
    let first = match err {
        ApplicationError::Configuration(message) => format!("Configuration error: {message}"),
        other => format!("Error fetching data: {}", failure_message(other)),
    };
    vec![first, WEATHER_FAILURE_HINT.to_string()]
}

/// Print the weather failure lines and exit with status 1
fn exit_with_weather_failure(err: &ApplicationError) -> ! {
    debug!(error = ?err, "Weather step failed");
    for line in weather_failure_lines(err) {
        eprintln!("{line}");
    }
    std::process::exit(1);
}

/// Load configuration and apply a key given on the command line
fn load_config(path: Option<&Path>, api_key: Option<String>) -> anyhow::Result<AppConfig> {
    let mut config = AppConfig::load_from(path)?;
    config
        .weather
        .override_api_key(api_key.map(SecretString::from));
    Ok(config)
}

/// Build the report service from configuration
fn build_service(config: &AppConfig) -> Result<SolarReportService, ApplicationError> {
    let adapter = WeatherAdapter::with_config(&config.weather.to_client_config())?;
    Ok(SolarReportService::new(Arc::new(adapter)).with_tariff(config.tariff.to_tariff()))
}

/// Every panel type with its efficiency
fn panel_listing() -> Vec<PanelInfo> {
    PanelType::ALL
        .iter()
        .map(|panel| PanelInfo {
            id: panel.as_str(),
            name: panel.display_name(),
            efficiency: panel.efficiency(),
        })
        .collect()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = i32::from(e.use_stderr());
            e.print().ok();
            std::process::exit(code);
        },
    };

    // Set up logging based on verbosity; stdout is reserved for results
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Report {
            location,
            panel,
            tilt,
            budget,
            format,
            api_key,
        } => {
            let config = load_config(cli.config.as_deref(), api_key)?;
            let defaults = &config.defaults;
            let request = ReportRequest::new(
                location.unwrap_or_else(|| defaults.location.clone()),
                PanelConfig::new(
                    panel.unwrap_or(defaults.panel_type),
                    tilt.unwrap_or(defaults.tilt_degrees),
                ),
                budget.unwrap_or(defaults.budget),
            );

            let service =
                build_service(&config).unwrap_or_else(|e| exit_with_weather_failure(&e));
            let report = match service.generate_report(&request).await {
                Ok(report) => report,
                Err(e) => exit_with_weather_failure(&e),
            };

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&report)?);
                },
                OutputFormat::Text => {
                    let rows = chart::monthly_rows(&report.projection, chart::CHART_WIDTH);
                    let data = SolarReportData::from_report(&report, rows);
                    print!("{}", TemplateEngine::new()?.render_solar_report(&data)?);
                },
            }
        },

        Commands::Weather {
            location,
            format,
            api_key,
        } => {
            let config = load_config(cli.config.as_deref(), api_key)?;
            let location = location.unwrap_or_else(|| config.defaults.location.clone());

            let service =
                build_service(&config).unwrap_or_else(|e| exit_with_weather_failure(&e));
            let sample = match service.current_weather(&location).await {
                Ok(sample) => sample,
                Err(e) => exit_with_weather_failure(&e),
            };

            match format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&sample)?);
                },
                OutputFormat::Text => {
                    let data = WeatherReportData::from_sample(&location, &sample);
                    print!("{}", TemplateEngine::new()?.render_weather_report(&data)?);
                },
            }
        },

        Commands::Panels { format } => match format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&panel_listing())?);
            },
            OutputFormat::Text => {
                println!("🔋 Panel types:");
                for panel in panel_listing() {
                    println!(
                        "   {:<16} {:<16} {:.0}% efficiency",
                        panel.id,
                        panel.name,
                        panel.efficiency * 100.0
                    );
                }
            },
        },
    }

    Ok(())
}
