//! Application services - Use case implementations

mod solar_report_service;

pub use solar_report_service::{ReportRequest, SolarReportService};
