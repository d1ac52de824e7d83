//! Terminal bar chart for the monthly projection
//!
//! Renders one horizontal bar per month with Unicode block characters,
//! scaled so the strongest month fills the chart width.

use domain::MonthlyProjection;
use infrastructure::ChartRow;

/// Default bar width in characters
pub const CHART_WIDTH: usize = 40;

/// Glyph used for the filled part of a bar
const BAR_SYMBOL: &str = "█";

/// Build one chart row per projected month
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn monthly_rows(projection: &MonthlyProjection, width: usize) -> Vec<ChartRow> {
    let peak = projection.peak_kwh();
    let label_width = projection
        .months
        .iter()
        .map(|m| m.month.chars().count())
        .max()
        .unwrap_or(0);

    projection
        .months
        .iter()
        .map(|entry| {
            let normalized = if peak > 0.0 {
                (entry.kwh / peak).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let filled = ((normalized * width as f64).round() as usize).min(width);

            ChartRow {
                label: format!("{:<label_width$}", entry.month),
                bar: format!(
                    "{}{}",
                    BAR_SYMBOL.repeat(filled),
                    " ".repeat(width - filled)
                ),
                value: format!("{:.2}", entry.kwh),
            }
        })
        .collect()
}
