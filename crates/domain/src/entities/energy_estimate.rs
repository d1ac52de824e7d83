//! Energy estimate entity

use serde::{Deserialize, Serialize};

use super::{PanelConfig, WeatherSample};
use crate::estimation::predict_energy_output;

/// Estimated daily photovoltaic output
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyEstimate {
    /// Daily output in kWh, rounded to two decimals
    pub daily_kwh: f64,
}

impl EnergyEstimate {
    /// Estimate output for the sampled conditions and panel
    ///
    /// Cloud cover is passed through as the irradiance input.
    #[must_use]
    pub fn from_conditions(sample: &WeatherSample, panel: &PanelConfig) -> Self {
        Self {
            daily_kwh: predict_energy_output(
                sample.temperature,
                sample.cloud_cover_percent,
                panel.tilt_degrees(),
                panel.efficiency(),
            ),
        }
    }
}
