//! Report configuration: tariff and default inputs.

use domain::{Budget, Location, PanelType, Tariff, TiltAngle};
use serde::{Deserialize, Serialize};

/// Electricity tariff as read from `[tariff]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TariffConfig {
    /// Price of one kWh in local currency
    #[serde(default = "default_price_per_kwh")]
    pub price_per_kwh: f64,

    /// Symbol printed before money amounts
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

const fn default_price_per_kwh() -> f64 {
    100.0
}

fn default_currency_symbol() -> String {
    "₦".to_string()
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            price_per_kwh: default_price_per_kwh(),
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl TariffConfig {
    /// Convert to the domain tariff
    #[must_use]
    pub fn to_tariff(&self) -> Tariff {
        Tariff::new(self.price_per_kwh, self.currency_symbol.clone())
    }
}

/// Inputs used when a flag is not given, as read from `[defaults]`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReportDefaults {
    /// Location name sent to the weather service
    #[serde(default)]
    pub location: Location,

    /// Panel material
    #[serde(default)]
    pub panel_type: PanelType,

    /// Tilt from horizontal, 0 to 90 degrees
    #[serde(default)]
    pub tilt_degrees: TiltAngle,

    /// Installation budget
    #[serde(default)]
    pub budget: Budget,
}
