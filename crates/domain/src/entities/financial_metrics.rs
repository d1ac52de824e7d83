//! Savings and payback metrics

use serde::{Deserialize, Serialize};

use super::EnergyEstimate;
use crate::estimation::round_to;
use crate::value_objects::Budget;

/// Days used to annualise daily savings
const DAYS_PER_YEAR: f64 = 365.0;

/// Electricity price used to value generated energy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tariff {
    /// Price per kWh in whole currency units
    pub price_per_kwh: f64,
    /// Symbol printed before amounts
    pub currency_symbol: String,
}

impl Tariff {
    /// Default price per kWh
    pub const DEFAULT_PRICE_PER_KWH: f64 = 100.0;
    /// Default currency symbol (Naira)
    pub const DEFAULT_CURRENCY_SYMBOL: &'static str = "₦";

    /// Create a tariff
    #[must_use]
    pub fn new(price_per_kwh: f64, currency_symbol: impl Into<String>) -> Self {
        Self {
            price_per_kwh,
            currency_symbol: currency_symbol.into(),
        }
    }
}

impl Default for Tariff {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PRICE_PER_KWH, Self::DEFAULT_CURRENCY_SYMBOL)
    }
}

/// Daily savings and payback time for an installation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    /// Value of one day's output
    pub daily_savings: f64,
    /// Years until the budget is recovered, rounded to one decimal
    pub payback_years: f64,
}

impl FinancialMetrics {
    /// Compute savings and payback
    ///
    /// The denominator carries a `+ 1` so a zero estimate still yields a
    /// finite payback time.
    #[must_use]
    pub fn calculate(estimate: &EnergyEstimate, tariff: &Tariff, budget: Budget) -> Self {
        let daily_savings = estimate.daily_kwh * tariff.price_per_kwh;
        let payback_years = round_to(
            budget.as_f64() / daily_savings.mul_add(DAYS_PER_YEAR, 1.0),
            1,
        );
        Self {
            daily_savings,
            payback_years,
        }
    }

    /// Daily savings truncated toward zero, as displayed
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn whole_daily_savings(&self) -> i64 {
        self.daily_savings.trunc() as i64
    }
}
