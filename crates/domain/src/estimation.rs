//! Daily photovoltaic output estimate
//!
//! The estimate treats the cloud-cover percentage reported by the weather
//! service as the irradiance input. It is a rough indicator, not a physical
//! model, and the numbers below are kept exactly as published.

/// Panel temperature above which output starts to drop, in °C
pub const LOSS_THRESHOLD_CELSIUS: f64 = 25.0;

/// Fractional output loss per degree above [`LOSS_THRESHOLD_CELSIUS`]
pub const LOSS_PER_DEGREE: f64 = 0.005;

/// Divisor converting the adjusted output to kWh
const KWH_DIVISOR: f64 = 1000.0;

/// Decimal places kept in the final estimate
const OUTPUT_DECIMALS: i32 = 2;

/// Output before temperature losses
///
/// `irradiance × panel_eff × cos(radians(90 − tilt))`
#[must_use]
pub fn base_output(irradiance: f64, tilt_degrees: f64, panel_eff: f64) -> f64 {
    irradiance * panel_eff * (90.0 - tilt_degrees).to_radians().cos()
}

/// Fractional loss for the given temperature, never negative
#[must_use]
pub fn temperature_loss(temperature: f64) -> f64 {
    ((temperature - LOSS_THRESHOLD_CELSIUS) * LOSS_PER_DEGREE).max(0.0)
}

/// Estimated daily output in kWh, rounded to two decimals
///
/// # Examples
///
/// ```
/// use domain::predict_energy_output;
///
/// // 50 × 0.22 × cos(60°) = 5.5, no loss at 20 °C, 5.5 / 1000 → 0.01
/// assert!((predict_energy_output(20.0, 50.0, 30.0, 0.22) - 0.01).abs() < f64::EPSILON);
/// ```
#[must_use]
pub fn predict_energy_output(
    temperature: f64,
    irradiance: f64,
    tilt_degrees: f64,
    panel_eff: f64,
) -> f64 {
    let adjusted =
        base_output(irradiance, tilt_degrees, panel_eff) * (1.0 - temperature_loss(temperature));
    round_to(adjusted / KWH_DIVISOR, OUTPUT_DECIMALS)
}

/// Round half away from zero to `decimals` places
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn no_loss_at_or_below_threshold() {
        assert!(temperature_loss(25.0).abs() < EPS);
        assert!(temperature_loss(0.0).abs() < EPS);
        assert!(temperature_loss(-40.0).abs() < EPS);
    }

    #[test]
    fn loss_at_thirty_five_degrees() {
        assert!((temperature_loss(35.0) - 0.05).abs() < EPS);
    }

    #[test]
    fn vertical_panel_uses_full_irradiance() {
        assert!((base_output(80.0, 90.0, 0.18) - 80.0 * 0.18).abs() < EPS);
    }

    #[test]
    fn thirty_degree_tilt_halves_output() {
        assert!((base_output(50.0, 30.0, 0.22) - 5.5).abs() < EPS);
    }

    #[test]
    fn reference_example() {
        assert!((predict_energy_output(20.0, 50.0, 30.0, 0.22) - 0.01).abs() < EPS);
    }

    #[test]
    fn zero_irradiance_yields_zero() {
        for tilt in [0.0, 30.0, 45.0, 90.0] {
            for eff in [0.12, 0.18, 0.22] {
                assert!(predict_energy_output(25.0, 0.0, tilt, eff).abs() < EPS);
            }
        }
    }

    #[test]
    fn heat_reduces_output() {
        // 100 × 0.22 × 1 = 22, loss 0.05 at 35 °C → 20.9 → 0.0209 → 0.02
        assert!((predict_energy_output(35.0, 100.0, 90.0, 0.22) - 0.02).abs() < EPS);
    }

    #[test]
    fn flat_panel_output_is_negligible() {
        assert!(predict_energy_output(20.0, 100.0, 0.0, 0.22).abs() < EPS);
    }

    #[test]
    fn round_to_two_decimals() {
        assert!((round_to(1.234_567, 2) - 1.23).abs() < EPS);
        assert!((round_to(1.235_1, 2) - 1.24).abs() < EPS);
        assert!((round_to(2.25, 1) - 2.3).abs() < EPS);
    }
}
