//! Panel configuration entity

use serde::{Deserialize, Serialize};

use crate::value_objects::{PanelType, TiltAngle};

/// Panel material and inclination chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Panel material
    pub panel_type: PanelType,
    /// Inclination from horizontal
    pub tilt: TiltAngle,
}

impl PanelConfig {
    /// Create a panel configuration
    #[must_use]
    pub const fn new(panel_type: PanelType, tilt: TiltAngle) -> Self {
        Self { panel_type, tilt }
    }

    /// Conversion efficiency (0-1)
    #[must_use]
    pub const fn efficiency(&self) -> f64 {
        self.panel_type.efficiency()
    }

    /// Tilt in degrees as a float
    #[must_use]
    pub fn tilt_degrees(&self) -> f64 {
        f64::from(self.tilt.degrees())
    }
}
