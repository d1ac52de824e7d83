//! Tilt angle value object
//!
//! Panel inclination from horizontal, in whole degrees (0-90).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Panel inclination from horizontal in degrees
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct TiltAngle(u8);

impl TiltAngle {
    /// Flat panel
    pub const MIN: u8 = 0;
    /// Vertical panel
    pub const MAX: u8 = 90;
    /// Default inclination
    pub const DEFAULT: u8 = 30;

    /// Create a validated tilt angle
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTiltAngle` if `degrees` is outside 0-90.
    pub fn new(degrees: i64) -> Result<Self, DomainError> {
        u8::try_from(degrees)
            .ok()
            .filter(|d| *d <= Self::MAX)
            .map(Self)
            .ok_or(DomainError::InvalidTiltAngle(degrees))
    }

    /// Angle in degrees
    #[must_use]
    pub const fn degrees(self) -> u8 {
        self.0
    }
}

impl Default for TiltAngle {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<i64> for TiltAngle {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TiltAngle> for u8 {
    fn from(value: TiltAngle) -> Self {
        value.0
    }
}

impl fmt::Display for TiltAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.0)
    }
}
