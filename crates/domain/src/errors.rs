//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Tilt angle outside 0-90 degrees
    #[error("Invalid tilt angle: {0}° (must be 0-90)")]
    InvalidTiltAngle(i64),

    /// Budget outside the accepted range
    #[error("Invalid budget: {value} (must be {min}-{max})")]
    InvalidBudget { value: u64, min: u64, max: u64 },

    /// Location is empty after trimming
    #[error("Invalid location: location name must not be empty")]
    EmptyLocation,

    /// Unrecognised panel type name
    #[error("Unknown panel type: {0} (expected monocrystalline, polycrystalline or thin-film)")]
    UnknownPanelType(String),
}

impl DomainError {
    /// Create an invalid budget error
    pub const fn invalid_budget(value: u64, min: u64, max: u64) -> Self {
        Self::InvalidBudget { value, min, max }
    }
}
