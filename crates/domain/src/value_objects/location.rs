//! Location value object
//!
//! Free-text place name passed to the weather service as-is.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// A named location such as a city
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Location(String);

impl Location {
    /// Default location
    pub const DEFAULT: &'static str = "Lagos";

    /// Create a location from free text
    ///
    /// Surrounding whitespace is removed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyLocation` if nothing remains after trimming.
    pub fn new(name: impl AsRef<str>) -> Result<Self, DomainError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptyLocation);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// The location name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Location {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl TryFrom<String> for Location {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Location> for String {
    fn from(value: Location) -> Self {
        value.0
    }
}

impl std::str::FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
