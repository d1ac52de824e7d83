//! Installation budget value object
//!
//! A whole-currency amount between 100,000 and 5,000,000.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::Budget;
//!
//! let budget = Budget::new(1_000_000).expect("valid budget");
//! assert_eq!(budget.amount(), 1_000_000);
//!
//! assert!(Budget::new(99_999).is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::DomainError;

/// Installation budget in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Budget(u64);

impl Budget {
    /// Smallest accepted budget
    pub const MIN: u64 = 100_000;
    /// Largest accepted budget
    pub const MAX: u64 = 5_000_000;
    /// Increment offered by input widgets
    pub const STEP: u64 = 100_000;
    /// Default budget
    pub const DEFAULT: u64 = 1_000_000;

    /// Create a validated budget
    ///
    /// Only the range is enforced; [`Budget::STEP`] is an input increment.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidBudget` if `amount` is outside the range.
    pub const fn new(amount: u64) -> Result<Self, DomainError> {
        if amount < Self::MIN || amount > Self::MAX {
            return Err(DomainError::invalid_budget(amount, Self::MIN, Self::MAX));
        }
        Ok(Self(amount))
    }

    /// Amount in whole currency units
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Amount as a float for ratio arithmetic
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // bounded by MAX, exact in f64
    pub const fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl TryFrom<u64> for Budget {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Budget> for u64 {
    fn from(value: Budget) -> Self {
        value.0
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
