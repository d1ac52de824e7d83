//! Domain layer for SolarIQ
//!
//! Contains the output estimator, financial metrics, the monthly projection,
//! and the value objects that validate user input.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod estimation;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use estimation::{base_output, predict_energy_output, round_to, temperature_loss};
pub use value_objects::*;
