//! Application layer - Use cases and orchestration
//!
//! Contains the report use case and the port it fetches weather through.
//! Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
