//! Ports - Interfaces for external systems
//!
//! Implemented by adapters in the infrastructure layer.

mod weather_port;

#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
