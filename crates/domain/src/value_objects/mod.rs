//! Value Objects - Immutable, identity-less domain primitives

mod budget;
mod location;
mod panel_type;
mod tilt_angle;

pub use budget::Budget;
pub use location::Location;
pub use panel_type::PanelType;
pub use tilt_angle::TiltAngle;
