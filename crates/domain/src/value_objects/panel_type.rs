//! Panel type value object
//!
//! Each panel material carries a fixed conversion efficiency.
//!
//! # Examples
//!
//! ```
//! use domain::value_objects::PanelType;
//!
//! let panel: PanelType = "poly".parse().expect("known panel type");
//! assert_eq!(panel, PanelType::Polycrystalline);
//! assert!((panel.efficiency() - 0.18).abs() < f64::EPSILON);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Photovoltaic panel material
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelType {
    /// Monocrystalline silicon (22%)
    #[default]
    Monocrystalline,
    /// Polycrystalline silicon (18%)
    Polycrystalline,
    /// Thin-film (12%)
    ThinFilm,
}

impl PanelType {
    /// All panel types, in display order
    pub const ALL: [Self; 3] = [Self::Monocrystalline, Self::Polycrystalline, Self::ThinFilm];

    /// Fraction of incident energy converted to electrical output
    #[must_use]
    pub const fn efficiency(self) -> f64 {
        match self {
            Self::Monocrystalline => 0.22,
            Self::Polycrystalline => 0.18,
            Self::ThinFilm => 0.12,
        }
    }

    /// Human-readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Monocrystalline => "Monocrystalline",
            Self::Polycrystalline => "Polycrystalline",
            Self::ThinFilm => "Thin-Film",
        }
    }

    /// Identifier accepted by [`FromStr`] and used in configuration files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monocrystalline => "monocrystalline",
            Self::Polycrystalline => "polycrystalline",
            Self::ThinFilm => "thin-film",
        }
    }
}

impl fmt::Display for PanelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PanelType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "monocrystalline" | "mono" => Ok(Self::Monocrystalline),
            "polycrystalline" | "poly" => Ok(Self::Polycrystalline),
            "thin-film" | "thinfilm" | "thin" => Ok(Self::ThinFilm),
            _ => Err(DomainError::UnknownPanelType(s.to_string())),
        }
    }
}
