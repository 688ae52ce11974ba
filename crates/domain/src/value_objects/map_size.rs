//! Map display size presets

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Size preset for the rendered map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapSize {
    /// 700 x 500 pixels
    #[default]
    Standard,
    /// 1050 x 750 pixels
    Large,
}

impl MapSize {
    /// All presets in display order
    pub const ALL: [Self; 2] = [Self::Standard, Self::Large];

    /// Width and height in pixels
    #[must_use]
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Standard => (700, 500),
            Self::Large => (1050, 750),
        }
    }

    /// Width in pixels
    #[must_use]
    pub const fn width(self) -> u32 {
        self.dimensions().0
    }

    /// Height in pixels
    #[must_use]
    pub const fn height(self) -> u32 {
        self.dimensions().1
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Large => "Large",
        }
    }
}

impl fmt::Display for MapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MapSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "large" => Ok(Self::Large),
            other => Err(DomainError::InvalidMapSize(other.to_string())),
        }
    }
}
