//! Map configuration: default viewport and tile layer.

use application::{ApplicationError, MapDefaults};
use domain::GeoLocation;
use serde::{Deserialize, Serialize};

/// Highest zoom level OpenStreetMap tiles are served at
pub const MAX_ZOOM: u8 = 19;

/// Geographic location configuration (latitude/longitude pair)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to domain `GeoLocation` value object
    ///
    /// Returns `None` if coordinates are invalid.
    #[must_use]
    pub fn to_geo_location(&self) -> Option<GeoLocation> {
        GeoLocation::new(self.latitude, self.longitude).ok()
    }
}

impl Default for GeoLocationConfig {
    fn default() -> Self {
        let istanbul = GeoLocation::istanbul();
        Self {
            latitude: istanbul.latitude(),
            longitude: istanbul.longitude(),
        }
    }
}

/// Map rendering configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Center used when no stop is focused
    ///
    /// Configured as inline table: `{ latitude = 41.0083, longitude = 28.9784 }`
    #[serde(default)]
    pub default_center: GeoLocationConfig,

    /// Zoom level without a focus
    #[serde(default = "default_zoom")]
    pub default_zoom: u8,

    /// Zoom level when a stop is focused
    #[serde(default = "default_focus_zoom")]
    pub focus_zoom: u8,

    /// Tile URL template for the browser map
    #[serde(default = "default_tile_url")]
    pub tile_url: String,

    /// Tile attribution (HTML)
    #[serde(default = "default_attribution")]
    pub attribution: String,

    /// Maximum popup width in pixels
    #[serde(default = "default_popup_max_width")]
    pub popup_max_width: u32,
}

const fn default_zoom() -> u8 {
    12
}

const fn default_focus_zoom() -> u8 {
    16
}

fn default_tile_url() -> String {
    "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string()
}

fn default_attribution() -> String {
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors"
        .to_string()
}

const fn default_popup_max_width() -> u32 {
    250
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center: GeoLocationConfig::default(),
            default_zoom: default_zoom(),
            focus_zoom: default_focus_zoom(),
            tile_url: default_tile_url(),
            attribution: default_attribution(),
            popup_max_width: default_popup_max_width(),
        }
    }
}

impl MapConfig {
    /// Renderer settings derived from this section
    ///
    /// # Errors
    ///
    /// Returns `Configuration` for an invalid center or a zoom level above
    /// [`MAX_ZOOM`].
    pub fn map_defaults(&self) -> Result<MapDefaults, ApplicationError> {
        let center = self.default_center.to_geo_location().ok_or_else(|| {
            ApplicationError::Configuration(format!(
                "map.default_center is not a valid coordinate: ({}, {})",
                self.default_center.latitude, self.default_center.longitude
            ))
        })?;

        for (key, zoom) in [
            ("map.default_zoom", self.default_zoom),
            ("map.focus_zoom", self.focus_zoom),
        ] {
            if zoom > MAX_ZOOM {
                return Err(ApplicationError::Configuration(format!(
                    "{key} must be at most {MAX_ZOOM}, got {zoom}"
                )));
            }
        }

        Ok(MapDefaults {
            center,
            zoom: self.default_zoom,
            focus_zoom: self.focus_zoom,
        })
    }
}
