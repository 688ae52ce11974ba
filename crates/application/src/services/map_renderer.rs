//! Map renderer
//!
//! Turns the itinerary plus the current selections into a `MapView`: a
//! center, a zoom level and one marker per visible stop. Pure computation,
//! no I/O; drawing the view is up to the presentation layer.

use domain::{DateFilter, GeoLocation, Itinerary, TripStop};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApplicationError;

/// City-wide zoom level used when nothing is focused
pub const DEFAULT_ZOOM: u8 = 12;

/// Close-in zoom level used when a stop is focused
pub const FOCUS_ZOOM: u8 = 16;

/// Center and zoom settings for the map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapDefaults {
    /// Center when no stop is focused
    pub center: GeoLocation,
    /// Zoom when no stop is focused
    pub zoom: u8,
    /// Zoom when a stop is focused
    pub focus_zoom: u8,
}

impl Default for MapDefaults {
    fn default() -> Self {
        Self {
            center: GeoLocation::istanbul(),
            zoom: DEFAULT_ZOOM,
            focus_zoom: FOCUS_ZOOM,
        }
    }
}

/// A map annotation for one stop
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Marker position
    pub position: GeoLocation,
    /// Tooltip text (the location name)
    pub label: String,
    /// Popup body, HTML
    pub popup_html: String,
}

/// Everything needed to draw the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// Map center
    pub center: GeoLocation,
    /// Initial zoom level
    pub zoom: u8,
    /// Markers in itinerary order
    pub markers: Vec<Marker>,
}

/// Popup body for a stop: `"{location}: {description}"` plus a link
///
/// Text is inserted verbatim; the itinerary is trusted input.
#[must_use]
pub fn popup_html(stop: &TripStop) -> String {
    format!(
        "{}: {}<br><a href='{}' target='_blank'>Google Maps</a>",
        stop.location, stop.description, stop.maps_link
    )
}

/// Builds map views from the itinerary
#[derive(Debug, Clone, Copy, Default)]
pub struct MapRenderer {
    defaults: MapDefaults,
}

impl MapRenderer {
    /// Create a renderer with custom center/zoom settings
    #[must_use]
    pub const fn new(defaults: MapDefaults) -> Self {
        Self { defaults }
    }

    /// Center/zoom settings in use
    #[must_use]
    pub const fn defaults(&self) -> MapDefaults {
        self.defaults
    }

    /// Render a map view
    ///
    /// With a focus, the map centers on the first stop of that name at the
    /// focus zoom; otherwise on the default center. The date filter decides
    /// which stops get markers and is independent of the focus. Stops
    /// without coordinates are skipped.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::NotFound` if `focus` names no stop.
    pub fn render(
        &self,
        itinerary: &Itinerary,
        filter: &DateFilter,
        focus: Option<&str>,
    ) -> Result<MapView, ApplicationError> {
        let (center, zoom) = self.viewport(itinerary, focus)?;

        let mut markers = Vec::new();
        for stop in itinerary.filter(filter) {
            let Some(position) = stop.coordinates else {
                debug!(location = %stop.location, "Skipping stop without coordinates");
                continue;
            };
            markers.push(Marker {
                position,
                label: stop.location.clone(),
                popup_html: popup_html(stop),
            });
        }

        debug!(
            filter = %filter,
            focus = focus.unwrap_or("-"),
            markers = markers.len(),
            "Rendered map view"
        );

        Ok(MapView {
            center,
            zoom,
            markers,
        })
    }

    fn viewport(
        &self,
        itinerary: &Itinerary,
        focus: Option<&str>,
    ) -> Result<(GeoLocation, u8), ApplicationError> {
        let Some(name) = focus else {
            return Ok((self.defaults.center, self.defaults.zoom));
        };

        let stop = itinerary
            .find_by_location(name)
            .ok_or_else(|| ApplicationError::NotFound(format!("location '{name}'")))?;

        match stop.coordinates {
            Some(position) => Ok((position, self.defaults.focus_zoom)),
            None => {
                debug!(location = %name, "Focused stop has no coordinates, using default view");
                Ok((self.defaults.center, self.defaults.zoom))
            },
        }
    }
}
