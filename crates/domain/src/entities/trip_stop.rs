//! Trip stop entity - one row of the itinerary table

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::GeoLocation;

/// A single itinerary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripStop {
    /// Day of the visit (not unique across stops)
    pub date: NaiveDate,
    /// Place name, used as marker label and focus key
    pub location: String,
    /// Free-text description
    pub description: String,
    /// Position on the map; `None` when the source row had no usable coordinates
    pub coordinates: Option<GeoLocation>,
    /// Link to an external map service
    pub maps_link: String,
}

impl TripStop {
    /// Create a stop without coordinates
    pub fn new(
        date: NaiveDate,
        location: impl Into<String>,
        description: impl Into<String>,
        maps_link: impl Into<String>,
    ) -> Self {
        Self {
            date,
            location: location.into(),
            description: description.into(),
            coordinates: None,
            maps_link: maps_link.into(),
        }
    }

    /// Attach coordinates
    #[must_use]
    pub const fn with_coordinates(mut self, coordinates: GeoLocation) -> Self {
        self.coordinates = Some(coordinates);
        self
    }

    /// Whether this stop can be drawn on a map
    #[must_use]
    pub const fn has_coordinates(&self) -> bool {
        self.coordinates.is_some()
    }
}
