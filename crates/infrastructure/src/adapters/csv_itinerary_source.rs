//! CSV itinerary source - Implements ItinerarySourcePort over a CSV export
//!
//! The itinerary sheet is exported with one header row:
//! `Date,Location,Description,Latitude,Longitude,Google Maps Link`.
//! Extra columns are ignored and column order does not matter.

use std::fs::File;
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::ItinerarySourcePort;
use domain::{GeoLocation, Itinerary, TripStop, parse_trip_date};
use serde::Deserialize;
use tracing::{debug, instrument};

/// Columns every itinerary file must have
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "Date",
    "Location",
    "Description",
    "Latitude",
    "Longitude",
    "Google Maps Link",
];

/// One raw CSV row; coordinates stay textual until validated
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Location")]
    location: String,
    #[serde(rename = "Description")]
    description: String,
    #[serde(rename = "Latitude")]
    latitude: String,
    #[serde(rename = "Longitude")]
    longitude: String,
    #[serde(rename = "Google Maps Link")]
    maps_link: String,
}

impl CsvRow {
    /// Convert to a stop; `line` is the 1-based line number in the file
    fn into_stop(self, line: usize) -> Result<TripStop, ApplicationError> {
        let date = parse_trip_date(&self.date)
            .map_err(|e| ApplicationError::DataLoad(format!("line {line}: {e}")))?;
        let coordinates = parse_coordinates(&self.latitude, &self.longitude);

        let stop = TripStop::new(
            date,
            self.location.trim(),
            self.description.trim(),
            self.maps_link.trim(),
        );
        Ok(match coordinates {
            Some(position) => stop.with_coordinates(position),
            None => {
                debug!(line, location = %stop.location, "Row has no usable coordinates");
                stop
            },
        })
    }
}

/// Parse a latitude/longitude pair; blank, non-numeric and out-of-range
/// values give `None`
fn parse_coordinates(latitude: &str, longitude: &str) -> Option<GeoLocation> {
    let lat = latitude.trim().parse::<f64>().ok()?;
    let lon = longitude.trim().parse::<f64>().ok()?;
    GeoLocation::new(lat, lon).ok()
}

/// Reads the itinerary from a CSV file
#[derive(Debug, Clone)]
pub struct CsvItinerarySource {
    path: PathBuf,
}

impl CsvItinerarySource {
    /// Create a source for the given file; nothing is read until `load`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this source reads
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self, file: File) -> Result<Itinerary, ApplicationError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Headers)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|e| self.load_error(&e.to_string()))?
            .clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(self.load_error(&format!(
                "missing required column(s): {}",
                missing.join(", ")
            )));
        }

        let mut stops = Vec::new();
        for (idx, result) in reader.deserialize::<CsvRow>().enumerate() {
            let row = result.map_err(|e| self.load_error(&e.to_string()))?;
            // Header is line 1
            stops.push(row.into_stop(idx + 2)?);
        }

        Ok(Itinerary::new(stops))
    }

    fn load_error(&self, reason: &str) -> ApplicationError {
        ApplicationError::DataLoad(format!("{}: {reason}", self.path.display()))
    }
}

impl ItinerarySourcePort for CsvItinerarySource {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<Itinerary, ApplicationError> {
        let file = File::open(&self.path).map_err(|e| self.load_error(&e.to_string()))?;
        let itinerary = self.read(file)?;
        debug!(stops = itinerary.len(), "Parsed itinerary file");
        Ok(itinerary)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
