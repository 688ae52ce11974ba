//! Itinerary service
//!
//! Owns the itinerary source and memoizes the first successful load for the
//! rest of the process. The source is static, so the cache is never
//! invalidated; a failed load is not cached and the next call retries the read.

use std::sync::{Arc, OnceLock};

use domain::{ALL_DAYS, Itinerary};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::ItinerarySourcePort;

/// Sentinel focus option meaning "no focused location"
pub const NO_FOCUS: &str = "None";

/// Interpret a raw focus selection
///
/// Missing, blank and the `None` sentinel all mean no focus.
#[must_use]
pub fn parse_focus(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty() && *s != NO_FOCUS)
}

/// Options offered by the date and focus dropdowns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionOptions {
    /// `All Days` followed by every distinct date, ascending
    pub dates: Vec<String>,
    /// `None` followed by every distinct location in source order
    pub locations: Vec<String>,
}

impl SelectionOptions {
    /// Build dropdown options from a loaded itinerary
    #[must_use]
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        let dates = std::iter::once(ALL_DAYS.to_string())
            .chain(
                itinerary
                    .dates()
                    .into_iter()
                    .map(|d| d.format("%Y-%m-%d").to_string()),
            )
            .collect();

        let locations = std::iter::once(NO_FOCUS.to_string())
            .chain(itinerary.locations().into_iter().map(str::to_string))
            .collect();

        Self { dates, locations }
    }
}

/// Loads the itinerary once and hands out cheap clones
pub struct ItineraryService {
    source: Arc<dyn ItinerarySourcePort>,
    cache: OnceLock<Itinerary>,
}

impl std::fmt::Debug for ItineraryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItineraryService")
            .field("source", &self.source.describe())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl ItineraryService {
    /// Create a service over the given source; nothing is read yet
    pub fn new(source: Arc<dyn ItinerarySourcePort>) -> Self {
        Self {
            source,
            cache: OnceLock::new(),
        }
    }

    /// Whether the itinerary has been loaded
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cache.get().is_some()
    }

    /// The itinerary, loading it on first use
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::DataLoad` if the first load fails.
    #[instrument(skip(self))]
    pub fn itinerary(&self) -> Result<Itinerary, ApplicationError> {
        if let Some(cached) = self.cache.get() {
            debug!("Itinerary served from cache");
            return Ok(cached.clone());
        }

        let loaded = self.source.load()?;
        info!(
            source = %self.source.describe(),
            stops = loaded.len(),
            "Itinerary loaded"
        );

        let missing = loaded.missing_coordinates();
        if missing > 0 {
            warn!(stops = missing, "Some stops have no coordinates and will not be mapped");
        }

        Ok(self.cache.get_or_init(|| loaded).clone())
    }

    /// Options for the date and focus dropdowns
    ///
    /// # Errors
    ///
    /// Propagates load failures.
    pub fn selection_options(&self) -> Result<SelectionOptions, ApplicationError> {
        self.itinerary()
            .map(|itinerary| SelectionOptions::from_itinerary(&itinerary))
    }
}
