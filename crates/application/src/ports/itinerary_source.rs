//! Itinerary source port
//!
//! Defines where the trip table comes from. Loading is a one-shot, blocking
//! read; callers memoize the result.

use domain::Itinerary;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for reading the itinerary table
#[cfg_attr(test, automock)]
pub trait ItinerarySourcePort: Send + Sync {
    /// Read every stop from the source, in source order
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::DataLoad` if the source is missing,
    /// unreadable, or lacks a required column.
    fn load(&self) -> Result<Itinerary, ApplicationError>;

    /// Short description of the source for log messages (e.g. a file path)
    fn describe(&self) -> String;
}
