//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: ({latitude}, {longitude})")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Date string that matches none of the accepted formats
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Unknown date filter value
    #[error("Invalid date filter: {0}")]
    InvalidDateFilter(String),

    /// Unknown map size preset
    #[error("Invalid map size: {0}")]
    InvalidMapSize(String),
}
