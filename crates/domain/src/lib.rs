//! Domain layer for TripBoard
//!
//! Contains the itinerary model, value objects, and domain errors.
//! This layer performs no I/O and defines the ubiquitous language:
//! a *stop* is one itinerary row, a *focus* is the stop the map centers on,
//! and a *marker* is a map annotation for a stop.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
