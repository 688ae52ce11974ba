//! TripBoard HTTP presentation layer
//!
//! Serves the itinerary dashboard, the standalone map page and a small
//! JSON API over the same services the CLI uses.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::{AppState, StateError};
