//! Application layer - Use cases and orchestration
//!
//! Holds the itinerary use cases (map rendering, markdown and agenda
//! formatting, weather lookup) and the ports implemented by infrastructure.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
