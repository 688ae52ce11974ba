//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the CSV itinerary
//! source, the OpenWeatherMap adapter and the environment secret store.
//! Also holds configuration loading and the HTML templates.

pub mod adapters;
pub mod config;
pub mod templates;

pub use adapters::*;
pub use config::{
    AppConfig, GeoLocationConfig, ItineraryConfig, MapConfig, ServerConfig, WeatherAppConfig,
};
pub use templates::{TemplateEngine, TemplateError};
