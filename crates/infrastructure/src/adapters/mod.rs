//! Adapters - Implementations of application ports

mod csv_itinerary_source;
mod env_secret_store;
mod weather_adapter;

pub use csv_itinerary_source::{CsvItinerarySource, REQUIRED_COLUMNS};
pub use env_secret_store::{ENV_PREFIX, EnvSecretStore};
pub use weather_adapter::WeatherAdapter;
