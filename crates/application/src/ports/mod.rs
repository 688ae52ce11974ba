//! Ports - Interfaces implemented by infrastructure adapters

mod itinerary_source;
mod secret_store;
mod weather_port;

pub use itinerary_source::ItinerarySourcePort;
pub use secret_store::SecretStorePort;
pub use weather_port::WeatherPort;

#[cfg(test)]
pub use itinerary_source::MockItinerarySourcePort;
#[cfg(test)]
pub use secret_store::MockSecretStorePort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
