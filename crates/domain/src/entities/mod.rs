//! Domain entities

mod itinerary;
mod trip_stop;
mod weather_reading;

pub use itinerary::Itinerary;
pub use trip_stop::TripStop;
pub use weather_reading::WeatherReading;
