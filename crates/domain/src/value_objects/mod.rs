//! Value Objects - Immutable, identity-less domain primitives

mod date_filter;
mod geo_location;
mod humidity;
mod map_size;
mod trip_date;

pub use date_filter::{ALL_DAYS, DateFilter};
pub use geo_location::GeoLocation;
pub use humidity::{Humidity, InvalidHumidity};
pub use map_size::MapSize;
pub use trip_date::{format_long_date, parse_trip_date};
