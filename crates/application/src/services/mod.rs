//! Application services - itinerary use cases

pub mod agenda;
pub mod itinerary_service;
pub mod map_renderer;
pub mod markdown_formatter;
pub mod weather_service;

pub use agenda::{DayPlan, build_agenda, format_agenda};
pub use itinerary_service::{ItineraryService, NO_FOCUS, SelectionOptions, parse_focus};
pub use map_renderer::{MapDefaults, MapRenderer, MapView, Marker, popup_html};
pub use markdown_formatter::format_markdown_table;
pub use weather_service::{WeatherService, format_weather_report};
