//! Weather reading - ephemeral current conditions for a city

use serde::{Deserialize, Serialize};

use crate::value_objects::Humidity;

/// Current weather conditions as shown next to the weather control
///
/// Produced fresh on every lookup and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// City name as resolved by the provider, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Temperature in degrees Celsius
    pub temperature_c: f64,
    /// Provider description, e.g. "scattered clouds"
    pub description: String,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in metres per second
    pub wind_speed_mps: f64,
}

impl WeatherReading {
    /// Description with the first letter upper-cased and the rest lower-cased
    #[must_use]
    pub fn capitalized_description(&self) -> String {
        let mut chars = self.description.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
        })
    }
}
