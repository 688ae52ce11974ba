//! Weather lookup configuration.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Weather service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// OpenWeatherMap API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// API key (sensitive - uses `SecretString`)
    ///
    /// Usually left unset here and resolved from `TRIPBOARD_WEATHER_API_KEY`.
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_weather_timeout")]
    pub timeout_secs: u64,

    /// City pre-filled in the weather input
    #[serde(default = "default_city")]
    pub default_city: String,
}

fn default_weather_base_url() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}

const fn default_weather_timeout() -> u64 {
    30
}

fn default_city() -> String {
    "Istanbul".to_string()
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
            timeout_secs: default_weather_timeout(),
            default_city: default_city(),
        }
    }
}
