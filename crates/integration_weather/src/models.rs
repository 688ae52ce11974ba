//! Weather data models
//!
//! Wire types for the OpenWeatherMap `/weather` payload and the validated
//! `CurrentConditions` extracted from it.

use serde::{Deserialize, Serialize};

use crate::client::WeatherError;

/// Current conditions for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// City name as resolved by the provider
    pub city: Option<String>,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Condition text, e.g. "broken clouds"
    pub description: String,
    /// Relative humidity in percent
    pub humidity: u64,
    /// Wind speed in metres per second
    pub wind_speed: f64,
}

impl CurrentConditions {
    /// One-line summary for logs and CLI output
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {:.1}°, {}, humidity {}%, wind {:.1}",
            self.city.as_deref().unwrap_or("unknown"),
            self.temperature,
            self.description,
            self.humidity,
            self.wind_speed
        )
    }
}

/// Raw `/weather` response
///
/// Every field is optional so that an incomplete payload can be reported
/// precisely instead of failing with a generic decode error.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ApiResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub main: Option<MainData>,
    #[serde(default)]
    pub weather: Vec<ConditionData>,
    #[serde(default)]
    pub wind: Option<WindData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct MainData {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub humidity: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ConditionData {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct WindData {
    #[serde(default)]
    pub speed: Option<f64>,
}

/// Error body returned with non-success statuses, e.g.
/// `{"cod":"404","message":"city not found"}`
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

fn missing(field: &str) -> WeatherError {
    WeatherError::ParseError(format!("missing field: {field}"))
}

impl TryFrom<ApiResponse> for CurrentConditions {
    type Error = WeatherError;

    fn try_from(response: ApiResponse) -> Result<Self, Self::Error> {
        let main = response.main.ok_or_else(|| missing("main"))?;
        let temperature = main.temp.ok_or_else(|| missing("main.temp"))?;
        let humidity = main.humidity.ok_or_else(|| missing("main.humidity"))?;

        let condition = response
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| missing("weather[0]"))?;
        let description = condition
            .description
            .ok_or_else(|| missing("weather[0].description"))?;

        let wind_speed = response
            .wind
            .and_then(|w| w.speed)
            .ok_or_else(|| missing("wind.speed"))?;

        Ok(Self {
            city: response.name,
            temperature,
            description,
            humidity,
            wind_speed,
        })
    }
}
