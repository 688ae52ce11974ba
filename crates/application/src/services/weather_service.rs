//! Weather service - current conditions for a city

use std::sync::Arc;

use domain::WeatherReading;
use tracing::{info, instrument, warn};

use crate::error::ApplicationError;
use crate::ports::WeatherPort;

/// Looks up current weather through a `WeatherPort`
pub struct WeatherService {
    port: Arc<dyn WeatherPort>,
}

impl std::fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherService").finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a service backed by the given port
    pub fn new(port: Arc<dyn WeatherPort>) -> Self {
        Self { port }
    }

    /// Current weather for `city`
    ///
    /// # Errors
    ///
    /// `InvalidOperation` for a blank city name (no request is made);
    /// otherwise whatever the port reports.
    #[instrument(skip(self))]
    pub async fn current(&self, city: &str) -> Result<WeatherReading, ApplicationError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ApplicationError::InvalidOperation(
                "City name must not be empty".to_string(),
            ));
        }

        match self.port.current_weather(city).await {
            Ok(reading) => {
                info!(
                    city = %city,
                    temperature = reading.temperature_c,
                    "Weather lookup succeeded"
                );
                Ok(reading)
            },
            Err(e) => {
                warn!(city = %city, error = %e, "Weather lookup failed");
                Err(e)
            },
        }
    }
}

/// Format a reading as four markdown lines
#[must_use]
pub fn format_weather_report(reading: &WeatherReading) -> String {
    format!(
        "**Current Temperature:** {}°C\n\
         **Weather:** {}\n\
         **Humidity:** {}\n\
         **Wind Speed:** {} m/s\n",
        reading.temperature_c,
        reading.capitalized_description(),
        reading.humidity,
        reading.wind_speed_mps
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MockWeatherPort;
    use domain::Humidity;

    fn reading() -> WeatherReading {
        WeatherReading {
            city: Some("Istanbul".to_string()),
            temperature_c: 8.5,
            description: "light rain".to_string(),
            humidity: Humidity::new(87).expect("valid humidity"),
            wind_speed_mps: 5.1,
        }
    }

    #[tokio::test]
    async fn returns_reading_from_port() {
        let mut port = MockWeatherPort::new();
        port.expect_current_weather()
            .withf(|city| city == "Istanbul")
            .times(1)
            .returning(|_| Ok(reading()));

        let service = WeatherService::new(Arc::new(port));
        let result = service.current("  Istanbul ").await.expect("reading");
        assert_eq!(result, reading());
    }

    #[tokio::test]
    async fn blank_city_makes_no_request() {
        let mut port = MockWeatherPort::new();
        port.expect_current_weather().times(0);

        let service = WeatherService::new(Arc::new(port));
        let result = service.current("   ").await;
        assert!(matches!(result, Err(ApplicationError::InvalidOperation(_))));
    }

    #[tokio::test]
    async fn port_errors_propagate_unchanged() {
        let mut port = MockWeatherPort::new();
        port.expect_current_weather()
            .times(1)
            .returning(|_| Err(ApplicationError::Api("missing main.temp".into())));

        let service = WeatherService::new(Arc::new(port));
        let err = service.current("Ankara").await.expect_err("should fail");
        assert!(matches!(err, ApplicationError::Api(_)));
    }

    #[test]
    fn report_matches_display_format() {
        assert_eq!(
            format_weather_report(&reading()),
            "**Current Temperature:** 8.5°C\n**Weather:** Light rain\n\
             **Humidity:** 87%\n**Wind Speed:** 5.1 m/s\n"
        );
    }
}
