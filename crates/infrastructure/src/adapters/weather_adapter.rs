//! Weather adapter - Implements WeatherPort using integration_weather

use application::error::ApplicationError;
use application::ports::WeatherPort;
use async_trait::async_trait;
use domain::{Humidity, WeatherReading};
use integration_weather::{
    CurrentConditions, OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError,
};
use secrecy::ExposeSecret;
use tracing::{debug, instrument, warn};

use crate::config::WeatherAppConfig;

/// Adapter for the OpenWeatherMap current-weather API
///
/// Without an API key the adapter still constructs, and every lookup fails
/// with `ApplicationError::Configuration`. The rest of the dashboard keeps
/// working.
pub struct WeatherAdapter {
    client: Option<OpenWeatherMapClient>,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherMapClient")
            .field("configured", &self.is_configured())
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter from a client configuration
    ///
    /// # Errors
    ///
    /// Returns `Configuration` if the API key is empty, `Internal` if the
    /// HTTP client fails to initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        if config.api_key.trim().is_empty() {
            return Err(ApplicationError::Configuration(
                "weather API key is empty".into(),
            ));
        }
        let client = OpenWeatherMapClient::new(config)
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
        Ok(Self {
            client: Some(client),
        })
    }

    /// Create an adapter from the application config section
    ///
    /// A missing key yields an unconfigured adapter rather than an error.
    ///
    /// # Errors
    ///
    /// Returns `Internal` if the HTTP client fails to initialize.
    pub fn from_app_config(config: &WeatherAppConfig) -> Result<Self, ApplicationError> {
        match config.api_key.as_ref() {
            Some(key) if !key.expose_secret().trim().is_empty() => {
                Self::with_config(WeatherConfig {
                    base_url: config.base_url.clone(),
                    api_key: key.expose_secret().to_string(),
                    timeout_secs: config.timeout_secs,
                })
            },
            _ => {
                warn!("No weather API key configured; weather lookups are disabled");
                Ok(Self::unconfigured())
            },
        }
    }

    /// Adapter without credentials
    pub const fn unconfigured() -> Self {
        Self { client: None }
    }

    /// Whether an API key is available
    pub const fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConnectionFailed(e) => ApplicationError::Network(e),
            WeatherError::InvalidCity => {
                ApplicationError::InvalidOperation("City name must not be empty".into())
            },
            other => ApplicationError::Api(other.to_string()),
        }
    }

    /// Convert provider conditions to the domain reading
    fn map_conditions(conditions: CurrentConditions) -> Result<WeatherReading, ApplicationError> {
        let humidity = Humidity::from_percent(conditions.humidity)
            .map_err(|e| ApplicationError::Api(e.to_string()))?;

        Ok(WeatherReading {
            city: conditions.city,
            temperature_c: conditions.temperature,
            description: conditions.description,
            humidity,
            wind_speed_mps: conditions.wind_speed,
        })
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, ApplicationError> {
        let Some(client) = self.client.as_ref() else {
            return Err(ApplicationError::Configuration(
                "weather API key is not set (TRIPBOARD_WEATHER_API_KEY)".into(),
            ));
        };

        let conditions = client
            .current_by_city(city)
            .await
            .map_err(Self::map_error)?;
        debug!(summary = %conditions.summary(), "Fetched current weather");

        Self::map_conditions(conditions)
    }
}
