//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap current-weather API. One request per
//! lookup; retries are left to the caller.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{ApiResponse, CurrentConditions, ErrorBody};

/// Unit system sent with every request: Celsius and metres per second
pub const UNITS: &str = "metric";

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed or timed out
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// API key rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The service does not know the requested city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Empty city name
    #[error("Invalid city name")]
    InvalidCity,

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather service configuration
#[derive(Clone, Deserialize)]
pub struct WeatherConfig {
    /// API base URL (default: <http://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as the `appid` query parameter
    #[serde(default)]
    pub api_key: String,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: String::new(),
            timeout_secs: default_timeout(),
        }
    }
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather client trait for fetching current conditions
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a city name
    async fn current_by_city(&self, city: &str) -> Result<CurrentConditions, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherMapClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Endpoint URL without query parameters
    fn weather_url(&self) -> String {
        format!("{}/weather", self.config.base_url.trim_end_matches('/'))
    }

    /// Classify a transport-level failure
    fn map_send_error(err: &reqwest::Error) -> WeatherError {
        // The URL carries the API key, so it is stripped from the message.
        let mut message = err.to_string();
        if let Some(url) = err.url() {
            message = message.replace(url.as_str(), "<weather endpoint>");
        }

        if err.is_connect() || err.is_timeout() {
            WeatherError::ConnectionFailed(message)
        } else {
            WeatherError::RequestFailed(message)
        }
    }

    /// Classify a non-success status, using the API's error message if present
    fn map_status(status: StatusCode, body: &str, city: &str) -> WeatherError {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED {
            WeatherError::Unauthorized(detail)
        } else if status == StatusCode::NOT_FOUND {
            WeatherError::CityNotFound(city.to_string())
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            WeatherError::RateLimitExceeded
        } else if status.is_server_error() {
            WeatherError::ServiceUnavailable(format!("HTTP {status}"))
        } else if detail.is_empty() {
            WeatherError::RequestFailed(format!("HTTP {status}"))
        } else {
            WeatherError::RequestFailed(format!("HTTP {status}: {detail}"))
        }
    }

    /// Decode a success body into current conditions
    fn parse_body(body: &str) -> Result<CurrentConditions, WeatherError> {
        let response: ApiResponse =
            serde_json::from_str(body).map_err(|e| WeatherError::ParseError(e.to_string()))?;
        CurrentConditions::try_from(response)
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherMapClient {
    #[instrument(skip(self))]
    async fn current_by_city(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::InvalidCity);
        }

        debug!(base_url = %self.config.base_url, "Fetching current weather");

        let response = self
            .client
            .get(self.weather_url())
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", UNITS),
            ])
            .send()
            .await
            .map_err(|e| Self::map_send_error(&e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        if !status.is_success() {
            debug!(status = %status, "Weather service returned an error status");
            return Err(Self::map_status(status, &body, city));
        }

        Self::parse_body(&body)
    }
}
