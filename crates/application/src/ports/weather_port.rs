//! Weather service port
//!
//! Defines the interface for looking up current conditions by city name.

use async_trait::async_trait;
use domain::WeatherReading;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current weather for a city
    ///
    /// Exactly one request is made per call; there is no retry.
    ///
    /// # Errors
    ///
    /// `ApplicationError::Network` when the host cannot be reached,
    /// `ApplicationError::Api` on an error status or a payload missing
    /// temperature, description, humidity or wind speed.
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, ApplicationError>;
}
