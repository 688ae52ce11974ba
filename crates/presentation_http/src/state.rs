//! Application state shared across handlers

use std::sync::Arc;

use application::{
    ApplicationError, ItineraryService, MapRenderer, WeatherService,
    ports::{ItinerarySourcePort, WeatherPort},
};
use infrastructure::{AppConfig, TemplateEngine, TemplateError};
use thiserror::Error;

/// Failure to assemble the state at startup
#[derive(Debug, Error)]
pub enum StateError {
    #[error(transparent)]
    Config(#[from] ApplicationError),

    #[error(transparent)]
    Templates(#[from] TemplateError),
}

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Memoized itinerary
    pub itinerary_service: Arc<ItineraryService>,
    /// Map view builder
    pub map_renderer: MapRenderer,
    /// Weather lookups
    pub weather_service: Arc<WeatherService>,
    /// HTML templates
    pub templates: TemplateEngine,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Wire services from configuration and the two outbound ports
    pub fn new(
        config: AppConfig,
        source: Arc<dyn ItinerarySourcePort>,
        weather: Arc<dyn WeatherPort>,
    ) -> Result<Self, StateError> {
        let map_renderer = MapRenderer::new(config.map.map_defaults()?);

        Ok(Self {
            itinerary_service: Arc::new(ItineraryService::new(source)),
            map_renderer,
            weather_service: Arc::new(WeatherService::new(weather)),
            templates: TemplateEngine::new()?,
            config: Arc::new(config),
        })
    }
}
