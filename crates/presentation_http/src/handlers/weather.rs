//! Weather lookup handler

use axum::{
    Json,
    extract::{Query, State},
};
use domain::WeatherReading;
use serde::Deserialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Query for `/api/weather`
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    /// City name; the configured default city when absent
    pub city: Option<String>,
}

/// Current weather for a city
///
/// Network and API failures answer 502; a missing API key answers 503.
#[instrument(skip(state))]
pub async fn current_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<WeatherReading>, ApiError> {
    let city = query
        .city
        .as_deref()
        .unwrap_or(state.config.weather.default_city.as_str());
    Ok(Json(state.weather_service.current(city).await?))
}
