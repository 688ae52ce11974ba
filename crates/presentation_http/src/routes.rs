//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Pages
        .route("/", get(handlers::dashboard::dashboard))
        .route("/map", get(handlers::map::map_page))
        // JSON / text API
        .route("/api/itinerary", get(handlers::api::itinerary))
        .route("/api/itinerary/options", get(handlers::api::options))
        .route("/api/itinerary/markdown", get(handlers::api::markdown))
        .route("/api/map", get(handlers::map::map_json))
        .route("/api/weather", get(handlers::weather::current_weather))
        // Health
        .route("/health", get(handlers::health::health_check))
        // Attach state
        .with_state(state)
}
