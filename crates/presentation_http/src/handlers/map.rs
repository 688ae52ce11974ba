//! Map handlers

use application::MapView;
use axum::{
    Json,
    extract::{Query, State},
    response::Html,
};
use tracing::instrument;

use super::MapQuery;
use crate::{error::ApiError, state::AppState};

fn render_view(state: &AppState, query: &MapQuery) -> Result<(MapView, domain::MapSize), ApiError> {
    let selection = query.selection()?;
    let itinerary = state.itinerary_service.itinerary()?;
    let view = state
        .map_renderer
        .render(&itinerary, &selection.filter, selection.focus.as_deref())?;
    Ok((view, selection.size))
}

/// Standalone Leaflet page
#[instrument(skip(state))]
pub async fn map_page(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> Result<Html<String>, ApiError> {
    let (view, size) = render_view(&state, &query)?;
    let html = state
        .templates
        .render_map_page(&view, size, &state.config.map)?;
    Ok(Html(html))
}

/// Map view as JSON
#[instrument(skip(state))]
pub async fn map_json(
    State(state): State<AppState>,
    Query(query): Query<MapQuery>,
) -> Result<Json<MapView>, ApiError> {
    let (view, _) = render_view(&state, &query)?;
    Ok(Json(view))
}
