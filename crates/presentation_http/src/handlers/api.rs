//! JSON and markdown views of the itinerary

use application::{SelectionOptions, format_markdown_table};
use axum::{
    Json,
    extract::State,
    http::header,
    response::IntoResponse,
};
use domain::Itinerary;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Every stop, in table order
#[instrument(skip(state))]
pub async fn itinerary(State(state): State<AppState>) -> Result<Json<Itinerary>, ApiError> {
    Ok(Json(state.itinerary_service.itinerary()?))
}

/// Options for the date and focus dropdowns
#[instrument(skip(state))]
pub async fn options(State(state): State<AppState>) -> Result<Json<SelectionOptions>, ApiError> {
    Ok(Json(state.itinerary_service.selection_options()?))
}

/// The itinerary as a markdown table
#[instrument(skip(state))]
pub async fn markdown(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let itinerary = state.itinerary_service.itinerary()?;
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        format_markdown_table(&itinerary),
    ))
}
