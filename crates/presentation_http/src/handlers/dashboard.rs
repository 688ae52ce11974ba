//! Dashboard page
//!
//! Server-rendered counterpart of the interactive dashboard: the sidebar
//! holds the weather lookup and the agenda, the main column the map
//! controls, the map and the optional data table. Every control submits a
//! GET form, so the page state lives entirely in the query string.

use application::{
    ApplicationError, NO_FOCUS, SelectionOptions, build_agenda, format_markdown_table,
};
use axum::{
    extract::{Query, State},
    response::Html,
};
use infrastructure::templates::{
    AgendaDayData, DashboardData, SizeOptionData, WeatherPanelData, size_value,
};
use serde::Deserialize;
use tracing::{debug, instrument};

use super::MapQuery;
use crate::{error::ApiError, state::AppState};

/// Query for `/`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub date: Option<String>,
    pub focus: Option<String>,
    pub size: Option<String>,
    /// City in the weather input
    pub city: Option<String>,
    /// Set by "Get Weather"; without it no lookup happens
    #[serde(default)]
    pub weather: bool,
    /// Whether the data table is expanded
    #[serde(default)]
    pub show_data: bool,
}

impl DashboardQuery {
    fn map_query(&self) -> MapQuery {
        MapQuery {
            date: self.date.clone(),
            focus: self.focus.clone(),
            size: self.size.clone(),
        }
    }
}

/// The dashboard page
#[instrument(skip(state))]
pub async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Html<String>, ApiError> {
    let itinerary = state.itinerary_service.itinerary()?;
    let options = SelectionOptions::from_itinerary(&itinerary);
    let selection = query.map_query().selection()?;

    // An unknown focus is shown in place of the map
    let (map_html, map_error) = match state.map_renderer.render(
        &itinerary,
        &selection.filter,
        selection.focus.as_deref(),
    ) {
        Ok(view) => (
            state
                .templates
                .render_map_page(&view, selection.size, &state.config.map)?,
            None,
        ),
        Err(e @ ApplicationError::NotFound(_)) => (String::new(), Some(e.to_string())),
        Err(e) => return Err(e.into()),
    };

    let city = query
        .city
        .as_deref()
        .map_or(state.config.weather.default_city.as_str(), str::trim);
    let (weather, weather_error) = if query.weather {
        match state.weather_service.current(city).await {
            Ok(reading) => (Some(WeatherPanelData::from(&reading)), None),
            Err(e) => {
                debug!(error = %e, "Showing weather error inline");
                (None, Some(e.to_string()))
            },
        }
    } else {
        (None, None)
    };

    let agenda = build_agenda(&itinerary)
        .into_iter()
        .map(|day| AgendaDayData {
            heading: day.heading(),
            stops: day.stops,
        })
        .collect();

    let data = DashboardData {
        dates: options.dates,
        locations: options.locations,
        selected_date: selection.filter.to_string(),
        selected_focus: selection
            .focus
            .clone()
            .unwrap_or_else(|| NO_FOCUS.to_string()),
        sizes: SizeOptionData::all(),
        selected_size: size_value(selection.size),
        map_width: selection.size.width(),
        map_height: selection.size.height(),
        map_html,
        map_error,
        city: city.to_string(),
        weather,
        weather_error,
        show_data: query.show_data,
        markdown: format_markdown_table(&itinerary),
        agenda,
    };

    Ok(Html(state.templates.render_dashboard(&data)?))
}
