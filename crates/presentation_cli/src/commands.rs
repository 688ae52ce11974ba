//! Command implementations
//!
//! Each command returns the text to print so it can be tested without a
//! terminal.

use std::path::Path;

use anyhow::Context;
use application::{
    MapRenderer, SelectionOptions, WeatherService, build_agenda, format_agenda,
    format_markdown_table, format_weather_report, parse_focus,
};
use domain::{DateFilter, Itinerary, MapSize};
use infrastructure::{MapConfig, TemplateEngine};

/// Selections for the `map` command
#[derive(Debug, Clone, Default)]
pub struct MapArgs {
    pub date: Option<String>,
    pub focus: Option<String>,
    pub size: Option<String>,
    pub json: bool,
}

/// Date options, one per line, `All Days` first
pub fn list_dates(itinerary: &Itinerary) -> String {
    SelectionOptions::from_itinerary(itinerary).dates.join("\n")
}

/// Focus options, one per line, `None` first
pub fn list_locations(itinerary: &Itinerary) -> String {
    SelectionOptions::from_itinerary(itinerary).locations.join("\n")
}

/// Markdown table of every stop
pub fn table(itinerary: &Itinerary) -> String {
    format_markdown_table(itinerary)
}

/// Day-by-day agenda
pub fn agenda(itinerary: &Itinerary) -> String {
    format_agenda(&build_agenda(itinerary))
}

/// Render the map as a Leaflet page, or as JSON with `--json`
pub fn render_map(
    itinerary: &Itinerary,
    renderer: &MapRenderer,
    templates: &TemplateEngine,
    map_config: &MapConfig,
    args: &MapArgs,
) -> anyhow::Result<String> {
    let filter: DateFilter = args.date.as_deref().unwrap_or_default().parse()?;
    let size: MapSize = args.size.as_deref().unwrap_or("standard").parse()?;
    let view = renderer.render(itinerary, &filter, parse_focus(args.focus.as_deref()))?;

    if args.json {
        Ok(serde_json::to_string_pretty(&view)?)
    } else {
        Ok(templates.render_map_page(&view, size, map_config)?)
    }
}

/// Write rendered output to a file
pub fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))
}

/// Look up and format current weather
pub async fn weather(service: &WeatherService, city: &str) -> anyhow::Result<String> {
    let reading = service
        .current(city)
        .await
        .context("Error fetching weather data")?;
    let title = reading.city.as_deref().unwrap_or(city.trim());
    Ok(format!(
        "Weather in {title}\n\n{}",
        format_weather_report(&reading)
    ))
}
