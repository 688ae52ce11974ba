//! Template engine module for rendering the map page and the dashboard
//!
//! Uses the Tera templating engine with embedded templates:
//! - `map/leaflet.html`: standalone Leaflet map for a `MapView`
//! - `dashboard/index.html`: the itinerary dashboard with its controls
//!
//! # Example
//!
//! ```rust,ignore
//! use infrastructure::templates::TemplateEngine;
//!
//! let engine = TemplateEngine::new()?;
//! let html = engine.render_map_page(&view, MapSize::Standard, &MapConfig::default())?;
//! ```

use application::MapView;
use domain::{MapSize, TripStop, WeatherReading};
use serde::Serialize;
use std::sync::Arc;
use tera::{Context, Tera};
use thiserror::Error;
use tracing::debug;

use crate::config::MapConfig;

/// Error type for template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template not found
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Template rendering failed
    #[error("Template rendering failed: {0}")]
    Render(String),

    /// Template compilation failed
    #[error("Template compilation failed: {0}")]
    Compile(String),

    /// Invalid template context
    #[error("Invalid context: {0}")]
    Context(String),
}

impl From<tera::Error> for TemplateError {
    fn from(e: tera::Error) -> Self {
        match e.kind {
            tera::ErrorKind::TemplateNotFound(name) => Self::NotFound(name),
            _ => Self::Render(e.to_string()),
        }
    }
}

/// Template context wrapper for type-safe context building
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    inner: Context,
}

impl TemplateContext {
    /// Create a new empty template context
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Context::new(),
        }
    }

    /// Insert a value into the context
    pub fn insert<T: Serialize>(&mut self, key: &str, value: &T) {
        self.inner.insert(key, value);
    }
}

/// Marker as consumed by the Leaflet script
#[derive(Debug, Clone, Serialize)]
struct MarkerScriptData<'a> {
    lat: f64,
    lon: f64,
    label: &'a str,
    popup: &'a str,
}

/// Everything the Leaflet script needs, serialized once as JSON
#[derive(Debug, Clone, Serialize)]
struct MapScriptData<'a> {
    center: [f64; 2],
    zoom: u8,
    tile_url: &'a str,
    attribution: &'a str,
    popup_max_width: u32,
    markers: Vec<MarkerScriptData<'a>>,
}

/// Serialize a value for embedding inside a `<script>` element
///
/// `</` is escaped so popup HTML cannot close the script early.
fn script_json<T: Serialize>(value: &T) -> Result<String, TemplateError> {
    serde_json::to_string(value)
        .map(|json| json.replace("</", "<\\/"))
        .map_err(|e| TemplateError::Context(e.to_string()))
}

/// Current weather as shown on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct WeatherPanelData {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Capitalized description
    pub description: String,
    /// Humidity, formatted with a percent sign
    pub humidity: String,
    /// Wind speed in m/s
    pub wind_speed: f64,
}

impl From<&WeatherReading> for WeatherPanelData {
    fn from(reading: &WeatherReading) -> Self {
        Self {
            temperature: reading.temperature_c,
            description: reading.capitalized_description(),
            humidity: reading.humidity.to_string(),
            wind_speed: reading.wind_speed_mps,
        }
    }
}

/// One day of the agenda section
#[derive(Debug, Clone, Serialize)]
pub struct AgendaDayData {
    /// Heading such as `Day 1: January 15, 2025`
    pub heading: String,
    /// Stops on that day
    pub stops: Vec<TripStop>,
}

/// A size radio option
#[derive(Debug, Clone, Serialize)]
pub struct SizeOptionData {
    /// Query value, e.g. `standard`
    pub value: String,
    /// Label, e.g. `Standard (700x500)`
    pub label: String,
}

impl SizeOptionData {
    /// All size presets in display order
    #[must_use]
    pub fn all() -> Vec<Self> {
        MapSize::ALL
            .iter()
            .map(|size| Self {
                value: size_value(*size),
                label: format!("{} ({}x{})", size.label(), size.width(), size.height()),
            })
            .collect()
    }
}

/// Query value for a size preset, e.g. `large`
#[must_use]
pub fn size_value(size: MapSize) -> String {
    size.label().to_lowercase()
}

/// Dashboard template data
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    /// Date dropdown options, `All Days` first
    pub dates: Vec<String>,
    /// Focus dropdown options, `None` first
    pub locations: Vec<String>,
    /// Selected date option
    pub selected_date: String,
    /// Selected focus option
    pub selected_focus: String,
    /// Size radio options
    pub sizes: Vec<SizeOptionData>,
    /// Selected size value
    pub selected_size: String,
    /// Map frame width in pixels
    pub map_width: u32,
    /// Map frame height in pixels
    pub map_height: u32,
    /// Rendered map page, embedded via `srcdoc`
    pub map_html: String,
    /// Error shown instead of the map (e.g. unknown focus)
    pub map_error: Option<String>,
    /// City in the weather input
    pub city: String,
    /// Weather reading, after a lookup; the other forms carry the lookup
    /// along only while a reading is shown
    pub weather: Option<WeatherPanelData>,
    /// Weather error, after a failed lookup
    pub weather_error: Option<String>,
    /// Whether the data table is expanded
    pub show_data: bool,
    /// Itinerary as a markdown table, shown when `show_data` is set
    pub markdown: String,
    /// Day-by-day agenda
    pub agenda: Vec<AgendaDayData>,
}

/// Embedded templates - compiled into the binary
mod embedded {
    pub const MAP_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>TripBoard map</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <style>
        html, body { margin: 0; padding: 0; }
        #map { width: {{ width }}px; height: {{ height }}px; }
    </style>
</head>
<body>
    <div id="map"></div>
    <script>
        const data = {{ map_json | safe }};
        const map = L.map("map").setView(data.center, data.zoom);
        L.tileLayer(data.tile_url, { attribution: data.attribution }).addTo(map);
        for (const m of data.markers) {
            L.marker([m.lat, m.lon])
                .bindTooltip(m.label)
                .bindPopup(m.popup, { maxWidth: data.popup_max_width })
                .addTo(map);
        }
    </script>
</body>
</html>
"#;

    pub const DASHBOARD: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Turkey Trip Dashboard</title>
    <style>
        body { font-family: Arial, sans-serif; line-height: 1.6; margin: 0; display: flex; }
        aside { width: 280px; padding: 16px; background: #f5f5f5; min-height: 100vh; }
        main { flex: 1; padding: 16px 32px; }
        .error { color: #b00020; }
        pre.markdown { background: #f5f5f5; padding: 8px; overflow-x: auto; }
        iframe { border: 0; }
    </style>
</head>
<body>
<aside>
    <h2>Weather</h2>
    <form method="get" action="/">
        <input type="hidden" name="date" value="{{ selected_date }}">
        <input type="hidden" name="focus" value="{{ selected_focus }}">
        <input type="hidden" name="size" value="{{ selected_size }}">
        {% if show_data %}<input type="hidden" name="show_data" value="true">{% endif %}
        <input type="hidden" name="weather" value="true">
        <label>City <input type="text" name="city" value="{{ city }}"></label>
        <button type="submit">Get Weather</button>
    </form>
    {% if weather %}
    <p>
        <strong>Current Temperature:</strong> {{ weather.temperature }}°C<br>
        <strong>Weather:</strong> {{ weather.description }}<br>
        <strong>Humidity:</strong> {{ weather.humidity }}<br>
        <strong>Wind Speed:</strong> {{ weather.wind_speed }} m/s
    </p>
    {% endif %}
    {% if weather_error %}<p class="error">Error fetching weather data: {{ weather_error }}</p>{% endif %}

    <h2>Agenda</h2>
    {% for day in agenda %}
    <details>
        <summary>{{ day.heading }}</summary>
        <ul>
        {% for stop in day.stops %}
            <li><strong>{{ stop.location }}</strong>: {{ stop.description }}</li>
        {% endfor %}
        </ul>
    </details>
    {% endfor %}
</aside>
<main>
    <h1>Turkey Trip Dashboard</h1>
    <form method="get" action="/">
        <label>Select a date
            <select name="date">
            {% for d in dates %}<option value="{{ d }}"{% if d == selected_date %} selected{% endif %}>{{ d }}</option>{% endfor %}
            </select>
        </label>
        <label>Focus on location
            <select name="focus">
            {% for l in locations %}<option value="{{ l }}"{% if l == selected_focus %} selected{% endif %}>{{ l }}</option>{% endfor %}
            </select>
        </label>
        {% for s in sizes %}
        <label><input type="radio" name="size" value="{{ s.value }}"{% if s.value == selected_size %} checked{% endif %}> {{ s.label }}</label>
        {% endfor %}
        {% if show_data %}<input type="hidden" name="show_data" value="true">{% endif %}
        {% if weather %}<input type="hidden" name="weather" value="true">
        <input type="hidden" name="city" value="{{ city }}">{% endif %}
        <button type="submit">Update map</button>
    </form>

    {% if map_error %}
    <p class="error">{{ map_error }}</p>
    {% else %}
    <iframe width="{{ map_width }}" height="{{ map_height }}" srcdoc="{{ map_html }}"></iframe>
    {% endif %}

    <form method="get" action="/">
        <input type="hidden" name="date" value="{{ selected_date }}">
        <input type="hidden" name="focus" value="{{ selected_focus }}">
        <input type="hidden" name="size" value="{{ selected_size }}">
        {% if not show_data %}<input type="hidden" name="show_data" value="true">{% endif %}
        {% if weather %}<input type="hidden" name="weather" value="true">
        <input type="hidden" name="city" value="{{ city }}">{% endif %}
        <button type="submit">{% if show_data %}Hide Data{% else %}Show Data{% endif %}</button>
    </form>
    {% if show_data %}
    <pre class="markdown">{{ markdown }}</pre>
    {% endif %}
</main>
</body>
</html>
"#;
}

/// Template engine using Tera
#[derive(Clone)]
pub struct TemplateEngine {
    tera: Arc<Tera>,
}

impl std::fmt::Debug for TemplateEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateEngine")
            .field("templates", &self.list_templates())
            .finish_non_exhaustive()
    }
}

impl TemplateEngine {
    /// Create a new template engine with the embedded templates
    pub fn new() -> Result<Self, TemplateError> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html", ".htm", ".xml"]);

        tera.add_raw_template("map/leaflet.html", embedded::MAP_PAGE)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;
        tera.add_raw_template("dashboard/index.html", embedded::DASHBOARD)
            .map_err(|e| TemplateError::Compile(e.to_string()))?;

        debug!("Template engine initialized");
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    /// Render a template with the given context
    pub fn render(
        &self,
        template_name: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        self.tera
            .render(template_name, &context.inner)
            .map_err(TemplateError::from)
    }

    /// Render a standalone Leaflet page for a map view
    pub fn render_map_page(
        &self,
        view: &MapView,
        size: MapSize,
        config: &MapConfig,
    ) -> Result<String, TemplateError> {
        let data = MapScriptData {
            center: [view.center.latitude(), view.center.longitude()],
            zoom: view.zoom,
            tile_url: &config.tile_url,
            attribution: &config.attribution,
            popup_max_width: config.popup_max_width,
            markers: view
                .markers
                .iter()
                .map(|m| MarkerScriptData {
                    lat: m.position.latitude(),
                    lon: m.position.longitude(),
                    label: &m.label,
                    popup: &m.popup_html,
                })
                .collect(),
        };

        let mut ctx = TemplateContext::new();
        ctx.insert("width", &size.width());
        ctx.insert("height", &size.height());
        ctx.insert("map_json", &script_json(&data)?);

        self.render("map/leaflet.html", &ctx)
    }

    /// Render the dashboard page
    pub fn render_dashboard(&self, data: &DashboardData) -> Result<String, TemplateError> {
        let ctx = Context::from_serialize(data).map_err(|e| TemplateError::Context(e.to_string()))?;
        self.tera
            .render("dashboard/index.html", &ctx)
            .map_err(TemplateError::from)
    }

    /// List all available template names
    #[must_use]
    pub fn list_templates(&self) -> Vec<&str> {
        self.tera.get_template_names().collect()
    }
}
