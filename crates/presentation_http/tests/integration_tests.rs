//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use application::{
    error::ApplicationError,
    ports::{ItinerarySourcePort, WeatherPort},
};
use async_trait::async_trait;
use axum_test::TestServer;
use chrono::NaiveDate;
use domain::{GeoLocation, Humidity, Itinerary, TripStop, WeatherReading};
use infrastructure::AppConfig;
use presentation_http::{routes::create_router, state::AppState};

/// In-memory itinerary source counting loads
struct StaticSource {
    stops: Vec<TripStop>,
    loads: Arc<AtomicUsize>,
}

impl ItinerarySourcePort for StaticSource {
    fn load(&self) -> Result<Itinerary, ApplicationError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(Itinerary::new(self.stops.clone()))
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Source whose file is broken
struct BrokenSource;

impl ItinerarySourcePort for BrokenSource {
    fn load(&self) -> Result<Itinerary, ApplicationError> {
        Err(ApplicationError::DataLoad(
            "turkey_trip.csv: missing required column(s): Latitude".into(),
        ))
    }

    fn describe(&self) -> String {
        "broken".to_string()
    }
}

/// Weather stub with a fixed outcome
enum StubWeather {
    Reading,
    Unreachable,
    Unconfigured,
}

#[async_trait]
impl WeatherPort for StubWeather {
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, ApplicationError> {
        match self {
            Self::Reading => Ok(WeatherReading {
                city: Some(city.to_string()),
                temperature_c: 8.4,
                description: "scattered clouds".to_string(),
                humidity: Humidity::new(81).expect("valid humidity"),
                wind_speed_mps: 4.12,
            }),
            Self::Unreachable => Err(ApplicationError::Network("connection refused".into())),
            Self::Unconfigured => Err(ApplicationError::Configuration(
                "weather API key is not set".into(),
            )),
        }
    }
}

/// Weather port counting lookups
struct CountingWeather {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl WeatherPort for CountingWeather {
    async fn current_weather(&self, city: &str) -> Result<WeatherReading, ApplicationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StubWeather::Reading.current_weather(city).await
    }
}

fn stop(day: u32, location: &str, coords: Option<(f64, f64)>) -> TripStop {
    let stop = TripStop::new(
        NaiveDate::from_ymd_opt(2025, 1, day).expect("valid date"),
        location,
        format!("Visit {location}"),
        format!("https://maps.google.com/?q={}", location.replace(' ', "+")),
    );
    match coords {
        Some((lat, lon)) => stop.with_coordinates(GeoLocation::new(lat, lon).expect("valid")),
        None => stop,
    }
}

fn sample_stops() -> Vec<TripStop> {
    vec![
        stop(15, "Blue Mosque", Some((41.0054, 28.9768))),
        stop(15, "Hagia Sophia", Some((41.0086, 28.9802))),
        stop(16, "Galata Tower", Some((41.0256, 28.9744))),
        stop(17, "Hotel", None),
    ]
}

fn create_test_server_with(
    source: Arc<dyn ItinerarySourcePort>,
    weather: StubWeather,
) -> TestServer {
    create_test_server_with_port(source, Arc::new(weather))
}

fn create_test_server_with_port(
    source: Arc<dyn ItinerarySourcePort>,
    weather: Arc<dyn WeatherPort>,
) -> TestServer {
    let state =
        AppState::new(AppConfig::default(), source, weather).expect("Failed to build state");
    TestServer::new(create_router(state)).expect("Failed to create test server")
}

fn create_counting_server() -> (TestServer, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let server = create_test_server_with_port(
        Arc::new(StaticSource {
            stops: sample_stops(),
            loads: Arc::default(),
        }),
        Arc::new(CountingWeather {
            calls: Arc::clone(&calls),
        }),
    );
    (server, calls)
}

fn create_test_server() -> TestServer {
    create_test_server_with(
        Arc::new(StaticSource {
            stops: sample_stops(),
            loads: Arc::default(),
        }),
        StubWeather::Reading,
    )
}

// ============================================================================
// Health
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();

    let response = server.get("/health").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
    assert!(body["version"].is_string());
    assert_eq!(body["itinerary_loaded"], false);
}

// ============================================================================
// Itinerary API
// ============================================================================

#[tokio::test]
async fn test_itinerary_json() {
    let server = create_test_server();

    let response = server.get("/api/itinerary").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let stops = body.as_array().expect("array");
    assert_eq!(stops.len(), 4);
    assert_eq!(stops[0]["location"], "Blue Mosque");
    assert_eq!(stops[0]["date"], "2025-01-15");
    assert!(stops[3]["coordinates"].is_null());
}

#[tokio::test]
async fn test_itinerary_is_loaded_once() {
    let loads = Arc::new(AtomicUsize::new(0));
    let server = create_test_server_with(
        Arc::new(StaticSource {
            stops: sample_stops(),
            loads: Arc::clone(&loads),
        }),
        StubWeather::Reading,
    );

    server.get("/api/itinerary").await.assert_status_ok();
    server.get("/api/map").await.assert_status_ok();
    server.get("/").await.assert_status_ok();

    assert_eq!(loads.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_options() {
    let server = create_test_server();

    let response = server.get("/api/itinerary/options").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["dates"],
        serde_json::json!(["All Days", "2025-01-15", "2025-01-16", "2025-01-17"])
    );
    assert_eq!(
        body["locations"],
        serde_json::json!(["None", "Blue Mosque", "Hagia Sophia", "Galata Tower", "Hotel"])
    );
}

#[tokio::test]
async fn test_markdown_table() {
    let server = create_test_server();

    let response = server.get("/api/itinerary/markdown").await;

    response.assert_status_ok();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/markdown"));

    let text = response.text();
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("| Date | Location | Description | Google Maps Link |")
    );
    assert_eq!(
        lines.next(),
        Some("|------|----------|-------------|------------------|")
    );
    assert_eq!(
        lines.next(),
        Some(
            "| 2025-01-15 | Blue Mosque | Visit Blue Mosque | [Link](https://maps.google.com/?q=Blue+Mosque) |"
        )
    );
    assert_eq!(text.lines().count(), 6);
}

#[tokio::test]
async fn test_broken_source_is_500() {
    let server = create_test_server_with(Arc::new(BrokenSource), StubWeather::Reading);

    let response = server.get("/api/itinerary").await;

    response.assert_status_internal_server_error();
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "internal_error");
}

// ============================================================================
// Map
// ============================================================================

#[tokio::test]
async fn test_map_all_days() {
    let server = create_test_server();

    let response = server.get("/api/map").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["zoom"], 12);
    assert_eq!(body["center"]["latitude"], 41.0083);
    assert_eq!(body["center"]["longitude"], 28.9784);
    // Hotel has no coordinates
    assert_eq!(body["markers"].as_array().expect("array").len(), 3);
}

#[tokio::test]
async fn test_map_filtered_by_date() {
    let server = create_test_server();

    let response = server
        .get("/api/map")
        .add_query_param("date", "2025-01-15")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    let labels: Vec<&str> = body["markers"]
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|m| m["label"].as_str())
        .collect();
    assert_eq!(labels, ["Blue Mosque", "Hagia Sophia"]);
}

#[tokio::test]
async fn test_map_date_without_stops_has_no_markers() {
    let server = create_test_server();

    let response = server
        .get("/api/map")
        .add_query_param("date", "2025-02-01")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert!(body["markers"].as_array().expect("array").is_empty());
}

#[tokio::test]
async fn test_map_focus() {
    let server = create_test_server();

    let response = server
        .get("/api/map")
        .add_query_param("focus", "Blue Mosque")
        .await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["zoom"], 16);
    assert_eq!(body["center"]["latitude"], 41.0054);
    assert_eq!(body["center"]["longitude"], 28.9768);
    assert_eq!(
        body["markers"][0]["popup_html"],
        "Blue Mosque: Visit Blue Mosque<br><a href='https://maps.google.com/?q=Blue+Mosque' target='_blank'>Google Maps</a>"
    );
}

#[tokio::test]
async fn test_map_unknown_focus_is_404() {
    let server = create_test_server();

    let response = server
        .get("/api/map")
        .add_query_param("focus", "Atlantis")
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_map_invalid_date_is_400() {
    let server = create_test_server();

    let response = server.get("/api/map").add_query_param("date", "someday").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_map_page_html() {
    let server = create_test_server();

    let response = server.get("/map").add_query_param("size", "large").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("leaflet"));
    assert!(html.contains("width: 1050px; height: 750px;"));
    assert!(html.contains("\"label\":\"Galata Tower\""));
}

// ============================================================================
// Weather
// ============================================================================

#[tokio::test]
async fn test_weather_defaults_to_configured_city() {
    let server = create_test_server();

    let response = server.get("/api/weather").await;

    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["city"], "Istanbul");
    assert_eq!(body["temperature_c"], 8.4);
    assert_eq!(body["humidity"], 81);
}

#[tokio::test]
async fn test_weather_network_failure_is_502() {
    let server = create_test_server_with(
        Arc::new(StaticSource {
            stops: sample_stops(),
            loads: Arc::default(),
        }),
        StubWeather::Unreachable,
    );

    let response = server.get("/api/weather").add_query_param("city", "Ankara").await;

    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    let body: serde_json::Value = response.json();
    assert_eq!(body["code"], "bad_gateway");
}

#[tokio::test]
async fn test_weather_without_key_is_503() {
    let server = create_test_server_with(
        Arc::new(StaticSource {
            stops: sample_stops(),
            loads: Arc::default(),
        }),
        StubWeather::Unconfigured,
    );

    let response = server.get("/api/weather").await;

    response.assert_status_service_unavailable();
}

#[tokio::test]
async fn test_weather_blank_city_is_400() {
    let server = create_test_server();

    let response = server.get("/api/weather").add_query_param("city", "  ").await;

    response.assert_status_bad_request();
}

// ============================================================================
// Dashboard
// ============================================================================

#[tokio::test]
async fn test_dashboard_renders() {
    let server = create_test_server();

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Turkey Trip Dashboard"));
    assert!(html.contains("<option value=\"All Days\" selected>"));
    assert!(html.contains("Day 1: January 15, 2025"));
    assert!(html.contains("Day 3: January 17, 2025"));
    assert!(html.contains("<iframe width=\"700\" height=\"500\""));
    assert!(html.contains("Show Data"));
    assert!(!html.contains("<pre class=\"markdown\">"));
    // No lookup until a city is submitted
    assert!(!html.contains("Current Temperature"));
}

#[tokio::test]
async fn test_dashboard_map_changes_do_not_fetch_weather() {
    let (server, calls) = create_counting_server();

    server.get("/").await.assert_status_ok();
    server
        .get("/")
        .add_query_param("date", "2025-01-15")
        .add_query_param("focus", "None")
        .add_query_param("size", "large")
        .await
        .assert_status_ok();
    // A city without the lookup trigger is only the input's value
    let response = server
        .get("/")
        .add_query_param("date", "2025-01-16")
        .add_query_param("show_data", "true")
        .add_query_param("city", "Istanbul")
        .await;

    response.assert_status_ok();
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert!(!response.text().contains("Current Temperature"));
}

#[tokio::test]
async fn test_dashboard_map_form_has_no_weather_fields_before_lookup() {
    let server = create_test_server();

    let html = server.get("/").await.text();

    assert_eq!(html.matches("name=\"weather\"").count(), 1);
    assert_eq!(html.matches("name=\"city\"").count(), 1);
}

#[tokio::test]
async fn test_dashboard_get_weather_fetches_once_and_keeps_table_open() {
    let (server, calls) = create_counting_server();

    let response = server
        .get("/")
        .add_query_param("city", "Cappadocia")
        .add_query_param("weather", "true")
        .add_query_param("show_data", "true")
        .await;

    response.assert_status_ok();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    let html = response.text();
    assert!(html.contains("<strong>Current Temperature:</strong> 8.4°C"));
    assert!(html.contains("<pre class=\"markdown\">"));
    // The weather form keeps the data table open on the next lookup
    assert!(html.contains("name=\"show_data\" value=\"true\""));
    assert!(html.contains("name=\"city\" value=\"Cappadocia\""));
}

#[tokio::test]
async fn test_dashboard_with_weather_and_data() {
    let server = create_test_server();

    let response = server
        .get("/")
        .add_query_param("city", "Istanbul")
        .add_query_param("weather", "true")
        .add_query_param("show_data", "true")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<strong>Current Temperature:</strong> 8.4°C"));
    assert!(html.contains("<strong>Weather:</strong> Scattered clouds"));
    assert!(html.contains("<strong>Humidity:</strong> 81%"));
    assert!(html.contains("<strong>Wind Speed:</strong> 4.12 m/s"));
    assert!(html.contains("<pre class=\"markdown\">| Date | Location | Description | Google Maps Link |"));
    assert!(html.contains("| 2025-01-16 | Galata Tower | Visit Galata Tower |"));
}

#[tokio::test]
async fn test_dashboard_weather_error_is_inline() {
    let server = create_test_server_with(
        Arc::new(StaticSource {
            stops: sample_stops(),
            loads: Arc::default(),
        }),
        StubWeather::Unreachable,
    );

    let response = server
        .get("/")
        .add_query_param("city", "Istanbul")
        .add_query_param("weather", "true")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Error fetching weather data: Network error: connection refused"));
    assert!(html.contains("<iframe"));
}

#[tokio::test]
async fn test_dashboard_unknown_focus_replaces_map() {
    let server = create_test_server();

    let response = server.get("/").add_query_param("focus", "Atlantis").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Not found: location &#x27;Atlantis&#x27;"));
    assert!(!html.contains("<iframe"));
}

#[tokio::test]
async fn test_dashboard_keeps_selection() {
    let server = create_test_server();

    let response = server
        .get("/")
        .add_query_param("date", "2025-01-16")
        .add_query_param("focus", "Galata Tower")
        .add_query_param("size", "large")
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("<option value=\"2025-01-16\" selected>"));
    assert!(html.contains("<option value=\"Galata Tower\" selected>"));
    assert!(html.contains("value=\"large\" checked"));
    assert!(html.contains("<iframe width=\"1050\" height=\"750\""));
}
