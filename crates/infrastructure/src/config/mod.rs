//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server settings
//! - `map`: default viewport and tile layer
//! - `weather`: OpenWeatherMap client settings
//!
//! Sources are layered: built-in defaults, then an optional
//! `tripboard.toml`, then `TRIPBOARD_*` environment variables using `__`
//! between nested keys (e.g. `TRIPBOARD_SERVER__PORT=9000`).

mod map;
mod server;
mod weather;

use std::path::{Path, PathBuf};

use application::ports::SecretStorePort;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub use map::{GeoLocationConfig, MAX_ZOOM, MapConfig};
pub use server::ServerConfig;
pub use weather::WeatherAppConfig;

/// Config file looked up in the working directory (any supported extension)
pub const CONFIG_FILE_NAME: &str = "tripboard";

/// Secret path of the weather API key
pub const WEATHER_API_KEY_SECRET: &str = "weather/api_key";

/// Itinerary source configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryConfig {
    /// CSV export of the itinerary sheet
    #[serde(default = "default_itinerary_path")]
    pub path: PathBuf,
}

fn default_itinerary_path() -> PathBuf {
    PathBuf::from("turkey_trip.csv")
}

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self {
            path: default_itinerary_path(),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Itinerary source
    #[serde(default)]
    pub itinerary: ItineraryConfig,

    /// Map rendering
    #[serde(default)]
    pub map: MapConfig,

    /// Weather lookup
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `tripboard.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name(CONFIG_FILE_NAME).required(false))
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8501)?
            .set_default("itinerary.path", "turkey_trip.csv")?
            .add_source(file)
            // Override with environment variables (e.g., TRIPBOARD_SERVER__PORT)
            .add_source(
                config::Environment::with_prefix("TRIPBOARD")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Resolve secrets from a secret store into the config
    ///
    /// Only populates fields that are currently empty/None, so a key set in
    /// the config file or as `TRIPBOARD_WEATHER__API_KEY` takes precedence.
    /// A missing secret is not an error: weather lookups then report a
    /// configuration error when used.
    pub async fn resolve_secrets(&mut self, store: &dyn SecretStorePort) {
        let has_key = self
            .weather
            .api_key
            .as_ref()
            .is_some_and(|k| !k.expose_secret().trim().is_empty());
        if has_key {
            debug!("weather.api_key already configured");
            return;
        }

        match store.get_secret(WEATHER_API_KEY_SECRET).await {
            Ok(value) => {
                self.weather.api_key = Some(SecretString::from(value));
                info!("Loaded weather.api_key from secret store");
            },
            Err(e) => warn!(error = %e, "Weather API key not available"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::ApplicationError;
    use async_trait::async_trait;
    use std::io::Write;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Store holding at most the weather key, counting lookups
    #[derive(Default)]
    struct StubStore {
        key: Option<&'static str>,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl SecretStorePort for StubStore {
        async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            match self.key {
                Some(value) if key == WEATHER_API_KEY_SECRET => Ok(value.to_string()),
                _ => Err(ApplicationError::NotFound(format!("Secret not found: {key}"))),
            }
        }
    }

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.itinerary.path, PathBuf::from("turkey_trip.csv"));
        assert_eq!(config.server.port, 8501);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.map.default_zoom, 12);
        assert_eq!(config.map.focus_zoom, 16);
        assert_eq!(config.map.popup_max_width, 250);
        assert_eq!(config.weather.timeout_secs, 30);
        assert_eq!(config.weather.default_city, "Istanbul");
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[itinerary]
path = "data/trip.csv"

[map]
default_zoom = 10
default_center = {{ latitude = 38.6431, longitude = 34.8289 }}

[weather]
default_city = "Goreme"
timeout_secs = 5

[server]
port = 9000
"#
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.itinerary.path, PathBuf::from("data/trip.csv"));
        assert_eq!(config.map.default_zoom, 10);
        assert_eq!(config.map.focus_zoom, 16);
        assert!((config.map.default_center.latitude - 38.6431).abs() < f64::EPSILON);
        assert_eq!(config.weather.default_city, "Goreme");
        assert_eq!(config.weather.timeout_secs, 5);
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(AppConfig::load_from(Path::new("/no/such/tripboard.toml")).is_err());
    }

    #[test]
    fn serialization_skips_api_key() {
        let mut config = AppConfig::default();
        config.weather.api_key = Some(SecretString::from("abc123"));
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("abc123"));
        assert!(!json.contains("api_key"));
    }

    #[tokio::test]
    async fn resolve_secrets_fills_missing_key() {
        let store = StubStore {
            key: Some("from-env"),
            ..Default::default()
        };

        let mut config = AppConfig::default();
        config.resolve_secrets(&store).await;

        assert_eq!(
            config.weather.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("from-env".to_string())
        );
    }

    #[tokio::test]
    async fn resolve_secrets_keeps_configured_key() {
        let store = StubStore {
            key: Some("from-env"),
            ..Default::default()
        };

        let mut config = AppConfig::default();
        config.weather.api_key = Some(SecretString::from("from-file"));
        config.resolve_secrets(&store).await;

        assert_eq!(store.lookups.load(Ordering::SeqCst), 0);
        assert_eq!(
            config.weather.api_key.as_ref().map(|k| k.expose_secret().to_string()),
            Some("from-file".to_string())
        );
    }

    #[tokio::test]
    async fn resolve_secrets_tolerates_missing_secret() {
        let store = StubStore::default();

        let mut config = AppConfig::default();
        config.resolve_secrets(&store).await;

        assert_eq!(store.lookups.load(Ordering::SeqCst), 1);
        assert!(config.weather.api_key.is_none());
    }
}
