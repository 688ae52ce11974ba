//! Environment-based secret store adapter
//!
//! Reads secrets from environment variables, the way credentials are
//! injected for local runs and containers.

use application::{error::ApplicationError, ports::SecretStorePort};
use async_trait::async_trait;
use std::env;
use tracing::{debug, instrument, warn};

/// Prefix used for TripBoard's own variables
pub const ENV_PREFIX: &str = "TRIPBOARD";

/// Secret store that reads from environment variables
///
/// Keys are transformed to uppercase with slashes replaced by underscores.
/// For example: "weather/api_key" becomes "WEATHER_API_KEY"
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore {
    /// Optional prefix for all environment variable lookups
    prefix: Option<String>,
}

impl EnvSecretStore {
    /// Create a new environment secret store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with a prefix for all environment variable lookups
    ///
    /// # Example
    /// ```
    /// use infrastructure::adapters::EnvSecretStore;
    ///
    /// let store = EnvSecretStore::with_prefix("TRIPBOARD");
    /// // Looking up "weather/api_key" will check "TRIPBOARD_WEATHER_API_KEY"
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Store reading `TRIPBOARD_*` variables
    pub fn tripboard() -> Self {
        Self::with_prefix(ENV_PREFIX)
    }

    /// Transform a key path to an environment variable name
    ///
    /// Converts slashes to underscores, hyphens to underscores, and uppercases.
    pub fn key_to_env_var(&self, key: &str) -> String {
        let normalized = key.replace(['/', '-'], "_").to_uppercase();

        match &self.prefix {
            Some(prefix) => format!("{prefix}_{normalized}"),
            None => normalized,
        }
    }
}

#[async_trait]
impl SecretStorePort for EnvSecretStore {
    #[instrument(skip(self), fields(env_var))]
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError> {
        let env_var = self.key_to_env_var(key);
        tracing::Span::current().record("env_var", &env_var);

        match env::var(&env_var) {
            Ok(value) if value.trim().is_empty() => {
                warn!(env_var = %env_var, "Secret is set but empty");
                Err(ApplicationError::NotFound(format!(
                    "Secret not found: {key} (env: {env_var})"
                )))
            },
            Ok(value) => {
                debug!("Retrieved secret from environment variable");
                Ok(value)
            },
            Err(env::VarError::NotPresent) => {
                debug!(env_var = %env_var, "Secret not found in environment");
                Err(ApplicationError::NotFound(format!(
                    "Secret not found: {key} (env: {env_var})"
                )))
            },
            Err(env::VarError::NotUnicode(_)) => Err(ApplicationError::Configuration(format!(
                "Secret contains invalid UTF-8: {env_var}"
            ))),
        }
    }
}
