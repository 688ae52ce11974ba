//! Port for secret retrieval
//!
//! Credentials such as the weather API key are never embedded in the
//! binary or the config file; they are resolved through this port.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for secret storage operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SecretStorePort: Send + Sync {
    /// Retrieve a secret by its key/path (e.g. "weather/api_key")
    async fn get_secret(&self, key: &str) -> Result<String, ApplicationError>;
}
