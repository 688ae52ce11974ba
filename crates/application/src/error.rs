//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Itinerary source missing, unreadable or malformed
    #[error("Failed to load itinerary: {0}")]
    DataLoad(String),

    /// Weather host unreachable or request timed out
    #[error("Network error: {0}")]
    Network(String),

    /// Weather service answered with an error status or a malformed payload
    #[error("Weather API error: {0}")]
    Api(String),

    /// Requested item does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request is not valid for this operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_convert_transparently() {
        let err: ApplicationError = DomainError::InvalidMapSize("huge".into()).into();
        assert_eq!(err.to_string(), "Invalid map size: huge");
    }

    #[test]
    fn data_load_message() {
        let err = ApplicationError::DataLoad("missing column: Latitude".into());
        assert_eq!(
            err.to_string(),
            "Failed to load itinerary: missing column: Latitude"
        );
    }
}
