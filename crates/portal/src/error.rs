//! Unified error handling for the portal.
//!
//! Provides a unified `PortalError` type that every editor-facing operation
//! returns. Failures are logged where they occur, surfaced to the user as a
//! one-shot notice via [`PortalError::user_notice`], and never retried; the
//! user may re-attempt the same action.

use thiserror::Error;

use crate::config::ConfigError;
use crate::store::StoreError;

/// Application-level error type for the portal.
#[derive(Debug, Error)]
pub enum PortalError {
    /// A record, identity, or geocode result could not be resolved.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The document store call failed. Propagated, not retried.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] StoreError),

    /// Malformed form input (empty name, non-numeric quantity, bad hours).
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// The routing service returned a non-OK status.
    #[error("Routing failed: {0}")]
    RoutingFailed(String),

    /// The geocoding call failed for a reason other than a missing result.
    #[error("Geocoding failed: {0}")]
    Geocoding(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PortalError {
    /// The one-shot, user-visible notice for this failure.
    ///
    /// Internal detail (store errors, HTTP errors) stays in the logs; the
    /// user gets a message that tells them what to re-attempt.
    #[must_use]
    pub fn user_notice(&self) -> String {
        match self {
            Self::NotFound(what) => format!("{what} could not be found."),
            Self::StoreUnavailable(_) => {
                "Something went wrong saving your changes. Please try again.".to_owned()
            }
            Self::ValidationFailed(msg) => msg.clone(),
            Self::RoutingFailed(_) => {
                "Directions to this stand are unavailable right now.".to_owned()
            }
            Self::Geocoding(_) => {
                "Error setting location. Please check the address and try again.".to_owned()
            }
            Self::Config(_) => "The portal is misconfigured.".to_owned(),
        }
    }
}

/// Result type alias for `PortalError`.
pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = PortalError::NotFound("vendor-123".to_string());
        assert_eq!(err.to_string(), "Not found: vendor-123");

        let err = PortalError::ValidationFailed("item name cannot be empty".to_string());
        assert_eq!(err.to_string(), "Validation failed: item name cannot be empty");
    }

    #[test]
    fn test_user_notice_hides_store_detail() {
        let err = PortalError::StoreUnavailable(StoreError::Unavailable(
            "connection reset by peer".to_string(),
        ));
        assert!(!err.user_notice().contains("connection reset"));
    }

    #[test]
    fn test_user_notice_passes_validation_message_through() {
        let err = PortalError::ValidationFailed("quantity must be a whole number".to_string());
        assert_eq!(err.user_notice(), "quantity must be a whole number");
    }
}
