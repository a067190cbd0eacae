//! Portal configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `FARMSTAND_BASE_URL` - Public URL of the site (QR codes link under it)
//! - `GOOGLE_MAPS_API_KEY` - Key for geocoding, directions, and autocomplete
//!
//! ## Optional
//! - `FARMSTAND_DEFAULT_CENTER_LAT` - Map center fallback latitude (default: 41.9)
//! - `FARMSTAND_DEFAULT_CENTER_LNG` - Map center fallback longitude (default: -72.0)

use farmstand_core::Coordinates;
use secrecy::SecretString;
use thiserror::Error;

use crate::map::DEFAULT_CENTER;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Portal application configuration.
#[derive(Debug, Clone)]
pub struct PortalConfig {
    /// Public base URL for the site.
    pub base_url: String,
    /// Google Maps Web Services configuration.
    pub maps: MapsConfig,
    /// Map center used when the viewer's geolocation is denied or unavailable.
    pub default_center: Coordinates,
}

/// Google Maps Web Services configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct MapsConfig {
    /// API key for geocoding, directions, and place autocomplete.
    pub api_key: SecretString,
}

impl std::fmt::Debug for MapsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapsConfig")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl PortalConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = get_required_env("FARMSTAND_BASE_URL")?;
        let api_key = SecretString::from(get_required_env("GOOGLE_MAPS_API_KEY")?);

        let lat = parse_env_or_default("FARMSTAND_DEFAULT_CENTER_LAT", DEFAULT_CENTER.lat)?;
        let lng = parse_env_or_default("FARMSTAND_DEFAULT_CENTER_LNG", DEFAULT_CENTER.lng)?;
        let default_center = Coordinates::new(lat, lng).map_err(|e| {
            ConfigError::InvalidEnvVar("FARMSTAND_DEFAULT_CENTER_LAT/LNG".to_string(), e.to_string())
        })?;

        Ok(Self {
            base_url,
            maps: MapsConfig { api_key },
            default_center,
        })
    }
}

/// Get a required environment variable.
fn get_required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Parse an optional `f64` environment variable, falling back to a default.
fn parse_env_or_default(name: &str, default: f64) -> Result<f64, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidEnvVar(name.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}
