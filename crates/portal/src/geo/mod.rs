//! Geocoding, routing, and address-autocomplete capabilities.
//!
//! These are thin contracts over an external maps provider. The portal
//! never computes geography itself; it turns addresses into coordinates,
//! coordinates into routes, and partial input into suggestions, all by
//! asking the provider.

mod google;

pub use google::GoogleMapsClient;

use async_trait::async_trait;
use thiserror::Error;

use farmstand_core::Coordinates;

/// Errors surfaced by the maps provider.
#[derive(Debug, Error)]
pub enum GeoError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider returned no result for the input.
    #[error("no results")]
    NotFound,

    /// The provider returned a non-OK status.
    #[error("service returned status {0}")]
    Service(String),

    /// The response body did not have the expected shape.
    #[error("parse error: {0}")]
    Parse(String),
}

/// Travel mode for route requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TravelMode {
    /// The default for farm-stand directions.
    #[default]
    Driving,
    Walking,
    Bicycling,
}

impl TravelMode {
    /// The provider's query-parameter form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
            Self::Bicycling => "bicycling",
        }
    }
}

/// A computed route, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Encoded polyline for drawing the route on the map.
    pub polyline: String,
    /// Turn-by-turn instructions, in order.
    pub steps: Vec<String>,
    /// Total distance in meters.
    pub distance_meters: u64,
}

/// One address suggestion for a partially-typed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Provider-assigned place id.
    pub id: String,
    /// Human-readable description shown in the dropdown.
    pub description: String,
}

/// Turns a free-text address into coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Geocode an address.
    ///
    /// # Errors
    ///
    /// Returns `GeoError::NotFound` when the address resolves to nothing,
    /// or another `GeoError` for transport/provider failures.
    async fn geocode(&self, address: &str) -> Result<Coordinates, GeoError>;
}

/// Computes a route between two points.
#[async_trait]
pub trait RoutingService: Send + Sync {
    /// Compute a route from `origin` to `destination`.
    ///
    /// # Errors
    ///
    /// Returns `GeoError` when the provider cannot produce a route; the
    /// caller surfaces a notice and leaves the map unchanged.
    async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> Result<Route, GeoError>;
}

/// Suggests completions for a partially-typed address.
#[async_trait]
pub trait AddressAutocomplete: Send + Sync {
    /// Ordered suggestions for `partial`. An empty list is not an error.
    ///
    /// # Errors
    ///
    /// Returns `GeoError` for transport/provider failures.
    async fn suggest(&self, partial: &str) -> Result<Vec<Suggestion>, GeoError>;
}
