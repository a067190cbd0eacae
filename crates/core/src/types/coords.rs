//! Geographic coordinates.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing [`Coordinates`].
#[derive(thiserror::Error, Debug, Clone, Copy)]
pub enum CoordinatesError {
    /// Latitude outside the valid range.
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    /// Longitude outside the valid range.
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    /// A coordinate is NaN or infinite.
    #[error("coordinate is not a finite number")]
    NotFinite,
}

/// A latitude/longitude pair in decimal degrees.
///
/// Fields are public because the pair is plain data; use [`Coordinates::new`]
/// when the values come from outside (a geocoder response, a geolocation
/// callback) to reject out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees, [-90, 90].
    pub lat: f64,
    /// Longitude in decimal degrees, [-180, 180].
    pub lng: f64,
}

impl Coordinates {
    /// Create validated coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if either value is not finite or outside its range.
    pub fn new(lat: f64, lng: f64) -> Result<Self, CoordinatesError> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(CoordinatesError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinatesError::LatitudeOutOfRange(lat));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(CoordinatesError::LongitudeOutOfRange(lng));
        }
        Ok(Self { lat, lng })
    }
}

impl fmt::Display for Coordinates {
    /// Formats as `"lat,lng"`, the form routing and geocoding APIs accept.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}
