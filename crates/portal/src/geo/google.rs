//! Google Maps Web Services client.
//!
//! Implements [`Geocoder`], [`RoutingService`], and [`AddressAutocomplete`]
//! over the Geocoding, Directions, and Place Autocomplete HTTP APIs.
//! Timeouts are delegated to the HTTP client; nothing here retries.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tokio::sync::Mutex;
use tokio::time::Instant;

use farmstand_core::Coordinates;

use super::{AddressAutocomplete, GeoError, Geocoder, Route, RoutingService, Suggestion, TravelMode};
use crate::config::MapsConfig;

/// Google Maps Web Services base URL.
const BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Minimum spacing between autocomplete calls; coalesces rapid keystrokes.
const AUTOCOMPLETE_DEBOUNCE: Duration = Duration::from_millis(30);

/// HTTP timeout for all maps calls. Callers never hang on the provider.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Google Maps Web Services client.
///
/// The API key stays wrapped in [`SecretString`] and is only exposed while
/// building a request URL.
pub struct GoogleMapsClient {
    client: reqwest::Client,
    api_key: SecretString,
    last_suggest: Mutex<Option<Instant>>,
}

impl GoogleMapsClient {
    /// Create a new client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &MapsConfig) -> Result<Self, GeoError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            last_suggest: Mutex::new(None),
        })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, url: &str) -> Result<T, GeoError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(GeoError::Service(status.to_string()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| GeoError::Parse(e.to_string()))
    }

    /// Wait out the debounce window since the previous autocomplete call.
    async fn debounce_suggest(&self) {
        let mut last = self.last_suggest.lock().await;
        if let Some(previous) = *last {
            let elapsed = previous.elapsed();
            if elapsed < AUTOCOMPLETE_DEBOUNCE {
                tokio::time::sleep(AUTOCOMPLETE_DEBOUNCE - elapsed).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[async_trait]
impl Geocoder for GoogleMapsClient {
    async fn geocode(&self, address: &str) -> Result<Coordinates, GeoError> {
        let url = format!(
            "{BASE_URL}/geocode/json?address={}&key={}",
            urlencoding::encode(address),
            self.api_key.expose_secret()
        );

        let body: GeocodeResponse = self.get_json(&url).await?;

        match body.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Err(GeoError::NotFound),
            other => return Err(GeoError::Service(other.to_owned())),
        }

        let location = body
            .results
            .into_iter()
            .next()
            .ok_or(GeoError::NotFound)?
            .geometry
            .location;

        Coordinates::new(location.lat, location.lng)
            .map_err(|e| GeoError::Parse(e.to_string()))
    }
}

#[async_trait]
impl RoutingService for GoogleMapsClient {
    async fn route(
        &self,
        origin: Coordinates,
        destination: Coordinates,
        mode: TravelMode,
    ) -> Result<Route, GeoError> {
        let url = format!(
            "{BASE_URL}/directions/json?origin={origin}&destination={destination}&mode={}&key={}",
            mode.as_str(),
            self.api_key.expose_secret()
        );

        let body: DirectionsResponse = self.get_json(&url).await?;

        match body.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" | "NOT_FOUND" => return Err(GeoError::NotFound),
            other => return Err(GeoError::Service(other.to_owned())),
        }

        let route = body.routes.into_iter().next().ok_or(GeoError::NotFound)?;
        let leg = route
            .legs
            .into_iter()
            .next()
            .ok_or_else(|| GeoError::Parse("route has no legs".to_string()))?;

        Ok(Route {
            polyline: route.overview_polyline.points,
            steps: leg.steps.into_iter().map(|s| s.html_instructions).collect(),
            distance_meters: leg.distance.value,
        })
    }
}

#[async_trait]
impl AddressAutocomplete for GoogleMapsClient {
    async fn suggest(&self, partial: &str) -> Result<Vec<Suggestion>, GeoError> {
        if partial.trim().is_empty() {
            return Ok(Vec::new());
        }

        self.debounce_suggest().await;

        let url = format!(
            "{BASE_URL}/place/autocomplete/json?input={}&key={}",
            urlencoding::encode(partial),
            self.api_key.expose_secret()
        );

        let body: AutocompleteResponse = self.get_json(&url).await?;

        match body.status.as_str() {
            "OK" | "ZERO_RESULTS" => {}
            other => return Err(GeoError::Service(other.to_owned())),
        }

        Ok(body
            .predictions
            .into_iter()
            .map(|p| Suggestion {
                id: p.place_id,
                description: p.description,
            })
            .collect())
    }
}

// Response shapes, limited to the fields the portal reads.

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct DirectionsResponse {
    status: String,
    #[serde(default)]
    routes: Vec<DirectionsRoute>,
}

#[derive(Debug, Deserialize)]
struct DirectionsRoute {
    overview_polyline: Polyline,
    legs: Vec<Leg>,
}

#[derive(Debug, Deserialize)]
struct Polyline {
    points: String,
}

#[derive(Debug, Deserialize)]
struct Leg {
    distance: TextValue,
    steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    value: u64,
}

#[derive(Debug, Deserialize)]
struct Step {
    html_instructions: String,
}

#[derive(Debug, Deserialize)]
struct AutocompleteResponse {
    status: String,
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
struct Prediction {
    place_id: String,
    description: String,
}
