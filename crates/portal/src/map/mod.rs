//! Map projection.
//!
//! A pure derivation from the vendor set (plus the viewer's position, when
//! geolocation granted one) to renderable map state. Nothing here persists
//! anything; the view re-fetches the vendor list on every mount and
//! re-projects.

use farmstand_core::{Coordinates, VendorId};

use crate::error::{PortalError, Result};
use crate::geo::{Route, RoutingService, TravelMode};
use crate::models::VendorRecord;

/// Built-in fallback map center. Deployments override it through
/// `PortalConfig::default_center`; the projection itself takes whichever
/// fallback the caller passes.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    lat: 41.9,
    lng: -72.0,
};

/// Stock-availability color of a vendor marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    /// At least one unit in stock.
    Green,
    /// Out of stock.
    Red,
}

/// One renderable vendor pin.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    /// The vendor behind the pin; links to the stand page.
    pub vendor_id: VendorId,
    /// Pin position.
    pub position: Coordinates,
    /// Hover title.
    pub title: String,
    /// Availability color.
    pub color: MarkerColor,
    /// Info-window body, one line per entry.
    pub info_content: String,
}

/// Everything the map screen needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    /// Initial camera center.
    pub center: Coordinates,
    /// The viewer's own position, rendered with a distinct style when known.
    pub viewer: Option<Coordinates>,
    /// Vendor pins; vendors without a location are absent, not errored.
    pub markers: Vec<Marker>,
}

/// Project the vendor set into renderable map state.
///
/// `fallback` centers the map when the viewer's position is unknown; it is
/// the configured default center, never treated as a viewer position.
#[must_use]
pub fn project(
    vendors: &[(VendorId, VendorRecord)],
    viewer: Option<Coordinates>,
    fallback: Coordinates,
) -> MapView {
    let markers = vendors
        .iter()
        .filter_map(|(id, record)| {
            let location = record.location.as_ref()?;
            Some(Marker {
                vendor_id: id.clone(),
                position: location.coordinates(),
                title: record.vendor_name.clone(),
                color: marker_color(record.total_quantity()),
                info_content: info_content(record),
            })
        })
        .collect();

    MapView {
        center: viewer.unwrap_or(fallback),
        viewer,
        markers,
    }
}

/// Availability color for a given total quantity.
#[must_use]
pub const fn marker_color(total_quantity: u64) -> MarkerColor {
    if total_quantity > 0 {
        MarkerColor::Green
    } else {
        MarkerColor::Red
    }
}

/// Render a vendor's info-window body.
///
/// Only called for vendors with a location set.
fn info_content(record: &VendorRecord) -> String {
    let mut lines = vec![record.vendor_name.clone()];

    if let Some(location) = &record.location {
        lines.push(format!("Address: {}", location.address));
        if let Some(note) = location.display_note() {
            lines.push(format!("Note: {note}"));
        }
    }

    lines.push("Stock Available:".to_string());
    if record.items.is_empty() {
        lines.push("No items available".to_string());
    } else {
        for item in &record.items {
            lines.push(format!("{}: {}", item.name, item.quantity));
        }
    }

    let updated = record.last_updated.map_or_else(
        || "N/A".to_string(),
        |t| t.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    lines.push(format!("Last updated: {updated}"));

    lines.join("\n")
}

/// Compute driving directions from the viewer to a vendor's pin.
///
/// Triggered by an explicit click on a marker's navigate affordance. A
/// missing viewer position falls back to the configured center.
///
/// # Errors
///
/// Returns `RoutingFailed` when the provider cannot produce a route; the
/// caller shows the notice and leaves the map unchanged.
pub async fn navigate(
    router: &dyn RoutingService,
    viewer: Option<Coordinates>,
    fallback: Coordinates,
    destination: Coordinates,
) -> Result<Route> {
    let origin = viewer.unwrap_or(fallback);

    router
        .route(origin, destination, TravelMode::Driving)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "routing failed");
            PortalError::RoutingFailed(e.to_string())
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};

    use farmstand_core::Email;

    use crate::geo::GeoError;
    use crate::models::{StandLocation, StockItem, VendorRecord};

    fn vendor(name: &str, location: Option<StandLocation>, items: Vec<StockItem>) -> VendorRecord {
        VendorRecord {
            vendor_name: name.to_string(),
            email: Email::parse("vendor@example.com").unwrap(),
            location,
            hours: crate::models::WeekHours::all_closed(),
            items,
            last_updated: None,
        }
    }

    fn located(name: &str, items: Vec<StockItem>) -> VendorRecord {
        vendor(
            name,
            Some(StandLocation {
                address: "12 Maple St".to_string(),
                note: None,
                lat: 41.9,
                lng: -72.0,
            }),
            items,
        )
    }

    fn id(s: &str) -> VendorId {
        VendorId::parse(s).unwrap()
    }

    #[test]
    fn test_vendors_without_location_are_excluded() {
        let vendors = vec![
            (id("a"), located("Stand A", vec![])),
            (id("b"), vendor("Stand B", None, vec![])),
        ];
        let view = project(&vendors, None, DEFAULT_CENTER);
        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.markers[0].vendor_id, id("a"));
    }

    #[test]
    fn test_marker_color_tracks_total_quantity() {
        assert_eq!(marker_color(0), MarkerColor::Red);
        assert_eq!(marker_color(1), MarkerColor::Green);

        // empty list and all-zero quantities are both red
        let empty = located("Stand", vec![]);
        let zeroed = located("Stand", vec![StockItem::new("Corn".to_string(), 0)]);
        let stocked = located("Stand", vec![StockItem::new("Corn".to_string(), 12)]);

        let view = project(
            &[
                (id("a"), empty),
                (id("b"), zeroed),
                (id("c"), stocked),
            ],
            None,
            DEFAULT_CENTER,
        );
        assert_eq!(view.markers[0].color, MarkerColor::Red);
        assert_eq!(view.markers[1].color, MarkerColor::Red);
        assert_eq!(view.markers[2].color, MarkerColor::Green);
    }

    #[test]
    fn test_info_content_lists_items() {
        let record = located(
            "Maple Lane Farm",
            vec![
                StockItem::new("Corn".to_string(), 12),
                StockItem::new("Eggs".to_string(), 3),
            ],
        );
        let info = info_content(&record);
        assert!(info.contains("Maple Lane Farm"));
        assert!(info.contains("Address: 12 Maple St"));
        assert!(info.contains("Corn: 12"));
        assert!(info.contains("Eggs: 3"));
        assert!(info.contains("Last updated: N/A"));
        assert!(!info.contains("Note:"));
    }

    #[test]
    fn test_info_content_empty_stock_and_note() {
        let mut record = located("Maple Lane Farm", vec![]);
        if let Some(location) = &mut record.location {
            location.note = Some("end of the driveway".to_string());
        }
        record.last_updated = Some(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());

        let info = info_content(&record);
        assert!(info.contains("No items available"));
        assert!(info.contains("Note: end of the driveway"));
        assert!(info.contains("Last updated: 2024-06-01 12:00 UTC"));
    }

    #[test]
    fn test_center_falls_back_to_default() {
        let view = project(&[], None, DEFAULT_CENTER);
        assert_eq!(view.center, DEFAULT_CENTER);
        assert!(view.viewer.is_none());

        let here = Coordinates { lat: 42.0, lng: -71.0 };
        let view = project(&[], Some(here), DEFAULT_CENTER);
        assert_eq!(view.center, here);
        assert_eq!(view.viewer, Some(here));
    }

    #[test]
    fn test_configured_center_is_not_a_viewer_position() {
        // A deployment-configured center recenters the map without flipping
        // the view into viewer-known rendering.
        let configured = Coordinates { lat: 44.5, lng: -73.2 };
        let view = project(&[], None, configured);
        assert_eq!(view.center, configured);
        assert!(view.viewer.is_none());

        // A known viewer position still wins over the configured center.
        let here = Coordinates { lat: 42.0, lng: -71.0 };
        let view = project(&[], Some(here), configured);
        assert_eq!(view.center, here);
    }

    struct FailingRouter;

    #[async_trait]
    impl RoutingService for FailingRouter {
        async fn route(
            &self,
            _origin: Coordinates,
            _destination: Coordinates,
            _mode: TravelMode,
        ) -> std::result::Result<Route, GeoError> {
            Err(GeoError::Service("OVER_QUERY_LIMIT".to_string()))
        }
    }

    struct StraightLineRouter;

    #[async_trait]
    impl RoutingService for StraightLineRouter {
        async fn route(
            &self,
            _origin: Coordinates,
            _destination: Coordinates,
            _mode: TravelMode,
        ) -> std::result::Result<Route, GeoError> {
            Ok(Route {
                polyline: "abc".to_string(),
                steps: vec!["Head north".to_string()],
                distance_meters: 5200,
            })
        }
    }

    #[tokio::test]
    async fn test_navigate_success() {
        let destination = Coordinates { lat: 42.0, lng: -71.0 };
        let route = navigate(&StraightLineRouter, None, DEFAULT_CENTER, destination)
            .await
            .unwrap();
        assert_eq!(route.distance_meters, 5200);
    }

    #[tokio::test]
    async fn test_navigate_failure_is_routing_failed() {
        let destination = Coordinates { lat: 42.0, lng: -71.0 };
        let err = navigate(&FailingRouter, None, DEFAULT_CENTER, destination)
            .await
            .unwrap_err();
        assert!(matches!(err, PortalError::RoutingFailed(_)));
    }
}
