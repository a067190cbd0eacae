//! Map projection scenarios over a populated store.

use std::sync::Arc;

use farmstand_core::{Coordinates, VendorId};
use farmstand_integration_tests::{init_tracing, memory_store, service_for};
use farmstand_portal::map::{self, MarkerColor};
use farmstand_portal::services::StockEditor;

fn vid(s: &str) -> VendorId {
    VendorId::parse(s).expect("valid test vendor id")
}

#[tokio::test]
async fn stocked_vendor_shows_green_marker_with_item_lines() {
    init_tracing();
    let store = memory_store();
    let id = vid("vendor-1");

    let service = Arc::new(service_for("vendor-1", store.clone()));
    service.load_or_init(&id).await.expect("init");
    service.rename(&id, "Maple Lane Farm").await.expect("rename");
    service
        .set_location(&id, "12 Maple St", Some("end of the driveway".to_string()))
        .await
        .expect("set_location");

    let mut editor = StockEditor::open(Arc::clone(&service), id.clone())
        .await
        .expect("open");
    let form = editor.compose();
    form.name = "Corn".to_string();
    form.quantity = "12".to_string();
    editor.submit().await.expect("submit");

    let vendors = service.list_vendors().await.expect("list");
    let view = map::project(&vendors, None, map::DEFAULT_CENTER);

    assert_eq!(view.markers.len(), 1);
    let marker = &view.markers[0];
    assert_eq!(marker.color, MarkerColor::Green);
    assert_eq!(marker.title, "Maple Lane Farm");
    assert!((marker.position.lat - 41.9).abs() < f64::EPSILON);
    assert!(marker.info_content.contains("Corn: 12"));
    assert!(marker.info_content.contains("Note: end of the driveway"));
    assert!(!marker.info_content.contains("Last updated: N/A"));
}

#[tokio::test]
async fn sold_out_vendor_turns_red_and_unlocated_vendor_vanishes() {
    init_tracing();
    let store = memory_store();

    // vendor-1 has a location but sells out; vendor-2 never sets one.
    let one = Arc::new(service_for("vendor-1", store.clone()));
    one.load_or_init(&vid("vendor-1")).await.expect("init 1");
    one.set_location(&vid("vendor-1"), "12 Maple St", None)
        .await
        .expect("set_location");

    let mut editor = StockEditor::open(Arc::clone(&one), vid("vendor-1"))
        .await
        .expect("open");
    let form = editor.compose();
    form.name = "Corn".to_string();
    form.quantity = "12".to_string();
    editor.submit().await.expect("submit");
    editor.adjust_quantity(0, 0).await.expect("sell out");

    let two = service_for("vendor-2", store.clone());
    two.load_or_init(&vid("vendor-2")).await.expect("init 2");

    let vendors = one.list_vendors().await.expect("list");
    assert_eq!(vendors.len(), 2);

    let view = map::project(&vendors, None, map::DEFAULT_CENTER);
    assert_eq!(view.markers.len(), 1, "unlocated vendor is not rendered");
    assert_eq!(view.markers[0].color, MarkerColor::Red);
    assert!(view.markers[0].info_content.contains("Corn: 0"));
}

#[tokio::test]
async fn viewer_position_recenters_the_map() {
    init_tracing();
    let store = memory_store();
    let service = service_for("vendor-1", store);

    let vendors = service.list_vendors().await.expect("list");

    let denied = map::project(&vendors, None, map::DEFAULT_CENTER);
    assert_eq!(denied.center, map::DEFAULT_CENTER);

    let here = Coordinates { lat: 42.1, lng: -71.5 };
    let granted = map::project(&vendors, Some(here), map::DEFAULT_CENTER);
    assert_eq!(granted.center, here);
    assert_eq!(granted.viewer, Some(here));
}

#[tokio::test]
async fn deployment_center_recenters_without_claiming_a_viewer() {
    init_tracing();
    let store = memory_store();
    let service = service_for("vendor-1", store);

    let vendors = service.list_vendors().await.expect("list");

    // A configured center (as from PortalConfig) moves the camera but the
    // map still renders as viewer-unknown.
    let configured = Coordinates { lat: 44.5, lng: -73.2 };
    let view = map::project(&vendors, None, configured);
    assert_eq!(view.center, configured);
    assert!(view.viewer.is_none());
}
