//! End-to-end vendor scenarios over the in-memory store.

use std::sync::Arc;

use farmstand_core::VendorId;
use farmstand_integration_tests::{
    UnavailableStore, init_tracing, memory_store, service_for,
};
use farmstand_portal::PortalError;
use farmstand_portal::services::StockEditor;
use farmstand_portal::store::VendorStore;

fn vid(s: &str) -> VendorId {
    VendorId::parse(s).expect("valid test vendor id")
}

#[tokio::test]
async fn fresh_vendor_gets_skeleton_then_stocks_corn() {
    init_tracing();
    let store = memory_store();
    let service = Arc::new(service_for("vendor-1", store.clone()));
    let id = vid("vendor-1");

    // First observation creates the skeleton.
    let record = service.load_or_init(&id).await.expect("load_or_init");
    assert!(record.items.is_empty());
    assert!(record.location.is_none());
    assert!(record.hours.days().all(|(_, d)| d.closed));
    assert_eq!(record.email.as_str(), "vendor-1@example.com");

    service.rename(&id, "Maple Lane Farm").await.expect("rename");

    // Stock one unpriced item through the editor.
    let mut editor = StockEditor::open(Arc::clone(&service), id.clone())
        .await
        .expect("open editor");
    let form = editor.compose();
    form.name = "Corn".to_string();
    form.quantity = "12".to_string();
    editor.submit().await.expect("submit");

    // The stored item keeps price absent and pricePerDozen null.
    let doc = store.get(&id).await.expect("get").expect("document");
    let item = &doc["items"][0];
    assert_eq!(item["name"], "Corn");
    assert_eq!(item["quantity"], 12);
    assert!(!item.as_object().expect("object").contains_key("price"));
    assert!(item["pricePerDozen"].is_null());
}

#[tokio::test]
async fn second_load_or_init_is_idempotent() {
    init_tracing();
    let store = memory_store();
    let service = service_for("vendor-1", store);
    let id = vid("vendor-1");

    let first = service.load_or_init(&id).await.expect("first");
    let second = service.load_or_init(&id).await.expect("second");
    assert_eq!(first, second);
}

#[tokio::test]
async fn two_sessions_touching_different_groups_do_not_clobber() {
    init_tracing();
    let store = memory_store();
    let id = vid("vendor-1");

    // Two dashboard tabs: each holds its own service over the same store.
    let tab_a = Arc::new(service_for("vendor-1", store.clone()));
    let tab_b = service_for("vendor-1", store.clone());

    tab_a.load_or_init(&id).await.expect("init");

    let mut editor = StockEditor::open(Arc::clone(&tab_a), id.clone())
        .await
        .expect("open");
    let form = editor.compose();
    form.name = "Eggs".to_string();
    form.quantity = "3".to_string();
    editor.submit().await.expect("submit");

    tab_b
        .set_location(&id, "12 Maple St", None)
        .await
        .expect("set_location");

    // Both writes landed: items from tab A, location from tab B.
    let record = tab_a.load_or_init(&id).await.expect("reload");
    assert_eq!(record.items.len(), 1);
    let location = record.location.expect("location");
    assert!((location.lat - 41.9).abs() < f64::EPSILON);
    assert!(record.last_updated.is_some());
}

#[tokio::test]
async fn edit_then_abandon_permanently_drops_the_item() {
    init_tracing();
    let store = memory_store();
    let service = Arc::new(service_for("vendor-1", store.clone()));
    let id = vid("vendor-1");
    service.load_or_init(&id).await.expect("init");

    let mut editor = StockEditor::open(Arc::clone(&service), id.clone())
        .await
        .expect("open");
    for (name, quantity) in [("Corn", "12"), ("Eggs", "3")] {
        let form = editor.compose();
        form.name = name.to_string();
        form.quantity = quantity.to_string();
        editor.submit().await.expect("submit");
    }

    // Edit item 1 and navigate away without submitting.
    editor.edit(1).await.expect("edit");
    drop(editor);

    let record = service.load_or_init(&id).await.expect("reload");
    let names: Vec<&str> = record.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Corn"]);
}

#[tokio::test]
async fn failed_geocode_writes_nothing_and_yields_a_notice() {
    init_tracing();
    let store = memory_store();
    let service = service_for("vendor-1", store.clone());
    let id = vid("vendor-1");

    service.load_or_init(&id).await.expect("init");
    service
        .set_location(&id, "12 Maple St", None)
        .await
        .expect("set_location");
    let before = store.get(&id).await.expect("get").expect("document");

    let err = service
        .set_location(&id, "1000 Nowhere Rd", None)
        .await
        .expect_err("geocode should miss");
    assert!(matches!(err, PortalError::NotFound(_)));
    assert!(!err.user_notice().is_empty());

    let after = store.get(&id).await.expect("get").expect("document");
    assert_eq!(after, before, "no store write on geocode failure");
}

#[tokio::test]
async fn store_outage_propagates_as_store_unavailable() {
    init_tracing();
    let service = service_for("vendor-1", Arc::new(UnavailableStore));
    let id = vid("vendor-1");

    let err = service.load_or_init(&id).await.expect_err("store is down");
    assert!(matches!(err, PortalError::StoreUnavailable(_)));
    // the notice never leaks backend detail
    assert!(!err.user_notice().contains("backend offline"));
}
