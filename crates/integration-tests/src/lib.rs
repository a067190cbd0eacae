//! Shared fixtures for Farmstand integration tests.
//!
//! The scenarios run against the in-memory store and scripted geo
//! collaborators; no network, no real maps provider.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use farmstand_core::{Coordinates, Email, VendorId};
use farmstand_portal::auth::{Identity, StaticIdentityProvider};
use farmstand_portal::geo::{GeoError, Geocoder};
use farmstand_portal::services::VendorService;
use farmstand_portal::store::{MemoryVendorStore, StoreError, VendorStore};

/// Initialize test logging once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farmstand_portal=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

/// A geocoder scripted with known addresses; everything else is a miss.
#[derive(Default)]
pub struct ScriptedGeocoder {
    answers: HashMap<String, Coordinates>,
}

impl ScriptedGeocoder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script one address to resolve to the given point.
    #[must_use]
    pub fn with(mut self, address: &str, lat: f64, lng: f64) -> Self {
        self.answers
            .insert(address.to_string(), Coordinates { lat, lng });
        self
    }
}

#[async_trait]
impl Geocoder for ScriptedGeocoder {
    async fn geocode(&self, address: &str) -> Result<Coordinates, GeoError> {
        self.answers.get(address).copied().ok_or(GeoError::NotFound)
    }
}

/// A store whose every call fails, for outage scenarios.
pub struct UnavailableStore;

#[async_trait]
impl VendorStore for UnavailableStore {
    async fn get(&self, _id: &VendorId) -> Result<Option<Value>, StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }

    async fn merge_patch(&self, _id: &VendorId, _patch: Value) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<(VendorId, Value)>, StoreError> {
        Err(StoreError::Unavailable("backend offline".to_string()))
    }
}

/// A verified identity for the given vendor id.
///
/// # Panics
///
/// Panics on an invalid id; test fixture only.
#[must_use]
pub fn verified_identity(id: &str) -> Identity {
    Identity {
        id: VendorId::parse(id).expect("valid test vendor id"),
        email: Email::parse(&format!("{id}@example.com")).expect("valid test email"),
        email_verified: true,
    }
}

/// A vendor service for `id` over the given store, with a geocoder that
/// knows "12 Maple St".
#[must_use]
pub fn service_for(id: &str, store: Arc<dyn VendorStore>) -> VendorService {
    VendorService::new(
        store,
        Arc::new(StaticIdentityProvider::new(Some(verified_identity(id)))),
        Arc::new(ScriptedGeocoder::new().with("12 Maple St", 41.9, -72.0)),
    )
}

/// A fresh in-memory store.
#[must_use]
pub fn memory_store() -> Arc<MemoryVendorStore> {
    Arc::new(MemoryVendorStore::new())
}
