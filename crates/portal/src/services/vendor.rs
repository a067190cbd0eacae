//! Vendor record service.
//!
//! The only sanctioned write path to the `vendors` collection. Every write
//! is a single field-group merge-patch; the service never rewrites a whole
//! document after creation, so concurrent edits to different groups cannot
//! clobber each other. Writes to the *same* group are last-writer-wins.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use farmstand_core::VendorId;

use crate::auth::{Identity, IdentityProvider};
use crate::error::{PortalError, Result};
use crate::geo::{GeoError, Geocoder};
use crate::models::{FieldGroupPatch, StandLocation, VendorRecord, WeekHours};
use crate::store::{StoreError, VendorStore};

/// Service over one vendor's record.
pub struct VendorService {
    store: Arc<dyn VendorStore>,
    identity: Arc<dyn IdentityProvider>,
    geocoder: Arc<dyn Geocoder>,
}

impl VendorService {
    /// Create a new vendor service.
    #[must_use]
    pub fn new(
        store: Arc<dyn VendorStore>,
        identity: Arc<dyn IdentityProvider>,
        geocoder: Arc<dyn Geocoder>,
    ) -> Self {
        Self {
            store,
            identity,
            geocoder,
        }
    }

    /// Fetch the vendor's record, creating the default skeleton on first
    /// access.
    ///
    /// Idempotent: a second call for the same identity returns the stored
    /// record unchanged.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the id cannot be resolved to the signed-in,
    /// email-verified identity, or `StoreUnavailable` if the store call
    /// fails.
    pub async fn load_or_init(&self, vendor_id: &VendorId) -> Result<VendorRecord> {
        let identity = self.resolve_owner(vendor_id).await?;

        if let Some(doc) = self.store.get(vendor_id).await? {
            return decode_record(doc);
        }

        let skeleton = VendorRecord::skeleton(String::new(), identity.email);
        let doc = serde_json::to_value(&skeleton)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;
        self.store.merge_patch(vendor_id, doc).await?;

        tracing::info!(vendor = %vendor_id, "initialized skeleton record");
        Ok(skeleton)
    }

    /// Merge-write one field group. The only write path to the store.
    ///
    /// Location patches also stamp `lastUpdated` with the current time.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the caller does not own the record, or
    /// `StoreUnavailable` if the write fails (propagated, not retried).
    pub async fn patch(&self, vendor_id: &VendorId, patch: FieldGroupPatch) -> Result<()> {
        self.resolve_owner(vendor_id).await?;

        let group = patch.group();
        let doc = patch.to_document(Utc::now())?;
        self.store.merge_patch(vendor_id, doc).await?;

        tracing::info!(vendor = %vendor_id, %group, "merge patch written");
        Ok(())
    }

    /// Geocode `address` and store it as the vendor's location.
    ///
    /// On any geocoding failure the stored location is left untouched and
    /// no store write happens.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` for a blank address, `NotFound` when the
    /// address resolves to nothing, or `Geocoding` for provider failures.
    pub async fn set_location(
        &self,
        vendor_id: &VendorId,
        address: &str,
        note: Option<String>,
    ) -> Result<StandLocation> {
        let address = address.trim();
        if address.is_empty() {
            return Err(PortalError::ValidationFailed(
                "Please enter a valid address.".to_string(),
            ));
        }

        let coords = self.geocoder.geocode(address).await.map_err(|e| {
            tracing::warn!(vendor = %vendor_id, error = %e, "geocoding failed");
            match e {
                GeoError::NotFound => {
                    PortalError::NotFound(format!("A geocode result for {address:?}"))
                }
                other => PortalError::Geocoding(other.to_string()),
            }
        })?;

        let location = StandLocation {
            address: address.to_owned(),
            note,
            lat: coords.lat,
            lng: coords.lng,
        };
        self.patch(vendor_id, FieldGroupPatch::Location(Some(location.clone())))
            .await?;

        Ok(location)
    }

    /// Clear the vendor's location. The stand disappears from the map.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` or `StoreUnavailable` as for [`Self::patch`].
    pub async fn remove_location(&self, vendor_id: &VendorId) -> Result<()> {
        self.patch(vendor_id, FieldGroupPatch::Location(None)).await
    }

    /// Replace the note on the existing location.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` if no location is set yet.
    pub async fn set_location_note(
        &self,
        vendor_id: &VendorId,
        note: Option<String>,
    ) -> Result<StandLocation> {
        let record = self.load_or_init(vendor_id).await?;
        let Some(mut location) = record.location else {
            return Err(PortalError::ValidationFailed(
                "Set an address before adding a location note.".to_string(),
            ));
        };

        location.note = note;
        self.patch(vendor_id, FieldGroupPatch::Location(Some(location.clone())))
            .await?;
        Ok(location)
    }

    /// Replace the weekly hours after checking the closed/times invariant.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` naming the offending day and field.
    pub async fn set_hours(&self, vendor_id: &VendorId, hours: WeekHours) -> Result<()> {
        hours
            .validate()
            .map_err(|e| PortalError::ValidationFailed(e.to_string()))?;
        self.patch(vendor_id, FieldGroupPatch::Hours(hours)).await
    }

    /// Replace the display name.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` for a blank name.
    pub async fn rename(&self, vendor_id: &VendorId, vendor_name: &str) -> Result<()> {
        let vendor_name = vendor_name.trim();
        if vendor_name.is_empty() {
            return Err(PortalError::ValidationFailed(
                "Vendor name cannot be empty.".to_string(),
            ));
        }
        self.patch(
            vendor_id,
            FieldGroupPatch::VendorName(vendor_name.to_owned()),
        )
        .await
    }

    /// Fetch every vendor record for the map view.
    ///
    /// Public read, no auth gate. Undecodable documents are skipped with a
    /// warning so one bad record cannot blank the whole map.
    ///
    /// # Errors
    ///
    /// Returns `StoreUnavailable` if the collection cannot be listed.
    pub async fn list_vendors(&self) -> Result<Vec<(VendorId, VendorRecord)>> {
        let docs = self.store.list_all().await?;

        let mut vendors = Vec::with_capacity(docs.len());
        for (id, doc) in docs {
            match decode_record(doc) {
                Ok(record) => vendors.push((id, record)),
                Err(e) => {
                    tracing::warn!(vendor = %id, error = %e, "skipping undecodable vendor record");
                }
            }
        }
        Ok(vendors)
    }

    /// Resolve `vendor_id` to the signed-in, verified identity that owns it.
    async fn resolve_owner(&self, vendor_id: &VendorId) -> Result<Identity> {
        let identity = self
            .identity
            .current_identity()
            .await
            .ok_or_else(|| PortalError::NotFound("A signed-in vendor".to_string()))?;

        if identity.id != *vendor_id {
            return Err(PortalError::NotFound(format!(
                "The vendor record {vendor_id} for this account"
            )));
        }

        if !identity.is_verified() {
            return Err(PortalError::NotFound(
                "A verified email for this account".to_string(),
            ));
        }

        Ok(identity)
    }
}

fn decode_record(doc: Value) -> Result<VendorRecord> {
    serde_json::from_value(doc)
        .map_err(|e| PortalError::StoreUnavailable(StoreError::Corrupt(e.to_string())))
}
