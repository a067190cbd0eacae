//! Document store capability for the `vendors` collection.
//!
//! The store itself is an external service; this module owns only the
//! contract the portal relies on:
//!
//! - Documents are keyed by vendor id.
//! - `merge_patch` replaces exactly the top-level keys present in the
//!   partial document and leaves every other key byte-identical. A JSON
//!   `null` in the patch *stores* null, it does not delete the key.
//! - Writes are last-writer-wins; there is no version check.
//!
//! The [`MemoryVendorStore`] implementation honors the same contract for
//! local development and tests.

mod memory;

pub use memory::MemoryVendorStore;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use farmstand_core::VendorId;

/// Errors surfaced by a document store implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store call itself failed (network, backend outage).
    #[error("store call failed: {0}")]
    Unavailable(String),

    /// A document could not be (de)serialized against the schema.
    #[error("document corrupt: {0}")]
    Corrupt(String),
}

/// Capability trait for the vendor document collection.
#[async_trait]
pub trait VendorStore: Send + Sync {
    /// Fetch one document, or `None` if no record exists for the id.
    async fn get(&self, id: &VendorId) -> Result<Option<Value>, StoreError>;

    /// Merge-write a partial document. Creates the document if absent.
    ///
    /// `patch` must be a JSON object; its top-level keys replace the stored
    /// keys and all others are untouched.
    async fn merge_patch(&self, id: &VendorId, patch: Value) -> Result<(), StoreError>;

    /// Fetch the entire collection. The vendor set is small enough that
    /// every map view reloads it wholesale; no pagination.
    async fn list_all(&self) -> Result<Vec<(VendorId, Value)>, StoreError>;
}
