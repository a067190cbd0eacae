//! In-memory vendor store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

use farmstand_core::VendorId;

use super::{StoreError, VendorStore};

/// A [`VendorStore`] held entirely in memory.
///
/// Implements the same top-level merge semantics as the production document
/// store. Used by local development and by the test suites; a `BTreeMap`
/// keeps `list_all` order deterministic.
#[derive(Debug, Default)]
pub struct MemoryVendorStore {
    documents: RwLock<BTreeMap<VendorId, Value>>,
}

impl MemoryVendorStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VendorStore for MemoryVendorStore {
    async fn get(&self, id: &VendorId) -> Result<Option<Value>, StoreError> {
        Ok(self.documents.read().await.get(id).cloned())
    }

    async fn merge_patch(&self, id: &VendorId, patch: Value) -> Result<(), StoreError> {
        let Value::Object(patch) = patch else {
            return Err(StoreError::Corrupt(
                "merge patch must be a JSON object".to_string(),
            ));
        };

        let mut documents = self.documents.write().await;
        let doc = documents
            .entry(id.clone())
            .or_insert_with(|| Value::Object(serde_json::Map::new()));

        let Value::Object(existing) = doc else {
            return Err(StoreError::Corrupt(format!(
                "stored document for {id} is not an object"
            )));
        };

        // Top-level replace per key; null stores null rather than deleting.
        for (key, value) in patch {
            existing.insert(key, value);
        }

        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<(VendorId, Value)>, StoreError> {
        Ok(self
            .documents
            .read()
            .await
            .iter()
            .map(|(id, doc)| (id.clone(), doc.clone()))
            .collect())
    }
}
