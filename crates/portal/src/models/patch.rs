//! Field-group merge patches.
//!
//! A patch targets exactly one top-level field group of the vendor
//! document. Rendering a patch produces the partial document handed to the
//! store's merge write; no read-modify-write of the full record is involved,
//! which is what keeps concurrent writes to *different* groups from
//! clobbering each other.

use chrono::{DateTime, Utc};
use serde_json::{Map, Value, json};

use super::hours::WeekHours;
use super::item::StockItem;
use super::record::StandLocation;
use crate::store::StoreError;

/// The unit of isolated write access to a vendor record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldGroup {
    VendorName,
    Location,
    Hours,
    Items,
}

impl FieldGroup {
    /// The top-level document key this group occupies.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::VendorName => "vendorName",
            Self::Location => "location",
            Self::Hours => "hours",
            Self::Items => "items",
        }
    }
}

impl std::fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A merge-patch against one field group.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldGroupPatch {
    /// Replace the display name.
    VendorName(String),
    /// Replace the location; `None` stores an explicit null.
    Location(Option<StandLocation>),
    /// Replace the full week of hours.
    Hours(WeekHours),
    /// Replace the full item list.
    Items(Vec<StockItem>),
}

impl FieldGroupPatch {
    /// The field group this patch targets.
    #[must_use]
    pub const fn group(&self) -> FieldGroup {
        match self {
            Self::VendorName(_) => FieldGroup::VendorName,
            Self::Location(_) => FieldGroup::Location,
            Self::Hours(_) => FieldGroup::Hours,
            Self::Items(_) => FieldGroup::Items,
        }
    }

    /// Render the partial document for a merge write.
    ///
    /// Location patches additionally stamp `lastUpdated` with `now`; no
    /// other group touches it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the value cannot be rendered as
    /// JSON (which would indicate a broken model type, not user input).
    pub fn to_document(&self, now: DateTime<Utc>) -> Result<Value, StoreError> {
        let mut doc = Map::new();

        let value = match self {
            Self::VendorName(name) => Value::String(name.clone()),
            Self::Location(location) => to_json(location)?,
            Self::Hours(hours) => to_json(hours)?,
            Self::Items(items) => to_json(items)?,
        };
        doc.insert(self.group().key().to_owned(), value);

        if self.group() == FieldGroup::Location {
            doc.insert("lastUpdated".to_owned(), json!(now));
        }

        Ok(Value::Object(doc))
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<Value, StoreError> {
    serde_json::to_value(value).map_err(|e| StoreError::Corrupt(e.to_string()))
}
