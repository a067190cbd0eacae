//! The canonical vendor record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use farmstand_core::{Coordinates, Email};

use super::hours::WeekHours;
use super::item::{StockItem, total_quantity};

/// A vendor's geocoded stand location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandLocation {
    /// The free-text address the vendor entered, as geocoded.
    pub address: String,
    /// Optional finding hint ("at the end of the driveway").
    pub note: Option<String>,
    /// Geocoded latitude.
    pub lat: f64,
    /// Geocoded longitude.
    pub lng: f64,
}

impl StandLocation {
    /// The location as a coordinate pair.
    #[must_use]
    pub const fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }

    /// The note, if it is set and non-empty.
    ///
    /// Older documents carry `""` where newer ones carry `null`; both mean
    /// "no note".
    #[must_use]
    pub fn display_note(&self) -> Option<&str> {
        self.note.as_deref().filter(|n| !n.is_empty())
    }
}

/// The persisted vendor document, one per vendor.
///
/// Keyed by the owning auth identity's id; the key never changes once the
/// record exists. The serde form of this struct is the document layout:
///
/// ```json
/// {
///   "vendorName": "...", "email": "...",
///   "location": {"address": "...", "note": null, "lat": 41.9, "lng": -72.0},
///   "hours": {"Mon": {"open": "", "close": "", "closed": true}, ...},
///   "items": [{"name": "Corn", "quantity": 12, "pricePerDozen": null}],
///   "lastUpdated": "2024-06-01T12:00:00Z"
/// }
/// ```
///
/// Every field group tolerates being absent on read: records created at
/// sign-up hold only `vendorName` and `email`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorRecord {
    /// Display name shown on markers and the vendor page.
    pub vendor_name: String,
    /// Mirrors the auth identity's email; informational only.
    pub email: Email,
    /// Geocoded stand location, or null while unset.
    #[serde(default)]
    pub location: Option<StandLocation>,
    /// Weekly hours; defaults to all-closed.
    #[serde(default)]
    pub hours: WeekHours,
    /// Stock list in display order.
    #[serde(default)]
    pub items: Vec<StockItem>,
    /// Stamped on every location write.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<DateTime<Utc>>,
}

impl VendorRecord {
    /// The default skeleton persisted the first time an authenticated vendor
    /// is observed with no record: empty items, null location, all seven
    /// days closed, email copied from the identity.
    #[must_use]
    pub fn skeleton(vendor_name: String, email: Email) -> Self {
        Self {
            vendor_name,
            email,
            location: None,
            hours: WeekHours::all_closed(),
            items: Vec::new(),
            last_updated: None,
        }
    }

    /// Sum of item quantities; zero means the stand is out of stock.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        total_quantity(&self.items)
    }
}
