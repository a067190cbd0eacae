//! Stock items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One line of a vendor's stock list.
///
/// Items are addressed by list position; there is no stable per-item id.
/// That makes list order load-bearing for edits even though it is only
/// display order semantically.
///
/// The two price fields intentionally serialize differently: `price` is
/// omitted from the document when unset, while `pricePerDozen` is written
/// as an explicit `null`. Existing documents distinguish the two forms, so
/// both are preserved on round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    /// Display name, non-empty.
    pub name: String,
    /// Units currently available.
    pub quantity: u32,
    /// Price per unit, absent when the vendor has not set one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,
    /// Price per dozen, explicit null when unset.
    #[serde(default)]
    pub price_per_dozen: Option<Decimal>,
}

impl StockItem {
    /// Create an item with no pricing.
    #[must_use]
    pub const fn new(name: String, quantity: u32) -> Self {
        Self {
            name,
            quantity,
            price: None,
            price_per_dozen: None,
        }
    }
}

/// Sum of quantities across the list; drives the has-stock marker signal.
#[must_use]
pub fn total_quantity(items: &[StockItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}
