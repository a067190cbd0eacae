//! Stock editor state machine.
//!
//! Drives one vendor's item list between two states: *Viewing* (list
//! displayed) and *Composing* (item form open). Every persisted change goes
//! through the vendor service as a full-list `items` patch, so the editor
//! never touches any other field group.
//!
//! Editing is delete-then-recreate: `edit` removes the item from the
//! persisted list immediately and pre-fills the form; the replacement only
//! lands on `submit`. A vendor who abandons the form loses the item.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use farmstand_core::VendorId;

use crate::error::{PortalError, Result};
use crate::models::{FieldGroupPatch, StockItem, total_quantity};
use crate::services::VendorService;

/// Form contents while composing an item. Fields hold raw form input;
/// parsing and validation happen at submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    /// Item name.
    pub name: String,
    /// Quantity, as typed.
    pub quantity: String,
    /// Price per unit, as typed; empty means unset.
    pub price: String,
    /// Price per dozen, as typed; empty means unset.
    pub price_per_dozen: String,
}

impl ItemForm {
    /// Pre-fill the form from an existing item (the edit flow).
    fn from_item(item: &StockItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.to_string(),
            price: item.price.map(|p| p.to_string()).unwrap_or_default(),
            price_per_dozen: item
                .price_per_dozen
                .map(|p| p.to_string())
                .unwrap_or_default(),
        }
    }

    /// Parse and validate the form into an item.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` for an empty name, a quantity that is not
    /// a whole number ≥ 0, or a negative/unparseable price.
    fn validate(&self) -> Result<StockItem> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(PortalError::ValidationFailed(
                "Item name cannot be empty.".to_string(),
            ));
        }

        let quantity: u32 = self.quantity.trim().parse().map_err(|_| {
            PortalError::ValidationFailed(
                "Quantity must be a whole number of 0 or more.".to_string(),
            )
        })?;

        Ok(StockItem {
            name: name.to_owned(),
            quantity,
            price: parse_optional_price(&self.price, "Price")?,
            price_per_dozen: parse_optional_price(&self.price_per_dozen, "Price per dozen")?,
        })
    }
}

/// Parse an optional price field; empty input means unset.
fn parse_optional_price(raw: &str, label: &str) -> Result<Option<Decimal>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let price = Decimal::from_str(raw).map_err(|_| {
        PortalError::ValidationFailed(format!("{label} must be a number."))
    })?;
    if price.is_sign_negative() {
        return Err(PortalError::ValidationFailed(format!(
            "{label} cannot be negative."
        )));
    }
    Ok(Some(price))
}

/// Which screen the editor is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    /// The item list is displayed.
    Viewing,
    /// The item form is open.
    Composing(ItemForm),
}

/// The stock-editing state machine for one vendor.
pub struct StockEditor {
    service: Arc<VendorService>,
    vendor_id: VendorId,
    items: Vec<StockItem>,
    /// The open form; `Some` means *Composing*, `None` means *Viewing*.
    form: Option<ItemForm>,
}

impl StockEditor {
    /// Open the editor on a vendor's record, initializing it if needed.
    ///
    /// # Errors
    ///
    /// Propagates `load_or_init` failures.
    pub async fn open(service: Arc<VendorService>, vendor_id: VendorId) -> Result<Self> {
        let record = service.load_or_init(&vendor_id).await?;
        Ok(Self {
            service,
            vendor_id,
            items: record.items,
            form: None,
        })
    }

    /// The current item list, in display order.
    #[must_use]
    pub fn items(&self) -> &[StockItem] {
        &self.items
    }

    /// The current editor state.
    #[must_use]
    pub fn state(&self) -> EditorState {
        self.form
            .clone()
            .map_or(EditorState::Viewing, EditorState::Composing)
    }

    /// Sum of quantities; zero means the marker shows out-of-stock.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        total_quantity(&self.items)
    }

    /// Open an empty form for a new item. A form already open is kept.
    pub fn compose(&mut self) -> &mut ItemForm {
        self.form.get_or_insert_with(ItemForm::default)
    }

    /// Start editing the item at `index`.
    ///
    /// Copies the item into the form, then removes it from the persisted
    /// list immediately; the replacement is appended on submit. Abandoning
    /// the form leaves the item deleted.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` for an out-of-range index. If the removal
    /// write fails, the list is left unchanged (the form stays open).
    pub async fn edit(&mut self, index: usize) -> Result<()> {
        let item = self.items.get(index).ok_or_else(|| {
            PortalError::ValidationFailed(format!("No item at position {index}."))
        })?;
        self.form = Some(ItemForm::from_item(item));

        let mut updated = self.items.clone();
        updated.remove(index);
        self.persist(updated).await
    }

    /// Validate the open form, append the item, and persist the list.
    ///
    /// On success the form is cleared and the editor returns to *Viewing*.
    /// On validation failure the form stays open with its input intact.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` for bad input or when no form is open,
    /// and store errors from the persist.
    pub async fn submit(&mut self) -> Result<()> {
        let Some(form) = &self.form else {
            return Err(PortalError::ValidationFailed(
                "No item form is open.".to_string(),
            ));
        };
        let item = form.validate()?;

        // appended at the end, never re-sorted
        let mut updated = self.items.clone();
        updated.push(item);
        self.persist(updated).await?;

        self.form = None;
        Ok(())
    }

    /// Delete the item at `index` and persist the shortened list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` for an out-of-range index, and store
    /// errors from the persist.
    pub async fn delete(&mut self, index: usize) -> Result<()> {
        if index >= self.items.len() {
            return Err(PortalError::ValidationFailed(format!(
                "No item at position {index}."
            )));
        }

        let mut updated = self.items.clone();
        updated.remove(index);
        self.persist(updated).await
    }

    /// Close the form without submitting.
    ///
    /// Does NOT restore an item removed by [`Self::edit`]; that removal was
    /// already persisted.
    pub fn cancel(&mut self) {
        self.form = None;
    }

    /// Set a new quantity on the item at `index`, in place.
    ///
    /// The customer-facing stand page adjusts quantities without going
    /// through the compose form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationFailed` for an out-of-range index, and store
    /// errors from the persist.
    pub async fn adjust_quantity(&mut self, index: usize, quantity: u32) -> Result<()> {
        let mut updated = self.items.clone();
        let item = updated.get_mut(index).ok_or_else(|| {
            PortalError::ValidationFailed(format!("No item at position {index}."))
        })?;
        item.quantity = quantity;
        self.persist(updated).await
    }

    /// Persist `updated` as the full item list; commit it locally only on
    /// success, so a failed write leaves the in-memory list matching the
    /// store.
    async fn persist(&mut self, updated: Vec<StockItem>) -> Result<()> {
        self.service
            .patch(&self.vendor_id, FieldGroupPatch::Items(updated.clone()))
            .await?;
        self.items = updated;
        Ok(())
    }
}
