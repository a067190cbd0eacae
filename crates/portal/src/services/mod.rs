//! Portal services.
//!
//! [`VendorService`] owns the record lifecycle and is the only write path
//! to the store; [`StockEditor`] drives the item list through it.

pub mod stock;
pub mod vendor;

pub use stock::{EditorState, ItemForm, StockEditor};
pub use vendor::VendorService;
