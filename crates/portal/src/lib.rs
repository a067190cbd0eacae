//! Farmstand Portal - vendor record model, stock editor, and map projection.
//!
//! This crate is the domain engine behind the farm-stand locator. It owns:
//!
//! - The canonical [`models::VendorRecord`] schema and its merge-patch
//!   synchronization contract against the `vendors` document collection
//! - [`services::VendorService`], the only sanctioned write path to a record
//! - [`services::StockEditor`], the state machine behind the stock form
//! - [`map`], the pure projection from vendor records to renderable map state
//!
//! # Architecture
//!
//! External capabilities (auth provider, document store, geocoder, routing,
//! address autocomplete, QR encoding) are consumed through traits and
//! injected; nothing here reaches for ambient globals. The presentation
//! layer lives elsewhere and drives this crate one user action at a time.
//!
//! All persistence is a top-level merge-patch: a write to one field group
//! (`location`, `items`, `hours`, `vendorName`) never touches the others.
//! Writes are last-writer-wins; there is no version check and no retry.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod auth;
pub mod config;
pub mod error;
pub mod geo;
pub mod map;
pub mod models;
pub mod services;
pub mod share;
pub mod store;

pub use error::{PortalError, Result};
