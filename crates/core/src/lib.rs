//! Farmstand Core - Shared types library.
//!
//! This crate provides common types used across all Farmstand components:
//! - `portal` - Vendor record model, stock editor, and map projection
//! - `integration-tests` - End-to-end scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no document store access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for vendor identities, emails, coordinates,
//!   and weekdays

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
