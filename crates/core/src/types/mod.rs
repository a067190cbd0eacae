//! Core types for Farmstand.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod coords;
pub mod email;
pub mod id;
pub mod weekday;

pub use coords::{Coordinates, CoordinatesError};
pub use email::{Email, EmailError};
pub use id::{VendorId, VendorIdError};
pub use weekday::Weekday;
