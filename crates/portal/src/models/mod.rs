//! Vendor domain types.
//!
//! These types are the in-memory form of the persisted vendor document.
//! Their serde representation *is* the document layout, so field renames
//! here are data migrations.

pub mod hours;
pub mod item;
pub mod patch;
pub mod record;

pub use hours::{DayHours, HoursError, WeekHours};
pub use item::{StockItem, total_quantity};
pub use patch::{FieldGroup, FieldGroupPatch};
pub use record::{StandLocation, VendorRecord};
