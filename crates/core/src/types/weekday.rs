//! Weekday tags used as keys in a vendor's hours map.
//!
//! The serialized names match the persisted document keys exactly
//! (`Mon`, `Tues`, `Weds`, `Thurs`, `Fri`, `Sat`, `Sun`), so changing them
//! is a data migration.

use core::fmt;

use serde::{Deserialize, Serialize};

/// A day of the week, in vendor-hours display order (Monday first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    #[serde(rename = "Mon")]
    Mon,
    #[serde(rename = "Tues")]
    Tues,
    #[serde(rename = "Weds")]
    Weds,
    #[serde(rename = "Thurs")]
    Thurs,
    #[serde(rename = "Fri")]
    Fri,
    #[serde(rename = "Sat")]
    Sat,
    #[serde(rename = "Sun")]
    Sun,
}

impl Weekday {
    /// All seven days in display order.
    pub const ALL: [Self; 7] = [
        Self::Mon,
        Self::Tues,
        Self::Weds,
        Self::Thurs,
        Self::Fri,
        Self::Sat,
        Self::Sun,
    ];

    /// The document key / display tag for this day.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mon => "Mon",
            Self::Tues => "Tues",
            Self::Weds => "Weds",
            Self::Thurs => "Thurs",
            Self::Fri => "Fri",
            Self::Sat => "Sat",
            Self::Sun => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
