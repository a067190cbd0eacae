//! Weekly hours of operation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use farmstand_core::Weekday;

/// Errors produced when validating hours.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HoursError {
    /// A closed day carries a non-empty open or close time.
    #[error("{day} is marked closed but has open/close times set")]
    ClosedWithTimes {
        /// The offending day.
        day: Weekday,
    },
    /// An open day is missing a time or carries a malformed one.
    #[error("{day} has an invalid {field} time {value:?} (expected 24-hour HH:MM)")]
    InvalidTime {
        /// The offending day.
        day: Weekday,
        /// `"open"` or `"close"`.
        field: &'static str,
        /// The rejected input.
        value: String,
    },
}

/// One day's hours.
///
/// Invariant (checked by [`DayHours::validate`], enforced on every hours
/// submit): `closed == true` implies both times are empty strings;
/// `closed == false` implies both are valid 24-hour `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayHours {
    /// Opening time, `"HH:MM"`, or `""` when closed.
    pub open: String,
    /// Closing time, `"HH:MM"`, or `""` when closed.
    pub close: String,
    /// Whether the stand is closed all day.
    pub closed: bool,
}

impl DayHours {
    /// A closed day.
    #[must_use]
    pub const fn closed() -> Self {
        Self {
            open: String::new(),
            close: String::new(),
            closed: true,
        }
    }

    /// An open day with the given times. Validation happens at submit.
    #[must_use]
    pub fn open(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            closed: false,
        }
    }

    /// Check the closed/times invariant for one day.
    ///
    /// # Errors
    ///
    /// Returns `HoursError` naming the day and the offending field.
    pub fn validate(&self, day: Weekday) -> Result<(), HoursError> {
        if self.closed {
            if !self.open.is_empty() || !self.close.is_empty() {
                return Err(HoursError::ClosedWithTimes { day });
            }
            return Ok(());
        }

        if !is_valid_hhmm(&self.open) {
            return Err(HoursError::InvalidTime {
                day,
                field: "open",
                value: self.open.clone(),
            });
        }
        if !is_valid_hhmm(&self.close) {
            return Err(HoursError::InvalidTime {
                day,
                field: "close",
                value: self.close.clone(),
            });
        }
        Ok(())
    }
}

impl Default for DayHours {
    fn default() -> Self {
        Self::closed()
    }
}

/// The full week, keyed by the fixed seven weekday tags.
///
/// Serialized as an object with exactly the keys `Mon..Sun`, matching the
/// persisted document.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeekHours {
    #[serde(rename = "Mon", default)]
    pub mon: DayHours,
    #[serde(rename = "Tues", default)]
    pub tues: DayHours,
    #[serde(rename = "Weds", default)]
    pub weds: DayHours,
    #[serde(rename = "Thurs", default)]
    pub thurs: DayHours,
    #[serde(rename = "Fri", default)]
    pub fri: DayHours,
    #[serde(rename = "Sat", default)]
    pub sat: DayHours,
    #[serde(rename = "Sun", default)]
    pub sun: DayHours,
}

impl WeekHours {
    /// All seven days closed; the skeleton record starts here.
    #[must_use]
    pub fn all_closed() -> Self {
        Self::default()
    }

    /// The hours for one day.
    #[must_use]
    pub const fn day(&self, day: Weekday) -> &DayHours {
        match day {
            Weekday::Mon => &self.mon,
            Weekday::Tues => &self.tues,
            Weekday::Weds => &self.weds,
            Weekday::Thurs => &self.thurs,
            Weekday::Fri => &self.fri,
            Weekday::Sat => &self.sat,
            Weekday::Sun => &self.sun,
        }
    }

    /// Replace the hours for one day. Validation happens at submit.
    pub fn set_day(&mut self, day: Weekday, hours: DayHours) {
        match day {
            Weekday::Mon => self.mon = hours,
            Weekday::Tues => self.tues = hours,
            Weekday::Weds => self.weds = hours,
            Weekday::Thurs => self.thurs = hours,
            Weekday::Fri => self.fri = hours,
            Weekday::Sat => self.sat = hours,
            Weekday::Sun => self.sun = hours,
        }
    }

    /// Iterate the week in display order.
    pub fn days(&self) -> impl Iterator<Item = (Weekday, &DayHours)> {
        Weekday::ALL.into_iter().map(move |d| (d, self.day(d)))
    }

    /// Check the closed/times invariant for every day.
    ///
    /// # Errors
    ///
    /// Returns the first `HoursError` encountered, in display order.
    pub fn validate(&self) -> Result<(), HoursError> {
        for (day, hours) in self.days() {
            hours.validate(day)?;
        }
        Ok(())
    }
}

/// Whether `s` is a 24-hour `HH:MM` string (e.g. `"08:30"`, `"17:00"`).
fn is_valid_hhmm(s: &str) -> bool {
    let Some((h, m)) = s.split_once(':') else {
        return false;
    };
    if h.len() != 2 || m.len() != 2 {
        return false;
    }
    let (Ok(hour), Ok(minute)) = (h.parse::<u8>(), m.parse::<u8>()) else {
        return false;
    };
    hour < 24 && minute < 60
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_all_closed_is_valid() {
        let hours = WeekHours::all_closed();
        assert!(hours.validate().is_ok());
        for (_, day) in hours.days() {
            assert!(day.closed);
            assert!(day.open.is_empty());
            assert!(day.close.is_empty());
        }
    }

    #[test]
    fn test_open_day_requires_valid_times() {
        let mut hours = WeekHours::all_closed();
        hours.set_day(Weekday::Sat, DayHours::open("08:00", "17:30"));
        assert!(hours.validate().is_ok());

        hours.set_day(Weekday::Sat, DayHours::open("8:00", "17:30"));
        assert!(matches!(
            hours.validate(),
            Err(HoursError::InvalidTime {
                day: Weekday::Sat,
                field: "open",
                ..
            })
        ));
    }

    #[test]
    fn test_closed_day_with_times_rejected() {
        let mut hours = WeekHours::all_closed();
        hours.set_day(
            Weekday::Mon,
            DayHours {
                open: "09:00".to_string(),
                close: String::new(),
                closed: true,
            },
        );
        assert!(matches!(
            hours.validate(),
            Err(HoursError::ClosedWithTimes { day: Weekday::Mon })
        ));
    }

    #[test]
    fn test_hhmm_edge_cases() {
        assert!(is_valid_hhmm("00:00"));
        assert!(is_valid_hhmm("23:59"));
        assert!(!is_valid_hhmm("24:00"));
        assert!(!is_valid_hhmm("12:60"));
        assert!(!is_valid_hhmm("12-30"));
        assert!(!is_valid_hhmm(""));
        assert!(!is_valid_hhmm("1:30"));
    }

    #[test]
    fn test_serde_uses_document_keys() {
        let hours = WeekHours::all_closed();
        let json = serde_json::to_value(&hours).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 7);
        for day in farmstand_core::Weekday::ALL {
            assert!(obj.contains_key(day.as_str()), "missing {day}");
        }
    }
}
