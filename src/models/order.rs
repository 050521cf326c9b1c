//! Production order model.
//!
//! An order is the unit that gets colored. Only its identity and its
//! position fields (date, shift, line) matter to the coloring pipeline;
//! the description is carried for callers.
//!
//! # Calendar days
//! Dates are normalized to a local calendar day before they are stored, so
//! two timestamps on the same local day always land in the same grid column
//! regardless of time-of-day or the offset they were serialized with.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::ColoringError;

/// Order identifier, unique within one input list.
pub type OrderId = i64;

/// A scheduled production order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Production day (local calendar day).
    #[serde(deserialize_with = "deserialize_calendar_day")]
    pub date: NaiveDate,
    /// Shift within the day, 1-based.
    pub shift: i32,
    /// Production line number; `None` when the order is not assigned to a line.
    pub line: Option<i32>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

impl Order {
    /// Creates an order without a description.
    pub fn new(id: OrderId, date: NaiveDate, shift: i32, line: Option<i32>) -> Self {
        Self {
            id,
            date,
            shift,
            line,
            description: String::new(),
        }
    }

    /// Creates an order from a date string.
    ///
    /// Accepts everything [`parse_calendar_day`] accepts.
    pub fn parse(
        id: OrderId,
        date: &str,
        shift: i32,
        line: Option<i32>,
    ) -> Result<Self, ColoringError> {
        Ok(Self::new(id, parse_calendar_day(date)?, shift, line))
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Day number since the common-era epoch.
    #[inline]
    pub fn day_index(&self) -> i32 {
        self.date.num_days_from_ce()
    }

    /// Whether the order has a production line.
    #[inline]
    pub fn has_line(&self) -> bool {
        self.line.is_some()
    }
}

/// Datetime layouts carrying a UTC offset (`+01:00` or `+0100`).
const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%z",
    "%Y-%m-%d %H:%M%z",
];

/// Datetime layouts without an offset; `%.f` also matches no fraction.
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses a date value into a local calendar day.
///
/// Accepted forms:
/// - `YYYY-MM-DD`
/// - ISO-8601 datetimes with an offset (`2025-01-15T23:30:00+01:00`,
///   `2025-01-15T23:30Z`, `2025-01-15 23:30:00.000+0100`), converted to the
///   local timezone before the day is taken
/// - offset-less datetimes (`2025-01-15T08:00`, `2025-01-15 08:00:00.5`),
///   taken as already local
///
/// Seconds are optional and `T` or a space may separate date and time.
pub fn parse_calendar_day(raw: &str) -> Result<NaiveDate, ColoringError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.with_timezone(&Local).date_naive());
    }
    let zulu = raw.strip_suffix('Z').map(|head| format!("{head}+00:00"));
    let with_offset = zulu.as_deref().unwrap_or(raw);
    for format in OFFSET_FORMATS {
        if let Ok(datetime) = DateTime::parse_from_str(with_offset, format) {
            return Ok(datetime.with_timezone(&Local).date_naive());
        }
    }
    for format in LOCAL_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(datetime.date());
        }
    }

    Err(ColoringError::InvalidDate(raw.to_string()))
}

fn deserialize_calendar_day<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_calendar_day(&raw).map_err(serde::de::Error::custom)
}
