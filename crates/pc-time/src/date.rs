//! `Date` type.
//!
//! A calendar date backed by `chrono::NaiveDate`, restricted to the range
//! 1 January 1901 – 31 December 2199.
//!
//! # Serial number convention
//! Serial numbers count days from 30 December 1899, so that serial 367 is
//! 1 January 1901 and serial 109 574 is 31 December 2199. This matches the
//! spreadsheet convention used by market-data vendors.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use pc_core::errors::{Error, Result};

/// `num_days_from_ce()` of 30 December 1899.
const EPOCH_FROM_CE: i32 = 693_594;

const MIN_SERIAL: i32 = 367;
const MAX_SERIAL: i32 = 109_574;

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        let naive = NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())
            .ok_or_else(|| {
                Error::Date(format!("invalid date {year:04}-{month:02}-{day:02}"))
            })?;
        Self::from_naive(naive)
    }

    /// Wrap a `chrono::NaiveDate`, checking the supported range.
    pub fn from_naive(naive: NaiveDate) -> Result<Self> {
        let serial = naive.num_days_from_ce() - EPOCH_FROM_CE;
        if !(MIN_SERIAL..=MAX_SERIAL).contains(&serial) {
            return Err(Error::Date(format!(
                "{naive} outside [1901-01-01, 2199-12-31]"
            )));
        }
        Ok(Date(naive))
    }

    /// Create a date from a serial number.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(MIN_SERIAL..=MAX_SERIAL).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} outside [{MIN_SERIAL}, {MAX_SERIAL}]"
            )));
        }
        NaiveDate::from_num_days_from_ce_opt(serial + EPOCH_FROM_CE)
            .map(Date)
            .ok_or_else(|| Error::Date(format!("serial {serial} is not representable")))
    }

    /// Earliest supported date (1 January 1901).
    pub fn min_date() -> Self {
        Date(NaiveDate::MIN).clamp_to_range()
    }

    /// Latest supported date (31 December 2199).
    pub fn max_date() -> Self {
        Date(NaiveDate::MAX).clamp_to_range()
    }

    fn clamp_to_range(self) -> Self {
        let serial = self.0.num_days_from_ce() - EPOCH_FROM_CE;
        let clamped = serial.clamp(MIN_SERIAL, MAX_SERIAL);
        NaiveDate::from_num_days_from_ce_opt(clamped + EPOCH_FROM_CE)
            .map(Date)
            .unwrap_or(self)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Serial number (days since 30 December 1899).
    pub fn serial(&self) -> i32 {
        self.0.num_days_from_ce() - EPOCH_FROM_CE
    }

    /// The underlying `chrono` date.
    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// Year (1901–2199).
    pub fn year(&self) -> u16 {
        // range-checked on construction
        self.0.year() as u16
    }

    /// Month (1–12).
    pub fn month(&self) -> u8 {
        self.0.month() as u8
    }

    /// Day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.0.day() as u8
    }

    /// Day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        self.0.ordinal() as u16
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Move by `n` calendar days (negative moves backwards).
    pub fn add_days(self, n: i32) -> Result<Self> {
        let moved = if n >= 0 {
            self.0.checked_add_days(Days::new(n.unsigned_abs().into()))
        } else {
            self.0.checked_sub_days(Days::new(n.unsigned_abs().into()))
        };
        moved
            .ok_or_else(|| Error::Date(format!("{self} {n:+} days overflows")))
            .and_then(Self::from_naive)
    }

    /// Move by `n` months, clamping the day to the end of the target month.
    pub fn add_months(self, n: i32) -> Result<Self> {
        let moved = if n >= 0 {
            self.0.checked_add_months(Months::new(n.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(n.unsigned_abs()))
        };
        moved
            .ok_or_else(|| Error::Date(format!("{self} {n:+} months overflows")))
            .and_then(Self::from_naive)
    }

    /// Calendar days from `self` to `other` (positive if `other` is later).
    pub fn days_between(self, other: Date) -> i32 {
        other.serial() - self.serial()
    }

    /// Last calendar day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let first = self.0.with_day(1).unwrap_or(self.0);
        let last = first
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(self.0);
        Date(last)
    }

    /// Whether this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.serial() - rhs.serial()
    }
}

// ── Parsing / formatting ──────────────────────────────────────────────────────

impl std::str::FromStr for Date {
    type Err = Error;

    /// Parse an ISO-8601 `YYYY-MM-DD` date.
    fn from_str(s: &str) -> Result<Self> {
        let naive = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| Error::Date(format!("cannot parse {s:?}: {e}")))?;
        Self::from_naive(naive)
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%-d %B %Y"))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Date;
    use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Date {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(&self.0.format("%Y-%m-%d"))
        }
    }

    impl<'de> Deserialize<'de> for Date {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let s = String::deserialize(deserializer)?;
            s.parse().map_err(D::Error::custom)
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
