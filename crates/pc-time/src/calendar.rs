//! `Calendar` trait and the two rule-free calendars.
//!
//! A calendar knows which dates are business days, adjusts dates according
//! to a [`BusinessDayConvention`], and moves dates by a number of business
//! days. Index value dates are computed with [`Calendar::advance`].

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use chrono::Weekday;
use pc_core::errors::{Error, Result};
use pc_core::{Integer, Natural};

/// Convert a count of business days to the signed offset taken by
/// [`Calendar::advance`].
pub fn business_day_offset(days: Natural) -> Result<Integer> {
    Integer::try_from(days)
        .map_err(|_| Error::InvalidArgument(format!("{days} business days is out of range")))
}

/// A financial calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"TARGET"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on a weekend.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => roll(self, date, 1),
            BusinessDayConvention::Preceding => roll(self, date, -1),
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = roll(self, date, 1)?;
                if adjusted.month() != date.month() {
                    roll(self, date, -1)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = roll(self, date, -1)?;
                if adjusted.month() != date.month() {
                    roll(self, date, 1)
                } else {
                    Ok(adjusted)
                }
            }
        }
    }

    /// Move `date` by `n` business days (negative moves backwards).
    ///
    /// With `n == 0` the date is adjusted to the following business day, so
    /// that a zero lag on a holiday still lands on a business day.
    fn advance(&self, date: Date, n: i32) -> Result<Date> {
        if n == 0 {
            return self.adjust(date, BusinessDayConvention::Following);
        }
        let step = n.signum();
        let mut d = date;
        for _ in 0..n.unsigned_abs() {
            d = d.add_days(step)?;
            while self.is_holiday(d) {
                d = d.add_days(step)?;
            }
        }
        Ok(d)
    }

    /// Count business days between `d1` (exclusive) and `d2` (inclusive).
    /// Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i32 {
        let (start, end, sign) = if d2 >= d1 { (d1, d2, 1) } else { (d2, d1, -1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|&d| self.is_business_day(d))
            .count() as i32;
        sign * count
    }
}

/// Step one day at a time in direction `step` until a business day is found.
fn roll<C: Calendar + ?Sized>(cal: &C, mut date: Date, step: i32) -> Result<Date> {
    while cal.is_holiday(date) {
        date = date.add_days(step)?;
    }
    Ok(date)
}

/// Every day is a business day.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullCalendar;

impl Calendar for NullCalendar {
    fn name(&self) -> &str {
        "Null"
    }

    fn is_business_day(&self, _date: Date) -> bool {
        true
    }

    fn is_weekend(&self, _date: Date) -> bool {
        false
    }
}

/// Saturdays and Sundays are the only non-business days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn null_calendar_always_business() {
        let cal = NullCalendar;
        assert!(cal.is_business_day(date(2023, 12, 25)));
        assert!(cal.is_business_day(date(2023, 9, 2)));
    }

    #[test]
    fn adjust_following_and_preceding() {
        let cal = WeekendsOnly;
        let sat = date(2023, 9, 2);
        assert_eq!(
            cal.adjust(sat, BusinessDayConvention::Following).unwrap(),
            date(2023, 9, 4)
        );
        assert_eq!(
            cal.adjust(sat, BusinessDayConvention::Preceding).unwrap(),
            date(2023, 9, 1)
        );
    }

    #[test]
    fn modified_following_stays_in_month() {
        let cal = WeekendsOnly;
        // Saturday 30 September 2023: Following would cross into October
        let sat = date(2023, 9, 30);
        assert_eq!(
            cal.adjust(sat, BusinessDayConvention::ModifiedFollowing).unwrap(),
            date(2023, 9, 29)
        );
    }

    #[test]
    fn advance_skips_weekends() {
        let cal = WeekendsOnly;
        let thu = date(2023, 9, 7);
        assert_eq!(cal.advance(thu, 2).unwrap(), date(2023, 9, 11));
        assert_eq!(cal.advance(date(2023, 9, 11), -2).unwrap(), thu);
    }

    #[test]
    fn advance_zero_adjusts_holiday() {
        let cal = WeekendsOnly;
        assert_eq!(cal.advance(date(2023, 9, 2), 0).unwrap(), date(2023, 9, 4));
        assert_eq!(cal.advance(date(2023, 9, 5), 0).unwrap(), date(2023, 9, 5));
    }

    #[test]
    fn business_day_offset_rejects_overflow() {
        assert_eq!(business_day_offset(2).unwrap(), 2);
        assert_eq!(business_day_offset(i32::MAX as u32).unwrap(), i32::MAX);
        assert!(business_day_offset(u32::MAX).is_err());
    }

    #[test]
    fn advance_out_of_range_errors() {
        assert!(NullCalendar.advance(Date::max_date(), 1).is_err());
    }

    #[test]
    fn business_days_between() {
        let cal = WeekendsOnly;
        let mon = date(2023, 9, 4);
        let fri = date(2023, 9, 8);
        assert_eq!(cal.business_days_between(mon, fri), 4);
        assert_eq!(cal.business_days_between(fri, mon), -4);
        assert_eq!(cal.business_days_between(mon, mon), 0);
    }
}
