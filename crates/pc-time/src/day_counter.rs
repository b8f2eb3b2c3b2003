//! `DayCounter` trait and built-in day-count conventions.
//!
//! A day counter computes the fraction of a year between two dates; coupons
//! use it once, at construction, to fix their accrual period.

use crate::date::Date;
use pc_core::{Real, Time};

/// A convention for counting the fraction of a year between two dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/360"`).
    fn name(&self) -> &str;

    /// Number of days between `d1` and `d2` according to this convention.
    fn day_count(&self, d1: Date, d2: Date) -> i64;

    /// Fraction of a year between `d1` and `d2`.
    fn year_fraction(&self, d1: Date, d2: Date) -> Time;

    /// Fraction of a year with reference-period hints.
    ///
    /// None of the conventions here need the reference period; ISDA-style
    /// counters would override this.
    fn year_fraction_with_ref(
        &self,
        d1: Date,
        d2: Date,
        _ref_start: Date,
        _ref_end: Date,
    ) -> Time {
        self.year_fraction(d1, d2)
    }
}

/// Actual/365 (Fixed).
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &str {
        "Actual/365 (Fixed)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        i64::from(d1.days_between(d2))
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 365.0
    }
}

/// Actual/360, the money-market convention of most IBOR indexes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual360;

impl DayCounter for Actual360 {
    fn name(&self) -> &str {
        "Actual/360"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        i64::from(d1.days_between(d2))
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

/// 30/360 (US bond basis).
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360;

impl DayCounter for Thirty360 {
    fn name(&self) -> &str {
        "30/360 (Bond Basis)"
    }

    fn day_count(&self, d1: Date, d2: Date) -> i64 {
        let (y1, m1, mut dd1) = (
            i64::from(d1.year()),
            i64::from(d1.month()),
            i64::from(d1.day_of_month()),
        );
        let (y2, m2, mut dd2) = (
            i64::from(d2.year()),
            i64::from(d2.month()),
            i64::from(d2.day_of_month()),
        );
        if dd1 == 31 {
            dd1 = 30;
        }
        if dd2 == 31 && dd1 == 30 {
            dd2 = 30;
        }
        360 * (y2 - y1) + 30 * (m2 - m1) + (dd2 - dd1)
    }

    fn year_fraction(&self, d1: Date, d2: Date) -> Time {
        self.day_count(d1, d2) as Real / 360.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn actual_360_quarter() {
        let t = Actual360.year_fraction(date(2025, 1, 15), date(2025, 4, 15));
        assert_abs_diff_eq!(t, 90.0 / 360.0, epsilon = 1e-15);
    }

    #[test]
    fn actual_365_fixed_year() {
        let t = Actual365Fixed.year_fraction(date(2025, 1, 1), date(2026, 1, 1));
        assert_abs_diff_eq!(t, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn thirty_360_end_of_month() {
        let dc = Thirty360;
        assert_eq!(dc.day_count(date(2025, 1, 31), date(2025, 3, 31)), 60);
        assert_eq!(dc.day_count(date(2025, 1, 15), date(2025, 7, 15)), 180);
        assert_abs_diff_eq!(
            dc.year_fraction(date(2025, 1, 15), date(2026, 1, 15)),
            1.0,
            epsilon = 1e-15
        );
    }

    #[test]
    fn negative_period() {
        let t = Actual360.year_fraction(date(2025, 4, 15), date(2025, 1, 15));
        assert!(t < 0.0);
    }
}
