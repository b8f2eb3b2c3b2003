//! TARGET (Trans-European Automated Real-time Gross Settlement) calendar.

use crate::calendar::Calendar;
use crate::date::Date;

/// TARGET calendar, the settlement calendar of euro-denominated indexes.
///
/// Weekends and the following holidays are observed:
/// * New Year's Day (Jan 1)
/// * Good Friday (since 2000)
/// * Easter Monday (since 2000)
/// * Labour Day (May 1, since 2000)
/// * Christmas Day (Dec 25)
/// * Day of Goodwill (Dec 26)
/// * Dec 31 in 1998, 1999 and 2001
#[derive(Debug, Clone, Copy, Default)]
pub struct Target;

impl Calendar for Target {
    fn name(&self) -> &str {
        "TARGET"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if self.is_weekend(date) {
            return false;
        }
        let y = date.year();
        let (m, d) = (date.month(), date.day_of_month());
        let easter_monday = easter_monday_day_of_year(y);
        let dd = date.day_of_year();

        let holiday = (m == 1 && d == 1)
            || (y >= 2000 && (dd + 3 == easter_monday || dd == easter_monday))
            || (y >= 2000 && m == 5 && d == 1)
            || (m == 12 && (d == 25 || d == 26))
            || (m == 12 && d == 31 && matches!(y, 1998 | 1999 | 2001));
        !holiday
    }
}

/// Day of the year (1-based) of Easter Monday in the Gregorian calendar.
///
/// Anonymous Gregorian (Meeus/Jones/Butcher) computus.
pub(crate) fn easter_monday_day_of_year(year: u16) -> u16 {
    let y = i32::from(year);
    let a = y % 19;
    let b = y / 100;
    let c = y % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    let leap = (y % 4 == 0 && y % 100 != 0) || y % 400 == 0;
    // Easter falls in March or April
    let sunday = if month == 3 {
        31 + if leap { 29 } else { 28 } + day
    } else {
        31 + if leap { 29 } else { 28 } + 31 + day
    };
    (sunday + 1) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_holidays() {
        let cal = Target;
        assert!(!cal.is_business_day(date(2024, 1, 1)));
        assert!(!cal.is_business_day(date(2024, 5, 1)));
        assert!(!cal.is_business_day(date(2024, 12, 25)));
        assert!(!cal.is_business_day(date(2024, 12, 26)));
    }

    #[test]
    fn easter_2023() {
        // Easter Sunday 2023: April 9
        let cal = Target;
        assert!(!cal.is_business_day(date(2023, 4, 7)));
        assert!(!cal.is_business_day(date(2023, 4, 10)));
        assert!(cal.is_business_day(date(2023, 4, 11)));
    }

    #[test]
    fn easter_2025() {
        // Easter Sunday 2025: April 20
        assert_eq!(easter_monday_day_of_year(2025), date(2025, 4, 21).day_of_year());
        assert!(!Target.is_business_day(date(2025, 4, 18)));
    }

    #[test]
    fn new_years_eve_2001_only_in_listed_years() {
        let cal = Target;
        assert!(!cal.is_business_day(date(2001, 12, 31)));
        assert!(cal.is_business_day(date(2002, 12, 31)));
    }

    #[test]
    fn ordinary_day() {
        assert!(Target.is_business_day(date(2023, 6, 15)));
    }
}
