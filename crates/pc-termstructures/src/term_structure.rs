//! `TermStructure`: base trait for all term structures.
//!
//! Every term structure has a **reference date** (where time is zero), a
//! **today's date** (the evaluation date it was built for), a **day
//! counter**, and a **maximum date**.

use pc_core::errors::{Error, Result};
use pc_core::Time;
use pc_time::{Date, DayCounter};

/// Base trait for all term structures.
pub trait TermStructure: std::fmt::Debug + Send + Sync {
    /// The date at which discount = 1.0 and from which time is measured.
    fn reference_date(&self) -> Date;

    /// The evaluation date the curve was built for.
    ///
    /// Defaults to the reference date; curves whose reference date is a
    /// settlement date after today override it.
    fn todays_date(&self) -> Date {
        self.reference_date()
    }

    /// The day counter used for date → time conversions.
    fn day_counter(&self) -> &dyn DayCounter;

    /// The latest date for which the curve can be used.
    fn max_date(&self) -> Date;

    /// Whether dates outside `[reference_date, max_date]` may be queried.
    fn allows_extrapolation(&self) -> bool {
        false
    }

    /// The latest time for which the curve can be used.
    fn max_time(&self) -> Time {
        self.time_from_reference(self.max_date())
    }

    /// Convert a date to a year fraction relative to the reference date.
    fn time_from_reference(&self, date: Date) -> Time {
        self.day_counter().year_fraction(self.reference_date(), date)
    }

    /// Fail with `Error::Date` if `date` is outside the curve's domain.
    fn check_range(&self, date: Date) -> Result<()> {
        if date < self.reference_date() {
            return Err(Error::Date(format!(
                "date ({date}) before reference date ({})",
                self.reference_date()
            )));
        }
        if date > self.max_date() && !self.allows_extrapolation() {
            return Err(Error::Date(format!(
                "date ({date}) is past max curve date ({})",
                self.max_date()
            )));
        }
        Ok(())
    }
}
