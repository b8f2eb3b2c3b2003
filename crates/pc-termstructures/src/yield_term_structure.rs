//! `YieldTermStructure`: discount-factor term structures.
//!
//! A concrete curve implements one hook, [`discount_impl`], as a function of
//! time. The public, date-based interface adds the range check, so that a
//! query outside the curve's domain fails instead of extrapolating silently.
//!
//! [`discount_impl`]: YieldTermStructure::discount_impl

use crate::term_structure::TermStructure;
use pc_core::errors::{Error, Result};
use pc_core::{DiscountFactor, Rate, Time};
use pc_time::{Date, DayCounter};
use std::sync::Arc;

/// A yield (interest-rate) term structure.
pub trait YieldTermStructure: TermStructure {
    /// Discount factor for time `t` (no range check).
    fn discount_impl(&self, t: Time) -> DiscountFactor;

    /// Discount factor for a date.
    ///
    /// Fails with `Error::Date` if the date is outside the curve's domain.
    fn discount(&self, date: Date) -> Result<DiscountFactor> {
        self.check_range(date)?;
        Ok(self.discount_impl(self.time_from_reference(date)))
    }

    /// Discount factor for a time measured from the reference date.
    fn discount_time(&self, t: Time) -> Result<DiscountFactor> {
        if t < 0.0 || (t > self.max_time() && !self.allows_extrapolation()) {
            return Err(Error::Date(format!(
                "time ({t}) outside curve range [0, {}]",
                self.max_time()
            )));
        }
        Ok(self.discount_impl(t))
    }

    /// Continuously-compounded zero rate from the reference date to `date`.
    fn zero_rate(&self, date: Date) -> Result<Rate> {
        let df = self.discount(date)?;
        let t = self.time_from_reference(date);
        if t == 0.0 {
            // limit for t → 0: use a one-day step
            let next = date.add_days(1)?;
            let t1 = self.time_from_reference(next);
            return Ok(-self.discount(next)?.ln() / t1);
        }
        Ok(-df.ln() / t)
    }

    /// Simply-compounded forward rate between `d1` and `d2`, accrued with
    /// `day_counter`.
    fn forward_rate(&self, d1: Date, d2: Date, day_counter: &dyn DayCounter) -> Result<Rate> {
        pc_core::ensure!(d2 > d1, "forward end ({d2}) must follow start ({d1})");
        let tau = day_counter.year_fraction(d1, d2);
        Ok((self.discount(d1)? / self.discount(d2)? - 1.0) / tau)
    }
}

// ── Helpers for concrete term structures ──────────────────────────────────────

/// Common data shared by the yield-curve implementations.
#[derive(Debug, Clone)]
pub struct YieldTermStructureData {
    /// Reference date.
    pub reference_date: Date,
    /// Evaluation date; `None` means the reference date.
    pub todays_date: Option<Date>,
    /// Day counter for time calculations.
    pub day_counter: Arc<dyn DayCounter>,
    /// Whether queries past the max date are allowed.
    pub extrapolate: bool,
}

impl YieldTermStructureData {
    /// Create a new data bundle.
    pub fn new(reference_date: Date, day_counter: impl DayCounter + 'static) -> Self {
        Self {
            reference_date,
            todays_date: None,
            day_counter: Arc::new(day_counter),
            extrapolate: false,
        }
    }

    /// The evaluation date, falling back to the reference date.
    pub fn todays_date(&self) -> Date {
        self.todays_date.unwrap_or(self.reference_date)
    }
}
