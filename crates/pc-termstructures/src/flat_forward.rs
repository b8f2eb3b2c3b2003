//! `FlatForward`: a yield term structure with a constant forward rate.

use crate::term_structure::TermStructure;
use crate::yield_term_structure::{YieldTermStructure, YieldTermStructureData};
use pc_core::{DiscountFactor, Rate, Time};
use pc_time::{Date, DayCounter};

/// A flat (constant) continuously-compounded forward curve.
///
/// `P(t) = exp(-r t)`, defined from the reference date to the latest
/// supported date.
#[derive(Debug, Clone)]
pub struct FlatForward {
    data: YieldTermStructureData,
    rate: Rate,
}

impl FlatForward {
    /// Create a flat curve with continuously-compounded rate `rate`.
    pub fn new(reference_date: Date, rate: Rate, day_counter: impl DayCounter + 'static) -> Self {
        Self {
            data: YieldTermStructureData::new(reference_date, day_counter),
            rate,
        }
    }

    /// Create a flat curve from an annually-compounded rate.
    pub fn from_annual_rate(
        reference_date: Date,
        annual_rate: Rate,
        day_counter: impl DayCounter + 'static,
    ) -> Self {
        Self::new(reference_date, annual_rate.ln_1p(), day_counter)
    }

    /// Set the evaluation date when it differs from the reference date.
    pub fn with_todays_date(mut self, today: Date) -> Self {
        self.data.todays_date = Some(today);
        self
    }

    /// The continuously-compounded flat rate.
    pub fn rate(&self) -> Rate {
        self.rate
    }
}

impl TermStructure for FlatForward {
    fn reference_date(&self) -> Date {
        self.data.reference_date
    }

    fn todays_date(&self) -> Date {
        self.data.todays_date()
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.data.day_counter
    }

    fn max_date(&self) -> Date {
        Date::max_date()
    }
}

impl YieldTermStructure for FlatForward {
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        (-self.rate * t).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pc_time::{Actual360, Actual365Fixed};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn discount_at_reference_is_one() {
        let ref_date = date(2025, 1, 2);
        let curve = FlatForward::new(ref_date, 0.05, Actual365Fixed);
        assert_abs_diff_eq!(curve.discount(ref_date).unwrap(), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(curve.discount_time(0.0).unwrap(), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn discount_one_year() {
        let curve = FlatForward::new(date(2025, 1, 2), 0.05, Actual365Fixed);
        let d1 = date(2026, 1, 2);
        assert_abs_diff_eq!(curve.discount(d1).unwrap(), (-0.05_f64).exp(), epsilon = 1e-12);
    }

    #[test]
    fn annual_compounding_conversion() {
        let curve = FlatForward::from_annual_rate(date(2025, 1, 2), 0.05, Actual365Fixed);
        assert_abs_diff_eq!(curve.rate(), 1.05_f64.ln(), epsilon = 1e-12);
        assert_abs_diff_eq!(
            curve.discount(date(2026, 1, 2)).unwrap(),
            1.0 / 1.05,
            epsilon = 1e-12
        );
    }

    #[test]
    fn date_before_reference_fails() {
        let curve = FlatForward::new(date(2025, 1, 2), 0.05, Actual365Fixed);
        assert!(curve.discount(date(2025, 1, 1)).is_err());
        assert!(curve.discount_time(-0.1).is_err());
    }

    #[test]
    fn todays_date_defaults_to_reference() {
        let curve = FlatForward::new(date(2025, 1, 6), 0.02, Actual365Fixed);
        assert_eq!(curve.todays_date(), date(2025, 1, 6));
        let curve = curve.with_todays_date(date(2025, 1, 2));
        assert_eq!(curve.todays_date(), date(2025, 1, 2));
        assert_eq!(curve.reference_date(), date(2025, 1, 6));
    }

    #[test]
    fn simple_forward_rate() {
        let curve = FlatForward::new(date(2025, 1, 2), 0.03, Actual365Fixed);
        let (d1, d2) = (date(2025, 7, 2), date(2025, 10, 2));
        let dc = Actual360;
        let tau = dc.year_fraction(d1, d2);
        let t = curve.time_from_reference(d2) - curve.time_from_reference(d1);
        let expected = ((0.03 * t).exp() - 1.0) / tau;
        assert_abs_diff_eq!(curve.forward_rate(d1, d2, &dc).unwrap(), expected, epsilon = 1e-12);
        assert!(curve.forward_rate(d2, d1, &dc).is_err());
    }

    #[test]
    fn zero_rate_is_flat() {
        let curve = FlatForward::new(date(2025, 1, 2), 0.04, Actual365Fixed);
        assert_abs_diff_eq!(curve.zero_rate(date(2030, 1, 2)).unwrap(), 0.04, epsilon = 1e-12);
        assert_abs_diff_eq!(curve.zero_rate(date(2025, 1, 2)).unwrap(), 0.04, epsilon = 1e-12);
    }
}
