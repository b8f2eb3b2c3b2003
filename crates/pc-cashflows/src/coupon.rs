//! `Coupon` trait: base for interest-rate coupons.
//!
//! A coupon is a cash flow that accrues interest over an accrual period
//! `[accrual_start, accrual_end)` and pays on a payment date.

use crate::cashflow::CashFlow;
use pc_core::{errors::Result, Real};
use pc_time::{Date, DayCounter};

/// Base trait for interest-rate coupons.
pub trait Coupon: CashFlow {
    /// The notional (face) amount.
    fn nominal(&self) -> Real;

    /// Start of the accrual period.
    fn accrual_start_date(&self) -> Date;

    /// End of the accrual period.
    fn accrual_end_date(&self) -> Date;

    /// Reference period start (may differ for irregular coupons).
    fn reference_period_start(&self) -> Date {
        self.accrual_start_date()
    }

    /// Reference period end (may differ for irregular coupons).
    fn reference_period_end(&self) -> Date {
        self.accrual_end_date()
    }

    /// The accrual period as a year fraction.
    fn accrual_period(&self) -> Real;

    /// The day counter used for accrual.
    fn day_counter(&self) -> &dyn DayCounter;

    /// Amount accrued from the accrual start up to `date`.
    fn accrued_amount(&self, date: Date) -> Result<Real> {
        if date <= self.accrual_start_date() || date > self.accrual_end_date() {
            return Ok(0.0);
        }
        let full_amount = self.amount()?;
        if date == self.accrual_end_date() {
            return Ok(full_amount);
        }
        let dc = self.day_counter();
        let accrued = dc.year_fraction_with_ref(
            self.accrual_start_date(),
            date,
            self.reference_period_start(),
            self.reference_period_end(),
        );
        Ok(full_amount * accrued / self.accrual_period())
    }
}
