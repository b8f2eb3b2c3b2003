//! `FloatingRateCoupon`: the static terms of a floating-rate coupon.
//!
//! The record is immutable once built. Its accrual period is computed once,
//! from its own day counter, and its fixing date is derived by moving
//! `fixing_days` business days back from the accrual start on the index's
//! fixing calendar.

use pc_core::errors::Result;
use pc_core::{Natural, Real, Spread};
use pc_indexes::Index;
use pc_time::{business_day_offset, Date, DayCounter};
use std::sync::Arc;

/// Static terms of a single floating-rate coupon.
#[derive(Debug, Clone)]
pub struct FloatingRateCoupon {
    nominal: Real,
    payment_date: Date,
    accrual_start: Date,
    accrual_end: Date,
    ref_period_start: Date,
    ref_period_end: Date,
    fixing_days: Natural,
    fixing_date: Date,
    spread: Spread,
    day_counter: Arc<dyn DayCounter>,
    accrual_period: Real,
}

impl FloatingRateCoupon {
    /// Create a coupon record fixing against `index`.
    ///
    /// The reference period defaults to the accrual period.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        payment_date: Date,
        nominal: Real,
        accrual_start: Date,
        accrual_end: Date,
        fixing_days: Natural,
        spread: Spread,
        index: &dyn Index,
        day_counter: impl DayCounter + 'static,
    ) -> Result<Self> {
        Self::with_shared_day_counter(
            payment_date,
            nominal,
            accrual_start,
            accrual_end,
            fixing_days,
            spread,
            index,
            Arc::new(day_counter),
        )
    }

    /// Same as [`new`](Self::new), sharing an existing day counter.
    #[allow(clippy::too_many_arguments)]
    pub fn with_shared_day_counter(
        payment_date: Date,
        nominal: Real,
        accrual_start: Date,
        accrual_end: Date,
        fixing_days: Natural,
        spread: Spread,
        index: &dyn Index,
        day_counter: Arc<dyn DayCounter>,
    ) -> Result<Self> {
        pc_core::ensure!(
            accrual_end > accrual_start,
            "accrual end ({accrual_end}) must follow accrual start ({accrual_start})"
        );
        pc_core::ensure!(nominal.is_finite(), "nominal must be finite, got {nominal}");
        pc_core::ensure!(spread.is_finite(), "spread must be finite, got {spread}");
        let fixing_date = index
            .fixing_calendar()
            .advance(accrual_start, -business_day_offset(fixing_days)?)?;
        let accrual_period = day_counter.year_fraction(accrual_start, accrual_end);
        Ok(Self {
            nominal,
            payment_date,
            accrual_start,
            accrual_end,
            ref_period_start: accrual_start,
            ref_period_end: accrual_end,
            fixing_days,
            fixing_date,
            spread,
            day_counter,
            accrual_period,
        })
    }

    /// Set an explicit reference period (irregular first or last coupons).
    pub fn with_reference_period(mut self, start: Date, end: Date) -> Self {
        self.ref_period_start = start;
        self.ref_period_end = end;
        self.accrual_period =
            self.day_counter
                .year_fraction_with_ref(self.accrual_start, self.accrual_end, start, end);
        self
    }

    /// Notional amount.
    pub fn nominal(&self) -> Real {
        self.nominal
    }

    /// Payment date.
    pub fn payment_date(&self) -> Date {
        self.payment_date
    }

    /// Accrual start date.
    pub fn accrual_start_date(&self) -> Date {
        self.accrual_start
    }

    /// Accrual end date.
    pub fn accrual_end_date(&self) -> Date {
        self.accrual_end
    }

    /// Reference period start.
    pub fn reference_period_start(&self) -> Date {
        self.ref_period_start
    }

    /// Reference period end.
    pub fn reference_period_end(&self) -> Date {
        self.ref_period_end
    }

    /// Business days between fixing and accrual start.
    pub fn fixing_days(&self) -> Natural {
        self.fixing_days
    }

    /// Date on which the index is observed.
    pub fn fixing_date(&self) -> Date {
        self.fixing_date
    }

    /// Additive spread over the index rate.
    pub fn spread(&self) -> Spread {
        self.spread
    }

    /// Accrual period as a year fraction.
    pub fn accrual_period(&self) -> Real {
        self.accrual_period
    }

    /// Accrual day counter.
    pub fn day_counter(&self) -> &dyn DayCounter {
        &*self.day_counter
    }
}
