//! `InterpolatedDiscountCurve`: a yield term structure defined by discount
//! factors at pillar dates.
//!
//! Discounts are interpolated log-linearly in time, which gives piecewise
//! constant instantaneous forwards between pillars. Past the last pillar the
//! curve is only usable when extrapolation is enabled, in which case the last
//! segment's forward is extended flat.

use crate::term_structure::TermStructure;
use crate::yield_term_structure::{YieldTermStructure, YieldTermStructureData};
use pc_core::{errors::Result, DiscountFactor, Real, Time};
use pc_time::{Date, DayCounter};

/// A yield curve defined by discount factors at known dates.
#[derive(Debug, Clone)]
pub struct InterpolatedDiscountCurve {
    data: YieldTermStructureData,
    dates: Vec<Date>,
    times: Vec<Time>,
    log_discounts: Vec<Real>,
}

impl InterpolatedDiscountCurve {
    /// Build a curve from pillar dates and discount factors.
    ///
    /// The first date is the reference date and must carry a discount of
    /// 1.0. Dates must be strictly increasing and discounts positive.
    pub fn new(
        dates: &[Date],
        discounts: &[DiscountFactor],
        day_counter: impl DayCounter + 'static,
    ) -> Result<Self> {
        pc_core::ensure!(
            dates.len() >= 2,
            "need at least 2 dates (reference + 1 pillar), got {}",
            dates.len()
        );
        pc_core::ensure!(
            dates.len() == discounts.len(),
            "dates ({}) and discounts ({}) must have the same length",
            dates.len(),
            discounts.len()
        );
        pc_core::ensure!(
            (discounts[0] - 1.0).abs() < 1e-12,
            "first discount factor must be 1.0, got {}",
            discounts[0]
        );
        pc_core::ensure!(
            dates.windows(2).all(|w| w[0] < w[1]),
            "pillar dates must be strictly increasing"
        );
        pc_core::ensure!(
            discounts.iter().all(|&df| df > 0.0),
            "discount factors must be positive"
        );

        let data = YieldTermStructureData::new(dates[0], day_counter);
        let times = dates
            .iter()
            .map(|&d| data.day_counter.year_fraction(dates[0], d))
            .collect();

        Ok(Self {
            data,
            dates: dates.to_vec(),
            times,
            log_discounts: discounts.iter().map(|df| df.ln()).collect(),
        })
    }

    /// Set the evaluation date when it differs from the reference date.
    pub fn with_todays_date(mut self, today: Date) -> Self {
        self.data.todays_date = Some(today);
        self
    }

    /// Allow queries past the last pillar.
    pub fn with_extrapolation(mut self, extrapolate: bool) -> Self {
        self.data.extrapolate = extrapolate;
        self
    }

    /// Pillar dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Pillar discount factors.
    pub fn discounts(&self) -> Vec<DiscountFactor> {
        self.log_discounts.iter().map(|l| l.exp()).collect()
    }
}

impl TermStructure for InterpolatedDiscountCurve {
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
        // at least two pillars, checked on construction
        self.dates[self.dates.len() - 1]
    }

    fn allows_extrapolation(&self) -> bool {
        self.data.extrapolate
    }
}

impl YieldTermStructure for InterpolatedDiscountCurve {
    fn discount_impl(&self, t: Time) -> DiscountFactor {
        if t <= 0.0 {
            return 1.0;
        }
        let n = self.times.len();
        // index of the segment [i-1, i] containing t, clamped to the last one
        let i = self.times.partition_point(|&x| x < t).clamp(1, n - 1);
        let (t0, t1) = (self.times[i - 1], self.times[i]);
        let (l0, l1) = (self.log_discounts[i - 1], self.log_discounts[i]);
        (l0 + (l1 - l0) * (t - t0) / (t1 - t0)).exp()
    }
}
