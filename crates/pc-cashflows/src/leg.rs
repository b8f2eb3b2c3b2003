//! Legs of par coupons: construction, present value, and a cached valuation
//! that is refreshed when the indexes or the discount curve change.

use crate::cashflow::{CashFlow, Leg, SimpleCashFlow};
use crate::floating_rate_coupon::FloatingRateCoupon;
use crate::par_coupon::ParCoupon;
use pc_core::errors::{Error, Result};
use pc_core::{
    LazyObject, LazyState, Natural, Observable, Observer, Real, RelinkableHandle, Spread,
};
use pc_indexes::Index;
use pc_termstructures::YieldTermStructure;
use pc_time::{Actual360, BusinessDayConvention, Date, DayCounter};
use std::sync::{Arc, Mutex, PoisonError, Weak};
use tracing::{debug, trace};

// ────────────────────────────────────────────────────────────────────────────
// Leg builder
// ────────────────────────────────────────────────────────────────────────────

/// Builds a leg of par coupons from explicit accrual boundaries.
///
/// `dates[i]..dates[i + 1]` is the accrual period of coupon `i`. Payment
/// dates are the accrual ends adjusted on the index calendar.
pub struct ParCouponLegBuilder {
    dates: Vec<Date>,
    index: Arc<dyn Index>,
    notionals: Vec<Real>,
    spreads: Vec<Spread>,
    fixing_days: Option<Natural>,
    day_counter: Arc<dyn DayCounter>,
    payment_convention: BusinessDayConvention,
    redemption: Option<Real>,
}

impl ParCouponLegBuilder {
    /// Create a builder for the periods delimited by `dates`.
    pub fn new(dates: Vec<Date>, index: Arc<dyn Index>) -> Self {
        Self {
            dates,
            index,
            notionals: vec![1.0],
            spreads: vec![0.0],
            fixing_days: None,
            day_counter: Arc::new(Actual360),
            payment_convention: BusinessDayConvention::Following,
            redemption: None,
        }
    }

    /// Set a single notional for all periods.
    pub fn with_notional(mut self, notional: Real) -> Self {
        self.notionals = vec![notional];
        self
    }

    /// Set notionals per period; the last one repeats.
    pub fn with_notionals(mut self, notionals: Vec<Real>) -> Self {
        self.notionals = notionals;
        self
    }

    /// Set a single spread for all periods.
    pub fn with_spread(mut self, spread: Spread) -> Self {
        self.spreads = vec![spread];
        self
    }

    /// Set spreads per period; the last one repeats.
    pub fn with_spreads(mut self, spreads: Vec<Spread>) -> Self {
        self.spreads = spreads;
        self
    }

    /// Override fixing days (defaults to the index settlement days).
    pub fn with_fixing_days(mut self, days: Natural) -> Self {
        self.fixing_days = Some(days);
        self
    }

    /// Override the accrual day counter (defaults to Actual/360).
    pub fn with_day_counter(mut self, dc: impl DayCounter + 'static) -> Self {
        self.day_counter = Arc::new(dc);
        self
    }

    /// Set the payment-date convention.
    pub fn with_payment_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.payment_convention = convention;
        self
    }

    /// Add a final notional redemption to [`build_leg`](Self::build_leg).
    pub fn with_redemption(mut self, amount: Real) -> Self {
        self.redemption = Some(amount);
        self
    }

    /// Build the coupons.
    pub fn build(&self) -> Result<Vec<ParCoupon>> {
        pc_core::ensure!(
            self.dates.len() >= 2,
            "need at least two dates to build a leg, got {}",
            self.dates.len()
        );
        pc_core::ensure!(
            self.dates.windows(2).all(|w| w[0] < w[1]),
            "leg dates must be strictly increasing"
        );
        pc_core::ensure!(
            !self.notionals.is_empty() && !self.spreads.is_empty(),
            "notionals and spreads must not be empty"
        );

        let fixing_days = self
            .fixing_days
            .unwrap_or_else(|| self.index.settlement_days());
        let calendar = self.index.fixing_calendar();

        self.dates
            .windows(2)
            .enumerate()
            .map(|(i, period)| {
                let (start, end) = (period[0], period[1]);
                let payment = calendar.adjust(end, self.payment_convention)?;
                let record = FloatingRateCoupon::with_shared_day_counter(
                    payment,
                    pick(&self.notionals, i),
                    start,
                    end,
                    fixing_days,
                    pick(&self.spreads, i),
                    &*self.index,
                    Arc::clone(&self.day_counter),
                )?;
                Ok(ParCoupon::new(record, Arc::clone(&self.index)))
            })
            .collect()
    }

    /// Build the coupons as a [`Leg`], with the redemption if one was set.
    pub fn build_leg(&self) -> Result<Leg> {
        let coupons = self.build()?;
        let mut leg: Leg = Vec::with_capacity(coupons.len() + 1);
        let last_payment = coupons.last().map(|c| c.date());
        leg.extend(coupons.into_iter().map(|c| Box::new(c) as Box<dyn CashFlow>));
        if let (Some(amount), Some(date)) = (self.redemption, last_payment) {
            leg.push(Box::new(SimpleCashFlow::new(amount, date)));
        }
        Ok(leg)
    }
}

fn pick(values: &[Real], i: usize) -> Real {
    values[i.min(values.len() - 1)]
}

// ────────────────────────────────────────────────────────────────────────────
// Leg analytics
// ────────────────────────────────────────────────────────────────────────────

/// Present value of the flows paid after `settlement_date`, discounted on
/// `curve`.
pub fn npv<C: CashFlow>(
    leg: &[C],
    curve: &dyn YieldTermStructure,
    settlement_date: Date,
) -> Result<Real> {
    let mut total = 0.0;
    for cf in leg.iter().filter(|cf| cf.date() > settlement_date) {
        total += cf.amount()? * curve.discount(cf.date())?;
    }
    Ok(total)
}

/// The last payment date of a leg.
pub fn maturity_date<C: CashFlow>(leg: &[C]) -> Option<Date> {
    leg.iter().map(|cf| cf.date()).max()
}

/// The first payment date strictly after `ref_date`.
pub fn next_cashflow_date<C: CashFlow>(leg: &[C], ref_date: Date) -> Option<Date> {
    leg.iter()
        .map(|cf| cf.date())
        .filter(|&d| d > ref_date)
        .min()
}

// ────────────────────────────────────────────────────────────────────────────
// LegValuation
// ────────────────────────────────────────────────────────────────────────────

/// Cached present value of a leg.
///
/// The valuation observes its discount curve handle and any index it is
/// pointed at; a notification marks the cached NPV stale and the next call
/// to [`npv`](Self::npv) recomputes it. Flows are discounted from the
/// curve's reference date.
#[derive(Debug)]
pub struct LegValuation {
    leg: Leg,
    discount_curve: RelinkableHandle<dyn YieldTermStructure>,
    state: LazyState,
    npv: Mutex<Option<Real>>,
}

impl LegValuation {
    /// Value `leg` on `discount_curve`.
    pub fn new(leg: Leg, discount_curve: RelinkableHandle<dyn YieldTermStructure>) -> Arc<Self> {
        let valuation = Arc::new(Self {
            leg,
            discount_curve,
            state: LazyState::new(),
            npv: Mutex::new(None),
        });
        let observer = Arc::downgrade(&valuation) as Weak<dyn Observer>;
        valuation.discount_curve.register_observer(observer);
        valuation
    }

    /// Value a set of par coupons, observing each of their indexes.
    pub fn from_coupons(
        coupons: Vec<ParCoupon>,
        discount_curve: RelinkableHandle<dyn YieldTermStructure>,
    ) -> Arc<Self> {
        let indexes: Vec<Arc<dyn Index>> = coupons.iter().map(|c| Arc::clone(c.index())).collect();
        let leg = coupons
            .into_iter()
            .map(|c| Box::new(c) as Box<dyn CashFlow>)
            .collect();
        let valuation = Self::new(leg, discount_curve);
        for index in &indexes {
            valuation.observe(&**index);
        }
        valuation
    }

    /// Recompute when `observable` changes.
    pub fn observe<O: Observable + ?Sized>(self: &Arc<Self>, observable: &O) {
        let observer = Arc::downgrade(self) as Weak<dyn Observer>;
        observable.register_observer(observer);
    }

    /// The valued cash flows.
    pub fn leg(&self) -> &Leg {
        &self.leg
    }

    /// Present value of the leg, recomputed if stale.
    pub fn npv(&self) -> Result<Real> {
        self.calculate()?;
        self.npv
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .ok_or_else(|| Error::Runtime("leg valuation frozen before its first calculation".into()))
    }
}

impl LazyObject for LegValuation {
    fn perform_calculations(&self) -> Result<()> {
        let curve = self
            .discount_curve
            .current()
            .ok_or_else(|| Error::Configuration("no discount curve linked to leg valuation".into()))?;
        let value = npv(&self.leg, &*curve, curve.reference_date())?;
        debug!(flows = self.leg.len(), npv = value, "leg revalued");
        *self.npv.lock().unwrap_or_else(PoisonError::into_inner) = Some(value);
        Ok(())
    }

    fn lazy_state(&self) -> &LazyState {
        &self.state
    }
}

impl Observer for LegValuation {
    fn update(&self) {
        trace!("leg valuation invalidated");
        self.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coupon::Coupon;
    use approx::assert_abs_diff_eq;
    use pc_indexes::Xibor;
    use pc_termstructures::FlatForward;
    use pc_time::{Actual365Fixed, WeekendsOnly};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn index(name: &str, curve: Arc<dyn YieldTermStructure>) -> Arc<dyn Index> {
        Arc::new(
            Xibor::new(
                name,
                3,
                2,
                WeekendsOnly,
                BusinessDayConvention::ModifiedFollowing,
                Actual360,
                RelinkableHandle::new(curve),
            )
            .unwrap(),
        )
    }

    fn quarterly_dates() -> Vec<Date> {
        vec![
            date(2025, 1, 15),
            date(2025, 4, 15),
            date(2025, 7, 15),
            date(2025, 10, 15),
            date(2026, 1, 15),
        ]
    }

    #[test]
    fn builder_creates_one_coupon_per_period() {
        let curve: Arc<dyn YieldTermStructure> =
            Arc::new(FlatForward::new(date(2025, 1, 2), 0.03, Actual365Fixed));
        let idx = index("LegBuild", curve);
        let coupons = ParCouponLegBuilder::new(quarterly_dates(), idx)
            .with_notionals(vec![100.0, 90.0])
            .with_spreads(vec![0.001, 0.002, 0.003])
            .build()
            .unwrap();
        assert_eq!(coupons.len(), 4);
        assert_eq!(coupons[0].record().nominal(), 100.0);
        assert_eq!(coupons[3].record().nominal(), 90.0);
        assert_eq!(coupons[3].spread(), 0.003);
        // 15 Jan 2025 (Wed) fixes on Mon 13 Jan
        assert_eq!(coupons[0].fixing_date(), date(2025, 1, 13));
        // 15 Jan 2026 is a Thursday
        assert_eq!(coupons[3].date(), date(2026, 1, 15));
    }

    #[test]
    fn payment_dates_are_adjusted() {
        let curve: Arc<dyn YieldTermStructure> =
            Arc::new(FlatForward::new(date(2025, 1, 2), 0.03, Actual365Fixed));
        let idx = index("LegPay", curve);
        // 15 Mar 2025 is a Saturday
        let coupons = ParCouponLegBuilder::new(vec![date(2024, 12, 16), date(2025, 3, 15)], idx)
            .build()
            .unwrap();
        assert_eq!(coupons[0].date(), date(2025, 3, 17));
        assert_eq!(coupons[0].accrual_end_date(), date(2025, 3, 15));
    }

    #[test]
    fn builder_rejects_bad_dates() {
        let curve: Arc<dyn YieldTermStructure> =
            Arc::new(FlatForward::new(date(2025, 1, 2), 0.03, Actual365Fixed));
        let idx = index("LegBad", curve);
        assert!(ParCouponLegBuilder::new(vec![date(2025, 1, 15)], Arc::clone(&idx))
            .build()
            .is_err());
        assert!(
            ParCouponLegBuilder::new(vec![date(2025, 4, 15), date(2025, 1, 15)], idx)
                .build()
                .is_err()
        );
    }

    #[test]
    fn npv_discounts_future_flows_only() {
        let curve = FlatForward::new(date(2025, 1, 2), 0.02, Actual365Fixed);
        let leg = vec![
            SimpleCashFlow::new(100.0, date(2025, 1, 2)),
            SimpleCashFlow::new(100.0, date(2026, 1, 2)),
        ];
        let value = npv(&leg, &curve, date(2025, 1, 2)).unwrap();
        assert_abs_diff_eq!(value, 100.0 * (-0.02_f64).exp(), epsilon = 1e-10);
        assert_eq!(maturity_date(&leg), Some(date(2026, 1, 2)));
        assert_eq!(next_cashflow_date(&leg, date(2025, 1, 2)), Some(date(2026, 1, 2)));
        assert_eq!(next_cashflow_date(&leg, date(2026, 1, 2)), None);
    }

    #[test]
    fn redemption_is_appended_to_leg() {
        let curve: Arc<dyn YieldTermStructure> =
            Arc::new(FlatForward::new(date(2025, 1, 2), 0.03, Actual365Fixed));
        let idx = index("LegRedeem", curve);
        let leg = ParCouponLegBuilder::new(quarterly_dates(), idx)
            .with_notional(100.0)
            .with_redemption(100.0)
            .build_leg()
            .unwrap();
        assert_eq!(leg.len(), 5);
        assert_eq!(leg[4].amount().unwrap(), 100.0);
        assert_eq!(leg[4].date(), date(2026, 1, 15));
    }

    #[test]
    fn frozen_valuation_without_result_fails() {
        let valuation = LegValuation::new(Vec::new(), RelinkableHandle::null());
        valuation.freeze();
        assert!(matches!(valuation.npv(), Err(Error::Runtime(_))));
        valuation.unfreeze();
        assert!(matches!(valuation.npv(), Err(Error::Configuration(_))));
    }
}
