//! Par floating-rate coupons.
//!
//! A par coupon pays `(index rate + spread) × accrual period × nominal`. The
//! index rate is the realized fixing when the fixing date has passed, and
//! otherwise the forward implied by the index's discount curve between the
//! value date of the fixing and the value date of the accrual end:
//!
//! ```text
//! amount = ((D(v1) / D(v2) - 1) + spread × τ) × N
//! ```
//!
//! On the fixing date itself a published fixing is used when available; a
//! missing or unreadable one falls back to the forecast. Before that date a
//! missing fixing is an error.
//!
//! [`ParCouponValuator`] implements the computation as a pure function of the
//! coupon, the index and an evaluation date. [`ParCoupon`] pairs a coupon
//! record with its index and values itself against the current evaluation
//! date.

use crate::cashflow::CashFlow;
use crate::coupon::Coupon;
use crate::floating_rate_coupon::FloatingRateCoupon;
use pc_core::errors::{Error, Result};
use pc_core::{Observable, Observer, Rate, Real, Settings};
use pc_indexes::{FixingHistory, FixingLookup, Index, IndexManager};
use pc_termstructures::YieldTermStructure;
use pc_time::{business_day_offset, Date, DayCounter};
use std::sync::{Arc, Weak};
use tracing::{debug, trace, warn};

// ────────────────────────────────────────────────────────────────────────────
// ParCouponValuator
// ────────────────────────────────────────────────────────────────────────────

/// Computes the cash amount of a par floating-rate coupon.
///
/// The valuator holds no state besides the fixing history it reads from
/// (the global [`IndexManager`] by default) and never caches results.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParCouponValuator<H = IndexManager> {
    history: H,
}

impl ParCouponValuator<IndexManager> {
    /// A valuator reading fixings from the global [`IndexManager`].
    pub fn new() -> Self {
        Self {
            history: IndexManager,
        }
    }
}

impl<H: FixingHistory> ParCouponValuator<H> {
    /// A valuator reading fixings from `history`.
    pub fn with_history(history: H) -> Self {
        Self { history }
    }

    /// The fixing source.
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Cash amount of `coupon` fixing on `index`, as seen on
    /// `evaluation_date`.
    ///
    /// # Errors
    ///
    /// * [`Error::Configuration`] if the index has no discount curve; this
    ///   is checked before anything else.
    /// * [`Error::MissingData`] if the fixing date is before
    ///   `evaluation_date` and no fixing is recorded.
    /// * [`Error::LookupFault`] if that past-date lookup cannot be served.
    /// * Calendar and curve errors from the forecast, unchanged.
    pub fn amount(
        &self,
        coupon: &FloatingRateCoupon,
        index: &dyn Index,
        evaluation_date: Date,
    ) -> Result<Real> {
        let curve = index.term_structure().ok_or_else(|| {
            Error::Configuration(format!(
                "no discount curve attached to index {}",
                index.name()
            ))
        })?;

        let fixing_date = coupon.fixing_date();
        if fixing_date < evaluation_date {
            trace!(index = index.name(), %fixing_date, %evaluation_date, "past fixing");
            return match self.history.lookup(index.name(), fixing_date) {
                FixingLookup::Found(rate) => Ok(fixed_amount(coupon, rate)),
                FixingLookup::NotFound => Err(Error::MissingData {
                    index: index.name().to_string(),
                    date: fixing_date.to_string(),
                }),
                FixingLookup::Fault(reason) => Err(Error::LookupFault(reason)),
            };
        }

        if fixing_date == evaluation_date {
            trace!(index = index.name(), %fixing_date, "fixing today");
            match self.history.lookup(index.name(), fixing_date) {
                FixingLookup::Found(rate) => return Ok(fixed_amount(coupon, rate)),
                FixingLookup::NotFound => {
                    debug!(index = index.name(), %fixing_date, "today's fixing not published, forecasting");
                }
                FixingLookup::Fault(reason) => {
                    warn!(index = index.name(), %fixing_date, %reason, "fixing lookup failed, forecasting");
                }
            }
        } else {
            trace!(index = index.name(), %fixing_date, %evaluation_date, "future fixing");
        }

        forecast_amount(coupon, index, &*curve)
    }
}

fn fixed_amount(coupon: &FloatingRateCoupon, rate: Rate) -> Real {
    (rate + coupon.spread()) * coupon.accrual_period() * coupon.nominal()
}

fn forecast_amount(
    coupon: &FloatingRateCoupon,
    index: &dyn Index,
    curve: &dyn YieldTermStructure,
) -> Result<Real> {
    let calendar = index.fixing_calendar();
    let settlement_days = business_day_offset(index.settlement_days())?;

    let start_value = calendar.advance(coupon.fixing_date(), settlement_days)?;
    let start_discount = curve.discount(start_value)?;

    // value date of a fixing taken `fixing_days` before the accrual end
    let end_fixing =
        calendar.advance(coupon.accrual_end_date(), -business_day_offset(coupon.fixing_days())?)?;
    let end_value = calendar.advance(end_fixing, settlement_days)?;
    let end_discount = curve.discount(end_value)?;

    Ok(((start_discount / end_discount - 1.0) + coupon.spread() * coupon.accrual_period())
        * coupon.nominal())
}

// ────────────────────────────────────────────────────────────────────────────
// ParCoupon
// ────────────────────────────────────────────────────────────────────────────

/// A par floating-rate coupon: a coupon record bound to its index.
///
/// The coupon is valued as of the global evaluation date when one is set in
/// [`Settings`], otherwise as of the `todays_date()` of the index's curve.
/// Observers registered with the coupon are notified of changes to the
/// index (curve relinked, fixing published).
#[derive(Debug, Clone)]
pub struct ParCoupon {
    record: FloatingRateCoupon,
    index: Arc<dyn Index>,
}

impl ParCoupon {
    /// Bind `record` to `index`.
    pub fn new(record: FloatingRateCoupon, index: Arc<dyn Index>) -> Self {
        Self { record, index }
    }

    /// The static coupon terms.
    pub fn record(&self) -> &FloatingRateCoupon {
        &self.record
    }

    /// The index the coupon fixes against.
    pub fn index(&self) -> &Arc<dyn Index> {
        &self.index
    }

    /// Fixing date.
    pub fn fixing_date(&self) -> Date {
        self.record.fixing_date()
    }

    /// Spread over the index rate.
    pub fn spread(&self) -> Real {
        self.record.spread()
    }

    /// The date the coupon is valued as of.
    pub fn evaluation_date(&self) -> Result<Date> {
        if let Some(serial) = Settings::instance().evaluation_date_serial() {
            return Date::from_serial(serial);
        }
        self.index
            .term_structure()
            .map(|curve| curve.todays_date())
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "no discount curve attached to index {}",
                    self.index.name()
                ))
            })
    }

    /// Amount as seen on an explicit evaluation date, reading the global
    /// fixing history.
    pub fn amount_at(&self, evaluation_date: Date) -> Result<Real> {
        ParCouponValuator::new().amount(&self.record, &*self.index, evaluation_date)
    }

    /// The all-in coupon rate implied by the amount.
    pub fn rate(&self) -> Result<Rate> {
        Ok(self.amount()? / (self.record.nominal() * self.record.accrual_period()))
    }
}

impl CashFlow for ParCoupon {
    fn date(&self) -> Date {
        self.record.payment_date()
    }

    fn amount(&self) -> Result<Real> {
        self.amount_at(self.evaluation_date()?)
    }
}

impl Coupon for ParCoupon {
    fn nominal(&self) -> Real {
        self.record.nominal()
    }

    fn accrual_start_date(&self) -> Date {
        self.record.accrual_start_date()
    }

    fn accrual_end_date(&self) -> Date {
        self.record.accrual_end_date()
    }

    fn reference_period_start(&self) -> Date {
        self.record.reference_period_start()
    }

    fn reference_period_end(&self) -> Date {
        self.record.reference_period_end()
    }

    fn accrual_period(&self) -> Real {
        self.record.accrual_period()
    }

    fn day_counter(&self) -> &dyn DayCounter {
        self.record.day_counter()
    }
}

impl Observable for ParCoupon {
    fn register_observer(&self, observer: Weak<dyn Observer>) {
        self.index.register_observer(observer);
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer>) {
        self.index.unregister_observer(observer);
    }

    fn notify_observers(&self) {
        self.index.notify_observers();
    }
}
