//! `Xibor`: interbank offered-rate index (Euribor, Libor-style indexes).

use crate::fixing_history::IndexManager;
use crate::index::Index;
use pc_core::errors::{Error, Result};
use pc_core::{Natural, Observable, ObservableImpl, Observer, Rate, RelinkableHandle};
use pc_termstructures::YieldTermStructure;
use pc_time::{business_day_offset, BusinessDayConvention, Calendar, Date, DayCounter};
use std::sync::{Arc, Weak};
use tracing::debug;

/// An interbank offered-rate index.
///
/// The index is shared (`Arc`) by every coupon that floats against it. Its
/// forecasting curve sits behind a [`RelinkableHandle`], so that a rebuilt
/// curve can be attached to all dependent coupons at once; observers of the
/// index are notified when the curve is relinked or a fixing is published.
#[derive(Debug)]
pub struct Xibor {
    family: String,
    name: String,
    tenor_months: u32,
    settlement_days: Natural,
    calendar: Box<dyn Calendar>,
    convention: BusinessDayConvention,
    day_counter: Box<dyn DayCounter>,
    term_structure: RelinkableHandle<dyn YieldTermStructure>,
    observers: ObservableImpl,
}

impl Xibor {
    /// Create a new index named `<family><tenor>M` (e.g. `Euribor6M`).
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        family: impl Into<String>,
        tenor_months: u32,
        settlement_days: Natural,
        calendar: impl Calendar + 'static,
        convention: BusinessDayConvention,
        day_counter: impl DayCounter + 'static,
        term_structure: RelinkableHandle<dyn YieldTermStructure>,
    ) -> Result<Self> {
        let family = family.into();
        pc_core::ensure!(!family.is_empty(), "index family name must not be empty");
        pc_core::ensure!(tenor_months > 0, "{family}: tenor must be positive");
        business_day_offset(settlement_days)?;
        Ok(Self {
            name: format!("{family}{tenor_months}M"),
            family,
            tenor_months,
            settlement_days,
            calendar: Box::new(calendar),
            convention,
            day_counter: Box::new(day_counter),
            term_structure,
            observers: ObservableImpl::new(),
        })
    }

    /// Family name without the tenor (e.g. `Euribor`).
    pub fn family_name(&self) -> &str {
        &self.family
    }

    /// Tenor in months.
    pub fn tenor_months(&self) -> u32 {
        self.tenor_months
    }

    /// Convention used to roll maturity dates.
    pub fn business_day_convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// Day counter of the quoted rate.
    pub fn day_counter(&self) -> &dyn DayCounter {
        &*self.day_counter
    }

    /// The handle through which the forecasting curve is attached.
    pub fn term_structure_handle(&self) -> &RelinkableHandle<dyn YieldTermStructure> {
        &self.term_structure
    }

    /// Attach a new forecasting curve; observers are notified.
    pub fn link_term_structure(&self, curve: Arc<dyn YieldTermStructure>) {
        debug!(index = %self.name, today = %curve.todays_date(), "relinking forecasting curve");
        self.term_structure.link_to(curve);
    }

    /// Maturity of a deposit starting on `value_date`.
    pub fn maturity_date(&self, value_date: Date) -> Result<Date> {
        let months = i32::try_from(self.tenor_months)
            .map_err(|_| Error::InvalidArgument(format!("{}: tenor out of range", self.name)))?;
        let unadjusted = value_date.add_months(months)?;
        self.calendar.adjust(unadjusted, self.convention)
    }

    /// Publish a realized fixing to the global history and notify observers.
    pub fn add_fixing(&self, date: Date, rate: Rate) -> Result<()> {
        IndexManager::instance().add_fixing(&self.name, date, rate)?;
        self.observers.notify();
        Ok(())
    }

    /// Forecast the fixing of `fixing_date` off the attached curve:
    /// the simple rate between the value date and the deposit maturity.
    pub fn forecast_fixing(&self, fixing_date: Date) -> Result<Rate> {
        let curve = self.term_structure.current().ok_or_else(|| {
            Error::Configuration(format!("no forecasting curve attached to {}", self.name))
        })?;
        let value = self.value_date(fixing_date)?;
        let maturity = self.maturity_date(value)?;
        curve.forward_rate(value, maturity, &*self.day_counter)
    }
}

impl Index for Xibor {
    fn name(&self) -> &str {
        &self.name
    }

    fn fixing_calendar(&self) -> &dyn Calendar {
        &*self.calendar
    }

    fn settlement_days(&self) -> Natural {
        self.settlement_days
    }

    fn term_structure(&self) -> Option<Arc<dyn YieldTermStructure>> {
        self.term_structure.current()
    }
}

impl Observable for Xibor {
    fn register_observer(&self, observer: Weak<dyn Observer>) {
        self.term_structure.register_observer(observer.clone());
        self.observers.register(observer);
    }

    fn unregister_observer(&self, observer: &Weak<dyn Observer>) {
        self.term_structure.unregister_observer(observer);
        self.observers.unregister(observer);
    }

    fn notify_observers(&self) {
        self.observers.notify();
    }
}
