//! `Index`: base trait for floating-rate indexes.

use pc_core::errors::Result;
use pc_core::{Natural, Observable};
use pc_termstructures::YieldTermStructure;
use pc_time::{business_day_offset, Calendar, Date};
use std::sync::Arc;

/// The interface a floating coupon needs from the index it floats against.
///
/// Indexes are observable: relinking the forecasting curve or publishing a
/// fixing notifies whoever caches values derived from the index.
pub trait Index: Observable + std::fmt::Debug + Send + Sync {
    /// Unique name, also the key of the index's fixing history.
    fn name(&self) -> &str;

    /// Calendar used for fixing and value dates.
    fn fixing_calendar(&self) -> &dyn Calendar;

    /// Business days between a fixing date and its value date.
    fn settlement_days(&self) -> Natural;

    /// The curve used to forecast fixings, if one is attached.
    fn term_structure(&self) -> Option<Arc<dyn YieldTermStructure>>;

    /// Whether `date` is a valid fixing date.
    fn is_valid_fixing_date(&self, date: Date) -> bool {
        self.fixing_calendar().is_business_day(date)
    }

    /// Value date of a fixing taken on `fixing_date`.
    fn value_date(&self, fixing_date: Date) -> Result<Date> {
        self.fixing_calendar()
            .advance(fixing_date, business_day_offset(self.settlement_days())?)
    }
}
