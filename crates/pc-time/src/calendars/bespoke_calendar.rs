//! Bespoke calendar: weekends plus user-supplied holidays.

use crate::calendar::Calendar;
use crate::date::Date;
use std::collections::BTreeSet;

/// A calendar whose holidays are supplied at run time.
#[derive(Debug, Clone)]
pub struct BespokeCalendar {
    name: String,
    holidays: BTreeSet<Date>,
}

impl BespokeCalendar {
    /// Create a calendar with the given name and no holidays.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            holidays: BTreeSet::new(),
        }
    }

    /// Builder-style variant of [`add_holiday`](Self::add_holiday).
    pub fn with_holidays(mut self, holidays: impl IntoIterator<Item = Date>) -> Self {
        self.holidays.extend(holidays);
        self
    }

    /// Add a holiday. Weekends are already non-business days.
    pub fn add_holiday(&mut self, date: Date) {
        self.holidays.insert(date);
    }

    /// Remove a previously added holiday.
    pub fn remove_holiday(&mut self, date: Date) {
        self.holidays.remove(&date);
    }

    /// Explicitly-added holidays, in date order.
    pub fn holidays(&self) -> impl Iterator<Item = &Date> {
        self.holidays.iter()
    }
}

impl Calendar for BespokeCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && !self.holidays.contains(&date)
    }
}
