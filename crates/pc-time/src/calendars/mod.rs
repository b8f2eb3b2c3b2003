//! Concrete calendars.

/// User-defined holiday calendar.
pub mod bespoke_calendar;

/// TARGET (euro settlement) calendar.
pub mod target;

pub use bespoke_calendar::BespokeCalendar;
pub use target::Target;
