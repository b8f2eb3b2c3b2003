//! Global library settings.
//!
//! [`Settings`] holds an optional **evaluation date** override: when set, it
//! replaces the curve's own "today" as the reference point for coupon
//! valuation. It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! The date is stored as a serial number so that this crate does not depend
//! on the date type; `pc-time` converts with `Date::serial` /
//! `Date::from_serial`.

use std::sync::{Mutex, OnceLock, PoisonError};

/// Process-wide settings used by parcoupon-rs.
pub struct Settings {
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// The evaluation-date override as a serial number, if any.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self
            .evaluation_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// Set the evaluation-date override.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self
            .evaluation_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(serial);
    }

    /// Clear the override; curves' own dates apply again.
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Sets the evaluation date for the lifetime of the guard and restores the
/// previous value on drop.
#[must_use = "the previous evaluation date is restored when the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Override the evaluation date with `serial` until the guard drops.
    pub fn new(serial: i32) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}
