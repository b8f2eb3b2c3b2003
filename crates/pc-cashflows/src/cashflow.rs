//! `CashFlow` trait: the base for all cash-flow types.
//!
//! A cash flow is an amount of money paid at a specific date. Floating
//! amounts depend on market data, so computing one can fail.

use pc_core::{errors::Result, Real};
use pc_time::Date;
use std::fmt;
use std::sync::Arc;

/// Base trait for all cash flows.
pub trait CashFlow: fmt::Debug + Send + Sync {
    /// The date on which this cash flow is paid.
    fn date(&self) -> Date;

    /// The amount of cash paid on the payment date.
    fn amount(&self) -> Result<Real>;

    /// Whether this cash flow has already occurred relative to `ref_date`.
    /// A flow paid on `ref_date` has NOT yet occurred.
    fn has_occurred(&self, ref_date: Date) -> bool {
        self.date() < ref_date
    }
}

impl<C: CashFlow + ?Sized> CashFlow for Box<C> {
    fn date(&self) -> Date {
        (**self).date()
    }

    fn amount(&self) -> Result<Real> {
        (**self).amount()
    }

    fn has_occurred(&self, ref_date: Date) -> bool {
        (**self).has_occurred(ref_date)
    }
}

impl<C: CashFlow + ?Sized> CashFlow for Arc<C> {
    fn date(&self) -> Date {
        (**self).date()
    }

    fn amount(&self) -> Result<Real> {
        (**self).amount()
    }

    fn has_occurred(&self, ref_date: Date) -> bool {
        (**self).has_occurred(ref_date)
    }
}

/// A sequence of cash flows.
pub type Leg = Vec<Box<dyn CashFlow>>;

/// A fixed amount at a fixed date (e.g. a notional redemption).
#[derive(Debug, Clone)]
pub struct SimpleCashFlow {
    /// The payment amount.
    pub amount: Real,
    /// The payment date.
    pub date: Date,
}

impl SimpleCashFlow {
    /// Create a new simple cash flow.
    pub fn new(amount: Real, date: Date) -> Self {
        Self { amount, date }
    }
}

impl CashFlow for SimpleCashFlow {
    fn date(&self) -> Date {
        self.date
    }

    fn amount(&self) -> Result<Real> {
        Ok(self.amount)
    }
}
