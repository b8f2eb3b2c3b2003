//! # parcoupon
//!
//! Par floating-rate coupon valuation: the amount of a floating coupon taken
//! from a realized index fixing when one applies, and otherwise forecast from
//! the discount factors of the index's curve.
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `pc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use std::sync::Arc;
//! use parcoupon::cashflows::{FloatingRateCoupon, ParCouponValuator};
//! use parcoupon::core::RelinkableHandle;
//! use parcoupon::indexes::{euribor, IndexHistory};
//! use parcoupon::termstructures::{FlatForward, YieldTermStructure};
//! use parcoupon::time::{Actual360, Actual365Fixed, Date};
//!
//! let today = Date::from_ymd(2025, 1, 14)?;
//! let curve: Arc<dyn YieldTermStructure> =
//!     Arc::new(FlatForward::new(today, 0.03, Actual365Fixed));
//! let index = euribor(3, RelinkableHandle::new(curve))?;
//!
//! let coupon = FloatingRateCoupon::new(
//!     Date::from_ymd(2025, 4, 15)?,
//!     1_000_000.0,
//!     Date::from_ymd(2025, 1, 15)?,
//!     Date::from_ymd(2025, 4, 15)?,
//!     2,
//!     0.001,
//!     &index,
//!     Actual360,
//! )?;
//!
//! let history = IndexHistory::new();
//! history.add_fixing("Euribor3M", coupon.fixing_date(), 0.03)?;
//!
//! let amount = ParCouponValuator::with_history(history).amount(&coupon, &index, today)?;
//! assert!((amount - 7_750.0).abs() < 1e-6);
//! # Ok::<(), parcoupon::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and the observer pattern.
pub use pc_core as core;

/// Date, calendar, day counter, and business-day-convention types.
pub use pc_time as time;

/// Discount-curve term structures.
pub use pc_termstructures as termstructures;

/// Floating-rate indexes and fixing history.
pub use pc_indexes as indexes;

/// Cash flows, par coupons, and legs.
pub use pc_cashflows as cashflows;
