//! # pc-cashflows
//!
//! Cash flows, par floating-rate coupons, and legs.
//!
//! The centre of the crate is [`ParCouponValuator`], which computes the
//! amount of a floating coupon from a realized fixing or, when the fixing
//! lies ahead, from the discount factors of the index's curve.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cashflow;
pub mod coupon;
pub mod floating_rate_coupon;
pub mod leg;
pub mod par_coupon;

pub use cashflow::{CashFlow, Leg, SimpleCashFlow};
pub use coupon::Coupon;
pub use floating_rate_coupon::FloatingRateCoupon;
pub use leg::{maturity_date, next_cashflow_date, npv, LegValuation, ParCouponLegBuilder};
pub use par_coupon::{ParCoupon, ParCouponValuator};
