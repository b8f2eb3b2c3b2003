//! # pc-core
//!
//! Core types, traits, and error definitions for parcoupon-rs.
//!
//! This crate provides the building blocks shared across the workspace:
//! type aliases, the error hierarchy, the Observer/Observable pattern, the
//! relinkable handle used to attach curves to indexes, `LazyObject`, and
//! `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Shared, relinkable reference handle (`RelinkableHandle<T>`).
pub mod handle;

/// Design patterns: observable, lazy_object.
pub mod patterns;

/// Global library settings (evaluation date override).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Integer type used for signed day offsets.
pub type Integer = i32;

/// Non-negative integer type.
pub type Natural = u32;

/// A rate expressed as a decimal (e.g. 0.05 = 5 %).
pub type Rate = Real;

/// A spread over a reference rate.
pub type Spread = Real;

/// A discount factor, normally in (0, 1].
pub type DiscountFactor = Real;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use handle::RelinkableHandle;
pub use patterns::lazy_object::{LazyObject, LazyState};
pub use patterns::observable::{Observable, ObservableImpl, Observer};
pub use settings::{ScopedEvaluationDate, Settings};
