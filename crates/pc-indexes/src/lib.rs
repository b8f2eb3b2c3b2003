//! # pc-indexes
//!
//! Floating-rate indexes and the store of their historical fixings.
//!
//! * [`Index`]: the narrow interface coupons need from an index.
//! * [`Xibor`]: an interbank offered-rate index with a relinkable
//!   forecasting curve.
//! * [`FixingHistory`] / [`IndexHistory`] / [`IndexManager`]: realized
//!   fixings keyed by index name, with an explicit [`FixingLookup`] result.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Historical fixings: lookup result, storage, and the global manager.
pub mod fixing_history;

/// `Index`: base trait for floating-rate indexes.
pub mod index;

/// `Xibor`: interbank offered-rate index.
pub mod xibor;

/// Pre-configured index constructors.
pub mod ibor;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use fixing_history::{Fixing, FixingHistory, FixingLookup, IndexHistory, IndexManager};
pub use ibor::euribor;
pub use index::Index;
pub use xibor::Xibor;
