//! # pc-termstructures
//!
//! Yield (discount) term structures: the base traits, a flat-forward curve,
//! and a curve interpolated on pillar discount factors.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `TermStructure`: base trait for all term structures.
pub mod term_structure;

/// `YieldTermStructure`: discount-factor term structures.
pub mod yield_term_structure;

/// `FlatForward`: constant forward-rate yield curve.
pub mod flat_forward;

/// `InterpolatedDiscountCurve`: log-linear interpolation on discount factors.
pub mod interpolated_discount_curve;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use flat_forward::FlatForward;
pub use interpolated_discount_curve::InterpolatedDiscountCurve;
pub use term_structure::TermStructure;
pub use yield_term_structure::{YieldTermStructure, YieldTermStructureData};
