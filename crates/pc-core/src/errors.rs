//! Error types for parcoupon-rs.
//!
//! A single `thiserror`-derived enum covers every failure the valuation stack
//! can report. Configuration and missing-data failures are distinct variants
//! so that callers can decide whether a retry (after loading fixings) makes
//! sense. The `ensure!` and `fail!` macros cover ad-hoc precondition checks.

use thiserror::Error;

/// The top-level error type used throughout parcoupon-rs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// An object is not wired up correctly (e.g. an index without a curve).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A historical fixing that must exist is absent.
    ///
    /// The date is carried pre-formatted so that this crate does not depend
    /// on the date type.
    #[error("Missing {index} fixing for {date}")]
    MissingData {
        /// Name of the index whose fixing is missing.
        index: String,
        /// The fixing date, formatted for display.
        date: String,
    },

    /// The fixing source could not be read.
    #[error("fixing lookup failed: {0}")]
    LookupFault(String),

    /// Date-related error (out of range, invalid components, ...).
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Whether the error may go away once more market data is loaded.
    pub fn is_missing_data(&self) -> bool {
        matches!(self, Error::MissingData { .. })
    }
}

/// Shorthand `Result` type used throughout parcoupon-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use pc_core::{ensure, errors::Error};
/// fn positive(x: f64) -> pc_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use pc_core::fail;
/// fn always_err() -> pc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
