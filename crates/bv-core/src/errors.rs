//! Error types for the blackvol workspace.
//!
//! A single `thiserror`-derived enum covers the whole library.  Construction
//! validation goes through the [`ensure!`] macro; query-time failures are
//! built directly from the [`Error`] variants at the call site.

use thiserror::Error;

/// The top-level error type used throughout the blackvol workspace.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// Malformed construction inputs (size mismatch, unordered dates, …).
    ///
    /// Construction is all-or-nothing: when this is returned, no
    /// partially-built object is observable.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A query argument outside the mathematical domain of the operation.
    #[error("domain error: {0}")]
    Domain(String),

    /// A query outside the supported range without extrapolation enabled.
    #[error("{value} is outside the range [{min}, {max}] and extrapolation is disabled")]
    Extrapolation {
        /// The out-of-range query value.
        value: f64,
        /// Lower bound of the supported range.
        min: f64,
        /// Upper bound of the supported range.
        max: f64,
    },

    /// Date construction or date-arithmetic failure.
    #[error("date error: {0}")]
    Date(String),
}

/// Shorthand `Result` type used throughout the blackvol workspace.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Validate a construction-time precondition.
///
/// Returns `Err(Error::InvalidInput(...))` from the enclosing function if
/// `$cond` is false.
///
/// # Example
/// ```
/// use bv_core::ensure;
/// fn positive(x: f64) -> bv_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidInput(
                format!($($msg)*)
            ));
        }
    };
}
