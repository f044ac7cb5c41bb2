//! # bv-math
//!
//! Mathematical utilities: 1D interpolation schemes and floating-point
//! comparison helpers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Floating-point comparison utilities.
pub mod comparison;

/// 1D interpolation schemes.
pub mod interpolations;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use comparison::{close, close_enough};
pub use interpolations::{
    CubicNaturalSpline, Interpolation1D, LinearInterpolation, MonotoneCubicSpline,
};
