//! # bv-termstructures
//!
//! Black volatility term structures: the capability traits and the concrete
//! curves built on top of them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `TermStructure` — base capability trait for all term structures.
pub mod term_structure;

/// `BlackVolTermStructure` — Black-volatility term structures and
/// `BlackConstantVol`.
pub mod black_vol_term_structure;

/// `BlackVarianceCurve` — Black volatility curve modelled as a variance
/// curve.
pub mod black_variance_curve;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use black_variance_curve::{
    BlackVarianceCurve, CubicNatural, InterpolationBuilder, Linear, MonotoneCubic,
};
pub use black_vol_term_structure::{BlackConstantVol, BlackVolTermStructure};
pub use term_structure::TermStructure;
