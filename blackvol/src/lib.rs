//! # blackvol
//!
//! Black volatility term structures modelled as interpolated variance
//! curves.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.  Application code should depend on this
//! crate rather than the individual `bv-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! blackvol = "0.1"
//! ```
//!
//! ```rust
//! use blackvol::termstructures::{BlackVarianceCurve, BlackVolTermStructure, Linear};
//! use blackvol::time::{Actual365Fixed, Date};
//!
//! let reference = Date::from_ymd(2025, 1, 2).unwrap();
//! let dates = [reference + 30, reference + 90, reference + 180];
//! let vols = [0.20, 0.22, 0.25];
//!
//! let curve = BlackVarianceCurve::new(reference, Actual365Fixed, &dates, &vols, &Linear)
//!     .unwrap()
//!     .with_underlying("SPX");
//!
//! // Total variance at the first pillar: t * sigma^2
//! let t0 = curve.times()[0];
//! let var = curve.black_variance(t0, false).unwrap();
//! assert!((var - t0 * 0.04).abs() < 1e-15);
//!
//! // Beyond the last pillar, extrapolation must be requested explicitly
//! assert!(curve.black_variance(1.0, false).is_err());
//! let vol = curve.black_vol(1.0, true).unwrap();
//! assert!((vol - 0.25).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions, and change notification.
pub use bv_core as core;

/// Date and day-count convention types.
pub use bv_time as time;

/// Interpolation schemes and comparison utilities.
pub use bv_math as math;

/// Term structure traits and implementations.
pub use bv_termstructures as termstructures;
