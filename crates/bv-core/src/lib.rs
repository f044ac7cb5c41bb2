//! # bv-core
//!
//! Core types, error definitions, and change-notification primitives shared
//! across the blackvol workspace.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` validation macro.
pub mod errors;

/// Design patterns: publish/subscribe change notification.
pub mod patterns;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// A time measurement in years.
pub type Time = Real;

/// A volatility level expressed as a decimal.
pub type Volatility = Real;

/// Alias used for array sizes / indices.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use patterns::subscription::{Observer, SubscriberList};
