//! # bv-time
//!
//! Calendar-free date and day-count convention types.
//!
//! This crate supplies the time axis of the library: a serial-number [`Date`]
//! and the [`DayCounter`] conventions that turn a pair of dates into a
//! year fraction.  Holiday calendars and business-day adjustments are out of
//! scope.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use day_counter::{Actual360, Actual365Fixed, ActualActualIsda, DayCounter, Thirty360};
