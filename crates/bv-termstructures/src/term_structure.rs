//! `TermStructure` — base capability trait for all term structures.
//!
//! Every term structure has a **reference date** (the zero point of its time
//! axis), a **day counter** for date → time conversion, and a **maximum
//! date** beyond which queries require extrapolation permission.

use bv_core::Time;
use bv_time::{Date, DayCounter};

/// Base capability trait for all term structures.
///
/// Implemented by any curve mapping time to a market parameter; no concrete
/// base class is involved.
pub trait TermStructure: std::fmt::Debug + Send + Sync {
    /// The date from which time is measured.
    fn reference_date(&self) -> Date;

    /// The day counter used for date → time-fraction conversions.
    fn day_counter(&self) -> &dyn DayCounter;

    /// The latest date for which the structure can be queried directly.
    fn max_date(&self) -> Date;

    /// The earliest date for which the structure can be queried.
    fn min_date(&self) -> Date {
        self.reference_date()
    }

    /// The earliest time for which the structure can be queried.
    fn min_time(&self) -> Time {
        0.0
    }

    /// The latest time for which the structure can be queried directly.
    fn max_time(&self) -> Time {
        self.time_from_reference(self.max_date())
    }

    /// Convert a date to a year fraction relative to the reference date.
    fn time_from_reference(&self, date: Date) -> Time {
        self.day_counter()
            .year_fraction(self.reference_date(), date)
    }
}
