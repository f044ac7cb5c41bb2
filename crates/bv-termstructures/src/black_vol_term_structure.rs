//! `BlackVolTermStructure` — Black-volatility term structures.
//!
//! Provides the `BlackVolTermStructure` trait and one concrete
//! implementation, `BlackConstantVol` (a flat Black volatility).

use crate::term_structure::TermStructure;
use bv_core::errors::{Error, Result};
use bv_core::{Real, Time, Volatility};
use bv_time::{Date, DayCounter};
use std::sync::Arc;

/// Maturity used in place of zero when deriving a spot volatility, so that
/// `sqrt(variance / t)` is evaluated at the vanishing-maturity limit.
const VANISHING_MATURITY: Time = 1.0e-5;

/// A Black-volatility term structure.
///
/// Implementors provide [`black_variance_impl`][Self::black_variance_impl];
/// volatilities and the range-checked public entry points are derived from
/// it.
pub trait BlackVolTermStructure: TermStructure {
    /// Return the Black variance `σ²·t` for time `t`.
    ///
    /// Assumes `t >= 0`; the implementor enforces its own range policy,
    /// honouring `extrapolate` beyond [`max_time`][TermStructure::max_time].
    fn black_variance_impl(&self, t: Time, extrapolate: bool) -> Result<Real>;

    /// Black variance for time `t`.
    ///
    /// Fails with [`Error::Domain`] for negative `t` and with
    /// [`Error::Extrapolation`] beyond the curve range when `extrapolate` is
    /// false.
    fn black_variance(&self, t: Time, extrapolate: bool) -> Result<Real> {
        check_time(t)?;
        self.black_variance_impl(t, extrapolate)
    }

    /// Black volatility for time `t`.
    ///
    /// At `t = 0` the vanishing-maturity limit of `sqrt(σ²·t / t)` is
    /// returned.
    fn black_vol(&self, t: Time, extrapolate: bool) -> Result<Volatility> {
        check_time(t)?;
        let t_eff = if t == 0.0 { VANISHING_MATURITY } else { t };
        let var = self.black_variance_impl(t_eff, extrapolate)?;
        Ok((var / t_eff).sqrt())
    }

    /// Black variance for a date.
    fn black_variance_date(&self, date: Date, extrapolate: bool) -> Result<Real> {
        self.black_variance(self.time_from_reference(date), extrapolate)
    }

    /// Black volatility for a date.
    fn black_vol_date(&self, date: Date, extrapolate: bool) -> Result<Volatility> {
        self.black_vol(self.time_from_reference(date), extrapolate)
    }
}

fn check_time(t: Time) -> Result<()> {
    if t < 0.0 {
        return Err(Error::Domain(format!(
            "negative time ({t}) given to a volatility term structure"
        )));
    }
    Ok(())
}

// ── BlackConstantVol ──────────────────────────────────────────────────────────

/// A flat (constant) Black volatility.
///
/// `σ(t) = constant` for all `t >= 0`; the variance grows linearly in time
/// and the domain is unbounded, so the extrapolation flag is never needed.
#[derive(Debug)]
pub struct BlackConstantVol {
    reference_date: Date,
    day_counter: Arc<dyn DayCounter>,
    volatility: Volatility,
}

impl BlackConstantVol {
    /// Create a constant Black volatility structure.
    pub fn new(
        reference_date: Date,
        volatility: Volatility,
        day_counter: impl DayCounter + 'static,
    ) -> Self {
        Self {
            reference_date,
            day_counter: Arc::new(day_counter),
            volatility,
        }
    }

    /// The constant volatility value.
    pub fn volatility(&self) -> Volatility {
        self.volatility
    }
}

impl TermStructure for BlackConstantVol {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.day_counter
    }

    fn max_date(&self) -> Date {
        Date::MAX
    }
}

impl BlackVolTermStructure for BlackConstantVol {
    fn black_variance_impl(&self, t: Time, _extrapolate: bool) -> Result<Real> {
        Ok(self.volatility * self.volatility * t)
    }
}
