//! `BlackVarianceCurve` — Black volatility curve modelled as a variance
//! curve.
//!
//! The curve turns a set of (date, Black volatility) market quotes into a
//! continuous function of time by interpolating the **total variance**
//! `v(t) = σ²(t)·t` rather than the volatility itself: whenever the node
//! variances are non-decreasing and the interpolation scheme preserves
//! monotone node sequences, the returned variance is non-decreasing in time,
//! which interpolating volatility directly would not guarantee.

use crate::black_vol_term_structure::BlackVolTermStructure;
use crate::term_structure::TermStructure;
use bv_core::errors::{Error, Result};
use bv_core::{ensure, Observer, Real, SubscriberList, Time, Volatility};
use bv_math::interpolations::{
    CubicNaturalSpline, Interpolation1D, LinearInterpolation, MonotoneCubicSpline,
};
use bv_time::{Date, DayCounter};
use std::sync::{Arc, Weak};

// ── Interpolation strategy selection ─────────────────────────────────────────

/// Trait for creating an interpolation from `(xs, ys)` slices.
///
/// This lets callers choose the interpolation method at curve construction
/// time without the curve needing to know the concrete type.
pub trait InterpolationBuilder: std::fmt::Debug {
    /// Build an interpolation from the given x and y values.
    fn build(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation1D>>;
}

/// Linear interpolation builder.
#[derive(Debug, Clone, Copy)]
pub struct Linear;

impl InterpolationBuilder for Linear {
    fn build(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation1D>> {
        Ok(Box::new(LinearInterpolation::new(xs, ys)?))
    }
}

/// Natural cubic spline interpolation builder.
#[derive(Debug, Clone, Copy)]
pub struct CubicNatural;

impl InterpolationBuilder for CubicNatural {
    fn build(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation1D>> {
        Ok(Box::new(CubicNaturalSpline::new(xs, ys)?))
    }
}

/// Monotone cubic spline interpolation builder.
#[derive(Debug, Clone, Copy)]
pub struct MonotoneCubic;

impl InterpolationBuilder for MonotoneCubic {
    fn build(&self, xs: &[Real], ys: &[Real]) -> Result<Box<dyn Interpolation1D>> {
        Ok(Box::new(MonotoneCubicSpline::new(xs, ys)?))
    }
}

// ── BlackVarianceCurve ────────────────────────────────────────────────────────

/// A Black volatility term structure built by interpolating total variance
/// over time.
///
/// The quoted volatilities are copied at construction; the curve is
/// immutable afterwards.  Queries follow a three-region policy:
///
/// * `0 <= t <= times[0]` — the first node's variance is scaled linearly
///   down to the implicit zero variance at the reference date;
/// * `times[0] < t <= times.back()` — the interpolation answers directly;
/// * `t > times.back()` — with extrapolation permission, the last node's
///   variance is scaled proportionally in `t`; without it the query fails.
///
/// Both internal boundaries are continuous by construction.
#[derive(Debug)]
pub struct BlackVarianceCurve {
    reference_date: Date,
    day_counter: Arc<dyn DayCounter>,
    max_date: Date,
    underlying: String,
    /// Quoted dates (ascending, all after `reference_date`).
    dates: Vec<Date>,
    /// Times corresponding to the quoted dates.
    times: Vec<Time>,
    /// Total variances at `times`: `variances[j] = times[j] * vols[j]²`.
    variances: Vec<Real>,
    /// The interpolation over (times, variances).
    variance_curve: Box<dyn Interpolation1D>,
    subscribers: SubscriberList,
}

impl BlackVarianceCurve {
    /// Build a variance curve from quoted dates and Black volatilities.
    ///
    /// # Arguments
    /// * `reference_date` — the zero point of the time axis
    /// * `day_counter` — used for date → time conversion
    /// * `dates` — quoted dates, strictly ascending, all after
    ///   `reference_date`
    /// * `vols` — Black volatilities, aligned with `dates` by index
    /// * `builder` — interpolation strategy (e.g. [`Linear`],
    ///   [`MonotoneCubic`])
    ///
    /// # Errors
    /// Fails with [`Error::InvalidInput`] when the two slices differ in
    /// length, when the first date is not strictly after the reference date,
    /// or when the computed times are not strictly increasing.  Construction
    /// is all-or-nothing.
    pub fn new(
        reference_date: Date,
        day_counter: impl DayCounter + 'static,
        dates: &[Date],
        vols: &[Volatility],
        builder: &dyn InterpolationBuilder,
    ) -> Result<Self> {
        ensure!(
            dates.len() == vols.len(),
            "mismatch between date vector ({}) and black vol vector ({})",
            dates.len(),
            vols.len()
        );
        ensure!(!dates.is_empty(), "no quotes given");
        // A quote at the reference date itself would be lost: the variance
        // there is zero by definition.
        ensure!(
            dates[0] > reference_date,
            "first quoted date ({}) must be after the reference date ({reference_date})",
            dates[0]
        );

        let dc: Arc<dyn DayCounter> = Arc::new(day_counter);

        let mut times: Vec<Time> = Vec::with_capacity(dates.len());
        let mut variances: Vec<Real> = Vec::with_capacity(dates.len());
        for (j, (&date, &vol)) in dates.iter().zip(vols.iter()).enumerate() {
            let t = dc.year_fraction(reference_date, date);
            if j == 0 {
                ensure!(
                    t > 0.0,
                    "the day counter maps the first quoted date ({date}) to a non-positive time"
                );
            } else {
                ensure!(
                    t > times[j - 1],
                    "quoted dates must be sorted and unique ({} follows {})",
                    date,
                    dates[j - 1]
                );
            }
            times.push(t);
            variances.push(t * vol * vol);
        }

        let variance_curve = builder.build(&times, &variances)?;

        Ok(Self {
            reference_date,
            day_counter: dc,
            max_date: *dates.last().expect("validated non-empty"),
            underlying: String::new(),
            dates: dates.to_vec(),
            times,
            variances,
            variance_curve,
            subscribers: SubscriberList::new(),
        })
    }

    /// Label the underlying asset.
    pub fn with_underlying(mut self, underlying: impl Into<String>) -> Self {
        self.underlying = underlying.into();
        self
    }

    /// The label of the underlying asset (empty if not set).
    pub fn underlying(&self) -> &str {
        &self.underlying
    }

    /// Return the quoted dates.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Return the node times.
    pub fn times(&self) -> &[Time] {
        &self.times
    }

    /// Return the node total variances.
    pub fn variances(&self) -> &[Real] {
        &self.variances
    }

    // ── Change notification ──────────────────────────────────────────────────

    /// Register a subscriber for change notifications on this curve.
    pub fn subscribe(&self, observer: Weak<dyn Observer>) {
        self.subscribers.subscribe(observer);
    }

    /// Remove a previously registered subscriber.
    pub fn unsubscribe(&self, observer: &Weak<dyn Observer>) {
        self.subscribers.unsubscribe(observer);
    }

    /// Forward an upstream market-data change to this curve's subscribers.
    ///
    /// The quoted volatilities are a snapshot taken at construction, so
    /// there is nothing to rebuild here; a variant sourcing its quotes from
    /// live handles would rebuild the node arrays and the interpolation
    /// before forwarding.
    pub fn on_upstream_change(&self) {
        self.subscribers.notify();
    }
}

impl TermStructure for BlackVarianceCurve {
    fn reference_date(&self) -> Date {
        self.reference_date
    }

    fn day_counter(&self) -> &dyn DayCounter {
        &*self.day_counter
    }

    fn max_date(&self) -> Date {
        self.max_date
    }

    fn max_time(&self) -> Time {
        *self.times.last().expect("validated non-empty")
    }
}

impl BlackVolTermStructure for BlackVarianceCurve {
    fn black_variance_impl(&self, t: Time, extrapolate: bool) -> Result<Real> {
        let first = self.times[0];
        let last = *self.times.last().expect("validated non-empty");
        if t <= first {
            // The variance at the reference date is zero although no such
            // node is stored; scale the first node's variance linearly so
            // that the two regions meet exactly at times[0].
            Ok(self.variance_curve.operator(first) * t / first)
        } else if t <= last {
            self.variance_curve.value(t, extrapolate)
        } else if extrapolate {
            // Beyond the last quote, hold the implied volatility level flat:
            // scale the last node's variance proportionally in t rather than
            // letting the interpolation extrapolate on its own terms.
            Ok(self.variance_curve.operator(last) * t / last)
        } else {
            Err(Error::Extrapolation {
                value: t,
                min: 0.0,
                max: last,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use bv_math::close_enough;
    use bv_time::Actual365Fixed;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn reference() -> Date {
        Date::from_ymd(2025, 1, 2).unwrap()
    }

    fn sample_curve(builder: &dyn InterpolationBuilder) -> BlackVarianceCurve {
        let r = reference();
        let dates = [r + 30, r + 90, r + 180];
        let vols = [0.20, 0.22, 0.25];
        BlackVarianceCurve::new(r, Actual365Fixed, &dates, &vols, builder)
            .unwrap()
            .with_underlying("SPX")
    }

    #[test]
    fn nodes_are_reproduced_exactly() {
        let curve = sample_curve(&Linear);
        let times = curve.times().to_vec();
        let variances = curve.variances().to_vec();
        for (&t, &v) in times.iter().zip(variances.iter()) {
            let got = curve.black_variance(t, false).unwrap();
            assert!(close_enough(got, v, 42), "at t={t}: expected {v}, got {got}");
        }
        // First node: t₀·σ₀² with t₀ = 30/365
        assert_abs_diff_eq!(variances[0], 30.0 / 365.0 * 0.04, epsilon = 1e-15);
    }

    #[test]
    fn nodes_are_reproduced_by_cubic_builders() {
        for builder in [&CubicNatural as &dyn InterpolationBuilder, &MonotoneCubic] {
            let curve = sample_curve(builder);
            for (&t, &v) in curve.times().iter().zip(curve.variances().iter()) {
                let got = curve.black_variance(t, false).unwrap();
                assert_abs_diff_eq!(got, v, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn variance_at_zero_is_zero() {
        let curve = sample_curve(&Linear);
        assert_eq!(curve.black_variance(0.0, false).unwrap(), 0.0);
    }

    #[test]
    fn below_first_node_scales_linearly() {
        let curve = sample_curve(&Linear);
        let t0 = curve.times()[0];
        let v0 = curve.variances()[0];
        assert_abs_diff_eq!(
            curve.black_variance(t0 / 2.0, false).unwrap(),
            v0 / 2.0,
            epsilon = 1e-15
        );
        // Black vol is flat at σ₀ below the first node
        assert_abs_diff_eq!(
            curve.black_vol(t0 / 4.0, false).unwrap(),
            0.20,
            epsilon = 1e-12
        );
    }

    #[test]
    fn continuous_at_region_boundaries() {
        for builder in [&Linear as &dyn InterpolationBuilder, &CubicNatural, &MonotoneCubic] {
            let curve = sample_curve(builder);
            let eps = 1e-10;
            for t in [curve.times()[0], curve.max_time()] {
                let below = curve.black_variance(t - eps, true).unwrap();
                let above = curve.black_variance(t + eps, true).unwrap();
                assert_abs_diff_eq!(below, above, epsilon = 1e-8);
            }
        }
    }

    #[test]
    fn negative_time_is_a_domain_error() {
        let curve = sample_curve(&Linear);
        assert!(matches!(
            curve.black_variance(-1e-10, false),
            Err(Error::Domain(_))
        ));
        assert!(matches!(
            curve.black_variance(-1.0, true),
            Err(Error::Domain(_))
        ));
    }

    #[test]
    fn extrapolation_is_gated() {
        let curve = sample_curve(&Linear);
        let t_max = curve.max_time();

        match curve.black_variance(1.0, false) {
            Err(Error::Extrapolation { value, max, .. }) => {
                assert_eq!(value, 1.0);
                assert_eq!(max, t_max);
            }
            other => panic!("expected an extrapolation error, got {other:?}"),
        }

        // With permission the last node's variance scales proportionally
        let v_max = *curve.variances().last().unwrap();
        assert_abs_diff_eq!(
            curve.black_variance(1.0, true).unwrap(),
            v_max * 1.0 / t_max,
            epsilon = 1e-15
        );
        // i.e. the implied volatility stays at the last quoted level
        assert_abs_diff_eq!(curve.black_vol(1.0, true).unwrap(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn date_based_queries_agree_with_time_based() {
        let curve = sample_curve(&Linear);
        let d = reference() + 60;
        let t = curve.time_from_reference(d);
        assert_eq!(
            curve.black_variance_date(d, false).unwrap(),
            curve.black_variance(t, false).unwrap()
        );
    }

    #[test]
    fn accessors() {
        let curve = sample_curve(&Linear);
        let r = reference();
        assert_eq!(curve.reference_date(), r);
        assert_eq!(curve.min_date(), r);
        assert_eq!(curve.max_date(), r + 180);
        assert_eq!(curve.min_time(), 0.0);
        assert_abs_diff_eq!(curve.max_time(), 180.0 / 365.0, epsilon = 1e-15);
        assert_eq!(curve.underlying(), "SPX");
        assert_eq!(curve.day_counter().name(), "Actual/365 (Fixed)");
        assert_eq!(curve.dates().len(), 3);
    }

    #[test]
    fn rejects_mismatched_inputs() {
        let r = reference();
        let dates = [r + 30, r + 90];
        let vols = [0.20, 0.22, 0.25];
        assert!(matches!(
            BlackVarianceCurve::new(r, Actual365Fixed, &dates, &vols, &Linear),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            BlackVarianceCurve::new(r, Actual365Fixed, &[], &[], &Linear),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn rejects_first_date_not_after_reference() {
        let r = reference();
        for first in [r, r - 1] {
            let dates = [first, r + 90];
            let vols = [0.20, 0.22];
            assert!(matches!(
                BlackVarianceCurve::new(r, Actual365Fixed, &dates, &vols, &Linear),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn rejects_unsorted_or_duplicate_dates() {
        let r = reference();
        let vols = [0.20, 0.22];
        for dates in [[r + 90, r + 30], [r + 30, r + 30]] {
            assert!(matches!(
                BlackVarianceCurve::new(r, Actual365Fixed, &dates, &vols, &Linear),
                Err(Error::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn notifies_subscribers_on_upstream_change() {
        struct CountingObserver {
            count: AtomicU32,
        }
        impl Observer for CountingObserver {
            fn update(&self) {
                self.count.fetch_add(1, Ordering::Relaxed);
            }
        }

        let curve = sample_curve(&Linear);
        let obs = Arc::new(CountingObserver {
            count: AtomicU32::new(0),
        });
        curve.subscribe(Arc::downgrade(&obs) as Weak<dyn Observer>);
        curve.on_upstream_change();
        curve.on_upstream_change();
        assert_eq!(obs.count.load(Ordering::Relaxed), 2);

        let weak = Arc::downgrade(&obs) as Weak<dyn Observer>;
        curve.unsubscribe(&weak);
        curve.on_upstream_change();
        assert_eq!(obs.count.load(Ordering::Relaxed), 2);
    }

    proptest! {
        #[test]
        fn variance_is_monotone_for_non_decreasing_vols(
            day_steps in proptest::collection::vec(1u16..120, 1..6),
            vol0 in 0.0f64..0.5,
            vol_steps in proptest::collection::vec(0.0f64..0.1, 5),
        ) {
            let r = reference();
            let mut dates = Vec::new();
            let mut vols = Vec::new();
            let mut d = r;
            let mut vol = vol0;
            for (i, &step) in day_steps.iter().enumerate() {
                d = d + step as i32;
                dates.push(d);
                vol += vol_steps[i % vol_steps.len()];
                vols.push(vol);
            }
            // A single quote cannot feed the interpolation; pad to two
            if dates.len() == 1 {
                dates.push(*dates.last().unwrap() + 30);
                vols.push(*vols.last().unwrap());
            }

            let curve =
                BlackVarianceCurve::new(r, Actual365Fixed, &dates, &vols, &Linear).unwrap();
            let t_max = curve.max_time();
            let mut prev = 0.0;
            for i in 0..=300 {
                let t = t_max * (i as f64) / 300.0;
                let v = curve.black_variance(t, false).unwrap();
                prop_assert!(
                    v >= prev - 1e-12,
                    "variance decreased at t={}: {} < {}", t, v, prev
                );
                prev = v;
            }
        }
    }
}
