//! 1D interpolation trait and implementations.
//!
//! An interpolation is constructed once from ordered `(x, y)` node arrays and
//! then answers point queries.  Evaluation outside the node range is gated by
//! the caller through [`Interpolation1D::value`]; the raw
//! [`operator`](Interpolation1D::operator) applies each scheme's own boundary
//! behaviour without any check.

use bv_core::errors::{Error, Result};
use bv_core::Real;

mod cubic;

pub use cubic::{CubicNaturalSpline, MonotoneCubicSpline};

/// A 1D interpolation function `f: R → R` defined by a set of known points.
pub trait Interpolation1D: std::fmt::Debug + Send + Sync {
    /// Evaluate the interpolation at `x` without a range check.
    ///
    /// Outside `[x_min, x_max]` the result is scheme-defined (boundary
    /// segment or polynomial extension, or a boundary clamp); callers that
    /// need gated access should use [`value`](Interpolation1D::value).
    fn operator(&self, x: Real) -> Real;

    /// Return the lower bound of the interpolation domain.
    fn x_min(&self) -> Real;

    /// Return the upper bound of the interpolation domain.
    fn x_max(&self) -> Real;

    /// Return `true` if `x` is within the interpolation range.
    fn is_in_range(&self, x: Real) -> bool {
        x >= self.x_min() && x <= self.x_max()
    }

    /// Evaluate the interpolation at `x`, failing when `x` is out of range
    /// and `extrapolate` is false.
    fn value(&self, x: Real, extrapolate: bool) -> Result<Real> {
        if !extrapolate && !self.is_in_range(x) {
            return Err(Error::Extrapolation {
                value: x,
                min: self.x_min(),
                max: self.x_max(),
            });
        }
        Ok(self.operator(x))
    }
}

/// Binary search: find `i` such that `xs[i] <= x < xs[i+1]`, clamped to
/// `[0, n-2]`.
pub(crate) fn locate(xs: &[Real], x: Real) -> usize {
    let n = xs.len();
    if x <= xs[0] {
        return 0;
    }
    if x >= xs[n - 1] {
        return n - 2;
    }
    let mut lo = 0;
    let mut hi = n - 1;
    while hi - lo > 1 {
        let mid = (lo + hi) / 2;
        if xs[mid] <= x {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Validate that node arrays agree in length, meet a minimum size, and have
/// strictly increasing abscissae.
pub(crate) fn check_nodes(xs: &[Real], ys: &[Real], min_points: usize) -> Result<()> {
    bv_core::ensure!(
        xs.len() >= min_points,
        "need at least {min_points} points for interpolation, got {}",
        xs.len()
    );
    bv_core::ensure!(
        xs.len() == ys.len(),
        "xs and ys must have the same length ({} vs {})",
        xs.len(),
        ys.len()
    );
    bv_core::ensure!(
        xs.windows(2).all(|w| w[0] < w[1]),
        "xs must be strictly increasing"
    );
    Ok(())
}

// ── Linear ────────────────────────────────────────────────────────────────────

/// Linear interpolation.
///
/// `f(x) = y[i] + (y[i+1] - y[i]) * (x - x[i]) / (x[i+1] - x[i])`
///
/// Outside the node range the boundary segment is extended.
#[derive(Debug, Clone)]
pub struct LinearInterpolation {
    xs: Vec<Real>,
    ys: Vec<Real>,
}

impl LinearInterpolation {
    /// Construct a linear interpolation from strictly increasing `xs` and
    /// corresponding `ys`.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        check_nodes(xs, ys, 2)?;
        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        })
    }
}

impl Interpolation1D for LinearInterpolation {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().expect("validated non-empty")
    }

    fn operator(&self, x: Real) -> Real {
        let i = locate(&self.xs, x);
        let dx = self.xs[i + 1] - self.xs[i];
        self.ys[i] + (x - self.xs[i]) * (self.ys[i + 1] - self.ys[i]) / dx
    }
}
