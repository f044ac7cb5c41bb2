//! Cubic interpolation schemes.
//!
//! Two members of the cubic family:
//!
//! - [`CubicNaturalSpline`] — the classical C² natural spline (second
//!   derivative zero at both boundaries), smooth but free to overshoot.
//! - [`MonotoneCubicSpline`] — Fritsch-Carlson monotone-preserving cubic
//!   Hermite, which cannot introduce new extrema on monotone data.

use bv_core::errors::Result;
use bv_core::Real;

use super::{check_nodes, locate, Interpolation1D};

// ── Natural cubic spline ──────────────────────────────────────────────────────

/// Natural cubic spline interpolation.
///
/// Solves the tridiagonal system for the second derivatives at the knots with
/// the natural boundary condition `f''(x_0) = f''(x_{n-1}) = 0`.  With only
/// two points the spline degenerates to the linear segment.  Outside the node
/// range the boundary polynomial is extended.
#[derive(Debug, Clone)]
pub struct CubicNaturalSpline {
    xs: Vec<Real>,
    ys: Vec<Real>,
    /// Second derivative at each knot.
    m: Vec<Real>,
}

impl CubicNaturalSpline {
    /// Build a natural cubic spline through the given data.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        check_nodes(xs, ys, 2)?;
        let n = xs.len();
        let xs = xs.to_vec();
        let ys = ys.to_vec();

        // Natural boundary: second derivatives vanish at both ends; the
        // interior values solve a tridiagonal system (Thomas algorithm).
        let mut m = vec![0.0; n];
        if n > 2 {
            let k = n - 2;
            let mut diag = vec![0.0; k];
            let mut rhs = vec![0.0; k];
            let h = |i: usize| xs[i + 1] - xs[i];
            for i in 0..k {
                diag[i] = 2.0 * (h(i) + h(i + 1));
                rhs[i] = 6.0
                    * ((ys[i + 2] - ys[i + 1]) / h(i + 1) - (ys[i + 1] - ys[i]) / h(i));
            }
            // Forward sweep: sub/super-diagonal entry between rows i-1 and i
            // is h(i)
            for i in 1..k {
                let w = h(i) / diag[i - 1];
                diag[i] -= w * h(i);
                rhs[i] -= w * rhs[i - 1];
            }
            // Back substitution
            m[k] = rhs[k - 1] / diag[k - 1];
            for i in (1..k).rev() {
                m[i] = (rhs[i - 1] - h(i) * m[i + 1]) / diag[i - 1];
            }
        }

        Ok(Self { xs, ys, m })
    }
}

impl Interpolation1D for CubicNaturalSpline {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().expect("validated non-empty")
    }

    fn operator(&self, x: Real) -> Real {
        let i = locate(&self.xs, x);
        let h = self.xs[i + 1] - self.xs[i];
        let a = (self.xs[i + 1] - x) / h;
        let b = (x - self.xs[i]) / h;
        a * self.ys[i]
            + b * self.ys[i + 1]
            + ((a * a * a - a) * self.m[i] + (b * b * b - b) * self.m[i + 1]) * h * h / 6.0
    }
}

// ── Monotone cubic (Fritsch-Carlson) ─────────────────────────────────────────

/// Monotone-preserving cubic Hermite spline.
///
/// Implements the Fritsch-Carlson algorithm: tangent estimates at the knots
/// are clipped so that the interpolant is monotone on every sub-interval
/// where the data is monotone.  Outside the node range the boundary value is
/// held constant.
#[derive(Debug, Clone)]
pub struct MonotoneCubicSpline {
    xs: Vec<Real>,
    ys: Vec<Real>,
    /// Adjusted tangent at each knot.
    ts: Vec<Real>,
}

impl MonotoneCubicSpline {
    /// Build a monotone cubic spline through the given data.
    pub fn new(xs: &[Real], ys: &[Real]) -> Result<Self> {
        check_nodes(xs, ys, 2)?;
        let n = xs.len();
        let xs = xs.to_vec();
        let ys = ys.to_vec();

        // Secant slopes δ_i
        let mut delta = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            delta.push((ys[i + 1] - ys[i]) / (xs[i + 1] - xs[i]));
        }

        // Initial tangents: one-sided at the boundary, averaged inside
        let mut ts = vec![0.0; n];
        ts[0] = delta[0];
        ts[n - 1] = delta[n - 2];
        for i in 1..n - 1 {
            ts[i] = 0.5 * (delta[i - 1] + delta[i]);
        }

        // Fritsch-Carlson corrections: stay inside the monotone region
        // α² + β² ≤ 9 on every interval
        for i in 0..n - 1 {
            if delta[i].abs() < 1e-30 {
                ts[i] = 0.0;
                ts[i + 1] = 0.0;
            } else {
                let alpha = ts[i] / delta[i];
                let beta = ts[i + 1] / delta[i];
                let r2 = alpha * alpha + beta * beta;
                if r2 > 9.0 {
                    let tau = 3.0 / r2.sqrt();
                    ts[i] = tau * alpha * delta[i];
                    ts[i + 1] = tau * beta * delta[i];
                }
            }
        }

        Ok(Self { xs, ys, ts })
    }
}

impl Interpolation1D for MonotoneCubicSpline {
    fn x_min(&self) -> Real {
        self.xs[0]
    }

    fn x_max(&self) -> Real {
        *self.xs.last().expect("validated non-empty")
    }

    fn operator(&self, x: Real) -> Real {
        let n = self.xs.len();
        if x <= self.xs[0] {
            return self.ys[0];
        }
        if x >= self.xs[n - 1] {
            return self.ys[n - 1];
        }

        let lo = locate(&self.xs, x);
        let hi = lo + 1;
        let h = self.xs[hi] - self.xs[lo];
        let t = (x - self.xs[lo]) / h;
        // Hermite basis
        let h00 = (1.0 + 2.0 * t) * (1.0 - t) * (1.0 - t);
        let h10 = t * (1.0 - t) * (1.0 - t);
        let h01 = t * t * (3.0 - 2.0 * t);
        let h11 = t * t * (t - 1.0);

        h00 * self.ys[lo] + h10 * h * self.ts[lo] + h01 * self.ys[hi] + h11 * h * self.ts[hi]
    }
}
