//! ARMA state-space representation.
//!
//! Converts the ARMA(p,q) part of an ARIMA model into state-space form:
//!
//! ```text
//! x[t+1] = T * x[t] + R * e[t]     (state transition)
//! y[t]   = Z' * x[t]                (observation, Z = e1)
//! ```
//!
//! where `T` is the companion transition matrix, `R` the noise-input
//! vector and `e[t] ~ N(0, sigma2)`.
//!
//! **Not part of the public API.**

use ndarray::{Array1, Array2, Axis};
use sirocco_stats::solve_linear_system;

use crate::error::ArimaError;

/// State-space representation of an ARMA(p,q) model.
///
/// Holds the transition matrix `T`, noise input vector `R`, and
/// precomputed `R·Rᵀ` for the Kalman filter.
#[derive(Clone, Debug)]
pub(crate) struct StateSpace {
    r: usize,
    t: Array2<f64>,
    r_vec: Array1<f64>,
    rrt: Array2<f64>,
}

impl StateSpace {
    /// Builds a state-space representation from AR and MA coefficients.
    pub(crate) fn new(ar: &[f64], ma: &[f64]) -> Self {
        let p = ar.len();
        let q = ma.len();
        let r = p.max(q + 1);

        // companion form: ar down the first column, ones on the superdiagonal
        let mut t = Array2::zeros((r, r));
        for (i, &phi) in ar.iter().enumerate() {
            t[[i, 0]] = phi;
        }
        for i in 0..r - 1 {
            t[[i, i + 1]] = 1.0;
        }

        let mut r_vec = Array1::zeros(r);
        r_vec[0] = 1.0;
        for (j, &theta) in ma.iter().enumerate() {
            r_vec[j + 1] = theta;
        }

        let r_col = r_vec.view().insert_axis(Axis(1));
        let r_row = r_vec.view().insert_axis(Axis(0));
        let rrt = r_col.dot(&r_row);

        Self { r, t, r_vec, rrt }
    }

    /// State dimension `r = max(p, q+1)`.
    pub(crate) fn r(&self) -> usize {
        self.r
    }

    /// Transition matrix `T` (r×r) in companion form.
    pub(crate) fn t(&self) -> &Array2<f64> {
        &self.t
    }

    /// Noise input vector `R = [1, θ₁, …, θ_q, 0, …, 0]` (length r).
    #[cfg(test)]
    pub(crate) fn r_vec(&self) -> &Array1<f64> {
        &self.r_vec
    }

    /// Precomputed `R·Rᵀ` (r×r), the rank-1 outer product.
    pub(crate) fn rrt(&self) -> &Array2<f64> {
        &self.rrt
    }

    /// Unconditional state covariance (in units of `sigma2`), the solution
    /// of the discrete Lyapunov equation `P = T P Tᵀ + R Rᵀ`.
    ///
    /// Solved directly as `(I - T ⊗ T) vec(P) = vec(R Rᵀ)`.
    ///
    /// # Errors
    ///
    /// [`ArimaError::NonStationary`] when the system is singular or the
    /// solution has a non-positive or non-finite leading variance.
    pub(crate) fn stationary_covariance(&self) -> Result<Array2<f64>, ArimaError> {
        let r = self.r;
        let n = r * r;
        let mut a = Array2::<f64>::eye(n);
        for i in 0..r {
            for j in 0..r {
                for k in 0..r {
                    let tik = self.t[[i, k]];
                    if tik == 0.0 {
                        continue;
                    }
                    for l in 0..r {
                        a[[i * r + j, k * r + l]] -= tik * self.t[[j, l]];
                    }
                }
            }
        }
        let b = Array1::from_shape_fn(n, |idx| self.r_vec[idx / r] * self.r_vec[idx % r]);
        let vec_p = solve_linear_system(&a, &b)?;

        let mut p = Array2::zeros((r, r));
        for i in 0..r {
            for j in 0..r {
                // symmetrize against round-off
                p[[i, j]] = 0.5 * (vec_p[i * r + j] + vec_p[j * r + i]);
            }
        }
        let p00 = p[[0, 0]];
        if !(p00.is_finite() && p00 > 0.0) {
            return Err(ArimaError::NonStationary {
                reason: format!("leading state variance {p00}"),
            });
        }
        Ok(p)
    }
}
