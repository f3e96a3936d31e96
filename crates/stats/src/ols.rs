//! Ordinary least squares.

use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::error::StatsError;
use crate::linalg::invert;

/// Result of an ordinary least-squares regression `y = X b + e`.
#[derive(Clone, Debug)]
pub struct OlsFit {
    params: Array1<f64>,
    std_errors: Array1<f64>,
    ssr: f64,
    nobs: usize,
}

impl OlsFit {
    /// Estimated coefficients, one per design-matrix column.
    pub fn params(&self) -> &Array1<f64> {
        &self.params
    }

    /// Standard errors of the coefficients (`sqrt(s^2 (X'X)^-1_jj)`).
    pub fn std_errors(&self) -> &Array1<f64> {
        &self.std_errors
    }

    /// t-statistic of coefficient `j`.
    pub fn t_value(&self, j: usize) -> f64 {
        self.params[j] / self.std_errors[j]
    }

    /// Sum of squared residuals.
    pub fn ssr(&self) -> f64 {
        self.ssr
    }

    /// Number of observations (rows).
    pub fn nobs(&self) -> usize {
        self.nobs
    }

    /// Number of regressors (columns), constant included.
    pub fn n_params(&self) -> usize {
        self.params.len()
    }

    /// Gaussian log-likelihood at the least-squares estimate.
    pub fn log_likelihood(&self) -> f64 {
        let n = self.nobs as f64;
        -0.5 * n * ((2.0 * std::f64::consts::PI).ln() + (self.ssr / n).ln() + 1.0)
    }

    /// Akaike Information Criterion, `2k - 2 loglik`.
    pub fn aic(&self) -> f64 {
        2.0 * self.n_params() as f64 - 2.0 * self.log_likelihood()
    }
}

/// Fits `y` on the columns of `x` by least squares (normal equations).
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`StatsError::DimensionMismatch`] | `x.nrows() != y.len()` |
/// | [`StatsError::InsufficientData`] | no residual degrees of freedom |
/// | [`StatsError::SingularMatrix`] | collinear regressors |
pub fn ols(y: ArrayView1<f64>, x: ArrayView2<f64>) -> Result<OlsFit, StatsError> {
    let (n, k) = x.dim();
    if n != y.len() {
        return Err(StatsError::DimensionMismatch {
            rows: n,
            len: y.len(),
        });
    }
    if n <= k {
        return Err(StatsError::InsufficientData { n, min: k + 1 });
    }

    let xtx = x.t().dot(&x);
    let xtx_inv = invert(&xtx)?;
    let xty = x.t().dot(&y);
    let params = xtx_inv.dot(&xty);

    let fitted = x.dot(&params);
    let ssr: f64 = y
        .iter()
        .zip(fitted.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum();

    let s2 = ssr / (n - k) as f64;
    let std_errors = xtx_inv.diag().mapv(|v| (s2 * v).max(0.0).sqrt());

    Ok(OlsFit {
        params,
        std_errors,
        ssr,
        nobs: n,
    })
}
