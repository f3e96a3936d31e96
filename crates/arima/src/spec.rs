//! ARIMA model specification (unfitted).

use crate::error::ArimaError;
use crate::fit::ArimaFit;

/// An unfitted ARIMA(p,d,q) model specification.
///
/// Entry point of the typestate workflow. Create a spec with
/// [`ArimaSpec::new()`], then call [`ArimaSpec::fit()`] to obtain an
/// [`ArimaFit`].
///
/// ```mermaid
/// graph LR
///     A["ArimaSpec::new(p, d, q)"] -->|".fit(&data)?"| B["ArimaFit"]
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ArimaSpec {
    p: usize,
    d: usize,
    q: usize,
}

impl ArimaSpec {
    /// Creates a new ARIMA(p,d,q) specification.
    ///
    /// # Example
    ///
    /// ```
    /// use sirocco_arima::ArimaSpec;
    ///
    /// let spec = ArimaSpec::new(2, 1, 1);
    /// assert_eq!(spec.order(), (2, 1, 1));
    /// ```
    pub fn new(p: usize, d: usize, q: usize) -> Self {
        Self { p, d, q }
    }

    /// Returns the AR order (`p`).
    pub fn p(&self) -> usize {
        self.p
    }

    /// Returns the differencing order (`d`).
    pub fn d(&self) -> usize {
        self.d
    }

    /// Returns the MA order (`q`).
    pub fn q(&self) -> usize {
        self.q
    }

    /// Returns `(p, d, q)`.
    pub fn order(&self) -> (usize, usize, usize) {
        (self.p, self.d, self.q)
    }

    /// State dimension of the companion form, `max(p, q + 1)`.
    pub fn state_dim(&self) -> usize {
        self.p.max(self.q + 1)
    }

    /// Fits this specification to observed levels via exact
    /// maximum-likelihood (Kalman filter) on the `d`-times differenced
    /// series.
    ///
    /// With `d = 0` the sample mean is removed first and carried as a
    /// constant term; with `d >= 1` no constant is estimated.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ArimaError::EmptyData`] | `data` is empty |
    /// | [`ArimaError::NonFiniteData`] | any element is NaN or infinite |
    /// | [`ArimaError::InsufficientData`] | `data.len() < d + max(p, q, 1) + 1` |
    /// | [`ArimaError::ConstantData`] | the differenced series is constant |
    /// | [`ArimaError::StateTooLarge`] | `max(p, q + 1) > 8` |
    /// | [`ArimaError::NonStationary`] | initial state covariance has no solution |
    /// | [`ArimaError::LikelihoodFailed`] | filter breaks down at the optimum |
    /// | [`ArimaError::OptimizationFailed`] | optimizer fails to converge |
    pub fn fit(&self, data: &[f64]) -> Result<ArimaFit, ArimaError> {
        crate::optimizer::fit_arima(*self, data)
    }
}

impl std::fmt::Display for ArimaSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ARIMA({},{},{})", self.p, self.d, self.q)
    }
}
