//! Fitted ARIMA model results.

use ndarray::Array1;

use crate::difference::integrate;
use crate::kalman::KalmanOutput;
use crate::spec::ArimaSpec;
use crate::state_space::StateSpace;

/// A fitted ARIMA(p,d,q) model produced by [`ArimaSpec::fit()`].
///
/// Contains estimated AR (`phi`) and MA (`theta`) coefficients, innovation
/// variance (`sigma2`), residuals, log-likelihood and enough of the filter
/// state to forecast from the end of the sample.
///
/// ```mermaid
/// graph LR
///     B["ArimaFit"] --> C[".ar() / .ma()"]
///     B --> D[".sigma2()"]
///     B --> E[".aic() / .bic()"]
///     B --> F[".forecast(steps)"]
/// ```
#[derive(Clone, Debug)]
pub struct ArimaFit {
    spec: ArimaSpec,
    ar: Vec<f64>,
    ma: Vec<f64>,
    mean: Option<f64>,
    sigma2: f64,
    residuals: Vec<f64>,
    log_likelihood: f64,
    next_state: Vec<f64>,
    tails: Vec<f64>,
}

impl ArimaFit {
    pub(crate) fn new(
        spec: ArimaSpec,
        ar: Vec<f64>,
        ma: Vec<f64>,
        mean: Option<f64>,
        output: KalmanOutput,
        tails: Vec<f64>,
    ) -> Self {
        Self {
            spec,
            ar,
            ma,
            mean,
            sigma2: output.sigma2,
            residuals: output.residuals,
            log_likelihood: output.log_likelihood,
            next_state: output.next_state,
            tails,
        }
    }

    /// Returns the [`ArimaSpec`] that produced this fit.
    pub fn spec(&self) -> ArimaSpec {
        self.spec
    }

    /// Returns the `(p, d, q)` order of the fitted model.
    pub fn order(&self) -> (usize, usize, usize) {
        self.spec.order()
    }

    /// Returns the AR coefficients (`phi`).
    pub fn ar(&self) -> &[f64] {
        &self.ar
    }

    /// Returns the MA coefficients (`theta`).
    pub fn ma(&self) -> &[f64] {
        &self.ma
    }

    /// Returns the innovation variance (`sigma2`).
    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    /// Returns the one-step-ahead prediction errors on the differenced
    /// series.
    pub fn residuals(&self) -> &[f64] {
        &self.residuals
    }

    /// Returns the maximised log-likelihood.
    pub fn log_likelihood(&self) -> f64 {
        self.log_likelihood
    }

    /// Returns the constant term, present only for `d = 0`.
    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    /// Number of observations entering the likelihood (`n - d`).
    pub fn nobs(&self) -> usize {
        self.residuals.len()
    }

    /// Number of estimated parameters: AR and MA coefficients, the
    /// innovation variance, and the constant when one is estimated.
    pub fn n_params(&self) -> usize {
        self.ar.len() + self.ma.len() + 1 + usize::from(self.mean.is_some())
    }

    /// Akaike Information Criterion, `2k - 2 * log_likelihood`.
    ///
    /// Lower AIC indicates a better trade-off between fit and complexity.
    pub fn aic(&self) -> f64 {
        2.0 * self.n_params() as f64 - 2.0 * self.log_likelihood
    }

    /// Bayesian Information Criterion, `k ln(n) - 2 * log_likelihood`.
    pub fn bic(&self) -> f64 {
        self.n_params() as f64 * (self.nobs() as f64).ln() - 2.0 * self.log_likelihood
    }

    /// Point forecasts of the original series for horizons `1..=steps`.
    ///
    /// Iterates the predicted state through the transition matrix with no
    /// further innovations, adds back the constant (`d = 0`) and integrates
    /// `d` times from the last observed levels.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let fit = ArimaSpec::new(1, 1, 0).fit(&data)?;
    /// let path = fit.forecast(30);
    /// let day_30 = path[29];
    /// ```
    pub fn forecast(&self, steps: usize) -> Vec<f64> {
        if steps == 0 {
            return Vec::new();
        }
        let ss = StateSpace::new(&self.ar, &self.ma);
        let offset = self.mean.unwrap_or(0.0);
        let mut state = Array1::from(self.next_state.clone());
        let mut diffs = Vec::with_capacity(steps);
        for _ in 0..steps {
            diffs.push(state[0] + offset);
            state = ss.t().dot(&state);
        }
        integrate(&diffs, &self.tails)
    }
}
