//! Exhaustive ARIMA order search with AIC selection.
//!
//! Every `(p, q)` in `0..=p_max × 0..=q_max` is fitted with the fixed `d`,
//! in ascending `p` then ascending `q`. A candidate replaces the current
//! best only with a strictly lower AIC, so ties keep the earlier (simpler)
//! order. Failures are recorded and skipped.

use sirocco_arima::{ArimaError, ArimaFit, ArimaSpec};
use tracing::{debug, warn};

use crate::error::ForecastError;
use crate::order::ModelOrder;

/// Fits one ARIMA specification to a series.
///
/// The engine is generic over this so the fitting strategy can be swapped
/// or instrumented.
pub trait ModelFitter {
    /// Fits `spec` to `data`.
    fn fit(&self, spec: ArimaSpec, data: &[f64]) -> Result<ArimaFit, ArimaError>;
}

/// Exact Gaussian maximum likelihood via [`ArimaSpec::fit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MaximumLikelihood;

impl ModelFitter for MaximumLikelihood {
    fn fit(&self, spec: ArimaSpec, data: &[f64]) -> Result<ArimaFit, ArimaError> {
        spec.fit(data)
    }
}

impl<F: ModelFitter + ?Sized> ModelFitter for &F {
    fn fit(&self, spec: ArimaSpec, data: &[f64]) -> Result<ArimaFit, ArimaError> {
        (**self).fit(spec, data)
    }
}

/// Why a candidate was discarded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CandidateFailure {
    /// The fit itself failed.
    #[error(transparent)]
    Fit(#[from] ArimaError),

    /// The fit succeeded but its AIC is NaN or infinite.
    #[error("non-finite AIC ({0})")]
    NonFiniteAic(f64),
}

/// Outcome of fitting one candidate order.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateReport {
    order: ModelOrder,
    outcome: Result<f64, CandidateFailure>,
}

impl CandidateReport {
    /// Order that was attempted.
    pub fn order(&self) -> ModelOrder {
        self.order
    }

    /// AIC on success, the reason on failure.
    pub fn outcome(&self) -> &Result<f64, CandidateFailure> {
        &self.outcome
    }

    /// AIC if the candidate fitted.
    pub fn aic(&self) -> Option<f64> {
        self.outcome.as_ref().ok().copied()
    }
}

/// Result of a successful search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    best: ArimaFit,
    reports: Vec<CandidateReport>,
}

impl SearchOutcome {
    /// The selected fit.
    pub fn best(&self) -> &ArimaFit {
        &self.best
    }

    /// Order of the selected fit.
    pub fn best_order(&self) -> ModelOrder {
        self.best.spec().into()
    }

    /// One report per attempted order, in search order.
    pub fn reports(&self) -> &[CandidateReport] {
        &self.reports
    }

    pub(crate) fn into_parts(self) -> (ArimaFit, Vec<CandidateReport>) {
        (self.best, self.reports)
    }
}

/// Fits every order in the grid and keeps the lowest-AIC fit.
///
/// # Errors
///
/// Returns [`ForecastError::ModelSelectionFailure`] when no candidate
/// produced a finite AIC.
pub fn search_orders<F: ModelFitter + ?Sized>(
    fitter: &F,
    data: &[f64],
    d: usize,
    p_max: usize,
    q_max: usize,
) -> Result<SearchOutcome, ForecastError> {
    let mut reports = Vec::with_capacity((p_max + 1) * (q_max + 1));
    let mut best: Option<ArimaFit> = None;

    for p in 0..=p_max {
        for q in 0..=q_max {
            let order = ModelOrder::new(p, d, q);
            let outcome = match fitter.fit(order.spec(), data) {
                Ok(fit) => {
                    let aic = fit.aic();
                    if aic.is_finite() {
                        debug!(%order, aic, "candidate fitted");
                        if best.as_ref().is_none_or(|b| aic < b.aic()) {
                            best = Some(fit);
                        }
                        Ok(aic)
                    } else {
                        Err(CandidateFailure::NonFiniteAic(aic))
                    }
                }
                Err(e) => Err(CandidateFailure::Fit(e)),
            };
            if let Err(reason) = &outcome {
                warn!(%order, %reason, "candidate skipped");
            }
            reports.push(CandidateReport { order, outcome });
        }
    }

    match best {
        Some(best) => Ok(SearchOutcome { best, reports }),
        None => Err(ForecastError::ModelSelectionFailure { failures: reports }),
    }
}
