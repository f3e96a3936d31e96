//! Nelder-Mead optimizer for ARIMA maximum-likelihood estimation.
//!
//! Wraps the `argmin` crate to minimize the negative concentrated
//! log-likelihood over unconstrained PACF parameters.
//!
//! **Not part of the public API.**

use argmin::core::{CostFunction, Executor};
use argmin::solver::neldermead::NelderMead;
use tracing::trace;

use crate::difference::difference;
use crate::error::ArimaError;
use crate::fit::ArimaFit;
use crate::kalman::{self, MAX_STATE_DIM};
use crate::params;
use crate::spec::ArimaSpec;
use crate::state_space::StateSpace;

const MAX_ITERS: u64 = 1000;
const SD_TOLERANCE: f64 = 1e-8;
const INITIAL_STEP: f64 = 0.5;

/// Fits an ARIMA(p,d,q) model to levels via exact MLE.
///
/// 1. Validate data
/// 2. Difference `d` times; for `d = 0` subtract the sample mean
/// 3. Optimize concentrated log-likelihood via Nelder-Mead
/// 4. Extract final parameters via full Kalman pass
pub(crate) fn fit_arima(spec: ArimaSpec, data: &[f64]) -> Result<ArimaFit, ArimaError> {
    let (p, d, q) = spec.order();

    if data.is_empty() {
        return Err(ArimaError::EmptyData);
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(ArimaError::NonFiniteData);
    }
    let min_len = d + p.max(q).max(1) + 1;
    if data.len() < min_len {
        return Err(ArimaError::InsufficientData {
            n: data.len(),
            min: min_len,
        });
    }

    let diffed = difference(data, d);
    let w = diffed.series;
    let min_val = w.iter().copied().fold(f64::INFINITY, f64::min);
    let max_val = w.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    // Differencing large levels leaves rounding noise of a few ulps.
    let scale = data.iter().fold(1.0_f64, |m, x| m.max(x.abs()));
    if max_val - min_val <= 8.0 * f64::EPSILON * scale {
        return Err(ArimaError::ConstantData);
    }
    let r = spec.state_dim();
    if r > MAX_STATE_DIM {
        return Err(ArimaError::StateTooLarge {
            r,
            max: MAX_STATE_DIM,
        });
    }

    let mean = (d == 0).then(|| sirocco_stats::mean(&w));
    let centered: Vec<f64> = match mean {
        Some(mu) => w.iter().map(|x| x - mu).collect(),
        None => w,
    };

    let (ar, ma) = if p + q == 0 {
        (Vec::new(), Vec::new())
    } else {
        optimize(p, q, &centered)?
    };

    let ss = StateSpace::new(&ar, &ma);
    let output = kalman::kalman_full(&ss, &centered)?;
    trace!(
        %spec,
        log_likelihood = output.log_likelihood,
        sigma2 = output.sigma2,
        "ARIMA fit complete"
    );

    Ok(ArimaFit::new(
        spec,
        ar,
        ma,
        mean,
        output,
        diffed.tails,
    ))
}

/// Runs Nelder-Mead from the origin and maps the optimum back to
/// `(ar, ma)` coefficients.
fn optimize(p: usize, q: usize, data: &[f64]) -> Result<(Vec<f64>, Vec<f64>), ArimaError> {
    let dim = p + q;
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
    simplex.push(vec![0.0; dim]);
    for i in 0..dim {
        let mut vertex = vec![0.0; dim];
        vertex[i] = INITIAL_STEP;
        simplex.push(vertex);
    }

    let cost = ArimaCost { data, p };
    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(SD_TOLERANCE)
        .map_err(|_| ArimaError::OptimizationFailed)?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(MAX_ITERS))
        .run()
        .map_err(|_| ArimaError::OptimizationFailed)?;

    let state = result.state();
    if !(state.best_cost.is_finite() && state.best_cost < f64::MAX) {
        return Err(ArimaError::OptimizationFailed);
    }
    let best = state
        .best_param
        .as_ref()
        .ok_or(ArimaError::OptimizationFailed)?;

    let (alpha, beta) = best.split_at(p);
    Ok((params::to_ar(alpha), params::to_ma(beta)))
}

/// Cost function for argmin: negative concentrated log-likelihood.
struct ArimaCost<'a> {
    data: &'a [f64],
    p: usize,
}

impl CostFunction for ArimaCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let (alpha, beta) = params.split_at(self.p);
        let ss = StateSpace::new(&params::to_ar(alpha), &params::to_ma(beta));

        match kalman::kalman_concentrated_loglik(&ss, self.data) {
            Ok(loglik) if loglik.is_finite() => Ok(-loglik),
            _ => Ok(f64::MAX),
        }
    }
}
