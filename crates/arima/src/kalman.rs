//! Kalman filter for ARMA likelihood evaluation.
//!
//! Univariate filter over the companion state space from
//! [`crate::state_space`], started from the unconditional state covariance.
//! The exact Gaussian log-likelihood comes out of the prediction error
//! decomposition with `sigma2` concentrated out:
//!
//! ```text
//! sigma2_hat = (1/n) Σ v_t² / F_t
//! loglik     = -n/2 (ln 2π + 1 + ln sigma2_hat) - 1/2 Σ ln F_t
//! ```
//!
//! The hot loop runs on stack-allocated [`SmallMat`]/[`SmallVec`] types,
//! monomorphised for each state dimension up to [`MAX_STATE_DIM`]. Once the
//! predicted covariance stops changing the covariance update is skipped.
//!
//! **Not part of the public API.**

use std::f64::consts::PI;

use crate::error::ArimaError;
use crate::small_linalg::{SmallMat, SmallVec};
use crate::state_space::StateSpace;

/// Largest state dimension `max(p, q + 1)` the filter is compiled for.
pub const MAX_STATE_DIM: usize = 8;

/// Covariance change below which the filter is treated as converged.
const STEADY_STATE_TOL: f64 = 1e-11;

/// Output of a full filter pass.
#[derive(Clone, Debug)]
pub(crate) struct KalmanOutput {
    /// Concentrated log-likelihood.
    pub(crate) log_likelihood: f64,
    /// Innovation variance estimate.
    pub(crate) sigma2: f64,
    /// One-step prediction errors `v_t`.
    pub(crate) residuals: Vec<f64>,
    /// Predicted state `a_{n+1|n}` after the last observation.
    pub(crate) next_state: Vec<f64>,
}

struct Pass {
    sum_log_f: f64,
    sum_v2_f: f64,
    residuals: Option<Vec<f64>>,
    next_state: Vec<f64>,
}

/// Concentrated log-likelihood only; used inside the optimizer.
pub(crate) fn kalman_concentrated_loglik(ss: &StateSpace, data: &[f64]) -> Result<f64, ArimaError> {
    let pass = dispatch(ss, data, false)?;
    Ok(concentrate(&pass, data.len())?.0)
}

/// Full pass keeping residuals and the final predicted state.
pub(crate) fn kalman_full(ss: &StateSpace, data: &[f64]) -> Result<KalmanOutput, ArimaError> {
    let pass = dispatch(ss, data, true)?;
    let (log_likelihood, sigma2) = concentrate(&pass, data.len())?;
    Ok(KalmanOutput {
        log_likelihood,
        sigma2,
        residuals: pass.residuals.unwrap_or_default(),
        next_state: pass.next_state,
    })
}

fn concentrate(pass: &Pass, n: usize) -> Result<(f64, f64), ArimaError> {
    let nf = n as f64;
    let sigma2 = pass.sum_v2_f / nf;
    if !(sigma2.is_finite() && sigma2 > 0.0) {
        return Err(ArimaError::LikelihoodFailed { step: n });
    }
    let loglik = -0.5 * nf * ((2.0 * PI).ln() + 1.0 + sigma2.ln()) - 0.5 * pass.sum_log_f;
    Ok((loglik, sigma2))
}

fn dispatch(ss: &StateSpace, data: &[f64], keep: bool) -> Result<Pass, ArimaError> {
    match ss.r() {
        1 => filter::<1>(ss, data, keep),
        2 => filter::<2>(ss, data, keep),
        3 => filter::<3>(ss, data, keep),
        4 => filter::<4>(ss, data, keep),
        5 => filter::<5>(ss, data, keep),
        6 => filter::<6>(ss, data, keep),
        7 => filter::<7>(ss, data, keep),
        8 => filter::<8>(ss, data, keep),
        r => Err(ArimaError::StateTooLarge {
            r,
            max: MAX_STATE_DIM,
        }),
    }
}

fn filter<const R: usize>(ss: &StateSpace, data: &[f64], keep: bool) -> Result<Pass, ArimaError> {
    let t = SmallMat::<R>::from_array(ss.t());
    let rrt = SmallMat::<R>::from_array(ss.rrt());
    let mut p = SmallMat::<R>::from_array(&ss.stationary_covariance()?);
    let mut a = SmallVec::<R>::zeros();

    let mut sum_log_f = 0.0;
    let mut sum_v2_f = 0.0;
    let mut residuals = keep.then(|| Vec::with_capacity(data.len()));
    let mut steady = false;

    for (step, &y) in data.iter().enumerate() {
        let f = p.get(0, 0);
        if !(f.is_finite() && f > 0.0) {
            return Err(ArimaError::LikelihoodFailed { step });
        }
        let v = y - a.data[0];
        sum_log_f += f.ln();
        sum_v2_f += v * v / f;
        if let Some(res) = residuals.as_mut() {
            res.push(v);
        }

        // measurement update then time update
        let m = p.column(0);
        let mut a_upd = a;
        a_upd.add_scaled(&m, v / f);
        a = t.mul_vec(&a_upd);

        if !steady {
            let mut p_upd = p;
            p_upd.sub_outer(&m, 1.0 / f);
            let p_next = t.mul(&p_upd).mul_transposed(&t).add(&rrt);
            steady = p_next.max_abs_diff(&p) < STEADY_STATE_TOL;
            p = p_next;
        }
    }

    Ok(Pass {
        sum_log_f,
        sum_v2_f,
        residuals,
        next_state: a.data.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn white_noise_matches_closed_form() {
        let data = [0.5, -1.0, 1.5, -0.25, 0.75];
        let ss = StateSpace::new(&[], &[]);
        let out = kalman_full(&ss, &data).unwrap();
        let n = data.len() as f64;
        let s2 = data.iter().map(|x| x * x).sum::<f64>() / n;
        assert_abs_diff_eq!(out.sigma2, s2, epsilon = 1e-12);
        let expected = -0.5 * n * ((2.0 * PI).ln() + 1.0 + s2.ln());
        assert_abs_diff_eq!(out.log_likelihood, expected, epsilon = 1e-10);
        assert_eq!(out.residuals, data.to_vec());
        assert_eq!(out.next_state, vec![0.0]);
    }

    #[test]
    fn ar1_exact_likelihood() {
        // y1 ~ N(0, s2/(1-phi^2)), y_t | y_{t-1} ~ N(phi y_{t-1}, s2)
        let phi = 0.6;
        let data = [1.0, 0.2, -0.7, 0.4, 1.1, -0.3];
        let ss = StateSpace::new(&[phi], &[]);
        let out = kalman_full(&ss, &data).unwrap();

        let f1 = 1.0 / (1.0 - phi * phi);
        let mut sum_v2_f = data[0] * data[0] / f1;
        for w in data.windows(2) {
            let v = w[1] - phi * w[0];
            sum_v2_f += v * v;
        }
        let n = data.len() as f64;
        let s2 = sum_v2_f / n;
        let expected = -0.5 * n * ((2.0 * PI).ln() + 1.0 + s2.ln()) - 0.5 * f1.ln();
        assert_abs_diff_eq!(out.sigma2, s2, epsilon = 1e-10);
        assert_abs_diff_eq!(out.log_likelihood, expected, epsilon = 1e-10);
        assert_abs_diff_eq!(out.next_state[0], phi * data[5], epsilon = 1e-12);
    }

    #[test]
    fn concentrated_matches_full() {
        let data: Vec<f64> = (0..60).map(|i| ((i * 37) % 11) as f64 - 5.0).collect();
        let ss = StateSpace::new(&[0.3, -0.2], &[0.4]);
        let ll = kalman_concentrated_loglik(&ss, &data).unwrap();
        let full = kalman_full(&ss, &data).unwrap();
        assert_abs_diff_eq!(ll, full.log_likelihood, epsilon = 1e-12);
        assert_eq!(full.residuals.len(), data.len());
        assert_eq!(full.next_state.len(), 2);
    }

    #[test]
    fn zero_series_fails() {
        let ss = StateSpace::new(&[0.5], &[]);
        assert!(matches!(
            kalman_concentrated_loglik(&ss, &[0.0; 10]),
            Err(ArimaError::LikelihoodFailed { .. })
        ));
    }

    #[test]
    fn oversized_state_rejected() {
        let ss = StateSpace::new(&[0.1; 9], &[]);
        assert_eq!(
            kalman_concentrated_loglik(&ss, &[1.0, 2.0]).unwrap_err(),
            ArimaError::StateTooLarge { r: 9, max: 8 }
        );
    }
}
