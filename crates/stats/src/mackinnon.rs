//! MacKinnon response-surface approximations for Dickey-Fuller tests.
//!
//! Coefficients cover the single-series, constant-only regression
//! (MacKinnon 1994 for p-values, MacKinnon 2010 for critical values).

use statrs::distribution::{ContinuousCDF, Normal};

/// Above this statistic the p-value is 1.
const TAU_MAX: f64 = 2.74;
/// Below this statistic the p-value is 0.
const TAU_MIN: f64 = -18.83;
/// Switch point between the small-p and large-p polynomials.
const TAU_STAR: f64 = -1.61;
/// Polynomial in tau (ascending powers), used for tau <= TAU_STAR.
const SMALL_P: [f64; 3] = [2.1659, 1.4412, 0.038269];
/// Polynomial in tau (ascending powers), used for tau > TAU_STAR.
const LARGE_P: [f64; 4] = [1.7339, 0.93202, -0.12745, -0.010368];

/// Critical-value surfaces in 1/nobs (ascending powers) at 1%, 5%, 10%.
const CRIT_1: [f64; 4] = [-3.43035, -6.5393, -16.786, -79.433];
const CRIT_5: [f64; 4] = [-2.86154, -2.8903, -4.234, -40.040];
const CRIT_10: [f64; 4] = [-2.56677, -1.5384, -2.809, 0.0];

/// Dickey-Fuller critical values at the conventional significance levels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CriticalValues {
    /// 1% critical value.
    pub one_percent: f64,
    /// 5% critical value.
    pub five_percent: f64,
    /// 10% critical value.
    pub ten_percent: f64,
}

fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Approximate p-value of a constant-only Dickey-Fuller tau statistic.
///
/// Returns 1.0 for statistics above the tabulated range and 0.0 below it.
/// A NaN statistic yields NaN.
pub fn mackinnon_p_value(tau: f64) -> f64 {
    if tau.is_nan() {
        return f64::NAN;
    }
    if tau > TAU_MAX {
        return 1.0;
    }
    if tau < TAU_MIN {
        return 0.0;
    }
    let z = if tau <= TAU_STAR {
        polyval(&SMALL_P, tau)
    } else {
        polyval(&LARGE_P, tau)
    };
    let std_normal = Normal::new(0.0, 1.0).expect("standard normal parameters are valid");
    std_normal.cdf(z)
}

/// Finite-sample critical values for a regression with `nobs` observations.
pub fn mackinnon_critical_values(nobs: usize) -> CriticalValues {
    let inv = 1.0 / nobs.max(1) as f64;
    CriticalValues {
        one_percent: polyval(&CRIT_1, inv),
        five_percent: polyval(&CRIT_5, inv),
        ten_percent: polyval(&CRIT_10, inv),
    }
}
