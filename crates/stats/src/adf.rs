//! Augmented Dickey-Fuller unit-root test.
//!
//! Regression (constant only):
//!
//! ```text
//! dy[t] = c + gamma * y[t-1] + sum_{j=1..k} beta_j * dy[t-j] + e[t]
//! ```
//!
//! H0: `gamma = 0` (unit root). The test statistic is the t-value of
//! `gamma`; small (very negative) values reject the unit root.

use ndarray::{Array1, Array2, s};
use tracing::debug;

use crate::error::StatsError;
use crate::mackinnon::{CriticalValues, mackinnon_critical_values, mackinnon_p_value};
use crate::ols::ols;

/// Number of deterministic regressors (the constant).
const N_TREND: usize = 1;

/// How the number of lagged differences is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LagSelection {
    /// Minimise AIC over `0..=max_lag` on a common sample.
    #[default]
    Aic,
    /// Use exactly `max_lag` lagged differences.
    Fixed,
}

/// Configuration for [`adf_test`].
///
/// # Example
///
/// ```
/// use sirocco_stats::{AdfConfig, LagSelection};
///
/// let config = AdfConfig::new().with_max_lag(4).with_lag_selection(LagSelection::Fixed);
/// assert_eq!(config.max_lag(), Some(4));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AdfConfig {
    max_lag: Option<usize>,
    lag_selection: LagSelection,
}

impl AdfConfig {
    /// Default configuration: Schwert's `ceil(12 (n/100)^(1/4))` maximum lag, AIC selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the maximum lag.
    pub fn with_max_lag(mut self, max_lag: usize) -> Self {
        self.max_lag = Some(max_lag);
        self
    }

    /// Sets the lag-selection rule.
    pub fn with_lag_selection(mut self, lag_selection: LagSelection) -> Self {
        self.lag_selection = lag_selection;
        self
    }

    /// Returns the maximum lag override, if any.
    pub fn max_lag(&self) -> Option<usize> {
        self.max_lag
    }

    /// Returns the lag-selection rule.
    pub fn lag_selection(&self) -> LagSelection {
        self.lag_selection
    }
}

/// Outcome of an augmented Dickey-Fuller test.
#[derive(Clone, Copy, Debug)]
pub struct AdfResult {
    statistic: f64,
    p_value: f64,
    used_lag: usize,
    nobs: usize,
    critical_values: CriticalValues,
}

impl AdfResult {
    /// The tau statistic (t-value of the lagged level).
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// MacKinnon approximate p-value.
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Number of lagged differences in the final regression.
    pub fn used_lag(&self) -> usize {
        self.used_lag
    }

    /// Number of observations in the final regression.
    pub fn nobs(&self) -> usize {
        self.nobs
    }

    /// Critical values for this sample size.
    pub fn critical_values(&self) -> CriticalValues {
        self.critical_values
    }

    /// Returns `true` when the unit root is rejected at level `alpha`.
    pub fn is_stationary_at(&self, alpha: f64) -> bool {
        self.p_value <= alpha
    }
}

/// Default maximum lag, `ceil(12 * (n / 100)^(1/4))`.
fn schwert_max_lag(n: usize) -> usize {
    (12.0 * (n as f64 / 100.0).powf(0.25)).ceil() as usize
}

/// Builds the ADF response and design matrix for `lags` lagged differences
/// using the last `n_rows` usable rows.
///
/// Column order: `[y[t-1], dy[t-1], ..., dy[t-lags], 1]`.
fn design(data: &[f64], diff: &[f64], lags: usize, n_rows: usize) -> (Array1<f64>, Array2<f64>) {
    let first = diff.len() - n_rows;
    let mut y = Array1::zeros(n_rows);
    let mut x = Array2::zeros((n_rows, lags + 2));
    for (row, t) in (first..diff.len()).enumerate() {
        y[row] = diff[t];
        x[[row, 0]] = data[t];
        for j in 1..=lags {
            x[[row, j]] = diff[t - j];
        }
        x[[row, lags + 1]] = 1.0;
    }
    (y, x)
}

/// Runs the augmented Dickey-Fuller test with a constant.
///
/// With [`LagSelection::Aic`] every lag `0..=max_lag` is fitted on the same
/// trimmed sample and the lowest-AIC lag wins (ties keep the shorter lag);
/// the chosen regression is then re-run on the longest sample available
/// for that lag.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`StatsError::EmptyData`] | `data` is empty |
/// | [`StatsError::NonFiniteData`] | NaN or infinity present |
/// | [`StatsError::ConstantData`] | all values identical |
/// | [`StatsError::InsufficientData`] | too short for the requested lag |
/// | [`StatsError::DegenerateRegression`] | non-finite tau statistic |
pub fn adf_test(data: &[f64], config: &AdfConfig) -> Result<AdfResult, StatsError> {
    let n = data.len();
    if n == 0 {
        return Err(StatsError::EmptyData);
    }
    if data.iter().any(|x| !x.is_finite()) {
        return Err(StatsError::NonFiniteData);
    }
    let first = data[0];
    if data.iter().all(|&x| x == first) {
        return Err(StatsError::ConstantData);
    }

    // Longest lag that still leaves residual degrees of freedom.
    let cap = (n / 2).checked_sub(N_TREND + 1).ok_or(StatsError::InsufficientData {
        n,
        min: 2 * (N_TREND + 1),
    })?;
    let max_lag = match config.max_lag {
        Some(requested) if requested > cap => {
            return Err(StatsError::InsufficientData {
                n,
                min: 2 * (requested + N_TREND + 1),
            });
        }
        Some(requested) => requested,
        None => schwert_max_lag(n).min(cap),
    };

    let diff: Vec<f64> = data.windows(2).map(|w| w[1] - w[0]).collect();

    let used_lag = match config.lag_selection {
        LagSelection::Fixed => max_lag,
        LagSelection::Aic => {
            let n_rows = diff.len() - max_lag;
            let (y, x_full) = design(data, &diff, max_lag, n_rows);
            let mut best: Option<(f64, usize)> = None;
            for lag in 0..=max_lag {
                // Constant, level and the first `lag` differences.
                let mut x = Array2::zeros((n_rows, lag + 2));
                x.slice_mut(s![.., ..lag + 1])
                    .assign(&x_full.slice(s![.., ..lag + 1]));
                x.column_mut(lag + 1).fill(1.0);
                let aic = match ols(y.view(), x.view()) {
                    Ok(fit) => fit.aic(),
                    Err(StatsError::SingularMatrix) => continue,
                    Err(e) => return Err(e),
                };
                if !aic.is_finite() {
                    continue;
                }
                if best.is_none_or(|(b, _)| aic < b) {
                    best = Some((aic, lag));
                }
            }
            best.map(|(_, lag)| lag)
                .ok_or_else(|| StatsError::DegenerateRegression {
                    reason: "no lag order produced a finite AIC".to_string(),
                })?
        }
    };

    let n_rows = diff.len() - used_lag;
    let (y, x) = design(data, &diff, used_lag, n_rows);
    let fit = ols(y.view(), x.view())?;
    let statistic = fit.t_value(0);
    if !statistic.is_finite() {
        return Err(StatsError::DegenerateRegression {
            reason: format!("tau statistic is {statistic}"),
        });
    }

    let p_value = mackinnon_p_value(statistic);
    debug!(statistic, p_value, used_lag, nobs = n_rows, "ADF test complete");

    Ok(AdfResult {
        statistic,
        p_value,
        used_lag,
        nobs: n_rows,
        critical_values: mackinnon_critical_values(n_rows),
    })
}
