//! Error types for the sirocco-arima crate.

use sirocco_stats::StatsError;

/// Error type for all fallible operations in the sirocco-arima crate.
///
/// Covers input validation, numerical breakdowns in the Kalman filter and
/// optimizer failures during ARIMA fitting.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArimaError {
    /// Returned when the input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when the input data has fewer observations than required.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the input data contains non-finite values (NaN or infinity).
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the (differenced) series has zero variance.
    #[error("input data is constant (zero variance)")]
    ConstantData,

    /// Returned when the stationary state covariance cannot be solved for.
    #[error("model is non-stationary: {reason}")]
    NonStationary {
        /// What went wrong.
        reason: String,
    },

    /// Returned when the Kalman filter produces a non-positive or
    /// non-finite prediction variance.
    #[error("likelihood evaluation failed at step {step}")]
    LikelihoodFailed {
        /// Zero-based observation index at which the filter broke down.
        step: usize,
    },

    /// Returned when the state dimension `max(p, q + 1)` exceeds the
    /// supported maximum.
    #[error("state dimension {r} exceeds the supported maximum of {max}")]
    StateTooLarge {
        /// Requested state dimension.
        r: usize,
        /// Largest supported state dimension.
        max: usize,
    },

    /// Returned when the optimization algorithm fails to converge.
    #[error("optimisation failed to converge")]
    OptimizationFailed,
}

impl From<StatsError> for ArimaError {
    fn from(e: StatsError) -> Self {
        Self::NonStationary {
            reason: e.to_string(),
        }
    }
}
