//! Error types for sirocco-forecast.

use sirocco_io::IoError;

use crate::search::CandidateReport;

/// Error type for all fallible operations in the sirocco-forecast crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ForecastError {
    /// The loader produced no usable series, or too few observations.
    #[error("data unavailable: {reason}")]
    DataUnavailable {
        /// Why no series could be used.
        reason: String,
    },

    /// The requested date is malformed or not in the future of the data.
    #[error("invalid forecast date: {reason}")]
    InvalidForecastDate {
        /// What is wrong with the date.
        reason: String,
    },

    /// Every candidate order failed to fit.
    #[error("model selection failed: all {} candidate orders failed", failures.len())]
    ModelSelectionFailure {
        /// One report per attempted order, in search order.
        failures: Vec<CandidateReport>,
    },

    /// The selected model produced a non-finite forecast.
    #[error("projection failed: non-finite forecast at horizon {horizon}")]
    ProjectionFailed {
        /// Horizon in days.
        horizon: usize,
    },

    /// Engine configuration rejected by validation.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Which setting is invalid.
        reason: String,
    },
}

impl ForecastError {
    /// `true` when the request itself was at fault (the HTTP layer maps this
    /// to a 4xx); every other variant is a server-side failure.
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::InvalidForecastDate { .. })
    }
}

impl From<IoError> for ForecastError {
    fn from(e: IoError) -> Self {
        Self::DataUnavailable {
            reason: e.to_string(),
        }
    }
}
