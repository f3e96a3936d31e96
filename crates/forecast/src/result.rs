//! Forecast outcome.

use crate::order::ModelOrder;
use crate::search::CandidateReport;

/// Point forecast with the model that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub(crate) value: f64,
    pub(crate) order: ModelOrder,
    pub(crate) aic: f64,
    pub(crate) horizon: usize,
    pub(crate) candidates: Vec<CandidateReport>,
}

impl ForecastResult {
    /// Predicted value at the requested date.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Order of the selected model.
    pub fn order(&self) -> ModelOrder {
        self.order
    }

    /// AIC of the selected model.
    pub fn aic(&self) -> f64 {
        self.aic
    }

    /// Days between the last observation and the requested date.
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Every candidate attempted, in search order.
    pub fn candidates(&self) -> &[CandidateReport] {
        &self.candidates
    }
}
