//! Engine configuration.

use sirocco_arima::MAX_STATE_DIM;
use sirocco_calendar::HistoryWindow;

use crate::error::ForecastError;

/// Default largest AR order searched.
pub const DEFAULT_P_MAX: usize = 2;
/// Default largest MA order searched.
pub const DEFAULT_Q_MAX: usize = 2;
/// Default ADF significance level.
pub const DEFAULT_SIGNIFICANCE: f64 = 0.05;

/// Settings shared by every forecast an [`Engine`](crate::Engine) serves.
///
/// Use the builder methods (`with_*`) to override defaults, then
/// [`validate`](Self::validate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    history: HistoryWindow,
    p_max: usize,
    q_max: usize,
    significance_threshold: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history: HistoryWindow::default(),
            p_max: DEFAULT_P_MAX,
            q_max: DEFAULT_Q_MAX,
            significance_threshold: DEFAULT_SIGNIFICANCE,
        }
    }
}

impl EngineConfig {
    /// Set the history window series are loaded for.
    pub fn with_history(mut self, history: HistoryWindow) -> Self {
        self.history = history;
        self
    }

    /// Set the largest AR order searched.
    pub fn with_p_max(mut self, p_max: usize) -> Self {
        self.p_max = p_max;
        self
    }

    /// Set the largest MA order searched.
    pub fn with_q_max(mut self, q_max: usize) -> Self {
        self.q_max = q_max;
        self
    }

    /// Set the ADF significance level.
    pub fn with_significance_threshold(mut self, alpha: f64) -> Self {
        self.significance_threshold = alpha;
        self
    }

    /// History window.
    pub fn history(&self) -> HistoryWindow {
        self.history
    }

    /// Largest AR order searched.
    pub fn p_max(&self) -> usize {
        self.p_max
    }

    /// Largest MA order searched.
    pub fn q_max(&self) -> usize {
        self.q_max
    }

    /// ADF significance level.
    pub fn significance_threshold(&self) -> f64 {
        self.significance_threshold
    }

    /// Number of candidate orders, `(p_max + 1) * (q_max + 1)`.
    pub fn n_candidates(&self) -> usize {
        (self.p_max + 1) * (self.q_max + 1)
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidConfig`] if the largest candidate's
    /// state dimension `max(p_max, q_max + 1)` exceeds what the filter
    /// supports, or the significance level is outside (0, 1).
    pub fn validate(&self) -> Result<(), ForecastError> {
        let r = self.p_max.max(self.q_max + 1);
        if r > MAX_STATE_DIM {
            return Err(ForecastError::InvalidConfig {
                reason: format!(
                    "p_max={} q_max={} needs state dimension {r}, at most {MAX_STATE_DIM} supported",
                    self.p_max, self.q_max
                ),
            });
        }
        let alpha = self.significance_threshold;
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ForecastError::InvalidConfig {
                reason: format!("significance_threshold must be in (0, 1), got {alpha}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = EngineConfig::default();
        assert_eq!((c.p_max(), c.q_max()), (2, 2));
        assert_eq!(c.n_candidates(), 9);
        assert_eq!(c.significance_threshold(), 0.05);
        assert_eq!(c.history(), HistoryWindow::default());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn rejects_oversized_grid() {
        assert!(EngineConfig::default().with_p_max(9).validate().is_err());
        assert!(EngineConfig::default().with_q_max(8).validate().is_err());
        assert!(EngineConfig::default().with_q_max(7).validate().is_ok());
    }

    #[test]
    fn rejects_bad_threshold() {
        for alpha in [0.0, 1.0, -0.1, f64::NAN] {
            let err = EngineConfig::default()
                .with_significance_threshold(alpha)
                .validate()
                .unwrap_err();
            assert!(matches!(err, ForecastError::InvalidConfig { .. }));
        }
    }
}
