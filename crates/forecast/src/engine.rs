//! The forecasting pipeline: diagnose, search, project.

use sirocco_calendar::ObsDate;
use sirocco_io::ObservationSeries;
use tracing::info;

use crate::config::EngineConfig;
use crate::error::ForecastError;
use crate::projection::{horizon_days, project};
use crate::result::ForecastResult;
use crate::search::{MaximumLikelihood, ModelFitter, search_orders};
use crate::stationarity::diagnose_differencing;

/// Minimum number of observations the engine will model.
pub const MIN_OBSERVATIONS: usize = 2;

/// Stateless forecaster; one instance can serve any number of requests.
#[derive(Debug, Clone)]
pub struct Engine<F = MaximumLikelihood> {
    config: EngineConfig,
    fitter: F,
}

impl Engine {
    /// Creates an engine fitting candidates by maximum likelihood.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidConfig`] if `config` fails validation.
    pub fn new(config: EngineConfig) -> Result<Self, ForecastError> {
        Self::with_fitter(config, MaximumLikelihood)
    }
}

impl<F: ModelFitter> Engine<F> {
    /// Creates an engine with a custom candidate fitter.
    ///
    /// # Errors
    ///
    /// Returns [`ForecastError::InvalidConfig`] if `config` fails validation.
    pub fn with_fitter(config: EngineConfig, fitter: F) -> Result<Self, ForecastError> {
        config.validate()?;
        Ok(Self { config, fitter })
    }

    /// Engine settings.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Candidate fitter.
    pub fn fitter(&self) -> &F {
        &self.fitter
    }

    /// Forecasts `series` at `target`.
    ///
    /// The series length and the horizon are checked before any model is
    /// fitted.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`ForecastError::DataUnavailable`] | fewer than [`MIN_OBSERVATIONS`] values |
    /// | [`ForecastError::InvalidForecastDate`] | `target` not after the last observation |
    /// | [`ForecastError::ModelSelectionFailure`] | every candidate failed |
    /// | [`ForecastError::ProjectionFailed`] | selected model forecast is not finite |
    pub fn forecast(
        &self,
        series: &ObservationSeries,
        target: ObsDate,
    ) -> Result<ForecastResult, ForecastError> {
        if series.len() < MIN_OBSERVATIONS {
            return Err(ForecastError::DataUnavailable {
                reason: format!(
                    "{} observation(s) for '{}', need at least {MIN_OBSERVATIONS}",
                    series.len(),
                    series.parameter()
                ),
            });
        }
        let horizon = horizon_days(series.last_date(), target)?;

        let values = series.values();
        let diagnosis = diagnose_differencing(values, self.config.significance_threshold());
        let outcome = search_orders(
            &self.fitter,
            values,
            diagnosis.d(),
            self.config.p_max(),
            self.config.q_max(),
        )?;
        let order = outcome.best_order();
        let (best, candidates) = outcome.into_parts();
        let value = project(&best, horizon)?;

        info!(
            parameter = series.parameter(),
            %order,
            aic = best.aic(),
            horizon,
            value,
            "forecast complete"
        );
        Ok(ForecastResult {
            value,
            order,
            aic: best.aic(),
            horizon,
            candidates,
        })
    }
}
