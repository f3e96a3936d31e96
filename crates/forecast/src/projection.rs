//! Projecting a fitted model to the requested date.

use sirocco_arima::ArimaFit;
use sirocco_calendar::ObsDate;

use crate::error::ForecastError;

/// Number of days from the last observation to `target`.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidForecastDate`] unless `target` is
/// strictly after `last_observed`.
pub fn horizon_days(last_observed: ObsDate, target: ObsDate) -> Result<usize, ForecastError> {
    let days = last_observed.days_until(target);
    if days <= 0 {
        return Err(ForecastError::InvalidForecastDate {
            reason: format!("{target} is not after the last observation {last_observed}"),
        });
    }
    Ok(days as usize)
}

/// Forecasts `horizon` steps ahead and returns only the final step.
///
/// # Errors
///
/// Returns [`ForecastError::ProjectionFailed`] if that value is not finite.
pub fn project(fit: &ArimaFit, horizon: usize) -> Result<f64, ForecastError> {
    fit.forecast(horizon)
        .last()
        .copied()
        .filter(|v| v.is_finite())
        .ok_or(ForecastError::ProjectionFailed { horizon })
}
