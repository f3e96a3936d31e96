//! Request/response boundary for an outer transport layer.
//!
//! The HTTP layer deserialises a [`ForecastRequest`], calls
//! [`handle_request`] and serialises the [`ForecastResponse`] (or maps the
//! error, see [`ForecastError::is_caller_error`]).

use serde::{Deserialize, Serialize};
use sirocco_calendar::{HistoryWindow, ObsDate};
use sirocco_io::{SeriesQuery, SeriesSource};
use tracing::info;

use crate::engine::Engine;
use crate::error::ForecastError;
use crate::order::ModelOrder;
use crate::result::ForecastResult;
use crate::search::ModelFitter;

/// Inbound forecast request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRequest {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Provider parameter identifier, e.g. `RH2M`.
    pub parameter: String,
    /// Target date, `YYYYMMDD` or `YYYY-MM-DD`.
    pub forecast_date: String,
}

/// Outbound forecast response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    /// Point forecast at the requested date.
    pub predicted_value: f64,
    /// Selected `[p, d, q]`.
    pub arima_order: ModelOrder,
    /// AIC of the selected model.
    pub aic: f64,
}

impl From<&ForecastResult> for ForecastResponse {
    fn from(r: &ForecastResult) -> Self {
        Self {
            predicted_value: r.value(),
            arima_order: r.order(),
            aic: r.aic(),
        }
    }
}

/// Parses a requested date and checks it lies after the history window.
///
/// # Errors
///
/// Returns [`ForecastError::InvalidForecastDate`] if the string does not
/// parse or the date is not strictly after `history.end()`.
pub fn parse_forecast_date(raw: &str, history: &HistoryWindow) -> Result<ObsDate, ForecastError> {
    let date = ObsDate::parse(raw).map_err(|e| ForecastError::InvalidForecastDate {
        reason: e.to_string(),
    })?;
    if date <= history.end() {
        return Err(ForecastError::InvalidForecastDate {
            reason: format!("{date} is not after the history end {}", history.end()),
        });
    }
    Ok(date)
}

/// Serves one forecast request end to end: validate the date, load the
/// series for the configured history window, run the engine.
///
/// # Errors
///
/// [`ForecastError::InvalidForecastDate`] is returned before anything is
/// loaded. Loader failures of any kind become
/// [`ForecastError::DataUnavailable`]. Engine errors pass through.
pub fn handle_request<S, F>(
    engine: &Engine<F>,
    source: &S,
    request: &ForecastRequest,
) -> Result<ForecastResponse, ForecastError>
where
    S: SeriesSource + ?Sized,
    F: ModelFitter,
{
    let history = engine.config().history();
    let target = parse_forecast_date(&request.forecast_date, &history)?;
    let query = SeriesQuery::new(
        request.latitude,
        request.longitude,
        request.parameter.as_str(),
        history,
    )?;
    let series = source.load(&query)?;
    info!(
        parameter = series.parameter(),
        n = series.len(),
        last = %series.last_date(),
        %target,
        "series loaded"
    );
    let result = engine.forecast(&series, target)?;
    Ok(ForecastResponse::from(&result))
}
