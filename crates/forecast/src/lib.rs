//! # sirocco-forecast
//!
//! Point forecasts of a daily series at a future date: a unit-root test
//! fixes the differencing order, every ARIMA order in a small grid is
//! fitted, the lowest-AIC model is projected to the target date.
//!
//! ```mermaid
//! graph LR
//!     S["ObservationSeries"] --> A["diagnose_differencing (ADF)"]
//!     A -->|"d ∈ {0, 1}"| B["search_orders (p, q grid)"]
//!     B -->|"min AIC"| C["project(horizon)"]
//!     C --> R["ForecastResult"]
//! ```
//!
//! | Module | Purpose |
//! |--------|---------|
//! | `config` | [`EngineConfig`]: history window, order grid, ADF level |
//! | `stationarity` | [`diagnose_differencing`] |
//! | `search` | [`search_orders`], [`ModelFitter`], [`CandidateReport`] |
//! | `projection` | [`horizon_days`], [`project`] |
//! | `engine` | [`Engine`] |
//! | `request` | [`handle_request`] and the serde request/response types |

mod config;
mod engine;
mod error;
mod order;
mod projection;
mod request;
mod result;
mod search;
mod stationarity;

pub use config::{DEFAULT_P_MAX, DEFAULT_Q_MAX, DEFAULT_SIGNIFICANCE, EngineConfig};
pub use engine::{Engine, MIN_OBSERVATIONS};
pub use error::ForecastError;
pub use order::ModelOrder;
pub use projection::{horizon_days, project};
pub use request::{ForecastRequest, ForecastResponse, handle_request, parse_forecast_date};
pub use result::ForecastResult;
pub use search::{
    CandidateFailure, CandidateReport, MaximumLikelihood, ModelFitter, SearchOutcome,
    search_orders,
};
pub use stationarity::{StationarityDiagnosis, diagnose_differencing};
