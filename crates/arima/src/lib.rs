//! # sirocco-arima
//!
//! ARIMA(p,d,q) model fitting and forecasting via state-space
//! maximum-likelihood (Kalman filter).
//!
//! ## Typestate Workflow
//!
//! ```mermaid
//! graph LR
//!     A["ArimaSpec::new(p, d, q)"] -->|".fit(&levels)?"| B["ArimaFit"]
//!     B --> C[".ar() / .ma() — coefficients"]
//!     B --> D[".sigma2() — innovation variance"]
//!     B --> E[".aic() — Akaike Information Criterion"]
//!     B --> F[".forecast(steps) — level forecasts"]
//! ```
//!
//! The model is fitted to the `d`-times differenced series. With `d = 0`
//! the sample mean is removed and reported as [`ArimaFit::mean()`].
//! Forecasts are always returned on the scale of the original levels.
//!
//! ```ignore
//! let fit = ArimaSpec::new(2, 1, 1).fit(&levels)?;
//! let next_week = fit.forecast(7);
//! ```
//!
//! ## Mathematical Glossary
//!
//! | Symbol | Accessor | Meaning |
//! |--------|----------|---------|
//! | phi | [`ArimaFit::ar()`] | AR coefficients: weights on past (differenced) values |
//! | theta | [`ArimaFit::ma()`] | MA coefficients: weights on past forecast errors |
//! | sigma2 | [`ArimaFit::sigma2()`] | Innovation (white-noise) variance |
//! | mu | [`ArimaFit::mean()`] | Constant term, `d = 0` only |
//! | AIC | [`ArimaFit::aic()`] | `2k - 2 loglik` (lower = better) |

mod difference;
mod error;
mod fit;
mod spec;

pub(crate) mod kalman;
pub(crate) mod optimizer;
pub(crate) mod params;
pub(crate) mod small_linalg;
pub(crate) mod state_space;

pub use error::ArimaError;
pub use fit::ArimaFit;
pub use kalman::MAX_STATE_DIM;
pub use spec::ArimaSpec;
