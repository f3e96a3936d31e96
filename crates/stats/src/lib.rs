//! # sirocco-stats
//!
//! Statistical building blocks for the forecast engine: descriptive
//! statistics, dense linear solves, ordinary least squares and the
//! augmented Dickey-Fuller unit-root test.
//!
//! ## Pipeline
//!
//! ```mermaid
//! graph LR
//!     A["series"] -->|"adf_test(&data, &AdfConfig)"| B["AdfResult"]
//!     B --> C[".statistic()"]
//!     B --> D[".p_value() (MacKinnon 1994)"]
//!     B --> E[".critical_values() (MacKinnon 2010)"]
//!     F["y, X"] -->|"ols()"| G["OlsFit"]
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `descriptive` | arithmetic mean |
//! | `linalg` | Gaussian elimination with partial pivoting |
//! | `ols` | least-squares regression with standard errors and AIC |
//! | `adf` | augmented Dickey-Fuller test with AIC lag selection |
//! | `mackinnon` | response-surface p-values and critical values |
//! | `error` | Error types |

mod adf;
mod descriptive;
mod error;
mod linalg;
mod mackinnon;
mod ols;

pub use adf::{AdfConfig, AdfResult, LagSelection, adf_test};
pub use descriptive::mean;
pub use error::StatsError;
pub use linalg::{invert, solve_linear_system};
pub use mackinnon::{CriticalValues, mackinnon_critical_values, mackinnon_p_value};
pub use ols::{OlsFit, ols};
