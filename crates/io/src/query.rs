//! Location/parameter/window triple identifying one series to load.

use sirocco_calendar::HistoryWindow;

use crate::error::IoError;
use crate::validate::{validate_coordinates, validate_parameter};

/// What to load: a point location, a provider parameter and the history
/// window to cover.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesQuery {
    latitude: f64,
    longitude: f64,
    parameter: String,
    window: HistoryWindow,
}

impl SeriesQuery {
    /// Builds a query after validating coordinates and parameter name.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Validation`] listing every violated check.
    pub fn new(
        latitude: f64,
        longitude: f64,
        parameter: impl Into<String>,
        window: HistoryWindow,
    ) -> Result<Self, IoError> {
        let parameter = parameter.into();
        let mut c = validate_coordinates(latitude, longitude);
        c.extend(validate_parameter(&parameter));
        c.finish()?;
        Ok(Self {
            latitude,
            longitude,
            parameter,
            window,
        })
    }

    /// Latitude in decimal degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Provider parameter identifier, e.g. `RH2M`.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// History window to cover.
    pub fn window(&self) -> HistoryWindow {
        self.window
    }
}
