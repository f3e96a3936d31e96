//! Accumulated validation utilities.
//!
//! Provides [`ValidationCollector`] for gathering multiple validation errors
//! into a single [`IoError::Validation`], plus standalone helpers that check
//! the pieces of a series query.

use crate::error::IoError;

/// Accumulates validation errors and converts them into a single
/// [`IoError::Validation`].
///
/// Create a collector, push zero or more error messages, then call
/// [`finish`](Self::finish) to obtain `Ok(())` when everything is valid or a
/// single `Err` that summarises every violation.
pub(crate) struct ValidationCollector {
    errors: Vec<String>,
}

impl ValidationCollector {
    /// Create an empty collector.
    pub(crate) fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Record one validation error.
    pub(crate) fn push(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    /// Move every error from `other` into `self`.
    pub(crate) fn extend(&mut self, other: ValidationCollector) {
        self.errors.extend(other.errors);
    }

    /// Returns the number of recorded errors.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.errors.len()
    }

    /// Consume the collector and return `Ok(())` if no errors were recorded,
    /// or `Err(IoError::Validation { count, details })` otherwise.
    ///
    /// The `details` string joins all messages with `"; "`.
    pub(crate) fn finish(self) -> Result<(), IoError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(IoError::Validation {
                count: self.errors.len(),
                details: self.errors.join("; "),
            })
        }
    }
}

/// Check that latitude lies in [-90, 90] and longitude in [-180, 180].
pub(crate) fn validate_coordinates(latitude: f64, longitude: f64) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    if !(latitude.is_finite() && (-90.0..=90.0).contains(&latitude)) {
        c.push(format!("latitude {latitude} outside [-90, 90]"));
    }
    if !(longitude.is_finite() && (-180.0..=180.0).contains(&longitude)) {
        c.push(format!("longitude {longitude} outside [-180, 180]"));
    }
    c
}

/// Check that a parameter identifier is a non-empty ASCII word
/// (letters, digits, underscore), e.g. `RH2M` or `T2M_MAX`.
pub(crate) fn validate_parameter(parameter: &str) -> ValidationCollector {
    let mut c = ValidationCollector::new();
    if parameter.is_empty() {
        c.push("parameter must not be empty");
    } else if !parameter
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'_')
    {
        c.push(format!("parameter '{parameter}' contains invalid characters"));
    }
    c
}
