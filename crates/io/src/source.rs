//! Where observation series come from.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::IoError;
use crate::power::parse_power_response;
use crate::query::SeriesQuery;
use crate::series::ObservationSeries;

/// Anything that can produce an [`ObservationSeries`] for a query.
///
/// Implemented by [`PowerClient`](crate::PowerClient) for live requests and
/// by [`FileSource`] for saved responses.
pub trait SeriesSource {
    /// Loads the series described by `query`.
    ///
    /// # Errors
    ///
    /// Implementations return [`IoError::DataUnavailable`] when the source
    /// holds no usable data for the query, and other [`IoError`] variants
    /// for transport or file failures.
    fn load(&self, query: &SeriesQuery) -> Result<ObservationSeries, IoError>;
}

impl<S: SeriesSource + ?Sized> SeriesSource for &S {
    fn load(&self, query: &SeriesQuery) -> Result<ObservationSeries, IoError> {
        (**self).load(query)
    }
}

/// Reads a previously saved POWER JSON response from disk.
///
/// Coordinates in the query are not checked against the file; only the
/// parameter and the history window are applied.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Creates a source reading `path` on every load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the saved response.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeriesSource for FileSource {
    fn load(&self, query: &SeriesQuery) -> Result<ObservationSeries, IoError> {
        info!(path = %self.path.display(), parameter = query.parameter(), "reading saved series");
        let body = std::fs::read_to_string(&self.path).map_err(|e| IoError::file(&self.path, e))?;
        parse_power_response(&body, query.parameter())?.restrict_to(&query.window())
    }
}
