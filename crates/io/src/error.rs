//! Error types for sirocco-io.

use std::path::PathBuf;

/// Error type for all fallible operations in the sirocco-io crate.
///
/// Covers transport failures talking to the provider, malformed or empty
/// provider payloads, local file access and query validation.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps a local filesystem failure other than a missing file.
    #[error("i/o error on {}: {reason}", path.display())]
    File {
        /// Path being read or written.
        path: PathBuf,
        /// Description of the underlying failure.
        reason: String,
    },

    /// The provider could not be reached, timed out, or answered with a
    /// non-success status.
    #[error("transport error: {reason}")]
    Transport {
        /// Description of the transport failure.
        reason: String,
    },

    /// The provider answered but the payload holds no usable series for
    /// the requested parameter.
    #[error("no data for parameter '{parameter}': {reason}")]
    DataUnavailable {
        /// Requested parameter identifier.
        parameter: String,
        /// Why the payload was rejected.
        reason: String,
    },

    /// Wraps an error originating from the sirocco-calendar crate.
    #[error("calendar error: {reason}")]
    Calendar {
        /// Description of the underlying calendar failure.
        reason: String,
    },

    /// Returned when one or more validation checks fail.
    #[error("{count} validation error(s): {details}")]
    Validation {
        /// Number of accumulated validation failures.
        count: usize,
        /// Human-readable summary of the failures.
        details: String,
    },
}

impl From<reqwest::Error> for IoError {
    fn from(e: reqwest::Error) -> Self {
        IoError::Transport {
            reason: e.to_string(),
        }
    }
}

impl From<sirocco_calendar::CalendarError> for IoError {
    fn from(e: sirocco_calendar::CalendarError) -> Self {
        IoError::Calendar {
            reason: e.to_string(),
        }
    }
}

impl IoError {
    pub(crate) fn unavailable(parameter: &str, reason: impl Into<String>) -> Self {
        IoError::DataUnavailable {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn file(path: &std::path::Path, e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::NotFound {
            IoError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IoError::File {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_file_not_found() {
        let err = IoError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/missing.json");
    }

    #[test]
    fn display_data_unavailable() {
        let err = IoError::unavailable("RH2M", "empty series");
        assert_eq!(
            err.to_string(),
            "no data for parameter 'RH2M': empty series"
        );
    }

    #[test]
    fn display_transport() {
        let err = IoError::Transport {
            reason: "timed out".to_string(),
        };
        assert_eq!(err.to_string(), "transport error: timed out");
    }

    #[test]
    fn file_maps_not_found() {
        let e = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IoError::file(std::path::Path::new("a.json"), e);
        assert!(matches!(err, IoError::FileNotFound { .. }));

        let e = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no");
        let err = IoError::file(std::path::Path::new("a.json"), e);
        assert!(matches!(err, IoError::File { .. }));
    }

    #[test]
    fn from_calendar_error() {
        let cal_err = sirocco_calendar::CalendarError::InvalidDate {
            input: "x".to_string(),
        };
        let err: IoError = cal_err.into();
        assert!(matches!(err, IoError::Calendar { .. }));
    }

    #[test]
    fn error_is_send_sync_and_std_error() {
        fn assert_bounds<T: Send + Sync + std::error::Error>() {}
        assert_bounds::<IoError>();
    }
}
