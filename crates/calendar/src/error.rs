//! Error types for the sirocco-calendar crate.

/// Error type for all fallible operations in the sirocco-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a string cannot be parsed as `YYYYMMDD` or `YYYY-MM-DD`.
    #[error("invalid date '{input}' (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate {
        /// The text that failed to parse.
        input: String,
    },

    /// Returned when year, month and day do not form a real calendar date.
    #[error("no such calendar date: {year:04}-{month:02}-{day:02}")]
    OutOfRange {
        /// Year component.
        year: i32,
        /// Month component.
        month: u32,
        /// Day component.
        day: u32,
    },

    /// Returned when a history window does not end strictly after it starts.
    #[error("history window end {end} is not after start {start}")]
    InvalidWindow {
        /// Window start as `YYYYMMDD`.
        start: String,
        /// Window end as `YYYYMMDD`.
        end: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_date() {
        let err = CalendarError::InvalidDate {
            input: "2025/05/01".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid date '2025/05/01' (expected YYYYMMDD or YYYY-MM-DD)"
        );
    }

    #[test]
    fn error_out_of_range() {
        let err = CalendarError::OutOfRange {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(err.to_string(), "no such calendar date: 2023-02-29");
    }

    #[test]
    fn error_invalid_window() {
        let err = CalendarError::InvalidWindow {
            start: "20250101".to_string(),
            end: "20000101".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "history window end 20000101 is not after start 20250101"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error + Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
