//! Calendar date newtype.

use std::fmt;

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::error::CalendarError;

/// A Gregorian calendar date at daily resolution.
///
/// Thin wrapper over [`chrono::NaiveDate`] that knows the compact
/// `YYYYMMDD` form used by daily observation providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObsDate(NaiveDate);

impl ObsDate {
    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the triple is not a real
    /// Gregorian date (e.g. Feb 29 in a common year).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(CalendarError::OutOfRange { year, month, day })
    }

    /// Parses a compact `YYYYMMDD` date.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDate`] for anything that is not exactly
    /// eight ASCII digits forming a valid date.
    pub fn parse_compact(s: &str) -> Result<Self, CalendarError> {
        let invalid = || CalendarError::InvalidDate {
            input: s.to_string(),
        };
        if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: i32 = s[0..4].parse().map_err(|_| invalid())?;
        let month: u32 = s[4..6].parse().map_err(|_| invalid())?;
        let day: u32 = s[6..8].parse().map_err(|_| invalid())?;
        Self::new(year, month, day).map_err(|_| invalid())
    }

    /// Parses either `YYYYMMDD` or ISO `YYYY-MM-DD`.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str) -> Result<Self, CalendarError> {
        let trimmed = s.trim();
        if trimmed.contains('-') {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .map(Self)
                .map_err(|_| CalendarError::InvalidDate {
                    input: s.to_string(),
                })
        } else {
            Self::parse_compact(trimmed).map_err(|_| CalendarError::InvalidDate {
                input: s.to_string(),
            })
        }
    }

    /// Formats the date as `YYYYMMDD`.
    pub fn to_compact(self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Signed number of calendar days from `self` to `other`.
    ///
    /// Positive when `other` is later.
    pub fn days_until(self, other: ObsDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the date `days` calendar days later, or `None` on overflow.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        self.0.checked_add_signed(TimeDelta::days(days)).map(Self)
    }

    /// Returns the following calendar day.
    ///
    /// # Panics
    ///
    /// Panics only at the end of chrono's representable range.
    pub fn next(self) -> Self {
        Self(self.0.succ_opt().expect("date within chrono range"))
    }

    /// Returns the underlying [`NaiveDate`].
    pub fn as_naive(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for ObsDate {
    fn from(d: NaiveDate) -> Self {
        Self(d)
    }
}

impl fmt::Display for ObsDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_valid() {
        let d = ObsDate::new(2000, 2, 29).unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2000, 2, 29));
    }

    #[test]
    fn new_rejects_common_year_leap_day() {
        assert_eq!(
            ObsDate::new(2023, 2, 29).unwrap_err(),
            CalendarError::OutOfRange {
                year: 2023,
                month: 2,
                day: 29
            }
        );
    }

    #[test]
    fn parse_compact_valid() {
        let d = ObsDate::parse_compact("20250501").unwrap();
        assert_eq!(d, ObsDate::new(2025, 5, 1).unwrap());
    }

    #[test]
    fn parse_compact_rejects_wrong_length() {
        assert!(matches!(
            ObsDate::parse_compact("2025051"),
            Err(CalendarError::InvalidDate { .. })
        ));
        assert!(ObsDate::parse_compact("+2025050").is_err());
    }

    #[test]
    fn parse_compact_rejects_bad_day() {
        assert!(ObsDate::parse_compact("20250230").is_err());
    }

    #[test]
    fn parse_accepts_both_forms() {
        let a = ObsDate::parse("20250501").unwrap();
        let b = ObsDate::parse("2025-05-01").unwrap();
        let c = ObsDate::parse("  2025-05-01 ").unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }

    #[test]
    fn parse_error_keeps_original_input() {
        let err = ObsDate::parse("May 1st").unwrap_err();
        assert_eq!(
            err,
            CalendarError::InvalidDate {
                input: "May 1st".to_string()
            }
        );
    }

    #[test]
    fn compact_round_trip() {
        let d = ObsDate::new(2004, 12, 31).unwrap();
        assert_eq!(d.to_compact(), "20041231");
        assert_eq!(ObsDate::parse_compact(&d.to_compact()).unwrap(), d);
    }

    #[test]
    fn days_until_signed() {
        let a = ObsDate::new(2025, 1, 1).unwrap();
        let b = ObsDate::new(2025, 5, 1).unwrap();
        assert_eq!(a.days_until(b), 120);
        assert_eq!(b.days_until(a), -120);
        assert_eq!(a.days_until(a), 0);
    }

    #[test]
    fn days_until_crosses_leap_day() {
        let a = ObsDate::new(2024, 2, 28).unwrap();
        let b = ObsDate::new(2024, 3, 1).unwrap();
        assert_eq!(a.days_until(b), 2);
    }

    #[test]
    fn next_year_wrap() {
        let d = ObsDate::new(1999, 12, 31).unwrap().next();
        assert_eq!(d, ObsDate::new(2000, 1, 1).unwrap());
    }

    #[test]
    fn checked_add_days() {
        let d = ObsDate::new(2025, 1, 1).unwrap();
        assert_eq!(
            d.checked_add_days(120),
            Some(ObsDate::new(2025, 5, 1).unwrap())
        );
        assert_eq!(
            d.checked_add_days(-1),
            Some(ObsDate::new(2024, 12, 31).unwrap())
        );
    }

    #[test]
    fn display_is_iso() {
        let d = ObsDate::new(2025, 5, 1).unwrap();
        assert_eq!(d.to_string(), "2025-05-01");
    }

    #[test]
    fn ordering() {
        let a = ObsDate::new(1999, 12, 31).unwrap();
        let b = ObsDate::new(2000, 1, 1).unwrap();
        assert!(a < b);
    }
}
