//! Date-indexed observation series.

use sirocco_calendar::{HistoryWindow, ObsDate, date_sequence};

use crate::error::IoError;

/// A daily series for one parameter, strictly increasing by date.
///
/// Never empty. Gaps are allowed; the series is not reindexed onto a
/// regular calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSeries {
    parameter: String,
    dates: Vec<ObsDate>,
    values: Vec<f64>,
}

impl ObservationSeries {
    /// Builds a series from `(date, value)` entries in any order.
    ///
    /// Entries with a missing (`None`) or non-finite value are dropped, the
    /// rest are sorted by date and, where a date repeats, the first entry
    /// seen wins.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::DataUnavailable`] if nothing usable remains.
    pub fn from_entries<I>(parameter: impl Into<String>, entries: I) -> Result<Self, IoError>
    where
        I: IntoIterator<Item = (ObsDate, Option<f64>)>,
    {
        let parameter = parameter.into();
        let mut kept: Vec<(ObsDate, f64)> = entries
            .into_iter()
            .filter_map(|(date, value)| value.filter(|v| v.is_finite()).map(|v| (date, v)))
            .collect();
        if kept.is_empty() {
            return Err(IoError::unavailable(&parameter, "no usable observations"));
        }
        // stable sort keeps first occurrence ahead of later duplicates
        kept.sort_by_key(|(date, _)| *date);
        kept.dedup_by_key(|(date, _)| *date);

        let (dates, values) = kept.into_iter().unzip();
        Ok(Self {
            parameter,
            dates,
            values,
        })
    }

    /// Builds a gap-free series of consecutive days starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::DataUnavailable`] if `values` is empty or holds a
    /// non-finite value.
    pub fn from_daily(
        parameter: impl Into<String>,
        start: ObsDate,
        values: Vec<f64>,
    ) -> Result<Self, IoError> {
        let parameter = parameter.into();
        if values.is_empty() {
            return Err(IoError::unavailable(&parameter, "no usable observations"));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(IoError::unavailable(&parameter, "non-finite observation"));
        }
        Ok(Self {
            dates: date_sequence(start, values.len()),
            parameter,
            values,
        })
    }

    /// Keeps only observations inside `window`.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::DataUnavailable`] if none fall inside.
    pub fn restrict_to(self, window: &HistoryWindow) -> Result<Self, IoError> {
        let parameter = self.parameter;
        let entries = self
            .dates
            .into_iter()
            .zip(self.values)
            .filter(|(date, _)| window.contains(*date))
            .map(|(date, v)| (date, Some(v)));
        Self::from_entries(parameter, entries)
    }

    /// Parameter identifier the series was loaded for.
    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    /// Observation dates, strictly increasing.
    pub fn dates(&self) -> &[ObsDate] {
        &self.dates
    }

    /// Observed values aligned with [`dates`](Self::dates).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations (at least 1).
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; present for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Earliest observation date.
    pub fn first_date(&self) -> ObsDate {
        self.dates[0]
    }

    /// Latest observation date.
    pub fn last_date(&self) -> ObsDate {
        self.dates[self.dates.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> ObsDate {
        ObsDate::new(y, m, day).unwrap()
    }

    #[test]
    fn sorts_out_of_order_entries() {
        let s = ObservationSeries::from_entries(
            "RH2M",
            vec![
                (d(2024, 1, 3), Some(3.0)),
                (d(2024, 1, 1), Some(1.0)),
                (d(2024, 1, 2), Some(2.0)),
            ],
        )
        .unwrap();
        assert_eq!(s.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(s.first_date(), d(2024, 1, 1));
        assert_eq!(s.last_date(), d(2024, 1, 3));
    }

    #[test]
    fn drops_missing_and_non_finite() {
        let s = ObservationSeries::from_entries(
            "RH2M",
            vec![
                (d(2024, 1, 1), Some(1.0)),
                (d(2024, 1, 2), None),
                (d(2024, 1, 3), Some(f64::NAN)),
                (d(2024, 1, 4), Some(4.0)),
            ],
        )
        .unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.dates(), &[d(2024, 1, 1), d(2024, 1, 4)]);
    }

    #[test]
    fn duplicate_dates_keep_first() {
        let s = ObservationSeries::from_entries(
            "RH2M",
            vec![
                (d(2024, 1, 2), Some(20.0)),
                (d(2024, 1, 1), Some(1.0)),
                (d(2024, 1, 2), Some(99.0)),
            ],
        )
        .unwrap();
        assert_eq!(s.values(), &[1.0, 20.0]);
    }

    #[test]
    fn empty_is_unavailable() {
        let err = ObservationSeries::from_entries("RH2M", vec![(d(2024, 1, 1), None)]).unwrap_err();
        assert!(matches!(err, IoError::DataUnavailable { .. }));
    }

    #[test]
    fn from_daily_is_consecutive() {
        let s = ObservationSeries::from_daily("T2M", d(2024, 2, 28), vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(s.last_date(), d(2024, 3, 1));
        assert!(!s.is_empty());
    }

    #[test]
    fn restrict_to_window() {
        let s = ObservationSeries::from_daily("T2M", d(2024, 12, 30), vec![1.0, 2.0, 3.0, 4.0])
            .unwrap()
            .restrict_to(&HistoryWindow::default())
            .unwrap();
        assert_eq!(s.values(), &[1.0, 2.0, 3.0]);
        assert_eq!(s.last_date(), d(2025, 1, 1));
    }
}
