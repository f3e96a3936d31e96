//! Fixed historical training window.

use crate::date::ObsDate;
use crate::error::CalendarError;

/// The inclusive `[start, end]` date range every forecast is trained on.
///
/// The window is a process-wide setting, never chosen per request, so all
/// forecasts share the same training horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryWindow {
    start: ObsDate,
    end: ObsDate,
}

impl HistoryWindow {
    /// Creates a window.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWindow`] unless `end > start`.
    pub fn new(start: ObsDate, end: ObsDate) -> Result<Self, CalendarError> {
        if end <= start {
            return Err(CalendarError::InvalidWindow {
                start: start.to_compact(),
                end: end.to_compact(),
            });
        }
        Ok(Self { start, end })
    }

    /// First day of the window.
    pub fn start(&self) -> ObsDate {
        self.start
    }

    /// Last day of the window.
    pub fn end(&self) -> ObsDate {
        self.end
    }

    /// Number of calendar days covered, both ends included.
    pub fn n_days(&self) -> usize {
        (self.start.days_until(self.end) + 1) as usize
    }

    /// Returns `true` if `date` falls inside the window.
    pub fn contains(&self, date: ObsDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl Default for HistoryWindow {
    /// 2000-01-01 ..= 2025-01-01.
    fn default() -> Self {
        Self {
            start: ObsDate::new(2000, 1, 1).expect("valid constant date"),
            end: ObsDate::new(2025, 1, 1).expect("valid constant date"),
        }
    }
}
