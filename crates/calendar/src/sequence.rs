//! Consecutive-day date sequences.

use crate::date::ObsDate;

/// Generates `n_days` consecutive calendar dates starting at `start`.
///
/// # Example
///
/// ```ignore
/// let start = ObsDate::new(2024, 2, 28)?;
/// let dates = date_sequence(start, 3);
/// // Feb 28, Feb 29, Mar 1
/// ```
pub fn date_sequence(start: ObsDate, n_days: usize) -> Vec<ObsDate> {
    let mut dates = Vec::with_capacity(n_days);
    let mut current = start;
    for i in 0..n_days {
        if i > 0 {
            current = current.next();
        }
        dates.push(current);
    }
    dates
}
