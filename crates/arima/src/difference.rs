//! Differencing and its inverse.
//!
//! **Not part of the public API.**

/// Result of differencing a series `d` times.
#[derive(Clone, Debug)]
pub(crate) struct Differenced {
    /// The `d`-times differenced series (length `n - d`).
    pub(crate) series: Vec<f64>,
    /// `tails[k]` is the last value of the `k`-times differenced series,
    /// for `k` in `0..d`. Enough to undo the differencing of forecasts.
    pub(crate) tails: Vec<f64>,
}

/// Applies first differences `d` times.
pub(crate) fn difference(data: &[f64], d: usize) -> Differenced {
    let mut series = data.to_vec();
    let mut tails = Vec::with_capacity(d);
    for _ in 0..d {
        if let Some(&last) = series.last() {
            tails.push(last);
        }
        series = series.windows(2).map(|w| w[1] - w[0]).collect();
    }
    Differenced { series, tails }
}

/// Integrates forecasts of the differenced series back to levels.
///
/// Undoes one level of differencing per tail, innermost first.
pub(crate) fn integrate(forecasts: &[f64], tails: &[f64]) -> Vec<f64> {
    let mut levels = forecasts.to_vec();
    for &tail in tails.iter().rev() {
        let mut acc = tail;
        for x in levels.iter_mut() {
            acc += *x;
            *x = acc;
        }
    }
    levels
}
