//! Error types for the sirocco-stats crate.

/// Error type for all fallible operations in the sirocco-stats crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StatsError {
    /// Returned when the input data is empty.
    #[error("input data is empty")]
    EmptyData,

    /// Returned when there are too few observations for the requested test.
    #[error("insufficient data: got {n} observations, need at least {min}")]
    InsufficientData {
        /// Number of observations provided.
        n: usize,
        /// Minimum number of observations required.
        min: usize,
    },

    /// Returned when the input contains NaN or infinity.
    #[error("input data contains non-finite values")]
    NonFiniteData,

    /// Returned when the input has zero variance.
    #[error("input data is constant (zero variance)")]
    ConstantData,

    /// Returned when a linear system has no unique solution.
    #[error("matrix is singular to working precision")]
    SingularMatrix,

    /// Returned when matrix and vector shapes disagree.
    #[error("dimension mismatch: {rows} rows but {len} responses")]
    DimensionMismatch {
        /// Number of design-matrix rows.
        rows: usize,
        /// Length of the response vector.
        len: usize,
    },

    /// Returned when a regression produced a non-finite test statistic.
    #[error("regression is degenerate: {reason}")]
    DegenerateRegression {
        /// What went wrong.
        reason: String,
    },
}
