//! Dense linear solves by Gaussian elimination with partial pivoting.
//!
//! Systems here are small (least-squares normal equations with a few dozen
//! regressors, Lyapunov equations of dimension `r^2` for ARMA state spaces),
//! so a direct O(n^3) elimination is sufficient.

use ndarray::{Array1, Array2, Axis};

use crate::error::StatsError;

/// Relative pivot threshold below which a matrix is treated as singular.
const PIVOT_TOL: f64 = 1e-13;

/// Solves `A X = B` for `X`, where `B` may hold several right-hand sides.
fn solve_in_place(mut a: Array2<f64>, mut b: Array2<f64>) -> Result<Array2<f64>, StatsError> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(StatsError::DimensionMismatch {
            rows: a.nrows(),
            len: a.ncols(),
        });
    }
    if b.nrows() != n {
        return Err(StatsError::DimensionMismatch {
            rows: n,
            len: b.nrows(),
        });
    }
    if n == 0 {
        return Ok(b);
    }

    let scale = a.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
    if !scale.is_finite() {
        return Err(StatsError::NonFiniteData);
    }
    if scale == 0.0 {
        return Err(StatsError::SingularMatrix);
    }
    let tol = PIVOT_TOL * scale;
    let m = b.ncols();

    for col in 0..n {
        // Partial pivoting: largest magnitude in this column at or below the diagonal.
        let (pivot_row, pivot_abs) = (col..n)
            .map(|r| (r, a[[r, col]].abs()))
            .fold((col, -1.0), |best, cur| if cur.1 > best.1 { cur } else { best });
        if pivot_abs <= tol {
            return Err(StatsError::SingularMatrix);
        }
        if pivot_row != col {
            for j in 0..n {
                a.swap([col, j], [pivot_row, j]);
            }
            for j in 0..m {
                b.swap([col, j], [pivot_row, j]);
            }
        }

        let pivot = a[[col, col]];
        for r in (col + 1)..n {
            let factor = a[[r, col]] / pivot;
            if factor == 0.0 {
                continue;
            }
            for j in col..n {
                a[[r, j]] -= factor * a[[col, j]];
            }
            for j in 0..m {
                b[[r, j]] -= factor * b[[col, j]];
            }
        }
    }

    // Back substitution.
    let mut x = Array2::zeros((n, m));
    for j in 0..m {
        for i in (0..n).rev() {
            let mut acc = b[[i, j]];
            for k in (i + 1)..n {
                acc -= a[[i, k]] * x[[k, j]];
            }
            x[[i, j]] = acc / a[[i, i]];
        }
    }
    Ok(x)
}

/// Solves the square system `a * x = b`.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`StatsError::DimensionMismatch`] | `a` not square or `b` of wrong length |
/// | [`StatsError::NonFiniteData`] | `a` contains NaN or infinity |
/// | [`StatsError::SingularMatrix`] | a pivot vanishes to working precision |
pub fn solve_linear_system(a: &Array2<f64>, b: &Array1<f64>) -> Result<Array1<f64>, StatsError> {
    let rhs = b.view().insert_axis(Axis(1)).to_owned();
    let x = solve_in_place(a.clone(), rhs)?;
    Ok(x.column(0).to_owned())
}

/// Inverts a square matrix.
///
/// # Errors
///
/// Same conditions as [`solve_linear_system`].
pub fn invert(a: &Array2<f64>) -> Result<Array2<f64>, StatsError> {
    let n = a.nrows();
    solve_in_place(a.clone(), Array2::eye(n))
}
