//! Unconstrained parametrization of AR and MA polynomials.
//!
//! The optimizer searches over all of `R^(p+q)`. Each block is mapped to
//! partial autocorrelations in (-1, 1) via `tanh` and then to polynomial
//! coefficients with the Levinson-Durbin recursion (Jones 1980,
//! Monahan 1984), which keeps every candidate stationary (AR) or
//! invertible (MA).
//!
//! **Not part of the public API.**

/// Maps unconstrained values to coefficients `phi` such that
/// `1 - phi_1 z - ... - phi_k z^k` has all roots outside the unit circle.
pub(crate) fn to_ar(alpha: &[f64]) -> Vec<f64> {
    levinson(alpha)
}

/// Maps unconstrained values to coefficients `theta` such that
/// `1 + theta_1 z + ... + theta_k z^k` has all roots outside the unit circle.
pub(crate) fn to_ma(beta: &[f64]) -> Vec<f64> {
    levinson(beta).into_iter().map(|c| -c).collect()
}

fn levinson(alpha: &[f64]) -> Vec<f64> {
    let k = alpha.len();
    if k == 0 {
        return Vec::new();
    }
    let r: Vec<f64> = alpha.iter().map(|a| a.tanh()).collect();

    let mut phi = vec![0.0; k];
    let mut prev = vec![0.0; k];
    phi[0] = r[0];
    for m in 1..k {
        prev.copy_from_slice(&phi);
        phi[m] = r[m];
        for j in 0..m {
            phi[j] = prev[j] - r[m] * prev[m - 1 - j];
        }
    }
    phi
}
