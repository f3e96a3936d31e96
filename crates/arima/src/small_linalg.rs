//! Stack-allocated small linear algebra types for the Kalman filter hot loop.
//!
//! State dimensions for the order grids searched here are tiny
//! (`r = max(p, q + 1)`), so fixed-size arrays avoid heap traffic on every
//! time step.

use ndarray::Array2;

/// Stack-allocated vector of dimension `R`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SmallVec<const R: usize> {
    pub(crate) data: [f64; R],
}

/// Stack-allocated R x R matrix stored in column-major order.
///
/// `cols[c][r]` = element at row r, column c.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SmallMat<const R: usize> {
    pub(crate) cols: [[f64; R]; R],
}

impl<const R: usize> SmallVec<R> {
    /// Returns a zero-initialized vector.
    #[inline(always)]
    pub(crate) fn zeros() -> Self {
        Self { data: [0.0; R] }
    }

    /// Adds `scale * other` in place.
    #[inline(always)]
    pub(crate) fn add_scaled(&mut self, other: &SmallVec<R>, scale: f64) {
        for i in 0..R {
            self.data[i] += scale * other.data[i];
        }
    }
}

impl<const R: usize> SmallMat<R> {
    /// Returns a zero-initialized matrix.
    #[inline(always)]
    pub(crate) fn zeros() -> Self {
        Self {
            cols: [[0.0; R]; R],
        }
    }

    /// Copies an `R x R` ndarray matrix.
    ///
    /// # Panics
    ///
    /// Panics if `m` is smaller than `R x R`.
    pub(crate) fn from_array(m: &Array2<f64>) -> Self {
        let mut out = Self::zeros();
        for c in 0..R {
            for r in 0..R {
                out.cols[c][r] = m[[r, c]];
            }
        }
        out
    }

    /// Returns the element at `(row, col)`.
    #[inline(always)]
    pub(crate) fn get(&self, row: usize, col: usize) -> f64 {
        self.cols[col][row]
    }

    /// Returns column `c` as a vector.
    #[inline(always)]
    pub(crate) fn column(&self, c: usize) -> SmallVec<R> {
        SmallVec { data: self.cols[c] }
    }

    /// Computes the matrix-vector product `self * v`.
    #[inline(always)]
    pub(crate) fn mul_vec(&self, v: &SmallVec<R>) -> SmallVec<R> {
        let mut result = SmallVec::zeros();
        for k in 0..R {
            let vk = v.data[k];
            if vk == 0.0 {
                continue;
            }
            for i in 0..R {
                result.data[i] += self.cols[k][i] * vk;
            }
        }
        result
    }

    /// Computes `self * other`.
    #[inline(always)]
    pub(crate) fn mul(&self, other: &SmallMat<R>) -> SmallMat<R> {
        let mut out = Self::zeros();
        for c in 0..R {
            out.cols[c] = self.mul_vec(&other.column(c)).data;
        }
        out
    }

    /// Computes `self * other^T`.
    #[inline(always)]
    pub(crate) fn mul_transposed(&self, other: &SmallMat<R>) -> SmallMat<R> {
        let mut out = Self::zeros();
        for c in 0..R {
            for r in 0..R {
                let mut sum = 0.0;
                for k in 0..R {
                    sum += self.get(r, k) * other.get(c, k);
                }
                out.cols[c][r] = sum;
            }
        }
        out
    }

    /// Element-wise `self + other`.
    #[inline(always)]
    pub(crate) fn add(&self, other: &SmallMat<R>) -> SmallMat<R> {
        let mut out = *self;
        for c in 0..R {
            for r in 0..R {
                out.cols[c][r] += other.cols[c][r];
            }
        }
        out
    }

    /// Subtracts the scaled outer product `scale * v v^T` in place.
    #[inline(always)]
    pub(crate) fn sub_outer(&mut self, v: &SmallVec<R>, scale: f64) {
        for c in 0..R {
            for r in 0..R {
                self.cols[c][r] -= scale * v.data[r] * v.data[c];
            }
        }
    }

    /// Largest absolute element-wise difference.
    #[inline(always)]
    pub(crate) fn max_abs_diff(&self, other: &SmallMat<R>) -> f64 {
        let mut m: f64 = 0.0;
        for c in 0..R {
            for r in 0..R {
                m = m.max((self.cols[c][r] - other.cols[c][r]).abs());
            }
        }
        m
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn mat2(a: [[f64; 2]; 2]) -> SmallMat<2> {
        // `a` given row-major for readability
        SmallMat::from_array(&array![[a[0][0], a[0][1]], [a[1][0], a[1][1]]])
    }

    #[test]
    fn from_array_is_column_major() {
        let m = mat2([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.get(0, 1), 2.0);
        assert_eq!(m.get(1, 0), 3.0);
        assert_eq!(m.cols[1], [2.0, 4.0]);
    }

    #[test]
    fn mul_vec_matches_hand() {
        let m = mat2([[1.0, 2.0], [3.0, 4.0]]);
        let v = SmallVec { data: [1.0, -1.0] };
        assert_eq!(m.mul_vec(&v).data, [-1.0, -1.0]);
    }

    #[test]
    fn mul_and_transpose() {
        let a = mat2([[1.0, 2.0], [3.0, 4.0]]);
        let b = mat2([[0.0, 1.0], [1.0, 0.0]]);
        // a * b swaps columns
        let ab = a.mul(&b);
        assert_eq!(ab.get(0, 0), 2.0);
        assert_eq!(ab.get(0, 1), 1.0);
        // a * a^T
        let aat = a.mul_transposed(&a);
        assert_abs_diff_eq!(aat.get(0, 0), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(aat.get(0, 1), 11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(aat.get(1, 0), 11.0, epsilon = 1e-12);
        assert_abs_diff_eq!(aat.get(1, 1), 25.0, epsilon = 1e-12);
    }

    #[test]
    fn outer_update_and_diff() {
        let mut m = mat2([[2.0, 1.0], [1.0, 2.0]]);
        let before = m;
        let v = SmallVec { data: [1.0, 1.0] };
        m.sub_outer(&v, 0.5);
        assert_eq!(m.get(0, 0), 1.5);
        assert_eq!(m.get(0, 1), 0.5);
        assert_abs_diff_eq!(m.max_abs_diff(&before), 0.5, epsilon = 1e-12);
        let sum = m.add(&before);
        assert_eq!(sum.get(1, 1), 3.5);
    }

    #[test]
    fn add_scaled_vec() {
        let mut v = SmallVec { data: [1.0, 2.0, 3.0] };
        v.add_scaled(&SmallVec { data: [1.0, 0.0, -1.0] }, 2.0);
        assert_eq!(v.data, [3.0, 2.0, 1.0]);
    }
}
