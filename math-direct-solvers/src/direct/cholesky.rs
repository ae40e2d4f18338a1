//! Cholesky decomposition solver
//!
//! Factors a symmetric positive definite matrix as `A = L L^T` column by
//! column. Symmetry is not checked; only the lower triangle of `A` is read.

use crate::error::{DirectError, Result, ensure_len, ensure_square};
use crate::traits::RealField;
use crate::triangular::{backward_substitute, forward_substitute};
use ndarray::{Array1, Array2, s};

/// Cholesky factorization result (`A = L L^T`)
#[derive(Debug, Clone)]
pub struct CholeskyDecomposition<T: RealField> {
    /// Lower triangular factor
    pub l: Array2<T>,
}

impl<T: RealField> CholeskyDecomposition<T> {
    /// Solve Ax = b as `L^T x = y`, `L y = b`
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        ensure_len(self.l.nrows(), b.len())?;
        let y = forward_substitute(&self.l, b)?;
        backward_substitute(&self.l.t().to_owned(), &y)
    }
}

/// Compute the Cholesky factor of `a`
///
/// Fails with [`DirectError::NonPositiveDefinite`] when the value under the
/// square root for a diagonal entry is zero, negative or NaN.
pub fn cholesky_decompose<T: RealField>(a: &Array2<T>) -> Result<CholeskyDecomposition<T>> {
    let n = a.nrows();
    ensure_square(n, a.ncols())?;

    let mut l: Array2<T> = Array2::zeros((n, n));

    for k in 0..n {
        let row_k = l.slice(s![k, ..k]);
        let radicand = a[[k, k]] - row_k.dot(&row_k);
        if radicand.is_nan() || radicand <= T::zero() {
            log::debug!(
                "Cholesky: non-positive value {:e} on diagonal ({}, {})",
                radicand.to_f64_lossy(),
                k,
                k
            );
            return Err(DirectError::NonPositiveDefinite { index: k });
        }
        let l_kk = radicand.sqrt();
        l[[k, k]] = l_kk;

        for i in (k + 1)..n {
            let dot = l.slice(s![i, ..k]).dot(&l.slice(s![k, ..k]));
            l[[i, k]] = (a[[i, k]] - dot) / l_kk;
        }
    }

    Ok(CholeskyDecomposition { l })
}

/// Solve Ax = b for a symmetric positive definite `a`
pub fn cholesky_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    ensure_len(a.nrows(), b.len())?;
    cholesky_decompose(a)?.solve(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_cholesky_reconstruct() {
        let a = array![[4.0_f64, 12.0, -16.0], [12.0, 37.0, -43.0], [-16.0, -43.0, 98.0]];

        let chol = cholesky_decompose(&a).expect("Cholesky should succeed");

        // Known factor
        let expected = array![[2.0_f64, 0.0, 0.0], [6.0, 1.0, 0.0], [-8.0, 5.0, 3.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(chol.l[[i, j]], expected[[i, j]], epsilon = 1e-12);
            }
        }

        let llt = chol.l.dot(&chol.l.t());
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(llt[[i, j]], a[[i, j]], epsilon = 1e-10);
            }
        }
    }

    #[test]
    fn test_cholesky_solve() {
        let a = array![[4.0_f64, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]];
        let b = array![1.0_f64, 2.0, 3.0];

        let x = cholesky_solve(&a, &b).expect("Cholesky solve should succeed");

        let ax = a.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_cholesky_not_positive_definite() {
        let a = array![[1.0_f64, 0.0], [0.0, -1.0]];

        assert_eq!(
            cholesky_decompose(&a).unwrap_err(),
            DirectError::NonPositiveDefinite { index: 1 }
        );
    }

    #[test]
    fn test_cholesky_zero_diagonal() {
        let a = array![[1.0_f64, 1.0], [1.0, 1.0]];

        assert_eq!(
            cholesky_decompose(&a).unwrap_err(),
            DirectError::NonPositiveDefinite { index: 1 }
        );
    }

    #[test]
    fn test_cholesky_non_square() {
        let a = array![[1.0_f64, 0.0, 0.0], [0.0, 1.0, 0.0]];
        assert!(cholesky_decompose(&a).unwrap_err().is_dimension_error());
    }
}
