//! Forward and backward substitution
//!
//! Dense routines handle general lower/upper triangular systems. The Crout
//! variants exploit the bidiagonal factors of a tridiagonal matrix, where each
//! equation couples only one neighbouring unknown, and run in O(n).
//!
//! None of these routines re-check the diagonal: the decomposition producing
//! the triangular factor guarantees it is non-zero. A violated precondition
//! shows up as `inf`/`NaN` entries in the result.

use crate::error::{DirectError, Result, ensure_len, ensure_square};
use crate::traits::RealField;
use ndarray::{Array1, Array2, s};

/// Solve `L x = b` for a lower triangular `L`
///
/// `L` need not have a unit diagonal.
pub fn forward_substitute<T: RealField>(l: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let n = l.nrows();
    ensure_square(n, l.ncols())?;
    ensure_len(n, b.len())?;

    let mut x = Array1::zeros(n);
    for i in 0..n {
        let dot = l.slice(s![i, ..i]).dot(&x.slice(s![..i]));
        x[i] = (b[i] - dot) / l[[i, i]];
    }
    Ok(x)
}

/// Solve `U x = b` for an upper triangular `U`
///
/// `U` may be rectangular (m x n, m >= n) as produced by QR; only its leading
/// n x n block and the first n entries of `b` take part, so `b` must have
/// length m.
pub fn backward_substitute<T: RealField>(u: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let (m, n) = u.dim();
    if m < n {
        return Err(DirectError::Underdetermined { rows: m, cols: n });
    }
    ensure_len(m, b.len())?;

    let mut x = Array1::zeros(n);
    for i in (0..n).rev() {
        let dot = u.slice(s![i, i + 1..n]).dot(&x.slice(s![i + 1..]));
        x[i] = (b[i] - dot) / u[[i, i]];
    }
    Ok(x)
}

/// Forward substitution for the lower bidiagonal Crout factor
///
/// Only `L[l, l]` and `L[l, l - 1]` are read.
pub fn crout_forward_substitute<T: RealField>(
    l: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>> {
    let n = l.nrows();
    ensure_square(n, l.ncols())?;
    ensure_len(n, b.len())?;

    let mut x = Array1::zeros(n);
    if n == 0 {
        return Ok(x);
    }
    x[0] = b[0] / l[[0, 0]];
    for k in 1..n {
        x[k] = (b[k] - l[[k, k - 1]] * x[k - 1]) / l[[k, k]];
    }
    Ok(x)
}

/// Backward substitution for the unit upper bidiagonal Crout factor
///
/// `U` must have ones on its diagonal; only `U[l, l + 1]` is read.
pub fn crout_backward_substitute<T: RealField>(
    u: &Array2<T>,
    b: &Array1<T>,
) -> Result<Array1<T>> {
    let n = u.nrows();
    ensure_square(n, u.ncols())?;
    ensure_len(n, b.len())?;

    let mut x = Array1::zeros(n);
    if n == 0 {
        return Ok(x);
    }
    x[n - 1] = b[n - 1];
    for k in (0..n - 1).rev() {
        x[k] = b[k] - u[[k, k + 1]] * x[k + 1];
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_forward_substitute() {
        let l = array![[2.0_f64, 0.0, 0.0], [1.0, 3.0, 0.0], [-1.0, 2.0, 4.0]];
        let b = array![2.0_f64, 7.0, 9.0];

        let x = forward_substitute(&l, &b).expect("forward substitution should succeed");

        let lx = l.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(lx[i], b[i], epsilon = 1e-12);
        }
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_backward_substitute() {
        let u = array![[1.0_f64, 2.0, -1.0], [0.0, 2.0, 1.0], [0.0, 0.0, 5.0]];
        let b = array![2.0_f64, 5.0, 10.0];

        let x = backward_substitute(&u, &b).expect("backward substitution should succeed");

        let ux = u.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(ux[i], b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_backward_substitute_rectangular() {
        // Trailing zero row as left behind by a tall QR factorization
        let r = array![[2.0_f64, 1.0], [0.0, 4.0], [0.0, 0.0]];
        let c = array![4.0_f64, 8.0, 123.0];

        let x = backward_substitute(&r, &c).expect("backward substitution should succeed");

        assert_eq!(x.len(), 2);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_substitute_dimension_mismatch() {
        let l = array![[1.0_f64, 0.0], [1.0, 1.0]];
        let b = array![1.0_f64, 2.0, 3.0];

        assert_eq!(
            forward_substitute(&l, &b),
            Err(DirectError::DimensionMismatch {
                expected: 2,
                got: 3
            })
        );

        let wide = array![[1.0_f64, 0.0, 0.0], [0.0, 1.0, 0.0]];
        assert!(matches!(
            backward_substitute(&wide, &array![1.0, 1.0]),
            Err(DirectError::Underdetermined { rows: 2, cols: 3 })
        ));
        assert!(matches!(
            forward_substitute(&wide, &array![1.0, 1.0]),
            Err(DirectError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_zero_diagonal_propagates_non_finite() {
        let l = array![[0.0_f64, 0.0], [1.0, 1.0]];
        let b = array![1.0_f64, 1.0];

        let x = forward_substitute(&l, &b).expect("shape is valid");
        assert!(!x[0].is_finite());
    }

    #[test]
    fn test_crout_substitutions_match_dense() {
        let l = array![[2.0_f64, 0.0, 0.0], [-1.0, 1.5, 0.0], [0.0, -1.0, 4.0 / 3.0]];
        let u = array![[1.0_f64, -0.5, 0.0], [0.0, 1.0, -2.0 / 3.0], [0.0, 0.0, 1.0]];
        let b = array![1.0_f64, 0.0, 1.0];

        let y_fast = crout_forward_substitute(&l, &b).unwrap();
        let y_dense = forward_substitute(&l, &b).unwrap();
        let x_fast = crout_backward_substitute(&u, &y_fast).unwrap();
        let x_dense = backward_substitute(&u, &y_dense).unwrap();

        for i in 0..3 {
            assert_relative_eq!(y_fast[i], y_dense[i], epsilon = 1e-12);
            assert_relative_eq!(x_fast[i], x_dense[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_crout_empty() {
        let empty: Array2<f64> = Array2::zeros((0, 0));
        let b: Array1<f64> = Array1::zeros(0);

        assert_eq!(crout_forward_substitute(&empty, &b).unwrap().len(), 0);
        assert_eq!(crout_backward_substitute(&empty, &b).unwrap().len(), 0);
    }
}
