//! Crout decomposition for tridiagonal matrices
//!
//! For a tridiagonal `A` the factors are bidiagonal:
//!
//! ```text
//! L = diag(l_kk) + diag(a_{k,k-1}, -1)
//! U = I + diag(u_{k-1,k}, 1)
//! ```
//!
//! The sub-diagonal of `A` is copied into `L` unchanged, so both the
//! factorization and the solve run in O(n). The input is *not* checked for
//! tridiagonal structure: passing a general matrix silently yields factors
//! that do not multiply back to `A`.

use crate::error::{DirectError, Result, ensure_len, ensure_square};
use crate::traits::RealField;
use crate::triangular::{crout_backward_substitute, crout_forward_substitute};
use ndarray::{Array1, Array2};

/// Crout factorization result (`A = L U`)
#[derive(Debug, Clone)]
pub struct CroutDecomposition<T: RealField> {
    /// Lower bidiagonal factor
    pub l: Array2<T>,
    /// Unit upper bidiagonal factor
    pub u: Array2<T>,
}

impl<T: RealField> CroutDecomposition<T> {
    /// Solve Ax = b with the O(n) bidiagonal substitutions
    ///
    /// A zero in the last diagonal entry of `L` means `A` is singular even
    /// though the factorization exists; this is reported as
    /// [`DirectError::SingularMatrix`].
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        let n = self.l.nrows();
        ensure_len(n, b.len())?;
        if n > 0 && self.l[[n - 1, n - 1]] == T::zero() {
            return Err(DirectError::SingularMatrix { column: n - 1 });
        }
        let y = crout_forward_substitute(&self.l, b)?;
        crout_backward_substitute(&self.u, &y)
    }
}

/// Compute the Crout factorization of a tridiagonal matrix
///
/// Aborts with [`DirectError::NoDecompositionExists`] when a diagonal entry
/// of `L` is zero before it is used as a divisor.
pub fn crout_decompose<T: RealField>(a: &Array2<T>) -> Result<CroutDecomposition<T>> {
    let n = a.nrows();
    ensure_square(n, a.ncols())?;

    let mut l = Array2::zeros((n, n));
    let mut u = Array2::eye(n);
    if n == 0 {
        return Ok(CroutDecomposition { l, u });
    }

    for i in 1..n {
        for j in 0..i {
            l[[i, j]] = a[[i, j]];
        }
    }
    l[[0, 0]] = a[[0, 0]];

    for k in 1..n {
        let prev = l[[k - 1, k - 1]];
        if prev == T::zero() {
            log::debug!("Crout: zero on diagonal ({}, {})", k - 1, k - 1);
            return Err(DirectError::NoDecompositionExists { index: k - 1 });
        }
        l[[k, k]] = a[[k, k]] - a[[k - 1, k]] * l[[k, k - 1]] / prev;
        u[[k - 1, k]] = a[[k - 1, k]] / prev;
    }

    Ok(CroutDecomposition { l, u })
}

/// Solve Ax = b for a tridiagonal `a`
pub fn crout_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    ensure_len(a.nrows(), b.len())?;
    crout_decompose(a)?.solve(b)
}
