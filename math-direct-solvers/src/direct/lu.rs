//! LU decomposition solver
//!
//! Provides LU factorization with partial pivoting (`P A = L U`) for solving
//! dense linear systems. Runs in O(n^3), so it is meant for small to moderate
//! system sizes.

use crate::direct::gauss::swap_rows;
use crate::error::{DirectError, Result, ensure_len, ensure_square};
use crate::traits::RealField;
use crate::triangular::{backward_substitute, forward_substitute};
use ndarray::{Array1, Array2};

/// LUP factorization result
///
/// Stores the unit lower triangular `L`, the upper triangular `U` and the
/// permutation matrix `P` such that `P A = L U`.
#[derive(Debug, Clone)]
pub struct LupDecomposition<T: RealField> {
    /// Unit lower triangular factor
    pub l: Array2<T>,
    /// Upper triangular factor
    pub u: Array2<T>,
    /// Row permutation matrix
    pub p: Array2<T>,
}

impl<T: RealField> LupDecomposition<T> {
    /// Matrix dimension
    pub fn dim(&self) -> usize {
        self.u.nrows()
    }

    /// Solve Ax = b using the pre-computed factorization
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        ensure_len(self.dim(), b.len())?;
        let pb = self.p.dot(b);
        let y = forward_substitute(&self.l, &pb)?;
        backward_substitute(&self.u, &y)
    }
}

/// Compute the LU factorization of `a` with partial pivoting
///
/// For every column the row with the largest absolute value at or below the
/// diagonal is swapped into place. A pivot that is exactly zero after the
/// swap (including the last diagonal entry of `U`) aborts with
/// [`DirectError::SingularMatrix`].
pub fn lup_decompose<T: RealField>(a: &Array2<T>) -> Result<LupDecomposition<T>> {
    let n = a.nrows();
    ensure_square(n, a.ncols())?;

    let mut lu = a.clone();
    let mut p = Array2::eye(n);

    for j in 0..n {
        // Find pivot
        let mut max_val = lu[[j, j]].abs();
        let mut max_row = j;
        for i in (j + 1)..n {
            let val = lu[[i, j]].abs();
            if val > max_val {
                max_val = val;
                max_row = i;
            }
        }

        if max_row != j {
            swap_rows(&mut lu, j, max_row);
            swap_rows(&mut p, j, max_row);
        }

        // Check for singularity
        let pivot = lu[[j, j]];
        if pivot == T::zero() {
            log::debug!("LUP: zero pivot on diagonal ({}, {})", j, j);
            return Err(DirectError::SingularMatrix { column: j });
        }

        // Compute multipliers and eliminate
        for i in (j + 1)..n {
            let mult = lu[[i, j]] / pivot;
            lu[[i, j]] = mult; // Store multiplier in L part

            for k in (j + 1)..n {
                let update = mult * lu[[j, k]];
                lu[[i, k]] -= update;
            }
        }
    }

    let mut l = Array2::eye(n);
    let mut u = Array2::zeros((n, n));
    for i in 0..n {
        for k in 0..n {
            if k < i {
                l[[i, k]] = lu[[i, k]];
            } else {
                u[[i, k]] = lu[[i, k]];
            }
        }
    }

    Ok(LupDecomposition { l, u, p })
}

/// Solve Ax = b using LU decomposition
///
/// This is a convenience function that combines factorization and solve.
pub fn lup_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    ensure_len(a.nrows(), b.len())?;
    let factorization = lup_decompose(a)?;
    factorization.solve(b)
}
