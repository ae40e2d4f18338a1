//! Gauss-Jordan elimination solver
//!
//! Works on the augmented matrix `[A | b]`. For every column the first row
//! (in ascending order) that has not yet served as a pivot row and holds a
//! non-zero entry becomes the pivot. The pivot row is normalised and the
//! column is cleared in every other row, so after the last column the final
//! column of the working matrix holds `A^{-1} b`.

use crate::error::{DirectError, Result, ensure_len, ensure_square};
use crate::traits::RealField;
use ndarray::{Array1, Array2, Axis, s};

/// Solve `A x = b` by Gaussian elimination
///
/// Fails with [`DirectError::SingularMatrix`] as soon as a column has no
/// non-zero entry among the rows not yet used as pivots.
pub fn gauss_solve<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let n = a.nrows();
    ensure_square(n, a.ncols())?;
    ensure_len(n, b.len())?;

    let mut ab = Array2::zeros((n, n + 1));
    ab.slice_mut(s![.., ..n]).assign(a);
    ab.column_mut(n).assign(b);

    let mut used = vec![false; n];

    for i in 0..n {
        let pivot_row = (0..n)
            .filter(|&k| !used[k])
            .find(|&k| ab[[k, i]] != T::zero());

        let Some(k) = pivot_row else {
            log::debug!("Gauss elimination: no pivot in column {}", i);
            return Err(DirectError::SingularMatrix { column: i });
        };

        if k != i {
            swap_rows(&mut ab, i, k);
            used.swap(i, k);
        }
        used[i] = true;

        let pivot = ab[[i, i]];
        ab.row_mut(i).mapv_inplace(|v| v / pivot);

        let pivot_values = ab.row(i).to_owned();
        for (j, mut row) in ab.axis_iter_mut(Axis(0)).enumerate() {
            if j == i {
                continue;
            }
            let factor = row[i];
            if factor != T::zero() {
                row.scaled_add(-factor, &pivot_values);
            }
        }
    }

    Ok(ab.column(n).to_owned())
}

/// Swap two rows of a matrix in place
pub(crate) fn swap_rows<T: RealField>(m: &mut Array2<T>, r1: usize, r2: usize) {
    if r1 == r2 {
        return;
    }
    for j in 0..m.ncols() {
        m.swap([r1, j], [r2, j]);
    }
}
