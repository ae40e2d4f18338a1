//! QR decomposition via Householder reflections
//!
//! Two operation modes share the same reflection sweep:
//! - **full** ([`qr_decompose`]): `A = Q R` with `Q` orthogonal (m x m) and
//!   `R` upper triangular (m x n);
//! - **solve** ([`qr_solve_least_squares`]): the reflections are applied to
//!   the right-hand side instead of being accumulated into `Q`, followed by
//!   back substitution. This yields the least-squares solution of `A x = b`.
//!
//! Column `k` is reflected with `u = a_k + sign(r_kk) ||a_k|| e_1`, where the
//! sign matches the current diagonal entry to avoid cancellation. A zero
//! diagonal entry uses the positive sign.

use crate::error::{DirectError, Result, ensure_len};
use crate::traits::RealField;
use crate::triangular::backward_substitute;
use ndarray::{Array1, Array2, ArrayViewMut1, Axis, s};

/// QR factorization result (`A = Q R`)
#[derive(Debug, Clone)]
pub struct QrDecomposition<T: RealField> {
    /// Orthogonal factor (m x m)
    pub q: Array2<T>,
    /// Upper triangular factor (m x n)
    pub r: Array2<T>,
}

impl<T: RealField> QrDecomposition<T> {
    /// Least-squares solve with the stored factors: `R x = Q^T b`
    pub fn solve(&self, b: &Array1<T>) -> Result<Array1<T>> {
        ensure_len(self.q.nrows(), b.len())?;
        let n = self.r.ncols();
        if let Some(column) = (0..n).find(|&k| self.r[[k, k]] == T::zero()) {
            return Err(DirectError::RankDeficient { column });
        }
        let c = self.q.t().dot(b);
        backward_substitute(&self.r, &c)
    }
}

/// Householder vector for column `k` of `r`, embedded in an m-vector
///
/// Returns the vector together with its squared norm; the norm is zero when
/// the sub-column `r[k.., k]` vanishes.
fn householder_vector<T: RealField>(r: &Array2<T>, k: usize) -> (Array1<T>, T) {
    let m = r.nrows();
    let ak = r.slice(s![k.., k]);
    let norm_ak = ak.dot(&ak).sqrt();

    let mut u = Array1::zeros(m);
    u.slice_mut(s![k..]).assign(&ak);
    u[k] += r[[k, k]].sign_or_one() * norm_ak;

    let norm_sqr = u.dot(&u);
    (u, norm_sqr)
}

/// Apply `H = I - 2 u u^T / (u^T u)` to a single vector in place
fn reflect<T: RealField>(v: &mut ArrayViewMut1<'_, T>, u: &Array1<T>, scale: T) {
    let proj = u.dot(&*v);
    if proj != T::zero() {
        v.scaled_add(-(scale * proj), u);
    }
}

/// Apply `H` from the left to every column of `r`
fn reflect_columns<T: RealField>(r: &mut Array2<T>, u: &Array1<T>, scale: T) {
    for mut column in r.axis_iter_mut(Axis(1)) {
        reflect(&mut column, u, scale);
    }
}

/// Compute the full QR decomposition of an m x n matrix (m >= n)
///
/// A column whose remaining sub-vector is already zero is skipped: it needs
/// no reflection and `R` keeps a zero on that diagonal entry.
pub fn qr_decompose<T: RealField>(a: &Array2<T>) -> Result<QrDecomposition<T>> {
    let (m, n) = a.dim();
    if m < n {
        return Err(DirectError::Underdetermined { rows: m, cols: n });
    }

    let two = T::one() + T::one();
    let mut r = a.clone();
    let mut q: Array2<T> = Array2::eye(m);

    for k in 0..n {
        let (u, norm_sqr) = householder_vector(&r, k);
        if norm_sqr == T::zero() {
            log::debug!("QR: column {} already zero below the diagonal", k);
            continue;
        }
        let scale = two / norm_sqr;
        reflect_columns(&mut r, &u, scale);

        // Q <- Q H, i.e. reflect every row of Q
        for mut row in q.axis_iter_mut(Axis(0)) {
            reflect(&mut row, &u, scale);
        }
    }

    Ok(QrDecomposition { q, r })
}

/// Least-squares solution of `A x = b` for an m x n matrix (m >= n)
///
/// Minimizes `||A x - b||_2` without forming `Q`. Fails with
/// [`DirectError::RankDeficient`] when a column's Householder vector
/// vanishes, since `R` would then have a zero on its diagonal.
pub fn qr_solve_least_squares<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
    let (m, n) = a.dim();
    if m < n {
        return Err(DirectError::Underdetermined { rows: m, cols: n });
    }
    ensure_len(m, b.len())?;

    let two = T::one() + T::one();
    let mut r = a.clone();
    let mut c = b.clone();

    for k in 0..n {
        let (u, norm_sqr) = householder_vector(&r, k);
        if norm_sqr == T::zero() {
            log::debug!("QR solve: vanishing Householder vector in column {}", k);
            return Err(DirectError::RankDeficient { column: k });
        }
        let scale = two / norm_sqr;
        reflect_columns(&mut r, &u, scale);
        reflect(&mut c.view_mut(), &u, scale);
    }

    backward_substitute(&r, &c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn assert_qr_valid(a: &Array2<f64>, qr: &QrDecomposition<f64>) {
        let (m, n) = a.dim();
        assert_eq!(qr.q.dim(), (m, m));
        assert_eq!(qr.r.dim(), (m, n));

        let reconstructed = qr.q.dot(&qr.r);
        for i in 0..m {
            for j in 0..n {
                assert_relative_eq!(reconstructed[[i, j]], a[[i, j]], epsilon = 1e-10);
                if i > j {
                    assert_relative_eq!(qr.r[[i, j]], 0.0, epsilon = 1e-10);
                }
            }
        }

        let qtq = qr.q.t().dot(&qr.q);
        for i in 0..m {
            for j in 0..m {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(qtq[[i, j]], expected, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_qr_square() {
        let a = array![[12.0_f64, -51.0, 4.0], [6.0, 167.0, -68.0], [-4.0, 24.0, -41.0]];

        let qr = qr_decompose(&a).expect("QR should succeed");

        assert_qr_valid(&a, &qr);
        assert_relative_eq!(qr.r[[0, 0]].abs(), 14.0, epsilon = 1e-10);
        assert_relative_eq!(qr.r[[1, 1]].abs(), 175.0, epsilon = 1e-10);
        assert_relative_eq!(qr.r[[2, 2]].abs(), 35.0, epsilon = 1e-10);
    }

    #[test]
    fn test_qr_tall() {
        let a = array![[1.0_f64, 0.0], [1.0, 1.0], [1.0, 2.0], [1.0, 3.5]];

        let qr = qr_decompose(&a).expect("QR should succeed");

        assert_qr_valid(&a, &qr);
    }

    #[test]
    fn test_qr_zero_diagonal_entry() {
        // a[0,0] == 0 must still give a proper reflection
        let a = array![[0.0_f64, 1.0], [3.0, 1.0], [4.0, 2.0]];

        let qr = qr_decompose(&a).expect("QR should succeed");

        assert_qr_valid(&a, &qr);
        assert_relative_eq!(qr.r[[0, 0]].abs(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_qr_skips_zero_column() {
        let a = array![[1.0_f64, 0.0, 2.0], [2.0, 0.0, 1.0], [3.0, 0.0, 5.0]];

        let qr = qr_decompose(&a).expect("QR should succeed");

        assert_qr_valid(&a, &qr);
        assert!(matches!(
            qr.solve(&array![1.0, 1.0, 1.0]),
            Err(DirectError::RankDeficient { column: 1 })
        ));
    }

    #[test]
    fn test_qr_least_squares_line() {
        // Fit y = c0 + c1 x to (0,1), (1,2), (2,4)
        let a = array![[1.0_f64, 0.0], [1.0, 1.0], [1.0, 2.0]];
        let b = array![1.0_f64, 2.0, 4.0];

        let x = qr_solve_least_squares(&a, &b).expect("least squares should succeed");

        assert_relative_eq!(x[0], 5.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 1.5, epsilon = 1e-12);

        let qr = qr_decompose(&a).unwrap();
        let x_full = qr.solve(&b).unwrap();
        assert_relative_eq!(x_full[0], x[0], epsilon = 1e-12);
        assert_relative_eq!(x_full[1], x[1], epsilon = 1e-12);
    }

    #[test]
    fn test_qr_solve_square_exact() {
        let a = array![[-2.0_f64, 5.0, 1.0], [0.0, 8.0, -7.0], [9.0, -4.0, -3.0]];
        let b = array![1.0_f64, 1.0, 1.0];

        let x = qr_solve_least_squares(&a, &b).unwrap();

        let ax = a.dot(&x);
        for i in 0..3 {
            assert_relative_eq!(ax[i], b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_qr_rank_deficient_solve() {
        let a = array![[1.0_f64, 0.0], [1.0, 0.0], [1.0, 0.0]];
        let b = array![1.0_f64, 2.0, 3.0];

        assert_eq!(
            qr_solve_least_squares(&a, &b).unwrap_err(),
            DirectError::RankDeficient { column: 1 }
        );
    }

    #[test]
    fn test_qr_underdetermined() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0]];

        assert!(matches!(
            qr_decompose(&a),
            Err(DirectError::Underdetermined { rows: 2, cols: 3 })
        ));
        assert!(matches!(
            qr_solve_least_squares(&a, &array![1.0, 2.0]),
            Err(DirectError::Underdetermined { .. })
        ));
    }
}
