//! Test-matrix generators
//!
//! Tridiagonal Toeplitz matrices (with closed-form eigenpairs) and Vandermonde
//! matrices, used to build reference systems for the direct solvers.

use crate::traits::RealField;
use ndarray::{Array1, Array2};
use std::f64::consts::PI;

/// Tridiagonal Toeplitz matrix of size n
///
/// `a` fills the main diagonal, `b` the first upper and `c` the first lower
/// diagonal.
pub fn toeplitz<T: RealField>(n: usize, a: T, b: T, c: T) -> Array2<T> {
    let mut m = Array2::zeros((n, n));
    for i in 0..n {
        m[[i, i]] = a;
        if i + 1 < n {
            m[[i, i + 1]] = b;
            m[[i + 1, i]] = c;
        }
    }
    m
}

/// Eigenvalues of [`toeplitz`]`(n, a, b, c)`
///
/// `a + 2 b sqrt(c / b) cos(k pi / (n + 1))` for k = 1..=n, which is
/// `a + 2 sqrt(b c) cos(..)` with the square root's sign taken from `b`. The
/// k-th entry belongs to [`toeplitz_eigvec`]`(n, k, b, c)`. `b` and `c` must
/// be non-zero with equal sign, otherwise the spectrum is not real and NaN is
/// returned.
pub fn toeplitz_eigvals<T: RealField>(n: usize, a: T, b: T, c: T) -> Array1<T> {
    let two = T::from_f64_lossy(2.0);
    let root = b * (c / b).sqrt();
    Array1::from_iter((1..=n).map(|k| {
        let angle = T::from_f64_lossy(k as f64 * PI / (n + 1) as f64);
        a + two * root * angle.cos()
    }))
}

/// k-th eigenvector (1-based) of [`toeplitz`]`(n, a, b, c)` for any `a`
///
/// Entries are `(c / b)^(l / 2) sin(l k pi / (n + 1))` for l = 1..=n.
pub fn toeplitz_eigvec<T: RealField>(n: usize, k: usize, b: T, c: T) -> Array1<T> {
    let ratio = c / b;
    Array1::from_iter((1..=n).map(|l| {
        let scale = ratio.powf(T::from_f64_lossy(l as f64 / 2.0));
        let angle = T::from_f64_lossy((l * k) as f64 * PI / (n + 1) as f64);
        scale * angle.sin()
    }))
}

/// Finite-difference 1-D Laplacian `(n + 1)^2 toeplitz(n, 2, -1, -1)`
pub fn laplacian<T: RealField>(n: usize) -> Array2<T> {
    let h_inv_sqr = T::from_usize_lossy((n + 1) * (n + 1));
    toeplitz(n, T::from_f64_lossy(2.0), -T::one(), -T::one()) * h_inv_sqr
}

/// Eigenvalues of [`laplacian`]`(n)`
pub fn laplacian_eigvals<T: RealField>(n: usize) -> Array1<T> {
    let h_inv_sqr = T::from_usize_lossy((n + 1) * (n + 1));
    toeplitz_eigvals(n, T::from_f64_lossy(2.0), -T::one(), -T::one()) * h_inv_sqr
}

/// Vandermonde matrix `V[i, j] = v[i]^j`
pub fn vandermonde<T: RealField>(v: &Array1<T>) -> Array2<T> {
    let n = v.len();
    let mut m = Array2::ones((n, n));
    for (i, &x) in v.iter().enumerate() {
        for j in 1..n {
            m[[i, j]] = m[[i, j - 1]] * x;
        }
    }
    m
}
