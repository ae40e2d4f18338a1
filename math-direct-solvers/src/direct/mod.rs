//! Direct solvers for linear systems
//!
//! This module provides direct (non-iterative) solvers:
//! - [`gauss_solve`]: Gaussian elimination with first-non-zero pivot search
//! - [`lup_solve`]: LU decomposition with partial pivoting
//! - [`cholesky_solve`]: Cholesky for symmetric positive definite systems
//! - [`crout_solve`]: Crout decomposition for tridiagonal systems
//! - [`qr_solve_least_squares`]: Householder QR for least-squares problems

mod cholesky;
mod crout;
mod gauss;
mod lu;
mod qr;

pub use cholesky::{CholeskyDecomposition, cholesky_decompose, cholesky_solve};
pub use crout::{CroutDecomposition, crout_decompose, crout_solve};
pub use gauss::gauss_solve;
pub use lu::{LupDecomposition, lup_decompose, lup_solve};
pub use qr::{QrDecomposition, qr_decompose, qr_solve_least_squares};
