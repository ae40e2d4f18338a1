//! Direct solvers for dense and tridiagonal linear systems
//!
//! This crate solves `A x = b` without iteration, using classic
//! factorizations over real scalars.
//!
//! # Features
//!
//! - **Triangular Solves**: forward and backward substitution, bidiagonal Crout sweeps
//! - **Direct Solvers**: Gaussian elimination, LUP, Cholesky, Crout (tridiagonal)
//! - **Least Squares**: Householder QR for square and overdetermined systems
//! - **Dispatch**: select a solver by [`Method`], by name or by function
//! - **Fitting**: polynomial least squares through the normal equations
//! - **Generic Scalar Types**: Works with f64 and f32
//!
//! # Example
//!
//! ```
//! use math_direct_solvers::{lup_decompose, qr_solve_least_squares};
//! use ndarray::array;
//!
//! let a = array![[-2.0_f64, 5.0, 1.0], [0.0, 8.0, -7.0], [9.0, -4.0, -3.0]];
//! let b = array![1.0_f64, 1.0, 1.0];
//!
//! // Factorize once, solve many
//! let lup = lup_decompose(&a).unwrap();
//! let x = lup.solve(&b).unwrap();
//! let r = a.dot(&x) - &b;
//! assert!(r.iter().all(|v| v.abs() < 1e-12));
//!
//! // Fit a line through three points
//! let a = array![[1.0_f64, 0.0], [1.0, 1.0], [1.0, 2.0]];
//! let c = qr_solve_least_squares(&a, &array![1.0, 2.0, 4.0]).unwrap();
//! assert!((c[1] - 1.5).abs() < 1e-12);
//! ```

pub mod config;
pub mod direct;
pub mod dispatch;
pub mod error;
pub mod fitting;
pub mod generators;
pub mod traits;
pub mod triangular;

// Re-export main types
pub use config::{ConfigError, SolverConfig};
pub use error::{DirectError, Result};
pub use traits::RealField;

// Re-export triangular solves
pub use triangular::{
    backward_substitute, crout_backward_substitute, crout_forward_substitute, forward_substitute,
};

// Re-export direct solvers
pub use direct::{
    CholeskyDecomposition, CroutDecomposition, LupDecomposition, QrDecomposition,
    cholesky_decompose, cholesky_solve, crout_decompose, crout_solve, gauss_solve, lup_decompose,
    lup_solve, qr_decompose, qr_solve_least_squares,
};

// Re-export dispatch
pub use dispatch::{CustomSolver, DirectSolver, Method, SolverSelection, check_system, solve};

// Re-export fitting
pub use fitting::{FitStrategy, Polynomial, PolynomialFitter};
