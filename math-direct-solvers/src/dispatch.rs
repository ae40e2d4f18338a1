//! Solver dispatch
//!
//! Routes a linear system to one of the direct solvers, selected either by
//! [`Method`] or by a caller-supplied function with the same signature.
//!
//! # Example
//!
//! ```
//! use math_direct_solvers::{DirectSolver, Method};
//! use ndarray::array;
//!
//! let a = array![[4.0_f64, 1.0], [1.0, 3.0]];
//! let b = array![1.0_f64, 2.0];
//!
//! let solver = DirectSolver::default();
//! let x = solver.solve(&a, &b, Method::Cholesky).unwrap();
//! let y = solver.solve_named(&a, &b, "gauss").unwrap();
//! assert!((x[0] - y[0]).abs() < 1e-12);
//! assert!(solver.solve_named(&a, &b, "bogus").is_err());
//! ```

use crate::config::SolverConfig;
use crate::direct::{cholesky_solve, crout_solve, gauss_solve, lup_solve};
use crate::error::{DirectError, Result, ensure_len};
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

/// Built-in direct solvers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Method {
    /// Gaussian elimination
    #[default]
    #[serde(rename = "gauss")]
    Gauss,
    /// LU decomposition with partial pivoting
    #[serde(rename = "LUP")]
    Lup,
    /// Cholesky decomposition (symmetric positive definite input)
    #[serde(rename = "cholesky")]
    Cholesky,
    /// Crout decomposition (tridiagonal input)
    #[serde(rename = "crout")]
    Crout,
}

impl Method {
    /// All built-in methods, in dispatch-table order
    pub const ALL: [Method; 4] = [Method::Gauss, Method::Lup, Method::Cholesky, Method::Crout];

    /// Name used for string dispatch and configuration files
    pub fn name(&self) -> &'static str {
        match self {
            Method::Gauss => "gauss",
            Method::Lup => "LUP",
            Method::Cholesky => "cholesky",
            Method::Crout => "crout",
        }
    }

    /// Run the corresponding solver
    pub fn solve<T: RealField>(&self, a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
        match self {
            Method::Gauss => gauss_solve(a, b),
            Method::Lup => lup_solve(a, b),
            Method::Cholesky => cholesky_solve(a, b),
            Method::Crout => crout_solve(a, b),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = DirectError;

    fn from_str(s: &str) -> Result<Self> {
        Method::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| DirectError::InvalidMethod(s.to_string()))
    }
}

/// Signature every custom solver must have
pub type CustomSolver<T> = fn(&Array2<T>, &Array1<T>) -> Result<Array1<T>>;

/// Which solver to run
#[derive(Clone, Copy)]
pub enum SolverSelection<T: RealField> {
    /// One of the built-in methods
    Builtin(Method),
    /// A caller-supplied solver
    Custom(CustomSolver<T>),
}

impl<T: RealField> fmt::Debug for SolverSelection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverSelection::Builtin(m) => f.debug_tuple("Builtin").field(m).finish(),
            SolverSelection::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl<T: RealField> From<Method> for SolverSelection<T> {
    fn from(method: Method) -> Self {
        SolverSelection::Builtin(method)
    }
}

impl<T: RealField> From<CustomSolver<T>> for SolverSelection<T> {
    fn from(solver: CustomSolver<T>) -> Self {
        SolverSelection::Custom(solver)
    }
}

/// Uniform entry point over all direct solvers
#[derive(Debug, Clone, Default)]
pub struct DirectSolver {
    config: SolverConfig,
}

impl DirectSolver {
    /// Create a dispatcher bound to `config`
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve with the method from the configuration
    pub fn solve_default<T: RealField>(&self, a: &Array2<T>, b: &Array1<T>) -> Result<Array1<T>> {
        self.solve(a, b, self.config.method)
    }

    /// Solve `A x = b` with the selected solver
    ///
    /// A custom solver whose result length differs from the number of
    /// unknowns yields [`DirectError::SignatureMismatch`].
    pub fn solve<T, S>(&self, a: &Array2<T>, b: &Array1<T>, selection: S) -> Result<Array1<T>>
    where
        T: RealField,
        S: Into<SolverSelection<T>>,
    {
        let selection = selection.into();
        let start = Instant::now();

        if self.config.verbosity > 0 {
            log::info!(
                "Direct solve: {:?}, system {}x{}",
                selection,
                a.nrows(),
                a.ncols()
            );
        }

        let result = match selection {
            SolverSelection::Builtin(method) => method.solve(a, b),
            SolverSelection::Custom(solver) => {
                let x = solver(a, b)?;
                if x.len() != a.ncols() {
                    log::error!("supplied solver does not match required signature");
                    return Err(DirectError::SignatureMismatch {
                        expected: a.ncols(),
                        got: x.len(),
                    });
                }
                Ok(x)
            }
        };

        if self.config.verbosity > 1 {
            match &result {
                Ok(_) => log::debug!(
                    "Direct solve finished in {:.3}ms",
                    start.elapsed().as_secs_f64() * 1000.0
                ),
                Err(e) => log::debug!("Direct solve failed: {}", e),
            }
        }

        result
    }

    /// Solve `A x = b` with a solver selected by name
    ///
    /// Recognised names are `"gauss"`, `"LUP"`, `"cholesky"` and `"crout"`.
    /// Any other name is logged and reported as
    /// [`DirectError::InvalidMethod`]; no solver runs.
    pub fn solve_named<T: RealField>(
        &self,
        a: &Array2<T>,
        b: &Array1<T>,
        name: &str,
    ) -> Result<Array1<T>> {
        let method = name.parse::<Method>().inspect_err(|_| {
            log::error!("invalid direct solver specified: {}", name);
        })?;
        self.solve(a, b, method)
    }
}

/// Solve `A x = b` with a default-configured [`DirectSolver`]
pub fn solve<T, S>(a: &Array2<T>, b: &Array1<T>, selection: S) -> Result<Array1<T>>
where
    T: RealField,
    S: Into<SolverSelection<T>>,
{
    DirectSolver::default().solve(a, b, selection)
}

/// Check that `b` matches the row count of `a`
///
/// Custom solvers can use this to reject malformed systems the same way the
/// built-in ones do.
pub fn check_system<T: RealField>(a: &Array2<T>, b: &Array1<T>) -> Result<()> {
    ensure_len(a.nrows(), b.len())
}
