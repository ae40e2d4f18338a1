//! Error types for the direct solvers.
//!
//! Every decomposition reports structural and numerical failures through
//! [`DirectError`]. Failures abort the current call and never return a
//! partially computed result.

use thiserror::Error;

/// Errors that can occur while decomposing or solving a linear system.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectError {
    /// A square matrix was required.
    #[error("non-square matrix passed: {rows} x {cols}")]
    NotSquare {
        /// Number of rows of the offending matrix
        rows: usize,
        /// Number of columns of the offending matrix
        cols: usize,
    },

    /// The right-hand side (or another operand) does not match the matrix.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Expected length
        expected: usize,
        /// Actual length provided
        got: usize,
    },

    /// QR needs at least as many rows as columns.
    #[error("underdetermined system: {rows} rows < {cols} columns")]
    Underdetermined {
        /// Number of rows
        rows: usize,
        /// Number of columns
        cols: usize,
    },

    /// No usable (non-zero) pivot in a column.
    #[error("singular matrix: no valid pivot element in column {column}")]
    SingularMatrix {
        /// Column in which elimination failed
        column: usize,
    },

    /// Cholesky produced a zero, negative or NaN value under the square root.
    #[error("matrix is not positive definite: non-positive value on diagonal ({index},{index})")]
    NonPositiveDefinite {
        /// Diagonal index at which the factorization failed
        index: usize,
    },

    /// Crout elimination hit a zero diagonal entry of L.
    #[error("no crout decomposition exists: zero on diagonal ({index},{index})")]
    NoDecompositionExists {
        /// Diagonal index of the zero entry
        index: usize,
    },

    /// The Householder vector of a column vanished.
    #[error("rank deficient matrix: column {column} is linearly dependent")]
    RankDeficient {
        /// Column whose remaining sub-vector is zero
        column: usize,
    },

    /// Dispatch by an unknown solver name.
    #[error("invalid direct solver specified: {0}")]
    InvalidMethod(String),

    /// A custom solver returned a result of the wrong shape.
    #[error("supplied solver does not match required signature: expected {expected} values, got {got}")]
    SignatureMismatch {
        /// Expected solution length
        expected: usize,
        /// Length actually returned
        got: usize,
    },

    /// Not enough sample points for the requested polynomial degree.
    #[error("insufficient data: {points} points, at least {required} required")]
    InsufficientData {
        /// Number of points supplied
        points: usize,
        /// Minimum number required
        required: usize,
    },
}

/// A specialized `Result` type for direct solver operations.
pub type Result<T> = std::result::Result<T, DirectError>;

impl DirectError {
    /// Returns `true` if this is a shape-related error.
    ///
    /// This includes `NotSquare`, `DimensionMismatch` and `Underdetermined`.
    pub fn is_dimension_error(&self) -> bool {
        matches!(
            self,
            DirectError::NotSquare { .. }
                | DirectError::DimensionMismatch { .. }
                | DirectError::Underdetermined { .. }
        )
    }

    /// Returns `true` if the matrix itself cannot be factorized.
    ///
    /// This includes `SingularMatrix`, `NonPositiveDefinite`,
    /// `NoDecompositionExists` and `RankDeficient`.
    pub fn is_singular_error(&self) -> bool {
        matches!(
            self,
            DirectError::SingularMatrix { .. }
                | DirectError::NonPositiveDefinite { .. }
                | DirectError::NoDecompositionExists { .. }
                | DirectError::RankDeficient { .. }
        )
    }

    /// Returns `true` if this is a solver-selection error.
    pub fn is_dispatch_error(&self) -> bool {
        matches!(
            self,
            DirectError::InvalidMethod(_) | DirectError::SignatureMismatch { .. }
        )
    }
}

/// Ensure `rows == cols`.
pub(crate) fn ensure_square(rows: usize, cols: usize) -> Result<()> {
    if rows != cols {
        return Err(DirectError::NotSquare { rows, cols });
    }
    Ok(())
}

/// Ensure an operand has the expected length.
pub(crate) fn ensure_len(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(DirectError::DimensionMismatch { expected, got });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DirectError::NotSquare { rows: 2, cols: 3 };
        assert_eq!(err.to_string(), "non-square matrix passed: 2 x 3");

        let err = DirectError::SingularMatrix { column: 1 };
        assert_eq!(
            err.to_string(),
            "singular matrix: no valid pivot element in column 1"
        );

        let err = DirectError::InvalidMethod("bogus".to_string());
        assert_eq!(err.to_string(), "invalid direct solver specified: bogus");
    }

    #[test]
    fn test_is_dimension_error() {
        let dim_err = DirectError::DimensionMismatch {
            expected: 3,
            got: 2,
        };
        let singular = DirectError::SingularMatrix { column: 0 };

        assert!(dim_err.is_dimension_error());
        assert!(DirectError::Underdetermined { rows: 1, cols: 2 }.is_dimension_error());
        assert!(!singular.is_dimension_error());
    }

    #[test]
    fn test_is_singular_error() {
        assert!(DirectError::NonPositiveDefinite { index: 1 }.is_singular_error());
        assert!(DirectError::NoDecompositionExists { index: 0 }.is_singular_error());
        assert!(DirectError::RankDeficient { column: 2 }.is_singular_error());
        assert!(!DirectError::InvalidMethod("x".into()).is_singular_error());
    }

    #[test]
    fn test_is_dispatch_error() {
        let sig = DirectError::SignatureMismatch {
            expected: 3,
            got: 1,
        };
        assert!(sig.is_dispatch_error());
        assert!(!DirectError::NotSquare { rows: 1, cols: 2 }.is_dispatch_error());
    }

    #[test]
    fn test_ensure_helpers() {
        assert!(ensure_square(3, 3).is_ok());
        assert_eq!(
            ensure_square(3, 2),
            Err(DirectError::NotSquare { rows: 3, cols: 2 })
        );
        assert!(ensure_len(4, 4).is_ok());
        assert_eq!(
            ensure_len(4, 5),
            Err(DirectError::DimensionMismatch {
                expected: 4,
                got: 5
            })
        );
    }
}
