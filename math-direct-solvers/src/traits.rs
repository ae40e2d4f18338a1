//! Core traits for the direct solvers
//!
//! This module defines the scalar abstraction used throughout the library:
//! - [`RealField`]: Trait for real floating-point element types

use ndarray::{LinalgScalar, ScalarOperand};
use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for scalar types that can be used by the direct solvers.
///
/// Every decomposition in this crate detects failure by comparing a pivot
/// against exact zero, so only real, ordered fields are supported.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default for all solvers)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float
    + NumAssign
    + FromPrimitive
    + ToPrimitive
    + LinalgScalar
    + ScalarOperand
    + Send
    + Sync
    + Debug
    + 'static
{
    /// Convert from an `f64` constant, falling back to NaN if it is not representable
    fn from_f64_lossy(value: f64) -> Self {
        Self::from_f64(value).unwrap_or_else(Self::nan)
    }

    /// Convert from a `usize` count
    fn from_usize_lossy(value: usize) -> Self {
        Self::from_usize(value).unwrap_or_else(Self::nan)
    }

    /// Lossy conversion to `f64`, used for logging
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    /// Sign of the value where zero counts as positive
    ///
    /// Used to choose the Householder reflection direction: a zero diagonal
    /// entry must still produce a non-trivial reflection.
    #[inline]
    fn sign_or_one(self) -> Self {
        if self < Self::zero() {
            -Self::one()
        } else {
            Self::one()
        }
    }
}

impl RealField for f64 {}

impl RealField for f32 {}
