//! Polynomial least-squares fitting
//!
//! - [`Polynomial`]: monomial-basis polynomial with arithmetic and evaluation
//! - [`PolynomialFitter`]: fixed-degree fit through the normal equations
//! - [`find_best`]: degree selection by residual standard deviation

mod fitter;
mod polynomial;

pub use fitter::{BestFit, FitStrategy, PolynomialFitter, find_best, normal_matrix, normal_vector};
pub use polynomial::Polynomial;
