//! Dense polynomials in the monomial basis

use crate::traits::RealField;
use ndarray::Array1;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Polynomial `c0 + c1 x + ... + cn x^n`
///
/// Coefficients are stored in ascending order with trailing zeros trimmed, so
/// two polynomials compare equal exactly when they have the same terms.
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<T: RealField> {
    coefficients: Array1<T>,
}

impl<T: RealField> Polynomial<T> {
    /// Create a polynomial from ascending coefficients
    pub fn new(coefficients: Vec<T>) -> Self {
        Self::from_array(Array1::from_vec(coefficients))
    }

    /// Create a polynomial from an ascending coefficient array
    pub fn from_array(coefficients: Array1<T>) -> Self {
        let len = coefficients
            .iter()
            .rposition(|&c| c != T::zero())
            .map_or(0, |i| i + 1);
        let coefficients = coefficients.slice(ndarray::s![..len]).to_owned();
        Self { coefficients }
    }

    /// The zero polynomial
    pub fn zero() -> Self {
        Self {
            coefficients: Array1::zeros(0),
        }
    }

    /// Ascending coefficients without trailing zeros
    pub fn coefficients(&self) -> &Array1<T> {
        &self.coefficients
    }

    /// Degree of the polynomial (0 for constants and the zero polynomial)
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Returns `true` for the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Evaluate at `x` with Horner's scheme
    pub fn eval(&self, x: T) -> T {
        self.coefficients
            .iter()
            .rev()
            .fold(T::zero(), |acc, &c| acc * x + c)
    }

    /// Evaluate at every point of `x`
    pub fn eval_array(&self, x: &Array1<T>) -> Array1<T> {
        x.mapv(|xi| self.eval(xi))
    }

    fn padded(&self, len: usize) -> Array1<T> {
        let mut c = Array1::zeros(len);
        c.slice_mut(ndarray::s![..self.coefficients.len()])
            .assign(&self.coefficients);
        c
    }
}

impl<T: RealField> Add for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, other: &Polynomial<T>) -> Polynomial<T> {
        let len = self.coefficients.len().max(other.coefficients.len());
        Polynomial::from_array(self.padded(len) + other.padded(len))
    }
}

impl<T: RealField> Sub for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, other: &Polynomial<T>) -> Polynomial<T> {
        let len = self.coefficients.len().max(other.coefficients.len());
        Polynomial::from_array(self.padded(len) - other.padded(len))
    }
}

impl<T: RealField> Mul for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, other: &Polynomial<T>) -> Polynomial<T> {
        if self.is_zero() || other.is_zero() {
            return Polynomial::zero();
        }
        let len = self.coefficients.len() + other.coefficients.len() - 1;
        let mut c = Array1::zeros(len);
        for (i, &a) in self.coefficients.iter().enumerate() {
            for (j, &b) in other.coefficients.iter().enumerate() {
                c[i + j] += a * b;
            }
        }
        Polynomial::from_array(c)
    }
}

impl<T: RealField> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        Polynomial::from_array(self.coefficients.mapv(|c| -c))
    }
}

impl<T: RealField> Add for Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, other: Polynomial<T>) -> Polynomial<T> {
        &self + &other
    }
}

impl<T: RealField> Sub for Polynomial<T> {
    type Output = Polynomial<T>;

    fn sub(self, other: Polynomial<T>) -> Polynomial<T> {
        &self - &other
    }
}

impl<T: RealField> Mul for Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, other: Polynomial<T>) -> Polynomial<T> {
        &self * &other
    }
}

impl<T: RealField> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        -&self
    }
}

/// Renders `c0 + c1x + c2x^2 ...`, skipping zero terms
///
/// Signs are pulled out of the coefficients and unit coefficients of
/// non-constant terms are omitted, e.g. `-1 + x - 2.5x^3`.
impl<T: RealField> fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut first = true;
        for (i, &c) in self.coefficients.iter().enumerate() {
            let c = c.to_f64_lossy();
            if c == 0.0 {
                continue;
            }

            let magnitude = c.abs();
            match (first, c < 0.0) {
                (true, true) => f.write_str("-")?,
                (true, false) => {}
                (false, true) => f.write_str(" - ")?,
                (false, false) => f.write_str(" + ")?,
            }
            first = false;

            if i == 0 || magnitude != 1.0 {
                write!(f, "{}", magnitude)?;
            }
            match i {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{}", i)?,
            }
        }
        Ok(())
    }
}
