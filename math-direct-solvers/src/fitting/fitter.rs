//! Polynomial least-squares fitting via the normal equations
//!
//! For sample points `x` and a polynomial with `m = degree + 1` coefficients
//! the normal equations are `A c = b` with
//!
//! ```text
//! A[i, k] = sum_j x_j^(i + k)        b[i] = sum_j x_j^i y_j
//! ```
//!
//! `A` only depends on `x`, so the QR strategy factorizes it once and reuses
//! the factors for every set of `y` values.

use super::polynomial::Polynomial;
use crate::direct::{QrDecomposition, gauss_solve, qr_decompose};
use crate::error::{DirectError, Result, ensure_len};
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// How a [`PolynomialFitter`] solves the normal equations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitStrategy {
    /// Factorize the normal matrix once with Householder QR
    #[default]
    Qr,
    /// Run Gaussian elimination on every fit
    Gauss,
}

/// Normal matrix `A[i, k] = sum x^(i + k)` of size m x m
pub fn normal_matrix<T: RealField>(x: &Array1<T>, m: usize) -> Array2<T> {
    let sums = power_sums(x, 2 * m.max(1) - 1);
    Array2::from_shape_fn((m, m), |(i, k)| sums[i + k])
}

/// Right-hand side `b[i] = sum x^i y` of length m
pub fn normal_vector<T: RealField>(x: &Array1<T>, y: &Array1<T>, m: usize) -> Array1<T> {
    let mut b = Array1::zeros(m);
    for (&xj, &yj) in x.iter().zip(y.iter()) {
        let mut power = T::one();
        for bi in b.iter_mut() {
            *bi += power * yj;
            power *= xj;
        }
    }
    b
}

/// `sum x^p` for p = 0..count
fn power_sums<T: RealField>(x: &Array1<T>, count: usize) -> Vec<T> {
    let mut sums = vec![T::zero(); count];
    for &xj in x.iter() {
        let mut power = T::one();
        for s in sums.iter_mut() {
            *s += power;
            power *= xj;
        }
    }
    sums
}

/// Least-squares polynomial fit of fixed degree over fixed sample points
#[derive(Debug, Clone)]
pub struct PolynomialFitter<T: RealField> {
    x: Array1<T>,
    degree: usize,
    strategy: FitStrategy,
    qr: Option<QrDecomposition<T>>,
    polynomial: Polynomial<T>,
}

impl<T: RealField> PolynomialFitter<T> {
    /// Prepare a fitter for polynomials of `degree` over the points `x`
    ///
    /// With [`FitStrategy::Qr`] the normal matrix is factorized here.
    pub fn new(x: &Array1<T>, degree: usize, strategy: FitStrategy) -> Result<Self> {
        let qr = match strategy {
            FitStrategy::Qr => Some(qr_decompose(&normal_matrix(x, degree + 1))?),
            FitStrategy::Gauss => None,
        };
        Ok(Self {
            x: x.clone(),
            degree,
            strategy,
            qr,
            polynomial: Polynomial::new(vec![T::one()]),
        })
    }

    /// Switch strategy, keeping the current fitted polynomial
    pub fn with_strategy(mut self, strategy: FitStrategy) -> Result<Self> {
        if strategy == self.strategy {
            return Ok(self);
        }
        self.qr = match strategy {
            FitStrategy::Qr => Some(qr_decompose(&normal_matrix(&self.x, self.degree + 1))?),
            FitStrategy::Gauss => None,
        };
        self.strategy = strategy;
        Ok(self)
    }

    /// Degree of the fitted polynomial
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Active strategy
    pub fn strategy(&self) -> FitStrategy {
        self.strategy
    }

    /// Sample points
    pub fn x(&self) -> &Array1<T> {
        &self.x
    }

    /// The most recently fitted polynomial (the constant 1 before any fit)
    pub fn polynomial(&self) -> &Polynomial<T> {
        &self.polynomial
    }

    /// Fit the polynomial to `y` and return its ascending coefficients
    pub fn fit(&mut self, y: &Array1<T>) -> Result<Array1<T>> {
        ensure_len(self.x.len(), y.len())?;
        let m = self.degree + 1;
        let b = normal_vector(&self.x, y, m);

        let coefficients = match &self.qr {
            Some(qr) => qr.solve(&b)?,
            None => gauss_solve(&normal_matrix(&self.x, m), &b)?,
        };

        self.polynomial = Polynomial::from_array(coefficients.clone());
        Ok(coefficients)
    }

    /// Evaluate the fitted polynomial
    pub fn eval(&self, x: T) -> T {
        self.polynomial.eval(x)
    }

    /// `y - p(x)` at the sample points
    pub fn residuals(&self, y: &Array1<T>) -> Result<Array1<T>> {
        ensure_len(self.x.len(), y.len())?;
        Ok(y - &self.polynomial.eval_array(&self.x))
    }

    /// Standard deviation `sqrt(r.r / (n - degree))` of the residuals
    pub fn std_dev(&self, y: &Array1<T>) -> Result<T> {
        let n = self.x.len();
        if n <= self.degree {
            return Err(DirectError::InsufficientData {
                points: n,
                required: self.degree + 1,
            });
        }
        let r = self.residuals(y)?;
        let dof = T::from_usize_lossy(n - self.degree);
        Ok((r.dot(&r) / dof).sqrt())
    }
}

/// Result of [`find_best`]
#[derive(Debug, Clone)]
pub struct BestFit<T: RealField> {
    /// Fitter with the smallest residual standard deviation, QR strategy
    pub best: PolynomialFitter<T>,
    /// Standard deviation of `best`
    pub sigma: T,
    /// Every fitted candidate, by ascending degree
    pub candidates: Vec<PolynomialFitter<T>>,
}

/// Fit every degree from 0 to n - 2 and keep the one with the smallest
/// standard deviation
///
/// Ties keep the lower degree. The winner is returned with the QR strategy
/// bound so that further fits reuse its factorization.
pub fn find_best<T: RealField>(x: &Array1<T>, y: &Array1<T>) -> Result<BestFit<T>> {
    let n = x.len();
    ensure_len(n, y.len())?;
    if n < 2 {
        return Err(DirectError::InsufficientData {
            points: n,
            required: 2,
        });
    }

    let mut candidates = Vec::with_capacity(n - 1);
    let mut best: Option<(usize, T)> = None;

    for degree in 0..(n - 1) {
        let strategy = if degree == 0 {
            FitStrategy::Qr
        } else {
            FitStrategy::Gauss
        };
        let mut fitter = PolynomialFitter::new(x, degree, strategy)?;
        fitter.fit(y)?;
        let sigma = fitter.std_dev(y)?;

        log::debug!(
            "Polynomial fit degree {}: sigma = {:.6e}",
            degree,
            sigma.to_f64_lossy()
        );

        if best.is_none_or(|(_, min_sigma)| sigma < min_sigma) {
            best = Some((degree, sigma));
        }
        candidates.push(fitter);
    }

    let (index, sigma) = best.ok_or(DirectError::InsufficientData {
        points: n,
        required: 2,
    })?;
    let best = candidates[index].clone().with_strategy(FitStrategy::Qr)?;

    Ok(BestFit {
        best,
        sigma,
        candidates,
    })
}
