//! Points at which a polynomial can be evaluated.

use std::ops::Add;

use num_complex::Complex64;
use num_traits::Zero;

/// A numeric type a [`Term`](crate::Term) can be evaluated at.
///
/// Implemented for `f64` and [`Complex64`], so the same polynomial can be
/// evaluated on the real line or in the complex plane.
pub trait Evaluate: Copy + Zero + Add<Output = Self> {
    /// Computes `coefficient * self^degree`.
    fn monomial(self, coefficient: f64, degree: i32) -> Self;
}

impl Evaluate for f64 {
    fn monomial(self, coefficient: f64, degree: i32) -> Self {
        coefficient * self.powi(degree)
    }
}

impl Evaluate for Complex64 {
    fn monomial(self, coefficient: f64, degree: i32) -> Self {
        self.powi(degree) * coefficient
    }
}
