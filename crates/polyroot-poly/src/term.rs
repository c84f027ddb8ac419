//! Single monomials `c·x^d`.
//!
//! Terms are plain values: every operator returns a new term. Adding two
//! terms is only closed when their degrees match, so `Term + Term` yields
//! a [`TermSum`] that is either the merged term or a two-term polynomial.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::eval::Evaluate;
use crate::polynomial::Polynomial;

/// Largest degree magnitude the textual format accepts.
///
/// Any sum or difference of two degrees within this bound fits in an `i32`,
/// so a product, quotient or derivative of parsed terms cannot overflow.
pub const MAX_DEGREE: i32 = 1 << 24;

/// Unwraps a checked degree operation.
fn checked_degree(degree: Option<i32>) -> i32 {
    match degree {
        Some(d) => d,
        None => panic!("degree overflow"),
    }
}

/// A monomial `coefficient * x^degree`.
///
/// A term with a zero coefficient is zero whatever its degree, but it is
/// not removed automatically; see [`Polynomial::purge`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Term {
    coefficient: f64,
    degree: i32,
}

impl Term {
    /// Creates the term `coefficient * x^degree`.
    #[must_use]
    pub const fn new(coefficient: f64, degree: i32) -> Self {
        Self {
            coefficient,
            degree,
        }
    }

    /// Creates the constant term `n`.
    #[must_use]
    pub const fn numerical(n: f64) -> Self {
        Self::new(n, 0)
    }

    /// Returns the coefficient.
    #[must_use]
    pub const fn coefficient(&self) -> f64 {
        self.coefficient
    }

    /// Returns the degree.
    #[must_use]
    pub const fn degree(&self) -> i32 {
        self.degree
    }

    /// Returns true if this is a constant (degree 0).
    #[must_use]
    pub const fn is_numerical(&self) -> bool {
        self.degree == 0
    }

    /// Returns true if both terms have the same degree.
    ///
    /// This is the comparison used when merging terms during addition.
    #[must_use]
    pub const fn has_same_degree(&self, other: &Self) -> bool {
        self.degree == other.degree
    }

    /// Computes the derivative `(c·d)·x^(d-1)`.
    ///
    /// A constant differentiates to `0·x^-1`, which callers are expected
    /// to purge.
    ///
    /// # Panics
    ///
    /// Panics if the degree is `i32::MIN`.
    #[must_use]
    pub fn derivative(&self) -> Self {
        Self::new(
            self.coefficient * f64::from(self.degree),
            checked_degree(self.degree.checked_sub(1)),
        )
    }

    /// Evaluates the term at `x`, real or complex.
    #[must_use]
    pub fn evaluate<T: Evaluate>(&self, x: T) -> T {
        x.monomial(self.coefficient, self.degree)
    }

    /// Adds two terms of the same degree.
    ///
    /// Returns `None` when the degrees differ.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.has_same_degree(other)
            .then(|| Self::new(self.coefficient + other.coefficient, self.degree))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.degree {
            0 => write!(f, "{}", self.coefficient),
            1 => write!(f, "{}x", self.coefficient),
            d => write!(f, "{}x^{d}", self.coefficient),
        }
    }
}

impl From<f64> for Term {
    fn from(n: f64) -> Self {
        Self::numerical(n)
    }
}

/// The result of adding two terms.
#[derive(Clone, Debug, PartialEq)]
pub enum TermSum {
    /// The degrees matched and the coefficients were summed.
    Merged(Term),
    /// The degrees differed; both terms are kept side by side.
    Split(Polynomial),
}

impl TermSum {
    /// Returns the merged term, if the degrees matched.
    #[must_use]
    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Self::Merged(term) => Some(term),
            Self::Split(_) => None,
        }
    }

    /// Converts the sum into a polynomial.
    #[must_use]
    pub fn into_polynomial(self) -> Polynomial {
        match self {
            Self::Merged(term) => Polynomial::from_terms(vec![term]),
            Self::Split(poly) => poly,
        }
    }
}

impl From<TermSum> for Polynomial {
    fn from(sum: TermSum) -> Self {
        sum.into_polynomial()
    }
}

// Arithmetic operations
impl Add for Term {
    type Output = TermSum;

    fn add(self, rhs: Self) -> Self::Output {
        match self.checked_add(&rhs) {
            Some(merged) => TermSum::Merged(merged),
            None => TermSum::Split(Polynomial::from_terms(vec![self, rhs])),
        }
    }
}

impl Add<f64> for Term {
    type Output = TermSum;

    fn add(self, rhs: f64) -> Self::Output {
        self + Term::numerical(rhs)
    }
}

impl Sub for Term {
    type Output = TermSum;

    fn sub(self, rhs: Self) -> Self::Output {
        self + rhs * -1.0
    }
}

impl Sub<f64> for Term {
    type Output = TermSum;

    fn sub(self, rhs: f64) -> Self::Output {
        self - Term::numerical(rhs)
    }
}

/// # Panics
///
/// Panics if the summed degree leaves the `i32` range.
impl Mul for Term {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(
            self.coefficient * rhs.coefficient,
            checked_degree(self.degree.checked_add(rhs.degree)),
        )
    }
}

impl Mul<f64> for Term {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self * Term::numerical(rhs)
    }
}

impl Mul<Term> for f64 {
    type Output = Term;

    fn mul(self, rhs: Term) -> Self::Output {
        rhs * self
    }
}

/// # Panics
///
/// Panics if the degree difference leaves the `i32` range.
impl Div for Term {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::new(
            self.coefficient / rhs.coefficient,
            checked_degree(self.degree.checked_sub(rhs.degree)),
        )
    }
}

impl Div<f64> for Term {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self / Term::numerical(rhs)
    }
}

impl Neg for Term {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self * -1.0
    }
}
