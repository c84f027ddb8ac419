//! Univariate polynomials as sequences of terms.
//!
//! A [`Polynomial`] keeps its terms in insertion order. The sequence is not
//! sorted, and a polynomial built with [`Polynomial::from_terms`] may hold
//! several terms of one degree. Addition is the normalizing operation: it
//! re-accumulates every term through [`Polynomial::add_term`], so after any
//! sum there is at most one term per degree.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{PolyError, Result};
use crate::eval::Evaluate;
use crate::term::Term;

/// A univariate polynomial with real coefficients.
///
/// Every operation returns a new polynomial; the `*Assign` operators are
/// shorthand for rebinding the left operand to the result.
#[derive(Clone, Debug, Default)]
pub struct Polynomial {
    /// Terms in insertion order.
    terms: Vec<Term>,
}

impl Polynomial {
    /// Creates the empty polynomial (no terms).
    #[must_use]
    pub const fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Creates a polynomial from terms, without merging or purging them.
    #[must_use]
    pub fn from_terms(terms: Vec<Term>) -> Self {
        Self { terms }
    }

    /// Returns the terms in their stored order.
    #[must_use]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of stored terms, zero terms included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if there are no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the degree of every term, in stored order.
    #[must_use]
    pub fn degrees(&self) -> Vec<i32> {
        self.terms.iter().map(Term::degree).collect()
    }

    /// Returns the coefficient of every term, in stored order.
    #[must_use]
    pub fn coefficients(&self) -> Vec<f64> {
        self.terms.iter().map(Term::coefficient).collect()
    }

    /// Returns the maximum degree among the terms.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::UndefinedDegree`] if there are no terms.
    pub fn degree(&self) -> Result<i32> {
        self.terms
            .iter()
            .map(Term::degree)
            .max()
            .ok_or(PolyError::UndefinedDegree)
    }

    /// Returns the coefficient of the first term of maximum degree.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::UndefinedDegree`] if there are no terms.
    pub fn leading_coefficient(&self) -> Result<f64> {
        let degree = self.degree()?;
        self.coefficient_of(degree).ok_or(PolyError::UndefinedDegree)
    }

    /// Returns the coefficient of the first term with exactly this degree.
    #[must_use]
    pub fn coefficient_of(&self, degree: i32) -> Option<f64> {
        self.terms
            .iter()
            .find(|term| term.degree() == degree)
            .map(Term::coefficient)
    }

    /// Returns true if some term has exactly this degree.
    #[must_use]
    pub fn has_degree(&self, degree: i32) -> bool {
        self.terms.iter().any(|term| term.degree() == degree)
    }

    /// Computes the derivative.
    ///
    /// Zero-coefficient terms are purged from the result, including the
    /// `0x^-1` left behind by differentiating a constant.
    #[must_use]
    pub fn derivative(&self) -> Self {
        self.terms
            .iter()
            .map(Term::derivative)
            .fold(Self::new(), |acc, term| acc.add_term(term))
            .purge()
    }

    /// Evaluates the polynomial at `x`, real or complex.
    #[must_use]
    pub fn evaluate<T: Evaluate>(&self, x: T) -> T {
        self.terms
            .iter()
            .fold(T::zero(), |acc, term| acc + term.evaluate(x))
    }

    /// Pads the polynomial with explicit zero terms.
    ///
    /// A `0x^i` term is appended for every degree `i` in `0..degree` that
    /// has no term yet. The range stops below the polynomial's degree.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::UndefinedDegree`] if there are no terms.
    pub fn all_terms(&self) -> Result<Self> {
        let degree = self.degree()?;
        let mut terms = self.terms.clone();

        for i in 0..degree {
            if !self.has_degree(i) {
                terms.push(Term::new(0.0, i));
            }
        }

        Ok(Self { terms })
    }

    /// Removes every term whose coefficient is exactly zero.
    #[must_use]
    pub fn purge(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .copied()
                .filter(|term| term.coefficient() != 0.0)
                .collect(),
        }
    }

    /// Adds a single term.
    ///
    /// Without a term of the same degree, `term` is appended. Otherwise
    /// `term` is merged into the first such term and every term is
    /// re-accumulated through this method, which also collapses any other
    /// equal-degree terms that were already present.
    #[must_use]
    pub fn add_term(&self, term: Term) -> Self {
        if !self.has_degree(term.degree()) {
            let mut terms = self.terms.clone();
            terms.push(term);
            return Self { terms };
        }

        let mut pending = Some(term);
        let mut result = Self::new();
        for existing in &self.terms {
            let merged = match pending {
                Some(addend) => existing.checked_add(&addend),
                None => None,
            };
            if merged.is_some() {
                pending = None;
            }
            result = result.add_term(merged.unwrap_or(*existing));
        }

        result
    }

    /// Adds two polynomials, normalizing the result.
    #[must_use]
    pub fn add_poly(&self, other: &Self) -> Self {
        self.terms
            .iter()
            .chain(&other.terms)
            .fold(Self::new(), |acc, &term| acc.add_term(term))
    }

    /// Multiplies two polynomials.
    ///
    /// `self` is multiplied by each term of `other` and the partial
    /// products are summed.
    #[must_use]
    pub fn mul_poly(&self, other: &Self) -> Self {
        other
            .terms
            .iter()
            .fold(Self::new(), |acc, &term| acc.add_poly(&self.mul_term(term)))
    }

    /// Multiplies every term by `term`, without normalizing.
    #[must_use]
    pub fn mul_term(&self, term: Term) -> Self {
        Self {
            terms: self.terms.iter().map(|&t| t * term).collect(),
        }
    }

    /// Divides every term by `term`.
    ///
    /// This is term-wise division, not polynomial long division.
    #[must_use]
    pub fn div_term(&self, term: Term) -> Self {
        Self {
            terms: self.terms.iter().map(|&t| t / term).collect(),
        }
    }

    /// Multiplies every coefficient by `c`.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        self.mul_term(Term::numerical(c))
    }

    /// Returns the terms sorted by ascending degree, stable on ties.
    fn sorted_terms(&self) -> Vec<Term> {
        let mut terms = self.terms.clone();
        terms.sort_by_key(Term::degree);
        terms
    }

    /// Returns the terms sorted by descending degree, stable on ties.
    pub(crate) fn display_terms(&self) -> Vec<Term> {
        let mut terms = self.terms.clone();
        terms.sort_by(|a, b| b.degree().cmp(&a.degree()));
        terms
    }
}

/// Exact comparison of the degree-sorted term sequences.
///
/// An explicit `0x^d` term is not equal to an absent one.
impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.terms.len() == other.terms.len() && self.sorted_terms() == other.sorted_terms()
    }
}

impl From<Term> for Polynomial {
    fn from(term: Term) -> Self {
        Self::from_terms(vec![term])
    }
}

impl From<f64> for Polynomial {
    fn from(n: f64) -> Self {
        Self::from(Term::numerical(n))
    }
}

impl Sum<Term> for Polynomial {
    fn sum<I: Iterator<Item = Term>>(iter: I) -> Self {
        iter.fold(Self::new(), |acc, term| acc.add_term(term))
    }
}

// Arithmetic operations
impl Add<Term> for Polynomial {
    type Output = Self;

    fn add(self, rhs: Term) -> Self::Output {
        self.add_term(rhs)
    }
}

impl Add<f64> for Polynomial {
    type Output = Self;

    fn add(self, rhs: f64) -> Self::Output {
        self.add_term(Term::numerical(rhs))
    }
}

impl Add<Polynomial> for Term {
    type Output = Polynomial;

    fn add(self, rhs: Polynomial) -> Self::Output {
        rhs.add_term(self)
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_poly(&rhs)
    }
}

impl Add<&Polynomial> for Polynomial {
    type Output = Self;

    fn add(self, rhs: &Polynomial) -> Self::Output {
        self.add_poly(rhs)
    }
}

impl Add for &Polynomial {
    type Output = Polynomial;

    fn add(self, rhs: Self) -> Self::Output {
        self.add_poly(rhs)
    }
}

impl Sub<Term> for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Term) -> Self::Output {
        self.add_term(rhs * -1.0)
    }
}

impl Sub<f64> for Polynomial {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self::Output {
        self - Term::numerical(rhs)
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_poly(&rhs.scale(-1.0))
    }
}

impl Sub<&Polynomial> for Polynomial {
    type Output = Self;

    fn sub(self, rhs: &Polynomial) -> Self::Output {
        self.add_poly(&rhs.scale(-1.0))
    }
}

impl Sub for &Polynomial {
    type Output = Polynomial;

    fn sub(self, rhs: Self) -> Self::Output {
        self.add_poly(&rhs.scale(-1.0))
    }
}

impl Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_poly(&rhs)
    }
}

impl Mul<&Polynomial> for Polynomial {
    type Output = Self;

    fn mul(self, rhs: &Polynomial) -> Self::Output {
        self.mul_poly(rhs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_poly(rhs)
    }
}

impl Mul<Term> for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Term) -> Self::Output {
        self.mul_term(rhs)
    }
}

impl Mul<f64> for Polynomial {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<Polynomial> for f64 {
    type Output = Polynomial;

    fn mul(self, rhs: Polynomial) -> Self::Output {
        rhs.scale(self)
    }
}

impl Div<Term> for Polynomial {
    type Output = Self;

    fn div(self, rhs: Term) -> Self::Output {
        self.div_term(rhs)
    }
}

impl Div<f64> for Polynomial {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        self.div_term(Term::numerical(rhs))
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.scale(-1.0)
    }
}

impl<T> AddAssign<T> for Polynomial
where
    Polynomial: Add<T, Output = Polynomial>,
{
    fn add_assign(&mut self, rhs: T) {
        *self = std::mem::take(self) + rhs;
    }
}

impl<T> SubAssign<T> for Polynomial
where
    Polynomial: Sub<T, Output = Polynomial>,
{
    fn sub_assign(&mut self, rhs: T) {
        *self = std::mem::take(self) - rhs;
    }
}

impl<T> MulAssign<T> for Polynomial
where
    Polynomial: Mul<T, Output = Polynomial>,
{
    fn mul_assign(&mut self, rhs: T) {
        *self = std::mem::take(self) * rhs;
    }
}

impl<T> DivAssign<T> for Polynomial
where
    Polynomial: Div<T, Output = Polynomial>,
{
    fn div_assign(&mut self, rhs: T) {
        *self = std::mem::take(self) / rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;

    fn poly(terms: &[(f64, i32)]) -> Polynomial {
        Polynomial::from_terms(terms.iter().map(|&(c, d)| Term::new(c, d)).collect())
    }

    #[test]
    fn test_degree_queries() {
        let p = poly(&[(2.0, 1), (-3.0, 4), (5.0, 0)]);
        assert_eq!(p.degree(), Ok(4));
        assert_eq!(p.leading_coefficient(), Ok(-3.0));
        assert_eq!(p.degrees(), vec![1, 4, 0]);
        assert_eq!(p.coefficients(), vec![2.0, -3.0, 5.0]);
        assert!(p.has_degree(0));
        assert!(!p.has_degree(2));
        assert_eq!(p.coefficient_of(1), Some(2.0));
        assert_eq!(p.coefficient_of(3), None);
    }

    #[test]
    fn test_empty_degree_is_undefined() {
        let p = Polynomial::new();
        assert!(p.is_empty());
        assert_eq!(p.degree(), Err(PolyError::UndefinedDegree));
        assert_eq!(p.leading_coefficient(), Err(PolyError::UndefinedDegree));
        assert_eq!(p.all_terms(), Err(PolyError::UndefinedDegree));
    }

    #[test]
    fn test_add_term_merges_same_degree() {
        let p = poly(&[(1.0, 2), (3.0, 0)]) + Term::new(4.0, 2);
        assert_eq!(p.terms(), &[Term::new(5.0, 2), Term::numerical(3.0)]);

        let q = p + Term::new(1.0, 1);
        assert_eq!(q.len(), 3);
        assert_eq!(q.coefficient_of(1), Some(1.0));
    }

    #[test]
    fn test_add_term_collapses_existing_duplicates() {
        // Two x terms already present; adding a third merges all of them.
        let p = poly(&[(1.0, 1), (2.0, 1), (7.0, 0)]) + Term::new(4.0, 1);
        assert_eq!(p.len(), 2);
        assert_eq!(p.coefficient_of(1), Some(7.0));
        assert_eq!(p.coefficient_of(0), Some(7.0));
    }

    #[test]
    fn test_add_keeps_zero_terms() {
        let p = poly(&[(1.0, 2)]) + Term::new(-1.0, 2);
        assert_eq!(p.terms(), &[Term::new(0.0, 2)]);
        assert!(p.purge().is_empty());
    }

    #[test]
    fn test_add_poly_normalizes() {
        let a = poly(&[(1.0, 2), (1.0, 2), (1.0, 0)]);
        let b = poly(&[(2.0, 1), (3.0, 0)]);
        let sum = a + b;
        assert_eq!(sum.len(), 3);
        assert_eq!(sum.coefficient_of(2), Some(2.0));
        assert_eq!(sum.coefficient_of(1), Some(2.0));
        assert_eq!(sum.coefficient_of(0), Some(4.0));
    }

    #[test]
    fn test_sub() {
        let a = poly(&[(3.0, 2), (1.0, 0)]);
        let b = poly(&[(1.0, 2), (1.0, 0)]);
        let diff = &a - &b;
        assert_eq!(diff, poly(&[(2.0, 2), (0.0, 0)]));
        assert_eq!(diff.purge(), poly(&[(2.0, 2)]));

        assert_eq!(a.clone() - 1.0, poly(&[(3.0, 2), (0.0, 0)]));
        assert_eq!(a - Term::new(3.0, 2), poly(&[(0.0, 2), (1.0, 0)]));
    }

    #[test]
    fn test_mul() {
        // (x + 1)(x - 1) = x^2 - 1
        let a = poly(&[(1.0, 1), (1.0, 0)]);
        let b = poly(&[(1.0, 1), (-1.0, 0)]);
        let product = (&a * &b).purge();
        assert_eq!(product, poly(&[(1.0, 2), (-1.0, 0)]));

        assert_eq!(a.clone() * 2.0, poly(&[(2.0, 1), (2.0, 0)]));
        assert_eq!(2.0 * a.clone(), poly(&[(2.0, 1), (2.0, 0)]));
        assert_eq!(a * Term::new(3.0, 2), poly(&[(3.0, 3), (3.0, 2)]));
    }

    #[test]
    fn test_mul_by_empty() {
        let a = poly(&[(1.0, 1), (1.0, 0)]);
        assert!((&a * &Polynomial::new()).is_empty());
    }

    #[test]
    fn test_div() {
        let p = poly(&[(4.0, 3), (2.0, 1)]);
        assert_eq!(p.clone() / 2.0, poly(&[(2.0, 3), (1.0, 1)]));
        assert_eq!(p / Term::new(2.0, 1), poly(&[(2.0, 2), (1.0, 0)]));
    }

    #[test]
    fn test_assign_ops_rebind() {
        let mut p = Polynomial::new();
        p += Term::new(1.0, 2);
        p += 3.0;
        p -= Term::new(1.0, 1);
        p *= 2.0;
        p /= 2.0;
        assert_eq!(p, poly(&[(1.0, 2), (3.0, 0), (-1.0, 1)]));

        p *= poly(&[(1.0, 1)]);
        assert_eq!(p.degree(), Ok(3));
    }

    #[test]
    fn test_derivative() {
        // d/dx (3x^3 + 2x + 5) = 9x^2 + 2
        let p = poly(&[(3.0, 3), (2.0, 1), (5.0, 0)]);
        assert_eq!(p.derivative(), poly(&[(9.0, 2), (2.0, 0)]));
    }

    #[test]
    fn test_derivative_of_constant_is_empty() {
        assert!(poly(&[(5.0, 0)]).derivative().is_empty());
    }

    #[test]
    fn test_evaluate() {
        // 2x^2 - 3x + 1
        let p = poly(&[(2.0, 2), (-3.0, 1), (1.0, 0)]);
        assert_eq!(p.evaluate(0.0), 1.0);
        assert_eq!(p.evaluate(2.0), 3.0);

        // x^2 + 1 vanishes at i
        let q = poly(&[(1.0, 2), (1.0, 0)]);
        assert_eq!(q.evaluate(Complex64::new(0.0, 1.0)), Complex64::new(0.0, 0.0));
        assert_eq!(Polynomial::new().evaluate(3.0), 0.0);
    }

    #[test]
    fn test_all_terms_pads_below_degree() {
        let p = poly(&[(1.0, 3), (2.0, 1)]);
        let padded = p.all_terms().unwrap();
        assert_eq!(padded.degrees(), vec![3, 1, 0, 2]);
        assert_eq!(padded.coefficient_of(0), Some(0.0));
        assert_eq!(padded.coefficient_of(2), Some(0.0));

        let constant = poly(&[(4.0, 0)]);
        assert_eq!(constant.all_terms().unwrap(), constant);
    }

    #[test]
    fn test_purge_is_exact() {
        let p = poly(&[(0.0, 2), (1e-300, 1), (-0.0, 0)]);
        assert_eq!(p.purge(), poly(&[(1e-300, 1)]));
    }

    #[test]
    fn test_eq_ignores_order_not_zero_terms() {
        let a = poly(&[(1.0, 2), (3.0, 0)]);
        let b = poly(&[(3.0, 0), (1.0, 2)]);
        assert_eq!(a, b);

        let c = poly(&[(3.0, 0), (1.0, 2), (0.0, 1)]);
        assert_ne!(a, c);
        assert_ne!(a, poly(&[(1.0, 2), (4.0, 0)]));
    }

    #[test]
    fn test_sum_of_terms() {
        let p: Polynomial = [Term::new(1.0, 1), Term::new(2.0, 0), Term::new(3.0, 1)]
            .into_iter()
            .sum();
        assert_eq!(p, poly(&[(4.0, 1), (2.0, 0)]));
    }

    #[test]
    fn test_term_plus_polynomial() {
        let p = Term::new(1.0, 0) + poly(&[(1.0, 1), (1.0, 0)]);
        assert_eq!(p, poly(&[(1.0, 1), (2.0, 0)]));
    }
}
