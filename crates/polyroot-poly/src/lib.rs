//! # polyroot-poly
//!
//! Univariate polynomials with real coefficients.
//!
//! This crate provides:
//! - [`Term`]: a single monomial `c·x^d`
//! - [`Polynomial`]: a sum of terms, merged to one term per degree on addition
//! - The `" + "`-separated textual format ([`std::str::FromStr`] / [`std::fmt::Display`])
//! - [`algorithms::square_free`]: repeated degree halving while all degrees are even
//!
//! ## Normalization
//!
//! Terms are never purged implicitly. Every addition re-accumulates the
//! operands term by term, so equal-degree terms collapse into one, but
//! zero-coefficient terms survive until [`Polynomial::purge`] is called.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod algorithms;
pub mod error;
pub mod eval;
pub mod parse;
pub mod polynomial;
pub mod term;

#[cfg(test)]
mod proptests;

pub use algorithms::square_free::square_free;
pub use error::{PolyError, Result};
pub use eval::Evaluate;
pub use polynomial::Polynomial;
pub use term::{Term, TermSum, MAX_DEGREE};
