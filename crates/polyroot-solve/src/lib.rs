//! Numerical root finding for univariate polynomials.
//!
//! This crate provides:
//!
//! - **Durand-Kerner**: simultaneous fixed-point approximation of all
//!   complex roots of a [`Polynomial`](polyroot_poly::Polynomial)
//! - **Root snapping**: converged values are snapped to nearby integers or
//!   to the real axis whenever that lowers the residual
//!
//! # Example
//!
//! ```
//! use polyroot_poly::Polynomial;
//! use polyroot_solve::{calc_roots, Root};
//!
//! let p: Polynomial = "1x^2 + -1".parse().unwrap();
//! assert_eq!(calc_roots(&p).unwrap(), vec![Root::Integer(1), Root::Integer(-1)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod durand_kerner;
pub mod error;
pub mod root;

#[cfg(test)]
mod proptests;

pub use durand_kerner::{calc_roots, calc_roots_with, DurandKerner, DurandKernerConfig};
pub use error::{Result, SolveError};
pub use root::Root;
