//! # polyroot
//!
//! Univariate polynomial arithmetic with numerical root finding.
//!
//! ## Features
//!
//! - **Terms and polynomials**: real coefficients, operators over
//!   polynomials, terms and scalars
//! - **Textual format**: `"1x^2 + -3x + 2"` parses and prints back
//! - **Degree halving**: strip `x -> x^2` substitutions with [`square_free`]
//! - **Root finding**: Durand-Kerner approximation of all complex roots
//!
//! ## Quick Start
//!
//! ```rust
//! use polyroot::prelude::*;
//!
//! let p: Polynomial = "1x^2 + -1".parse().unwrap();
//! assert_eq!(p.derivative().to_string(), "2x");
//! assert_eq!(calc_roots(&p).unwrap(), vec![Root::Integer(1), Root::Integer(-1)]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use polyroot_poly as poly;
pub use polyroot_solve as solve;

pub use polyroot_poly::square_free;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyroot_poly::{square_free, Evaluate, PolyError, Polynomial, Term, TermSum};
    pub use polyroot_solve::{
        calc_roots, calc_roots_with, DurandKerner, DurandKernerConfig, Root, SolveError,
    };
}
