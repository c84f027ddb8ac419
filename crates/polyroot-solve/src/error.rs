//! Errors raised by the root finder.

use polyroot_poly::PolyError;
use thiserror::Error;

/// Errors that can occur while approximating roots.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SolveError {
    /// The input polynomial could not be queried.
    #[error(transparent)]
    Poly(#[from] PolyError),

    /// The leading coefficient is zero, so the polynomial cannot be made monic.
    #[error("degenerate polynomial: leading coefficient is zero")]
    DegeneratePolynomial,

    /// The iteration cap was reached before the approximations settled.
    #[error("no convergence after {iterations} iterations (last movement {movement:e})")]
    NoConvergence {
        /// Iterations performed.
        iterations: usize,
        /// Largest movement of any approximation in the last iteration.
        movement: f64,
    },
}

/// Result type for root finding.
pub type Result<T> = std::result::Result<T, SolveError>;
