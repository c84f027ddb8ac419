//! Degree halving of polynomials in `x^2`.
//!
//! If every term has an even degree, `p(x) = q(x^2)` for some `q`, and the
//! roots of `p` are the square roots of the roots of `q`. [`square_free`]
//! repeatedly replaces `p` by `q` until some degree is odd. This strips a
//! substitution `x -> x^2`; it is not a squarefree factorization.
//!
//! # Example
//!
//! ```
//! use polyroot_poly::{square_free, Polynomial};
//!
//! let p: Polynomial = "1x^4 + 1x^2".parse().unwrap();
//! assert_eq!(square_free(&p).to_string(), "1x^2 + 1x");
//! ```

use tracing::trace;

use crate::polynomial::Polynomial;
use crate::term::Term;

/// Halves every degree while all degrees are even.
///
/// Coefficients are unchanged. Stops as soon as any degree is odd, or when
/// every degree is already 0 since halving would no longer change anything.
#[must_use]
pub fn square_free(poly: &Polynomial) -> Polynomial {
    let mut current = poly.clone();

    while is_halvable(&current) {
        current = halve_degrees(&current);
        trace!(degrees = ?current.degrees(), "halved polynomial degrees");
    }

    current
}

fn is_halvable(poly: &Polynomial) -> bool {
    let terms = poly.terms();
    terms.iter().all(|term| term.degree() % 2 == 0) && terms.iter().any(|term| term.degree() != 0)
}

fn halve_degrees(poly: &Polynomial) -> Polynomial {
    Polynomial::from_terms(
        poly.terms()
            .iter()
            .map(|term| Term::new(term.coefficient(), term.degree() / 2))
            .collect(),
    )
}
