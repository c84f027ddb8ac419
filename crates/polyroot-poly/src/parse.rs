//! The `" + "`-separated textual format.
//!
//! ```text
//! 1x^2 + -3x + 2
//! ```
//!
//! Each token is a bare number (degree 0), `<c>x` / `x` (degree 1), or
//! `<c>x^<d>` / `x^<d>`. An omitted coefficient means 1. Negative
//! coefficients carry their sign inside the token; there is no binary
//! minus between terms.

use std::fmt;
use std::str::FromStr;

use crate::error::{PolyError, Result};
use crate::polynomial::Polynomial;
use crate::term::{Term, MAX_DEGREE};

/// Separator between term tokens.
pub const TERM_SEPARATOR: &str = " + ";

/// Parses a single term token.
///
/// # Errors
///
/// Returns [`PolyError::Parse`] naming the token if the coefficient is not
/// a number, the degree is not an integer, the `^` is missing, or the
/// degree magnitude exceeds [`MAX_DEGREE`].
pub fn parse_term(token: &str) -> Result<Term> {
    let trimmed = token.trim();

    let Some((coefficient, degree)) = trimmed.split_once('x') else {
        return parse_coefficient(token, trimmed).map(Term::numerical);
    };

    if degree.contains('x') {
        return Err(PolyError::parse(token, "more than one `x`"));
    }

    let coefficient = if coefficient.is_empty() {
        1.0
    } else {
        parse_coefficient(token, coefficient)?
    };

    let degree = if degree.is_empty() {
        1
    } else {
        let exponent = degree
            .strip_prefix('^')
            .ok_or_else(|| PolyError::parse(token, "expected `^` after `x`"))?;
        let degree = exponent
            .trim()
            .parse::<i32>()
            .map_err(|e| PolyError::parse(token, format!("invalid degree `{exponent}`: {e}")))?;
        if !(-MAX_DEGREE..=MAX_DEGREE).contains(&degree) {
            return Err(PolyError::parse(
                token,
                format!("degree {degree} exceeds {MAX_DEGREE}"),
            ));
        }
        degree
    };

    Ok(Term::new(coefficient, degree))
}

fn parse_coefficient(token: &str, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|e| PolyError::parse(token, format!("invalid coefficient `{text}`: {e}")))
}

impl FromStr for Polynomial {
    type Err = PolyError;

    /// Parses `"termA + termB + ..."`, accumulating the terms by addition.
    fn from_str(s: &str) -> Result<Self> {
        s.split(TERM_SEPARATOR)
            .try_fold(Self::new(), |poly, token| Ok(poly + parse_term(token)?))
    }
}

impl fmt::Display for Polynomial {
    /// Joins the terms by descending degree. The empty polynomial prints
    /// as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let terms: Vec<String> = self
            .display_terms()
            .iter()
            .map(ToString::to_string)
            .collect();
        write!(f, "{}", terms.join(TERM_SEPARATOR))
    }
}
