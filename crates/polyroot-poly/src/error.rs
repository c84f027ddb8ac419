//! Errors raised while building or querying polynomials.

use thiserror::Error;

/// Errors that can occur in polynomial construction and queries.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// The polynomial has no terms, so it has no maximum degree.
    #[error("undefined degree: polynomial has no terms")]
    UndefinedDegree,

    /// A term token of the textual format could not be parsed.
    #[error("cannot parse term `{token}`: {reason}")]
    Parse {
        /// The offending token, as it appeared in the input.
        token: String,
        /// What was wrong with it.
        reason: String,
    },
}

impl PolyError {
    pub(crate) fn parse(token: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
