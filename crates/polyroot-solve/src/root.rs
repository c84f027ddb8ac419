//! Approximated roots.

use std::cmp::Ordering;
use std::fmt;

use num_complex::Complex64;

/// 2^63, the first `f64` above the `i64` range.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// An approximated root, collapsed to the simplest exact form.
///
/// A value with a zero imaginary part is real, and a real value with no
/// fractional part is an integer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Root {
    /// An integral real root.
    Integer(i64),
    /// A non-integral real root.
    Real(f64),
    /// A root off the real axis.
    Complex(Complex64),
}

impl Root {
    /// Collapses a complex value to the simplest variant that holds it.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_complex(z: Complex64) -> Self {
        if z.im != 0.0 {
            return Self::Complex(z);
        }

        if z.re.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&z.re) {
            Self::Integer(z.re as i64)
        } else {
            Self::Real(z.re)
        }
    }

    /// Returns the root as a complex number.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_complex(&self) -> Complex64 {
        match *self {
            Self::Integer(n) => Complex64::new(n as f64, 0.0),
            Self::Real(x) => Complex64::new(x, 0.0),
            Self::Complex(z) => z,
        }
    }

    /// Returns the real part.
    #[must_use]
    pub fn re(&self) -> f64 {
        self.to_complex().re
    }

    /// Returns the imaginary part.
    #[must_use]
    pub fn im(&self) -> f64 {
        self.to_complex().im
    }

    /// Returns true unless the root lies off the real axis.
    #[must_use]
    pub fn is_real(&self) -> bool {
        !matches!(self, Self::Complex(_))
    }

    /// Returns the integer value, if the root is an integer.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match *self {
            Self::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// Total order by real part, then imaginary part.
    ///
    /// Integers and reals compare numerically with each other, and `-0.0`
    /// equals `0.0`.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        let a = self.to_complex();
        let b = other.to_complex();
        cmp_part(a.re, b.re).then_with(|| cmp_part(a.im, b.im))
    }
}

fn cmp_part(a: f64, b: f64) -> Ordering {
    // Adding 0.0 turns -0.0 into 0.0
    (a + 0.0).total_cmp(&(b + 0.0))
}

impl From<Complex64> for Root {
    fn from(z: Complex64) -> Self {
        Self::from_complex(z)
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(x) => write!(f, "{x}"),
            Self::Complex(z) => write!(f, "{z}"),
        }
    }
}
