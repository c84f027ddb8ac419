//! The Durand-Kerner (Weierstrass) method.
//!
//! All `n` roots of a monic polynomial are approximated at once. Each
//! iteration updates every guess from the previous generation:
//!
//! ```text
//! g_i <- g_i - P(g_i) / prod_{j != i} (g_i - g_j)
//! ```
//!
//! The guesses start at successive powers of `0.4 + 0.9i`, which is neither
//! real nor on the unit circle, so no two seeds coincide and none is
//! trapped on the real axis.
//!
//! # References
//!
//! - Kerner, "Ein Gesamtschrittverfahren zur Berechnung der Nullstellen von
//!   Polynomen" (1966)

use num_complex::Complex64;
use polyroot_poly::Polynomial;
use tracing::{debug, trace};

use crate::error::{Result, SolveError};
use crate::root::Root;

/// Base of the initial guesses `SEED^k`, `k = 0..n`.
pub const SEED: Complex64 = Complex64::new(0.4, 0.9);

/// Configuration for the Durand-Kerner solver.
#[derive(Clone, Debug)]
pub struct DurandKernerConfig {
    /// Parts smaller than this in magnitude are snapped to zero.
    pub epsilon: f64,
    /// Iteration stops once no guess moves by this much or more.
    pub tolerance: f64,
    /// Maximum number of iterations; `None` iterates until convergence.
    pub max_iterations: Option<usize>,
}

impl Default for DurandKernerConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-12,
            tolerance: 1e-12,
            max_iterations: None,
        }
    }
}

/// Durand-Kerner root finder.
#[derive(Clone, Debug, Default)]
pub struct DurandKerner {
    /// Configuration.
    config: DurandKernerConfig,
}

impl DurandKerner {
    /// Creates a solver with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with custom configuration.
    #[must_use]
    pub fn with_config(config: DurandKernerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &DurandKernerConfig {
        &self.config
    }

    /// Approximates all roots of `poly`, sorted in descending order.
    ///
    /// A polynomial of degree `n >= 1` yields `n` roots, repeated roots
    /// included. Empty and constant polynomials have no roots. Roots are
    /// ordered by [`Root::total_cmp`], largest first.
    ///
    /// Without `max_iterations` this does not return for inputs on which
    /// the iteration never settles.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DegeneratePolynomial`] if the leading
    /// coefficient is zero, and [`SolveError::NoConvergence`] if the
    /// iteration cap is hit.
    pub fn calc_roots(&self, poly: &Polynomial) -> Result<Vec<Root>> {
        let Some(monic) = Self::monic(poly)? else {
            return Ok(Vec::new());
        };

        let mut roots: Vec<Root> = self
            .iterate(&monic)?
            .into_iter()
            .map(|z| self.snap(&monic, z))
            .collect();
        roots.sort_by(|a, b| b.total_cmp(a));

        Ok(roots)
    }

    /// Returns the converged approximations before any snapping, in seed
    /// order.
    ///
    /// # Errors
    ///
    /// Same as [`DurandKerner::calc_roots`].
    pub fn approximate_raw(&self, poly: &Polynomial) -> Result<Vec<Complex64>> {
        match Self::monic(poly)? {
            Some(monic) => self.iterate(&monic),
            None => Ok(Vec::new()),
        }
    }

    /// Divides by the leading coefficient. `None` means there is nothing to
    /// solve (no terms, or degree below 1).
    fn monic(poly: &Polynomial) -> Result<Option<Polynomial>> {
        if poly.is_empty() {
            return Ok(None);
        }

        let leading = poly.leading_coefficient()?;
        if leading == 0.0 {
            return Err(SolveError::DegeneratePolynomial);
        }

        if poly.degree()? < 1 {
            return Ok(None);
        }

        Ok(Some(poly.clone() / leading))
    }

    /// Runs the iteration on a monic polynomial of degree at least 1.
    fn iterate(&self, monic: &Polynomial) -> Result<Vec<Complex64>> {
        let degree = monic.degree()?;
        debug!(degree, "starting Durand-Kerner iteration");

        let mut previous: Vec<Complex64> = (0..degree).map(|k| SEED.powi(k)).collect();
        let mut current = step(monic, &previous);
        let mut iterations = 1;

        loop {
            let movement = max_movement(&previous, &current);
            trace!(iterations, movement, "Durand-Kerner step");

            if movement < self.config.tolerance {
                break;
            }

            if let Some(limit) = self.config.max_iterations {
                if iterations >= limit {
                    return Err(SolveError::NoConvergence {
                        iterations,
                        movement,
                    });
                }
            }

            previous = current;
            current = step(monic, &previous);
            iterations += 1;
        }

        debug!(iterations, "Durand-Kerner converged");
        Ok(current)
    }

    /// Picks the candidate near `z` with the smallest residual `|P(c)|`.
    ///
    /// Each part is snapped to zero below `epsilon` and rounded to the
    /// nearest integer (ties to even) otherwise. The first candidate wins
    /// ties.
    fn snap(&self, monic: &Polynomial, z: Complex64) -> Root {
        let epsilon = self.config.epsilon;
        let snap_part = |x: f64| {
            if x.abs() < epsilon {
                0.0
            } else {
                x.round_ties_even()
            }
        };
        let real = snap_part(z.re);
        let imag = snap_part(z.im);

        let candidates = [
            Complex64::new(real, imag),
            Complex64::new(z.re, imag),
            Complex64::new(real, z.im),
            Complex64::new(real, imag),
            z,
        ];

        let mut best = candidates[0];
        let mut best_residual = monic.evaluate(best).norm();
        for &candidate in &candidates[1..] {
            let residual = monic.evaluate(candidate).norm();
            if residual < best_residual {
                best = candidate;
                best_residual = residual;
            }
        }

        Root::from_complex(best)
    }
}

/// One simultaneous update of every guess.
fn step(monic: &Polynomial, guesses: &[Complex64]) -> Vec<Complex64> {
    guesses
        .iter()
        .enumerate()
        .map(|(i, &g)| {
            let denominator: Complex64 = guesses
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &other)| g - other)
                .product();
            g - monic.evaluate(g) / denominator
        })
        .collect()
}

/// Largest distance any guess moved between two generations.
///
/// `NaN` distances are skipped by `f64::max`, so a guess that became `NaN`
/// does not keep the loop running; it is returned as is.
fn max_movement(previous: &[Complex64], current: &[Complex64]) -> f64 {
    previous
        .iter()
        .zip(current)
        .map(|(p, c)| (p - c).norm())
        .fold(0.0, f64::max)
}

/// Approximates all roots of `poly` with the default configuration.
///
/// # Errors
///
/// See [`DurandKerner::calc_roots`].
pub fn calc_roots(poly: &Polynomial) -> Result<Vec<Root>> {
    DurandKerner::new().calc_roots(poly)
}

/// Approximates all roots of `poly` with a custom configuration.
///
/// # Errors
///
/// See [`DurandKerner::calc_roots`].
pub fn calc_roots_with(poly: &Polynomial, config: &DurandKernerConfig) -> Result<Vec<Root>> {
    DurandKerner::with_config(config.clone()).calc_roots(poly)
}
