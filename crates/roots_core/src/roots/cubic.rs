//! Degree 3: `ax³ + bx² + cx + d = 0` by multi-seed local search.
//!
//! Newton-Raphson is started from each seed of a fixed seed set. Every seed
//! attempt produces a [`SeedAttempt`] holding `Result<f64, SolverError>`;
//! converged values are accepted unless they lie within the deduplication
//! tolerance of an already accepted root, and failures are skipped.
//!
//! Only real roots are sought. Complex roots are never returned, and a real
//! root whose basin of attraction contains none of the seeds is missed.

use super::RootSolver;
use crate::math::polynomial::{horner, horner_with_derivative};
use crate::math::solvers::{NewtonRaphsonSolver, SolverConfig};
use crate::types::{Coefficients, ComplexRoot, Degree, RootSet, SolveError, SolverError};
use tracing::debug;

/// Seeds tried in order.
pub const DEFAULT_SEEDS: [f64; 3] = [-10.0, 0.0, 10.0];

/// Absolute tolerance on the real part below which two roots are duplicates.
pub const DEFAULT_DEDUP_TOLERANCE: f64 = 1e-6;

/// Tuning for [`CubicApproximator`].
///
/// # Example
///
/// ```
/// use roots_core::roots::{CubicSettings, DEFAULT_SEEDS};
///
/// let settings = CubicSettings::default();
/// assert_eq!(settings.seeds, DEFAULT_SEEDS.to_vec());
/// assert_eq!(settings.dedup_tolerance, 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CubicSettings {
    /// Starting points, tried in order.
    pub seeds: Vec<f64>,
    /// Absolute real-part distance under which a root counts as a duplicate.
    pub dedup_tolerance: f64,
    /// Newton-Raphson convergence tolerance and iteration cap per seed.
    pub newton: SolverConfig<f64>,
}

impl Default for CubicSettings {
    fn default() -> Self {
        Self {
            seeds: DEFAULT_SEEDS.to_vec(),
            dedup_tolerance: DEFAULT_DEDUP_TOLERANCE,
            newton: SolverConfig::default(),
        }
    }
}

/// Outcome of running the local solver from one seed.
#[derive(Debug, Clone, PartialEq)]
pub struct SeedAttempt {
    /// Starting point.
    pub seed: f64,
    /// Converged root, or why the iteration stopped.
    pub outcome: Result<f64, SolverError>,
}

/// Approximate real roots of a cubic from a fixed set of seeds.
#[derive(Debug, Clone, Default)]
pub struct CubicApproximator {
    settings: CubicSettings,
}

impl CubicApproximator {
    /// Create an approximator with the given settings.
    pub fn new(settings: CubicSettings) -> Self {
        Self { settings }
    }

    /// Returns a reference to the settings.
    pub fn settings(&self) -> &CubicSettings {
        &self.settings
    }

    /// Run Newton-Raphson from every seed on the polynomial `coeffs`.
    ///
    /// Attempts are returned in seed order; none of them is filtered.
    pub fn attempts(&self, coeffs: &[f64]) -> Vec<SeedAttempt> {
        let solver = NewtonRaphsonSolver::new(self.settings.newton);
        let f = |x: f64| horner(coeffs, x);
        let f_prime = |x: f64| horner_with_derivative(coeffs, x).1;

        self.settings
            .seeds
            .iter()
            .map(|&seed| SeedAttempt {
                seed,
                outcome: solver.find_root(f, f_prime, seed),
            })
            .collect()
    }

    /// Fold seed attempts into a root set.
    ///
    /// Converged values within `dedup_tolerance` (real part only) of an
    /// accepted root are discarded. Failed attempts are skipped.
    ///
    /// # Errors
    ///
    /// `SolveError::NoRootsFound` when no attempt converged.
    pub fn aggregate(&self, attempts: &[SeedAttempt]) -> Result<RootSet, SolveError> {
        let mut accepted: Vec<f64> = Vec::with_capacity(attempts.len());

        for attempt in attempts {
            match &attempt.outcome {
                Ok(root) => {
                    let duplicate = accepted
                        .iter()
                        .any(|r| (r - root).abs() <= self.settings.dedup_tolerance);
                    if duplicate {
                        debug!(seed = attempt.seed, root, "discarding duplicate cubic root");
                    } else {
                        accepted.push(*root);
                    }
                }
                Err(reason) => {
                    debug!(seed = attempt.seed, %reason, "cubic seed did not converge");
                }
            }
        }

        if accepted.is_empty() {
            return Err(SolveError::NoRootsFound);
        }

        Ok(accepted.into_iter().map(ComplexRoot::real).collect())
    }
}

impl RootSolver for CubicApproximator {
    fn degree(&self) -> Degree {
        Degree::Cubic
    }

    fn solve(&self, coefficients: &Coefficients) -> Result<RootSet, SolveError> {
        let coeffs = coefficients.as_slice();
        if coeffs.len() != 4 {
            return Err(SolveError::CoefficientCountMismatch {
                degree: Degree::Cubic,
                expected: 4,
                got: coeffs.len(),
            });
        }
        let attempts = self.attempts(coeffs);
        self.aggregate(&attempts)
    }
}

/// Approximate real roots of `ax³ + bx² + cx + d` from the default seeds.
///
/// The caller guarantees `a != 0`.
///
/// # Example
///
/// ```
/// use roots_core::roots::solve_cubic;
///
/// // x³ - 8: only the real cube root is found
/// let roots = solve_cubic(1.0, 0.0, 0.0, -8.0).unwrap();
/// assert_eq!(roots.len(), 1);
/// assert!((roots[0].real - 2.0).abs() < 1e-9);
/// ```
///
/// # Errors
///
/// `SolveError::NoRootsFound` when no seed converged.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Result<RootSet, SolveError> {
    let approximator = CubicApproximator::default();
    let attempts = approximator.attempts(&[a, b, c, d]);
    approximator.aggregate(&attempts)
}
