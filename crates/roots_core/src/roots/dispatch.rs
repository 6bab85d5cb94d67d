//! Validation and routing to the degree-specific solvers.

use super::{
    CubicApproximator, CubicSettings, LinearSolver, QuadraticSolver, QuarticEigenSolver,
    RootSolver,
};
use crate::types::{Coefficients, Degree, RootSet, SolveError};
use tracing::debug;

/// Routes validated coefficients to the solver for their degree.
///
/// The only configurable part is the cubic approximator; the other solvers
/// have no tuning. A `PolynomialSolver` holds no per-call state and can be
/// shared across threads.
///
/// # Example
///
/// ```
/// use roots_core::roots::{CubicSettings, PolynomialSolver};
/// use roots_core::types::{Degree, SolveError};
///
/// let solver = PolynomialSolver::with_cubic_settings(CubicSettings {
///     seeds: vec![-1.0, 1.0],
///     ..CubicSettings::default()
/// });
///
/// let roots = solver.solve(Degree::Cubic, &[1.0, 0.0, -4.0, 0.0]).unwrap();
/// assert_eq!(roots.len(), 2);
///
/// let err = solver.solve(Degree::Quadratic, &[0.0, 1.0, 1.0]).unwrap_err();
/// assert!(matches!(err, SolveError::InvalidLeadingCoefficient { .. }));
/// ```
#[derive(Debug, Clone, Default)]
pub struct PolynomialSolver {
    cubic: CubicApproximator,
}

impl PolynomialSolver {
    /// Create a dispatcher with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dispatcher whose cubic path uses `settings`.
    pub fn with_cubic_settings(settings: CubicSettings) -> Self {
        Self {
            cubic: CubicApproximator::new(settings),
        }
    }

    /// Settings used for cubic equations.
    pub fn cubic_settings(&self) -> &CubicSettings {
        self.cubic.settings()
    }

    /// Validate `coeffs` as a polynomial of `degree` and solve it.
    ///
    /// Coefficients are ordered highest degree first. Validation happens
    /// before any numerical work: a zero leading coefficient is rejected, not
    /// reinterpreted as a lower degree.
    ///
    /// # Errors
    ///
    /// * Validation errors from [`Coefficients::new`]
    /// * `SolveError::NoRootsFound` - cubic search converged from no seed
    /// * `SolveError::EigenvalueNonConvergence` - quartic QR iteration stalled
    pub fn solve(&self, degree: Degree, coeffs: &[f64]) -> Result<RootSet, SolveError> {
        let coefficients = Coefficients::new(degree, coeffs)?;
        self.solve_validated(&coefficients)
    }

    /// Solve, inferring the degree from the number of coefficients.
    ///
    /// # Errors
    ///
    /// `SolveError::UnsupportedDegree` for fewer than 2 or more than 5
    /// coefficients, otherwise as [`PolynomialSolver::solve`].
    pub fn solve_coefficients(&self, coeffs: &[f64]) -> Result<RootSet, SolveError> {
        let coefficients = Coefficients::from_slice(coeffs)?;
        self.solve_validated(&coefficients)
    }

    /// Solve coefficients that already passed validation.
    ///
    /// # Errors
    ///
    /// As the solver for `coefficients.degree()`.
    pub fn solve_validated(&self, coefficients: &Coefficients) -> Result<RootSet, SolveError> {
        let degree = coefficients.degree();
        debug!(%degree, coefficients = ?coefficients.as_slice(), "solving polynomial");

        let result = match degree {
            Degree::Linear => LinearSolver.solve(coefficients),
            Degree::Quadratic => QuadraticSolver.solve(coefficients),
            Degree::Cubic => self.cubic.solve(coefficients),
            Degree::Quartic => QuarticEigenSolver.solve(coefficients),
        };

        if let Ok(roots) = &result {
            debug!(%degree, found = roots.len(), real = roots.real_count(), "solved polynomial");
        }
        result
    }
}

/// Solve a polynomial of `degree` with default settings.
///
/// # Example
///
/// ```
/// use roots_core::roots::solve;
/// use roots_core::types::Degree;
///
/// let roots = solve(Degree::Linear, &[2.0, -4.0]).unwrap();
/// assert_eq!(roots[0].real, 2.0);
/// ```
///
/// # Errors
///
/// As [`PolynomialSolver::solve`].
pub fn solve(degree: Degree, coeffs: &[f64]) -> Result<RootSet, SolveError> {
    PolynomialSolver::default().solve(degree, coeffs)
}

/// Solve with default settings, inferring the degree from `coeffs.len()`.
///
/// # Errors
///
/// As [`PolynomialSolver::solve_coefficients`].
pub fn solve_coefficients(coeffs: &[f64]) -> Result<RootSet, SolveError> {
    PolynomialSolver::default().solve_coefficients(coeffs)
}
