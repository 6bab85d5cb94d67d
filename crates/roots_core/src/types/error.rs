//! Error types for structured error handling.
//!
//! This module provides:
//! - `SolveError`: Terminal failures of one solve call, returned by the dispatcher
//! - `SolverError`: Failures of a local root-finding iteration (one cubic seed)

use super::coefficients::Degree;
use thiserror::Error;

/// Failure of a single solve call.
///
/// Validation variants are always raised before any solver runs, so a
/// failed call never carries a partial result.
///
/// # Variants
/// - `InvalidLeadingCoefficient`: Leading coefficient is exactly zero
/// - `NoRootsFound`: No cubic seed converged
/// - `CoefficientCountMismatch`: Coefficient count does not match the degree
/// - `NonFiniteCoefficient`: A coefficient is NaN or infinite
/// - `UnsupportedDegree`: Degree outside 1..=4
/// - `EigenvalueNonConvergence`: Companion-matrix QR iteration exhausted its budget
///
/// # Examples
/// ```
/// use roots_core::types::{Degree, SolveError};
///
/// let err = SolveError::InvalidLeadingCoefficient { degree: Degree::Quadratic };
/// assert_eq!(
///     format!("{}", err),
///     "Leading coefficient cannot be zero for a quadratic (degree 2) equation"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveError {
    /// Leading coefficient is exactly zero.
    #[error("Leading coefficient cannot be zero for a {degree} equation")]
    InvalidLeadingCoefficient {
        /// Degree that was attempted
        degree: Degree,
    },

    /// Every cubic seed failed to converge.
    #[error("No roots found (approximate search)")]
    NoRootsFound,

    /// Coefficient count does not match the requested degree.
    #[error("A {degree} equation needs {expected} coefficients, got {got}")]
    CoefficientCountMismatch {
        /// Requested degree
        degree: Degree,
        /// Required number of coefficients
        expected: usize,
        /// Number of coefficients supplied
        got: usize,
    },

    /// A coefficient is NaN or infinite.
    #[error("Coefficient {index} is not finite: {value}")]
    NonFiniteCoefficient {
        /// Position of the offending coefficient, highest degree first
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Degree outside the supported range.
    #[error("Unsupported degree {0}: only degrees 1 through 4 are supported")]
    UnsupportedDegree(usize),

    /// Eigenvalue iteration did not converge.
    #[error("Eigenvalue iteration did not converge after {iterations} iterations")]
    EigenvalueNonConvergence {
        /// Iterations spent on the eigenvalue that failed
        iterations: usize,
    },
}

impl SolveError {
    /// Returns `true` for failures raised by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            SolveError::InvalidLeadingCoefficient { .. }
                | SolveError::CoefficientCountMismatch { .. }
                | SolveError::NonFiniteCoefficient { .. }
                | SolveError::UnsupportedDegree(_)
        )
    }
}

/// Root-finding solver errors.
///
/// Describes why one local iteration stopped without a root. In the cubic
/// path these are absorbed per seed and never reach the caller.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `DerivativeNearZero`: Derivative too small for Newton-Raphson
/// - `NumericalInstability`: Iteration produced a non-finite value
///
/// # Examples
/// ```
/// use roots_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative near zero (division by zero risk in Newton-Raphson).
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}
