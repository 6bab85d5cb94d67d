//! Degree 1: `ax + b = 0`.

use super::RootSolver;
use crate::types::{Coefficients, ComplexRoot, Degree, RootSet, SolveError};

/// Closed-form root of `ax + b`.
///
/// The caller guarantees `a != 0`; the dispatcher checks it.
///
/// # Example
///
/// ```
/// use roots_core::roots::solve_linear;
///
/// let roots = solve_linear(2.0, -4.0);
/// assert_eq!(roots[0].real, 2.0);
/// ```
pub fn solve_linear(a: f64, b: f64) -> RootSet {
    RootSet::from(vec![ComplexRoot::real(-b / a)])
}

/// Solver for linear equations.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSolver;

impl RootSolver for LinearSolver {
    fn degree(&self) -> Degree {
        Degree::Linear
    }

    fn solve(&self, coefficients: &Coefficients) -> Result<RootSet, SolveError> {
        let [a, b] = coefficients.as_slice() else {
            return Err(SolveError::CoefficientCountMismatch {
                degree: Degree::Linear,
                expected: 2,
                got: coefficients.as_slice().len(),
            });
        };
        Ok(solve_linear(*a, *b))
    }
}
