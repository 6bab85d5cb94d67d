//! Degree 2: `ax² + bx + c = 0`.

use super::RootSolver;
use crate::types::{Coefficients, ComplexRoot, Degree, RootSet, SolveError};

/// Closed-form roots of `ax² + bx + c` via the discriminant `Δ = b² - 4ac`.
///
/// - `Δ ≥ 0`: two real roots `(-b ± √Δ) / 2a`, `+` first. A double root is
///   reported twice.
/// - `Δ < 0`: a conjugate pair with real part `-b / 2a` and imaginary part
///   `±√|Δ| / 2a`, `+` first.
///
/// The caller guarantees `a != 0`.
///
/// # Example
///
/// ```
/// use roots_core::roots::solve_quadratic;
///
/// let roots = solve_quadratic(1.0, -3.0, 2.0);
/// assert_eq!(roots[0].real, 2.0);
/// assert_eq!(roots[1].real, 1.0);
///
/// let roots = solve_quadratic(1.0, 0.0, 1.0);
/// assert_eq!(roots[0].imag, 1.0);
/// assert_eq!(roots[1].imag, -1.0);
/// ```
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> RootSet {
    let discriminant = b * b - 4.0 * a * c;
    let denom = 2.0 * a;

    if discriminant >= 0.0 {
        let sqrt_d = discriminant.sqrt();
        RootSet::from(vec![
            ComplexRoot::real((-b + sqrt_d) / denom),
            ComplexRoot::real((-b - sqrt_d) / denom),
        ])
    } else {
        let re = -b / denom;
        let im = discriminant.abs().sqrt() / denom;
        RootSet::from(vec![ComplexRoot::new(re, im), ComplexRoot::new(re, -im)])
    }
}

/// Solver for quadratic equations.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticSolver;

impl RootSolver for QuadraticSolver {
    fn degree(&self) -> Degree {
        Degree::Quadratic
    }

    fn solve(&self, coefficients: &Coefficients) -> Result<RootSet, SolveError> {
        let [a, b, c] = coefficients.as_slice() else {
            return Err(SolveError::CoefficientCountMismatch {
                degree: Degree::Quadratic,
                expected: 3,
                got: coefficients.as_slice().len(),
            });
        };
        Ok(solve_quadratic(*a, *b, *c))
    }
}
