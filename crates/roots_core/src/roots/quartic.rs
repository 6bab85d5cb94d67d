//! Degree 4: `ax⁴ + bx³ + cx² + dx + e = 0` via companion-matrix eigenvalues.

use super::RootSolver;
use crate::math::eigen::companion_roots;
use crate::types::{Coefficients, ComplexRoot, Degree, RootSet, SolveError};
use num_complex::Complex64;

/// Convert an eigenvalue to a root, snapping negligible imaginary parts to 0.
fn classify(z: Complex64) -> ComplexRoot {
    if z.im.abs() <= f64::EPSILON {
        ComplexRoot::real(z.re)
    } else {
        ComplexRoot::new(z.re, z.im)
    }
}

/// All four roots of `ax⁴ + bx³ + cx² + dx + e`, with multiplicity.
///
/// Roots come back in the order the eigenvalue iteration deflates them.
/// A root with `|imag| <= f64::EPSILON` is reported as real. Repeated roots
/// are not merged.
///
/// The caller guarantees `a != 0`.
///
/// # Example
///
/// ```
/// use roots_core::roots::solve_quartic;
///
/// // x⁴ - 1 = (x - 1)(x + 1)(x - i)(x + i)
/// let roots = solve_quartic(1.0, 0.0, 0.0, 0.0, -1.0).unwrap();
/// assert_eq!(roots.len(), 4);
/// assert_eq!(roots.real_count(), 2);
/// ```
///
/// # Errors
///
/// `SolveError::EigenvalueNonConvergence` if the QR iteration stalls.
pub fn solve_quartic(a: f64, b: f64, c: f64, d: f64, e: f64) -> Result<RootSet, SolveError> {
    let eigenvalues = companion_roots(&[a, b, c, d, e])?;
    Ok(eigenvalues.into_iter().map(classify).collect())
}

/// Solver for quartic equations.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuarticEigenSolver;

impl RootSolver for QuarticEigenSolver {
    fn degree(&self) -> Degree {
        Degree::Quartic
    }

    fn solve(&self, coefficients: &Coefficients) -> Result<RootSet, SolveError> {
        let [a, b, c, d, e] = coefficients.as_slice() else {
            return Err(SolveError::CoefficientCountMismatch {
                degree: Degree::Quartic,
                expected: 5,
                got: coefficients.as_slice().len(),
            });
        };
        solve_quartic(*a, *b, *c, *d, *e)
    }
}
