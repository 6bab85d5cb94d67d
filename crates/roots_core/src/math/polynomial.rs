//! Horner evaluation of polynomials given highest-degree-first coefficients.

use num_complex::Complex64;

/// Evaluate `p(x)` in real arithmetic.
///
/// # Example
///
/// ```
/// use roots_core::math::polynomial::horner;
///
/// // x² - 3x + 2 at x = 2
/// assert_eq!(horner(&[1.0, -3.0, 2.0], 2.0), 0.0);
/// ```
pub fn horner(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Evaluate `p(x)` and `p'(x)` together in a single pass.
///
/// # Example
///
/// ```
/// use roots_core::math::polynomial::horner_with_derivative;
///
/// // x³ - 8 at x = 2: p = 0, p' = 12
/// let (p, dp) = horner_with_derivative(&[1.0, 0.0, 0.0, -8.0], 2.0);
/// assert_eq!(p, 0.0);
/// assert_eq!(dp, 12.0);
/// ```
pub fn horner_with_derivative(coeffs: &[f64], x: f64) -> (f64, f64) {
    let mut p = 0.0;
    let mut dp = 0.0;
    for &c in coeffs {
        dp = dp * x + p;
        p = p * x + c;
    }
    (p, dp)
}

/// Evaluate `p(z)` in complex arithmetic.
pub fn horner_complex(coeffs: &[f64], z: Complex64) -> Complex64 {
    coeffs
        .iter()
        .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_horner_constant() {
        assert_eq!(horner(&[7.0], 123.0), 7.0);
        assert_eq!(horner(&[], 1.0), 0.0);
    }

    #[test]
    fn test_horner_quartic() {
        // x⁴ - 1
        let p = [1.0, 0.0, 0.0, 0.0, -1.0];
        assert_eq!(horner(&p, 1.0), 0.0);
        assert_eq!(horner(&p, -1.0), 0.0);
        assert_eq!(horner(&p, 2.0), 15.0);
    }

    #[test]
    fn test_derivative_matches_finite_difference() {
        let p = [2.0, -1.0, 0.5, 3.0];
        let x = 0.7;
        let h = 1e-6;
        let (_, dp) = horner_with_derivative(&p, x);
        let fd = (horner(&p, x + h) - horner(&p, x - h)) / (2.0 * h);
        assert_relative_eq!(dp, fd, epsilon = 1e-6);
    }

    #[test]
    fn test_horner_complex_unit_roots() {
        let p = [1.0, 0.0, 0.0, 0.0, -1.0];
        let i = Complex64::new(0.0, 1.0);
        assert!(horner_complex(&p, i).norm() < 1e-15);
        assert!(horner_complex(&p, -i).norm() < 1e-15);
    }
}
