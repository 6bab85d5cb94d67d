//! Companion-matrix eigenvalues.
//!
//! The roots of a polynomial are the eigenvalues of its companion matrix.
//! For `a_0 x^n + a_1 x^{n-1} + ... + a_n` the companion used here is
//!
//! ```text
//! C = [ -a_1/a_0  -a_2/a_0  ...  -a_n/a_0 ]
//!     [    1         0      ...     0     ]
//!     [    0         1      ...     0     ]
//!     [    .         .      ...     .     ]
//!     [    0         0      ...  1  0     ]
//! ```
//!
//! which is already upper Hessenberg, so no Householder reduction is needed.
//! The matrix is balanced, then reduced to quasi-triangular form with the
//! Francis double-shift QR iteration. An exceptional shift every 10th
//! iteration breaks the cycles a plain shift strategy falls into on matrices
//! such as the cyclic permutation produced by `x^4 - 1`.
//!
//! Matrices are small dense `Vec<Vec<f64>>`; every call owns its storage.

use crate::types::SolveError;
use num_complex::Complex64;
use tracing::trace;

/// QR iterations allowed per eigenvalue before giving up.
pub const MAX_QR_ITERATIONS: usize = 60;

/// Base used by [`balance`] so scaling is exact in binary floating point.
const RADIX: f64 = 2.0;

/// Build the companion matrix of a polynomial with non-zero leading coefficient.
///
/// Returns an `n × n` matrix for `n + 1` coefficients; an empty matrix for a
/// constant.
///
/// # Example
///
/// ```
/// use roots_core::math::eigen::companion_matrix;
///
/// // x² - 3x + 2
/// let c = companion_matrix(&[1.0, -3.0, 2.0]);
/// assert_eq!(c, vec![vec![3.0, -2.0], vec![1.0, 0.0]]);
/// ```
pub fn companion_matrix(coeffs: &[f64]) -> Vec<Vec<f64>> {
    let n = coeffs.len().saturating_sub(1);
    let mut c = vec![vec![0.0; n]; n];
    if n == 0 {
        return c;
    }
    let lead = coeffs[0];
    for (j, &coeff) in coeffs[1..].iter().enumerate() {
        c[0][j] = -coeff / lead;
    }
    for i in 1..n {
        c[i][i - 1] = 1.0;
    }
    c
}

/// Balance a square matrix in place by a diagonal similarity transform.
///
/// Rows and columns are rescaled by powers of two until their norms are
/// comparable. Eigenvalues are unchanged and the Hessenberg structure is
/// preserved.
pub fn balance(a: &mut [Vec<f64>]) {
    let n = a.len();
    let sqrdx = RADIX * RADIX;
    let mut done = false;

    while !done {
        done = true;
        for i in 0..n {
            let mut r = 0.0;
            let mut c = 0.0;
            for j in 0..n {
                if j != i {
                    c += a[j][i].abs();
                    r += a[i][j].abs();
                }
            }
            if c == 0.0 || r == 0.0 {
                continue;
            }

            let mut g = r / RADIX;
            let mut f = 1.0;
            let s = c + r;
            while c < g {
                f *= RADIX;
                c *= sqrdx;
            }
            g = r * RADIX;
            while c > g {
                f /= RADIX;
                c /= sqrdx;
            }

            if (c + r) / f < 0.95 * s {
                done = false;
                let g = 1.0 / f;
                for j in 0..n {
                    a[i][j] *= g;
                }
                for row in a.iter_mut() {
                    row[i] *= f;
                }
            }
        }
    }
}

/// `|a|` carrying the sign of `b`, with `b = 0` counted as positive.
fn sign(a: f64, b: f64) -> f64 {
    if b >= 0.0 {
        a.abs()
    } else {
        -a.abs()
    }
}

/// All eigenvalues of an upper Hessenberg matrix.
///
/// Entries below the sub-diagonal are ignored. Eigenvalues are returned in
/// the order they deflate from the bottom of the matrix, so the result has no
/// mathematically meaningful ordering. Real eigenvalues carry an imaginary
/// part of exactly `0.0`; complex ones come in adjacent conjugate pairs.
///
/// # Errors
///
/// `SolveError::EigenvalueNonConvergence` if an eigenvalue needs more than
/// [`MAX_QR_ITERATIONS`] iterations.
pub fn hessenberg_eigenvalues(mut a: Vec<Vec<f64>>) -> Result<Vec<Complex64>, SolveError> {
    let n = a.len();
    let mut eigenvalues = vec![Complex64::new(0.0, 0.0); n];

    let mut anorm = 0.0;
    for (i, row) in a.iter().enumerate() {
        for value in &row[i.saturating_sub(1)..] {
            anorm += value.abs();
        }
    }

    // Accumulated exceptional shifts
    let mut t = 0.0;
    // Rows 0..remaining are still active
    let mut remaining = n;

    while remaining > 0 {
        let nn = remaining - 1;
        let mut its = 0;

        loop {
            // Look for a single small sub-diagonal element
            let mut l = nn;
            while l > 0 {
                let mut s = a[l - 1][l - 1].abs() + a[l][l].abs();
                if s == 0.0 {
                    s = anorm;
                }
                if a[l][l - 1].abs() <= f64::EPSILON * s {
                    a[l][l - 1] = 0.0;
                    break;
                }
                l -= 1;
            }

            let mut x = a[nn][nn];
            if l == nn {
                // One root found
                eigenvalues[nn] = Complex64::new(x + t, 0.0);
                remaining -= 1;
                trace!(index = nn, iterations = its, "eigenvalue deflated");
                break;
            }

            let mut y = a[nn - 1][nn - 1];
            let mut w = a[nn][nn - 1] * a[nn - 1][nn];
            if l == nn - 1 {
                // Two roots found
                let p = 0.5 * (y - x);
                let q = p * p + w;
                let z = q.abs().sqrt();
                x += t;
                if q >= 0.0 {
                    let z = p + sign(z, p);
                    eigenvalues[nn - 1] = Complex64::new(x + z, 0.0);
                    eigenvalues[nn] = eigenvalues[nn - 1];
                    if z != 0.0 {
                        eigenvalues[nn] = Complex64::new(x - w / z, 0.0);
                    }
                } else {
                    eigenvalues[nn] = Complex64::new(x + p, -z);
                    eigenvalues[nn - 1] = eigenvalues[nn].conj();
                }
                remaining -= 2;
                trace!(index = nn, iterations = its, "eigenvalue pair deflated");
                break;
            }

            if its == MAX_QR_ITERATIONS {
                return Err(SolveError::EigenvalueNonConvergence { iterations: its });
            }
            if its > 0 && its % 10 == 0 {
                // Exceptional shift
                t += x;
                for (i, row) in a.iter_mut().enumerate().take(nn + 1) {
                    row[i] -= x;
                }
                let s = a[nn][nn - 1].abs() + a[nn - 1][nn - 2].abs();
                x = 0.75 * s;
                y = x;
                w = -0.4375 * s * s;
            }
            its += 1;

            // Form the shift and look for two consecutive small sub-diagonal elements
            let mut m = nn - 2;
            let mut p;
            let mut q;
            let mut r;
            loop {
                let z = a[m][m];
                let rr = x - z;
                let ss = y - z;
                p = (rr * ss - w) / a[m + 1][m] + a[m][m + 1];
                q = a[m + 1][m + 1] - z - rr - ss;
                r = a[m + 2][m + 1];
                let s = p.abs() + q.abs() + r.abs();
                p /= s;
                q /= s;
                r /= s;
                if m == l {
                    break;
                }
                let u = a[m][m - 1].abs() * (q.abs() + r.abs());
                let v = p.abs() * (a[m - 1][m - 1].abs() + z.abs() + a[m + 1][m + 1].abs());
                if u <= f64::EPSILON * v {
                    break;
                }
                m -= 1;
            }

            for i in m..nn - 1 {
                a[i + 2][i] = 0.0;
                if i != m {
                    a[i + 2][i - 1] = 0.0;
                }
            }

            // Double QR step on rows l..=nn and columns m..=nn
            for k in m..nn {
                if k != m {
                    p = a[k][k - 1];
                    q = a[k + 1][k - 1];
                    r = 0.0;
                    if k + 1 != nn {
                        r = a[k + 2][k - 1];
                    }
                    x = p.abs() + q.abs() + r.abs();
                    if x != 0.0 {
                        p /= x;
                        q /= x;
                        r /= x;
                    }
                }

                let s = sign((p * p + q * q + r * r).sqrt(), p);
                if s == 0.0 {
                    continue;
                }

                if k == m {
                    if l != m {
                        a[k][k - 1] = -a[k][k - 1];
                    }
                } else {
                    a[k][k - 1] = -s * x;
                }
                p += s;
                x = p / s;
                y = q / s;
                let z = r / s;
                q /= p;
                r /= p;

                // Row modification
                for j in k..=nn {
                    let mut pp = a[k][j] + q * a[k + 1][j];
                    if k + 1 != nn {
                        pp += r * a[k + 2][j];
                        a[k + 2][j] -= pp * z;
                    }
                    a[k + 1][j] -= pp * y;
                    a[k][j] -= pp * x;
                }

                // Column modification
                let mmin = nn.min(k + 3);
                for row in a.iter_mut().take(mmin + 1).skip(l) {
                    let mut pp = x * row[k] + y * row[k + 1];
                    if k + 1 != nn {
                        pp += z * row[k + 2];
                        row[k + 2] -= pp * r;
                    }
                    row[k + 1] -= pp * q;
                    row[k] -= pp;
                }
            }
        }
    }

    Ok(eigenvalues)
}

/// All complex roots of a polynomial via its balanced companion matrix.
///
/// Coefficients are highest degree first with a non-zero leading
/// coefficient. Trailing zero coefficients are split off as exact zero roots
/// and appended after the eigenvalues of the reduced polynomial. The result
/// always has `coeffs.len() - 1` entries.
///
/// # Example
///
/// ```
/// use roots_core::math::eigen::companion_roots;
///
/// // x² + 1
/// let roots = companion_roots(&[1.0, 0.0, 1.0]).unwrap();
/// assert_eq!(roots.len(), 2);
/// assert!(roots.iter().all(|z| (z.norm() - 1.0).abs() < 1e-12));
/// ```
///
/// # Errors
///
/// `SolveError::EigenvalueNonConvergence` if the QR iteration stalls.
pub fn companion_roots(coeffs: &[f64]) -> Result<Vec<Complex64>, SolveError> {
    let trailing_zeros = coeffs
        .iter()
        .skip(1)
        .rev()
        .take_while(|&&c| c == 0.0)
        .count();
    let reduced = &coeffs[..coeffs.len() - trailing_zeros];

    let mut companion = companion_matrix(reduced);
    balance(&mut companion);
    let mut roots = hessenberg_eigenvalues(companion)?;
    roots.extend(std::iter::repeat(Complex64::new(0.0, 0.0)).take(trailing_zeros));
    Ok(roots)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polynomial::horner_complex;

    fn sorted_by_re_im(mut roots: Vec<Complex64>) -> Vec<Complex64> {
        roots.sort_by(|a, b| {
            a.re.partial_cmp(&b.re)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.im.partial_cmp(&b.im).unwrap_or(std::cmp::Ordering::Equal))
        });
        roots
    }

    #[test]
    fn test_companion_matrix_shape() {
        let c = companion_matrix(&[2.0, 4.0, -6.0, 8.0]);
        assert_eq!(
            c,
            vec![
                vec![-2.0, 3.0, -4.0],
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
            ]
        );
        assert!(companion_matrix(&[5.0]).is_empty());
    }

    #[test]
    fn test_balance_preserves_trace() {
        let mut c = companion_matrix(&[1.0, -1e4, 1e-3, 7.0, 1e6]);
        let trace_before: f64 = (0..4).map(|i| c[i][i]).sum();
        balance(&mut c);
        let trace_after: f64 = (0..4).map(|i| c[i][i]).sum();
        assert!((trace_before - trace_after).abs() < 1e-9 * trace_before.abs());
        // Hessenberg structure survives
        for i in 2..4 {
            for j in 0..i - 1 {
                assert_eq!(c[i][j], 0.0);
            }
        }
    }

    #[test]
    fn test_single_eigenvalue() {
        let roots = hessenberg_eigenvalues(vec![vec![-3.5]]).unwrap();
        assert_eq!(roots, vec![Complex64::new(-3.5, 0.0)]);
    }

    #[test]
    fn test_empty_matrix() {
        assert!(hessenberg_eigenvalues(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn test_cyclic_permutation_converges() {
        // x⁴ - 1: the companion is a cyclic permutation matrix
        let roots = sorted_by_re_im(companion_roots(&[1.0, 0.0, 0.0, 0.0, -1.0]).unwrap());
        let expected = [
            Complex64::new(-1.0, 0.0),
            Complex64::new(0.0, -1.0),
            Complex64::new(0.0, 1.0),
            Complex64::new(1.0, 0.0),
        ];
        for (got, want) in roots.iter().zip(expected.iter()) {
            assert!((got - want).norm() < 1e-10, "got {got}, want {want}");
        }
    }

    #[test]
    fn test_distinct_real_roots() {
        // (x-1)(x-2)(x-3)(x-4)
        let roots = sorted_by_re_im(companion_roots(&[1.0, -10.0, 35.0, -50.0, 24.0]).unwrap());
        for (i, z) in roots.iter().enumerate() {
            assert!((z.re - (i as f64 + 1.0)).abs() < 1e-9, "got {z}");
            assert_eq!(z.im, 0.0);
        }
    }

    #[test]
    fn test_trailing_zeros_become_zero_roots() {
        // x⁴ + x = x (x³ + 1)
        let roots = companion_roots(&[1.0, 0.0, 0.0, 1.0, 0.0]).unwrap();
        assert_eq!(roots.len(), 4);
        assert_eq!(roots[3], Complex64::new(0.0, 0.0));
        for z in &roots[..3] {
            assert!((z.norm() - 1.0).abs() < 1e-10, "got {z}");
        }

        let roots = companion_roots(&[3.0, 0.0, 0.0, 0.0, 0.0]).unwrap();
        assert_eq!(roots, vec![Complex64::new(0.0, 0.0); 4]);
    }

    #[test]
    fn test_complex_pairs_are_conjugate() {
        // x⁴ + 1: two conjugate pairs on the unit circle
        let roots = companion_roots(&[1.0, 0.0, 0.0, 0.0, 1.0]).unwrap();
        assert_eq!(roots.len(), 4);
        for pair in roots.chunks(2) {
            assert_eq!(pair[0], pair[1].conj());
        }
    }

    #[test]
    fn test_residuals_for_higher_degree() {
        let coeffs = [1.0, -2.0, 3.0, -4.0, 5.0, -6.0, 7.0];
        let roots = companion_roots(&coeffs).unwrap();
        assert_eq!(roots.len(), 6);
        for z in roots {
            assert!(horner_complex(&coeffs, z).norm() < 1e-9, "p({z}) too large");
        }
    }
}
