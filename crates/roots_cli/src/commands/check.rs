//! Check command implementation
//!
//! Prints the effective configuration and runs each solver once on a
//! polynomial with known roots.

use roots_core::roots::PolynomialSolver;
use roots_core::types::{ComplexRoot, Degree};
use tracing::info;

use crate::config::PolyrootsConfig;
use crate::Result;

/// Polynomials with known roots, one per degree.
const SELF_CHECKS: [(Degree, &[f64], &[(f64, f64)]); 4] = [
    (Degree::Linear, &[2.0, -4.0], &[(2.0, 0.0)]),
    (Degree::Quadratic, &[1.0, 0.0, 1.0], &[(0.0, 1.0), (0.0, -1.0)]),
    (Degree::Cubic, &[1.0, 0.0, 0.0, -8.0], &[(2.0, 0.0)]),
    (
        Degree::Quartic,
        &[1.0, 0.0, 0.0, 0.0, -1.0],
        &[(1.0, 0.0), (-1.0, 0.0), (0.0, 1.0), (0.0, -1.0)],
    ),
];

const SELF_CHECK_TOLERANCE: f64 = 1e-6;

/// Outcome of one self-check solve.
#[derive(Debug, Clone, PartialEq)]
pub struct SelfCheck {
    /// Degree exercised
    pub degree: Degree,
    /// Whether every expected root was found
    pub passed: bool,
}

/// Solve each known polynomial with the configured solver.
pub fn self_check(config: &PolyrootsConfig) -> Vec<SelfCheck> {
    let solver = PolynomialSolver::with_cubic_settings(config.cubic.to_settings());
    SELF_CHECKS
        .iter()
        .map(|&(degree, coeffs, expected)| {
            let passed = solver.solve(degree, coeffs).is_ok_and(|roots| {
                expected.iter().all(|&(re, im)| {
                    let want = ComplexRoot::new(re, im);
                    roots.iter().any(|r| r.is_close(&want, SELF_CHECK_TOLERANCE))
                })
            });
            SelfCheck { degree, passed }
        })
        .collect()
}

/// Render the configuration and self-check results.
pub fn render(config: &PolyrootsConfig) -> Result<String> {
    let mut out = format!("polyroots {}\n\n", crate::VERSION);
    out.push_str("Effective configuration:\n");
    out.push_str(&toml::to_string_pretty(config)?);
    out.push_str("\nSolver self-check:\n");
    for check in self_check(config) {
        let status = if check.passed { "ok" } else { "FAILED" };
        out.push_str(&format!("  {:<22} {}\n", check.degree.to_string(), status));
    }
    Ok(out)
}

/// Run the check command
pub fn run(config: &PolyrootsConfig) -> Result<()> {
    info!("Checking configuration...");
    print!("{}", render(config)?);
    Ok(())
}
