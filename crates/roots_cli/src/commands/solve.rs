//! Solve command implementation
//!
//! Solves a single equation given on the command line.

use roots_core::roots::PolynomialSolver;
use roots_core::types::{Degree, RootSet};
use tracing::{info, warn};

use crate::config::PolyrootsConfig;
use crate::format::{render_report, Report};
use crate::Result;

/// Solve `coefficients` (highest degree first) with the configured solver.
///
/// When `degree` is `None` it is inferred from the coefficient count.
pub fn solve(
    degree: Option<usize>,
    coefficients: &[f64],
    config: &PolyrootsConfig,
) -> Result<RootSet> {
    let solver = PolynomialSolver::with_cubic_settings(config.cubic.to_settings());
    let roots = match degree {
        Some(n) => solver.solve(Degree::try_from(n)?, coefficients)?,
        None => solver.solve_coefficients(coefficients)?,
    };
    Ok(roots)
}

/// Run the solve command
pub fn run(degree: Option<usize>, coefficients: &[f64], config: &PolyrootsConfig) -> Result<()> {
    info!(?degree, ?coefficients, format = %config.format, "Solving equation");

    let roots = solve(degree, coefficients, config).inspect_err(|err| {
        warn!(%err, "Equation could not be solved");
    })?;

    let report = Report::new(None, coefficients.to_vec(), Ok(roots));
    print!("{}", render_report(&report, config.format, config.precision)?);
    Ok(())
}
