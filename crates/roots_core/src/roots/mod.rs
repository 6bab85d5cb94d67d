//! Degree-specific root solvers and the dispatcher that routes to them.
//!
//! ## Available Solvers
//!
//! - [`LinearSolver`]: Closed form `x = -b / a`
//! - [`QuadraticSolver`]: Discriminant, real pair or conjugate pair
//! - [`CubicApproximator`]: Multi-seed Newton-Raphson with near-duplicate filtering
//! - [`QuarticEigenSolver`]: Companion-matrix eigenvalues, complete with multiplicity
//!
//! All solvers implement [`RootSolver`] over validated [`Coefficients`], so
//! the leading coefficient is known to be non-zero when they run.
//!
//! ## Dispatch
//!
//! [`solve`] and [`PolynomialSolver::solve`] validate a degree and a raw
//! coefficient slice, then pass the matching solver's outcome through
//! unchanged.
//!
//! ```
//! use roots_core::roots::solve;
//! use roots_core::types::Degree;
//!
//! // x⁴ - 1 = 0
//! let roots = solve(Degree::Quartic, &[1.0, 0.0, 0.0, 0.0, -1.0]).unwrap();
//! assert_eq!(roots.len(), 4);
//! assert_eq!(roots.real_count(), 2);
//! ```

mod cubic;
mod dispatch;
mod linear;
mod quadratic;
mod quartic;

use crate::types::{Coefficients, Degree, RootSet, SolveError};

pub use cubic::{
    solve_cubic, CubicApproximator, CubicSettings, SeedAttempt, DEFAULT_DEDUP_TOLERANCE,
    DEFAULT_SEEDS,
};
pub use dispatch::{solve, solve_coefficients, PolynomialSolver};
pub use linear::{solve_linear, LinearSolver};
pub use quadratic::{solve_quadratic, QuadraticSolver};
pub use quartic::{solve_quartic, QuarticEigenSolver};

/// A solving strategy for polynomials of one fixed degree.
///
/// Implementors receive coefficients that already passed validation, so the
/// leading coefficient is non-zero and the count matches [`Self::degree`].
pub trait RootSolver {
    /// Degree this solver handles.
    fn degree(&self) -> Degree;

    /// Solve the polynomial described by `coefficients`.
    ///
    /// Roots are returned in discovery order.
    fn solve(&self, coefficients: &Coefficients) -> Result<RootSet, SolveError>;
}
