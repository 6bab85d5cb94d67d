//! Newton-Raphson root-finding solver.

use super::SolverConfig;
use crate::types::SolverError;
use num_traits::Float;

/// Newton-Raphson root finder.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Convergence
///
/// Newton-Raphson converges quadratically near a simple root and linearly
/// near a repeated one. It may fail if:
/// - The derivative is near zero
/// - The initial guess is far from the root
/// - The iteration cycles without settling
///
/// Every failure is reported as a [`SolverError`]; the iteration never runs
/// past `max_iterations`.
///
/// # Example
///
/// ```
/// use roots_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let root = solver.find_root(f, f_prime, 1.0).unwrap();
/// assert!((root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Create a solver with default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// Uses Newton's iteration: `x_{n+1} = x_n - f(x_n) / f'(x_n)`
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `f_prime` - Derivative of f
    /// * `x0` - Initial guess
    ///
    /// # Returns
    ///
    /// * `Ok(x)` - Root where `|f(x)| < tolerance` or the step became negligible
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    /// * `Err(SolverError::NumericalInstability)` - Iterate became non-finite
    ///
    /// # Example
    ///
    /// ```
    /// use roots_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // Solve x³ - x - 2 = 0
    /// let f = |x: f64| x * x * x - x - 2.0;
    /// let f_prime = |x: f64| 3.0 * x * x - 1.0;
    ///
    /// let root = solver.find_root(f, f_prime, 1.5).unwrap();
    /// assert!((f(root)).abs() < 1e-10);
    /// ```
    pub fn find_root<F, G>(&self, f: F, f_prime: G, x0: T) -> Result<T, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;
        let epsilon = T::min_positive_value().sqrt();

        for _iteration in 0..self.config.max_iterations {
            let f_val = f(x);

            // Check for convergence
            if f_val.abs() < self.config.tolerance {
                return Ok(x);
            }

            let f_prime_val = f_prime(x);

            // Check for near-zero derivative
            if f_prime_val.abs() < epsilon {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            let step = f_val / f_prime_val;
            let next = x - step;

            // Check for non-finite values
            if !next.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }

            // Step-size convergence for functions whose residual cannot reach
            // the absolute tolerance in floating point
            if next == x || step.abs() <= self.config.tolerance * next.abs().max(T::one()) {
                return Ok(next);
            }

            x = next;
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================
    // Basic Functionality Tests
    // ========================================

    #[test]
    fn test_find_sqrt_2() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        // Solve x² - 2 = 0 (find √2)
        let f = |x: f64| x * x - 2.0;
        let f_prime = |x: f64| 2.0 * x;

        let root = solver.find_root(f, f_prime, 1.0).unwrap();
        assert!(
            (root - std::f64::consts::SQRT_2).abs() < 1e-10,
            "Expected √2 ≈ {}, got {}",
            std::f64::consts::SQRT_2,
            root
        );
    }

    #[test]
    fn test_find_cube_root_of_eight_from_far_seed() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        // x³ - 8 = 0 from the negative side overshoots past zero first
        let f = |x: f64| x * x * x - 8.0;
        let f_prime = |x: f64| 3.0 * x * x;

        let root = solver.find_root(f, f_prime, -10.0).unwrap();
        assert!((root - 2.0).abs() < 1e-9, "got {}", root);
    }

    #[test]
    fn test_triple_root_converges_linearly_within_cap() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        let f = |x: f64| x * x * x;
        let f_prime = |x: f64| 3.0 * x * x;

        let root = solver.find_root(f, f_prime, 10.0).unwrap();
        assert!(root.abs() < 1e-3, "got {}", root);
    }

    #[test]
    fn test_large_scale_residual_uses_step_criterion() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        // 1e12 · (x - 3): the residual cannot drop below 1e-10 in f64
        // unless x is exact, but the step vanishes
        let f = |x: f64| 1e12 * (x - 3.0) * (x + 1.0);
        let f_prime = |x: f64| 1e12 * (2.0 * x - 2.0);

        let root = solver.find_root(f, f_prime, 10.0).unwrap();
        assert!((root - 3.0).abs() < 1e-9, "got {}", root);
    }

    // ========================================
    // Error Handling Tests
    // ========================================

    #[test]
    fn test_derivative_near_zero() {
        let solver = NewtonRaphsonSolver::new(SolverConfig::default());

        // x³ - 8 at x = 0 has zero slope
        let f = |x: f64| x * x * x - 8.0;
        let f_prime = |x: f64| 3.0 * x * x;

        match solver.find_root(f, f_prime, 0.0) {
            Err(SolverError::DerivativeNearZero { x }) => assert_eq!(x, 0.0),
            other => panic!("Expected DerivativeNearZero error, got {:?}", other),
        }
    }

    #[test]
    fn test_max_iterations_exceeded() {
        let solver = NewtonRaphsonSolver::new(SolverConfig {
            tolerance: 1e-10,
            max_iterations: 50,
        });

        // x² + 1 has no real root: Newton wanders forever
        let f = |x: f64| x * x + 1.0;
        let f_prime = |x: f64| 2.0 * x;

        match solver.find_root(f, f_prime, 0.5) {
            Err(SolverError::MaxIterationsExceeded { iterations }) => {
                assert_eq!(iterations, 50);
            }
            Err(SolverError::DerivativeNearZero { .. })
            | Err(SolverError::NumericalInstability(_)) => {}
            other => panic!("Expected non-convergence, got {:?}", other),
        }
    }

    #[test]
    fn test_with_defaults() {
        let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::with_defaults();

        let f = |x: f64| x - 1.0;
        let f_prime = |_x: f64| 1.0;

        let root = solver.find_root(f, f_prime, 0.0).unwrap();
        assert!((root - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_config_accessor() {
        let config = SolverConfig {
            tolerance: 1e-8,
            max_iterations: 50,
        };
        let solver = NewtonRaphsonSolver::new(config);

        assert!((solver.config().tolerance - 1e-8).abs() < 1e-15);
        assert_eq!(solver.config().max_iterations, 50);
    }

    #[test]
    fn test_with_f32() {
        let solver: NewtonRaphsonSolver<f32> = NewtonRaphsonSolver::with_defaults();

        let f = |x: f32| x * x - 2.0;
        let f_prime = |x: f32| 2.0 * x;

        let root = solver.find_root(f, f_prime, 1.0_f32).unwrap();
        assert!((root - std::f32::consts::SQRT_2).abs() < 1e-5);
    }
}
