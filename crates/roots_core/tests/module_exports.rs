//! Integration tests for module exports.
//!
//! Verify that the public modules and types are reachable via absolute paths.

/// Solver entry points are accessible from `roots`.
#[test]
fn test_roots_module_exports() {
    use roots_core::roots::solve_cubic;
    use roots_core::roots::solve_linear;
    use roots_core::roots::solve_quadratic;
    use roots_core::roots::solve_quartic;
    use roots_core::roots::{solve, solve_coefficients};

    let _ = solve_linear(1.0, 1.0);
    let _ = solve_quadratic(1.0, 0.0, -1.0);
    let _ = solve_cubic(1.0, 0.0, 0.0, -1.0);
    let _ = solve_quartic(1.0, 0.0, 0.0, 0.0, -1.0);
    let _ = solve(roots_core::types::Degree::Linear, &[1.0, 1.0]);
    let _ = solve_coefficients(&[1.0, 1.0]);
}

/// The `RootSolver` trait is implementable outside the crate.
#[test]
fn test_root_solver_trait_exports() {
    use roots_core::roots::{
        CubicApproximator, LinearSolver, QuadraticSolver, QuarticEigenSolver, RootSolver,
    };
    use roots_core::types::{Coefficients, ComplexRoot, Degree, RootSet, SolveError};

    struct ConstantRoot;

    impl RootSolver for ConstantRoot {
        fn degree(&self) -> Degree {
            Degree::Linear
        }

        fn solve(&self, _coefficients: &Coefficients) -> Result<RootSet, SolveError> {
            Ok(RootSet::from(vec![ComplexRoot::real(42.0)]))
        }
    }

    let coeffs = Coefficients::new(Degree::Linear, &[1.0, -42.0]).unwrap();
    assert_eq!(ConstantRoot.solve(&coeffs).unwrap()[0].real, 42.0);

    let solvers: Vec<Box<dyn RootSolver>> = vec![
        Box::new(LinearSolver),
        Box::new(QuadraticSolver),
        Box::new(CubicApproximator::default()),
        Box::new(QuarticEigenSolver),
    ];
    let degrees: Vec<Degree> = solvers.iter().map(|s| s.degree()).collect();
    assert_eq!(degrees, Degree::ALL.to_vec());
}

/// Numerical building blocks are accessible from `math`.
#[test]
fn test_math_module_exports() {
    use roots_core::math::eigen::{companion_matrix, companion_roots, MAX_QR_ITERATIONS};
    use roots_core::math::polynomial::{horner, horner_complex, horner_with_derivative};
    use roots_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    use num_complex::Complex64;

    assert_eq!(horner(&[1.0, 0.0, -4.0], 2.0), 0.0);
    assert_eq!(horner_with_derivative(&[1.0, 0.0, -4.0], 2.0), (0.0, 4.0));
    assert_eq!(
        horner_complex(&[1.0, 0.0, 1.0], Complex64::new(0.0, 1.0)),
        Complex64::new(0.0, 0.0)
    );
    assert_eq!(companion_matrix(&[1.0, 2.0]), vec![vec![-2.0]]);
    assert_eq!(companion_roots(&[1.0, 2.0]).unwrap().len(), 1);
    assert!(MAX_QR_ITERATIONS > 0);

    let solver = NewtonRaphsonSolver::new(SolverConfig::<f64>::default());
    assert!(solver.find_root(|x| x - 1.0, |_| 1.0, 0.0).is_ok());
}

/// Core types are `Send + Sync` and shareable across threads.
#[test]
fn test_core_types_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<roots_core::types::ComplexRoot>();
    assert_send_sync::<roots_core::types::RootSet>();
    assert_send_sync::<roots_core::types::Coefficients>();
    assert_send_sync::<roots_core::types::SolveError>();
    assert_send_sync::<roots_core::types::SolverError>();
    assert_send_sync::<roots_core::roots::PolynomialSolver>();
    assert_send_sync::<roots_core::roots::CubicSettings>();
}
