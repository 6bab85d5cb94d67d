//! # roots_core: Root-Finding Kernel for Low-Degree Polynomials
//!
//! ## Role
//!
//! roots_core finds the real and complex roots of univariate polynomials of
//! degree 1 through 4. It is the headless kernel behind any front end that
//! needs "solve this equation": given coefficients, it returns roots.
//!
//! - Root and coefficient types: `ComplexRoot`, `RootSet`, `Coefficients`, `Degree` (`types`)
//! - Error types: `SolveError`, `SolverError` (`types::error`)
//! - Degree-specific solvers and the dispatcher (`roots`)
//! - Numerical building blocks: Newton-Raphson, Horner evaluation,
//!   companion-matrix eigenvalues (`math`)
//!
//! ## Solving Strategies
//!
//! | Degree | Strategy | Completeness |
//! |--------|----------|--------------|
//! | 1 | closed form `-b / a` | exact |
//! | 2 | discriminant | real pair or conjugate pair |
//! | 3 | multi-seed Newton-Raphson | real roots only, may miss roots |
//! | 4 | companion matrix eigenvalues | all four roots with multiplicity |
//!
//! ## Usage Examples
//!
//! ```rust
//! use roots_core::roots::solve;
//! use roots_core::types::{Degree, SolveError};
//!
//! // x² - 3x + 2 = 0
//! let roots = solve(Degree::Quadratic, &[1.0, -3.0, 2.0]).unwrap();
//! assert_eq!(roots.len(), 2);
//! assert!(roots.iter().all(|r| r.is_real()));
//!
//! // A zero leading coefficient is rejected before any numerical work
//! let err = solve(Degree::Quadratic, &[0.0, 1.0, 1.0]).unwrap_err();
//! assert!(matches!(err, SolveError::InvalidLeadingCoefficient { .. }));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `ComplexRoot`, `RootSet` and `Degree`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod roots;
pub mod types;
