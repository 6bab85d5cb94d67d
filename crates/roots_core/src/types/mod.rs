//! Core root, coefficient, and error types.
//!
//! This module provides:
//! - `complex_root`: The `ComplexRoot` value and the ordered `RootSet` container
//! - `coefficients`: The `Degree` selector and validated `Coefficients` parameter struct
//! - `error`: Structured error types for dispatch and local solver failures
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`ComplexRoot`], [`RootSet`] from `complex_root`
//! - [`Coefficients`], [`Degree`] from `coefficients`
//! - [`SolveError`], [`SolverError`] from `error`

pub mod coefficients;
pub mod complex_root;
pub mod error;

// Re-export commonly used types at module level
pub use coefficients::{Coefficients, Degree};
pub use complex_root::{ComplexRoot, RootSet};
pub use error::{SolveError, SolverError};
