//! Numerical building blocks shared by the degree-specific solvers.
//!
//! - `polynomial`: Horner evaluation in real and complex arithmetic
//! - `solvers`: Local root-finding iterations (Newton-Raphson) and their configuration
//! - `eigen`: Companion matrices and Hessenberg QR eigenvalue extraction

pub mod eigen;
pub mod polynomial;
pub mod solvers;
