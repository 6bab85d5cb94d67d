//! Command-line front end for the `roots_core` polynomial solver.
//!
//! # Commands
//!
//! - `polyroots solve -- <coeffs>...` - Solve one equation
//! - `polyroots batch --input <file>` - Solve every record of a CSV file in parallel
//! - `polyroots check` - Print the effective configuration
//!
//! The binary is a thin wrapper; commands, configuration and formatting live
//! in this library so they can be tested without spawning a process.

pub mod commands;
pub mod config;
pub mod error;
pub mod format;

pub use error::{CliError, Result};

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
