//! CLI error types

use crate::config::ConfigError;
use roots_core::types::SolveError;
use std::fmt;
use thiserror::Error;

/// Errors surfaced by `polyroots` commands
#[derive(Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Solve(#[from] SolveError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),
}

// `main` returns this type; print the message rather than the variant tree.
impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use roots_core::types::Degree;

    #[test]
    fn test_debug_matches_display() {
        let err = CliError::from(SolveError::InvalidLeadingCoefficient {
            degree: Degree::Linear,
        });
        assert_eq!(format!("{err:?}"), err.to_string());
        assert_eq!(
            err.to_string(),
            "Leading coefficient cannot be zero for a linear (degree 1) equation"
        );
    }

    #[test]
    fn test_file_not_found_message() {
        let err = CliError::FileNotFound("eqs.csv".to_string());
        assert_eq!(err.to_string(), "File not found: eqs.csv");
    }
}
