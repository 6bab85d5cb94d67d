//! CLI configuration management
//!
//! Handles loading configuration from TOML files, `POLYROOTS_*` environment
//! variables and command-line flags.

use crate::format::OutputFormat;
use roots_core::math::solvers::SolverConfig;
use roots_core::roots::{CubicSettings, DEFAULT_DEDUP_TOLERANCE, DEFAULT_SEEDS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Digits after the decimal point beyond which `f64` output is noise.
pub const MAX_PRECISION: usize = 17;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid output format: {0}. Must be one of: table, json, plain")]
    InvalidFormat(String),

    #[error("Invalid precision: {0}. Must be at most 17")]
    InvalidPrecision(usize),

    #[error("Invalid cubic solver setting: {0}")]
    InvalidCubic(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// `[cubic]` table: tuning for the multi-seed cubic search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubicConfig {
    /// Newton-Raphson starting points, tried in order
    pub seeds: Vec<f64>,
    /// Real-part distance under which two roots are merged
    pub dedup_tolerance: f64,
    /// Newton-Raphson convergence tolerance
    pub tolerance: f64,
    /// Newton-Raphson iteration cap per seed
    pub max_iterations: usize,
}

impl Default for CubicConfig {
    fn default() -> Self {
        let newton = SolverConfig::<f64>::default();
        Self {
            seeds: DEFAULT_SEEDS.to_vec(),
            dedup_tolerance: DEFAULT_DEDUP_TOLERANCE,
            tolerance: newton.tolerance,
            max_iterations: newton.max_iterations,
        }
    }
}

impl CubicConfig {
    /// Validate the cubic settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.seeds.is_empty() {
            return Err(ConfigError::InvalidCubic(
                "at least one seed is required".to_string(),
            ));
        }
        if let Some(seed) = self.seeds.iter().find(|s| !s.is_finite()) {
            return Err(ConfigError::InvalidCubic(format!(
                "seed {seed} is not finite"
            )));
        }
        if !(self.dedup_tolerance.is_finite() && self.dedup_tolerance >= 0.0) {
            return Err(ConfigError::InvalidCubic(format!(
                "dedup_tolerance must be finite and non-negative, got {}",
                self.dedup_tolerance
            )));
        }
        let newton = SolverConfig {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        };
        if !newton.is_valid() {
            return Err(ConfigError::InvalidCubic(format!(
                "tolerance must be finite and positive and max_iterations > 0, got {} and {}",
                self.tolerance, self.max_iterations
            )));
        }
        Ok(())
    }

    /// Convert to the solver's settings type
    pub fn to_settings(&self) -> CubicSettings {
        CubicSettings {
            seeds: self.seeds.clone(),
            dedup_tolerance: self.dedup_tolerance,
            newton: SolverConfig {
                tolerance: self.tolerance,
                max_iterations: self.max_iterations,
            },
        }
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolyrootsConfig {
    /// Log level
    pub log_level: LogLevel,
    /// Output format for results
    pub format: OutputFormat,
    /// Digits after the decimal point
    pub precision: usize,
    /// Cubic solver settings
    pub cubic: CubicConfig,
}

impl Default for PolyrootsConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            format: OutputFormat::Table,
            precision: 4,
            cubic: CubicConfig::default(),
        }
    }
}

// Environment variables read by `build_config`
pub const ENV_LOG_LEVEL: &str = "POLYROOTS_LOG_LEVEL";
pub const ENV_FORMAT: &str = "POLYROOTS_FORMAT";
pub const ENV_PRECISION: &str = "POLYROOTS_PRECISION";
pub const ENV_CUBIC_SEEDS: &str = "POLYROOTS_CUBIC_SEEDS";
pub const ENV_CUBIC_DEDUP_TOLERANCE: &str = "POLYROOTS_CUBIC_DEDUP_TOLERANCE";
pub const ENV_CUBIC_TOLERANCE: &str = "POLYROOTS_CUBIC_TOLERANCE";
pub const ENV_CUBIC_MAX_ITERATIONS: &str = "POLYROOTS_CUBIC_MAX_ITERATIONS";

fn parse_value<T: FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_list(key: &str, value: &str) -> Result<Vec<f64>, ConfigError> {
    value
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| parse_value(key, s))
        .collect()
}

impl PolyrootsConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let config: PolyrootsConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from `lookup`, which maps a variable name to its value
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(format) = lookup(ENV_FORMAT) {
            self.format = OutputFormat::from_str(&format)?;
        }
        if let Some(precision) = lookup(ENV_PRECISION) {
            self.precision = parse_value(ENV_PRECISION, &precision)?;
        }
        if let Some(seeds) = lookup(ENV_CUBIC_SEEDS) {
            self.cubic.seeds = parse_list(ENV_CUBIC_SEEDS, &seeds)?;
        }
        if let Some(tol) = lookup(ENV_CUBIC_DEDUP_TOLERANCE) {
            self.cubic.dedup_tolerance = parse_value(ENV_CUBIC_DEDUP_TOLERANCE, &tol)?;
        }
        if let Some(tol) = lookup(ENV_CUBIC_TOLERANCE) {
            self.cubic.tolerance = parse_value(ENV_CUBIC_TOLERANCE, &tol)?;
        }
        if let Some(max) = lookup(ENV_CUBIC_MAX_ITERATIONS) {
            self.cubic.max_iterations = parse_value(ENV_CUBIC_MAX_ITERATIONS, &max)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.precision > MAX_PRECISION {
            return Err(ConfigError::InvalidPrecision(self.precision));
        }
        self.cubic.validate()
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        } else if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(format) = &cli.format {
            self.format = OutputFormat::from_str(format)?;
        }
        if let Some(precision) = cli.precision {
            self.precision = precision;
        }
        Ok(())
    }
}

/// CLI arguments relevant to configuration
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise the log level to debug unless one is given explicitly
    pub verbose: bool,
    /// Output format override
    pub format: Option<String>,
    /// Precision override
    pub precision: Option<usize>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<PolyrootsConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliArgs, lookup: F) -> Result<PolyrootsConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => PolyrootsConfig::from_file(path)?,
        None => PolyrootsConfig::default(),
    };

    config.apply_env_with(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}
