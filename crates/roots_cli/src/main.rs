//! polyroots - roots of polynomials of degree 1 through 4
//!
//! # Commands
//!
//! - `polyroots solve -- 1 -3 2` - Solve x² - 3x + 2 = 0
//! - `polyroots batch --input equations.csv` - Solve a file of equations
//! - `polyroots check` - Show effective configuration

use clap::{Parser, Subcommand};
use roots_cli::commands;
use roots_cli::config::{build_config, CliArgs};
use roots_cli::Result;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Polynomial root finder
#[derive(Parser)]
#[command(name = "polyroots")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE", env = "POLYROOTS_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json, plain)
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Digits after the decimal point
    #[arg(short, long, global = true)]
    precision: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one equation
    Solve {
        /// Polynomial degree (inferred from the coefficient count if omitted)
        #[arg(short, long)]
        degree: Option<usize>,

        /// Coefficients, highest degree first
        #[arg(required = true, allow_negative_numbers = true, value_name = "COEFF")]
        coefficients: Vec<f64>,
    },

    /// Solve every equation in a CSV file
    Batch {
        /// Path to the coefficient file
        #[arg(short, long, value_name = "FILE")]
        input: PathBuf,
    },

    /// Check configuration and run a solver self-check
    Check,
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        CliArgs {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
            verbose: cli.verbose,
            format: cli.format.clone(),
            precision: cli.precision,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Solve {
            degree,
            coefficients,
        } => commands::solve::run(degree, &coefficients, &config),
        Commands::Batch { input } => commands::batch::run(&input, &config),
        Commands::Check => commands::check::run(&config),
    }
}
