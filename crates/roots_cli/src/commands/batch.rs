//! Batch command implementation
//!
//! Solves every record of a coefficient file. Records are comma separated,
//! one equation per line, highest degree first. Blank lines and lines
//! starting with `#` are skipped. Equations are solved in parallel and
//! reported in input order.

use rayon::prelude::*;
use roots_core::roots::PolynomialSolver;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::PolyrootsConfig;
use crate::format::{render_batch, Report};
use crate::{CliError, Result};

/// One input record before solving.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 1-based position among the records of the input
    pub index: usize,
    /// Raw fields as read
    pub fields: Vec<String>,
}

impl Record {
    /// Parse the fields as coefficients.
    pub fn coefficients(&self) -> std::result::Result<Vec<f64>, String> {
        self.fields
            .iter()
            .map(|field| {
                field
                    .parse::<f64>()
                    .map_err(|_| format!("invalid coefficient '{field}'"))
            })
            .collect()
    }
}

/// Read records from CSV input.
pub fn read_records<R: Read>(input: R) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut records = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        records.push(Record {
            index: i + 1,
            fields: record.iter().map(str::to_string).collect(),
        });
    }
    Ok(records)
}

/// Solve every record in parallel, preserving input order.
pub fn solve_records(records: &[Record], solver: &PolynomialSolver) -> Vec<Report> {
    records
        .par_iter()
        .map(|record| match record.coefficients() {
            Ok(coefficients) => {
                let outcome = solver.solve_coefficients(&coefficients);
                match &outcome {
                    Err(err) if err.is_validation() => {
                        debug!(record = record.index, %err, "Rejected record");
                    }
                    Err(err) => warn!(record = record.index, %err, "Record could not be solved"),
                    Ok(_) => {}
                }
                Report::new(Some(record.index), coefficients, outcome)
            }
            Err(error) => {
                debug!(record = record.index, %error, "Skipping unparsable record");
                Report::failed(Some(record.index), Vec::new(), error)
            }
        })
        .collect()
}

/// Read and solve every record of `input`.
pub fn solve_file(input: &Path, config: &PolyrootsConfig) -> Result<Vec<Report>> {
    if !input.exists() {
        return Err(CliError::FileNotFound(input.display().to_string()));
    }

    let file = std::fs::File::open(input)?;
    let records = read_records(file)?;
    info!(records = records.len(), "Loaded batch input");

    let solver = PolynomialSolver::with_cubic_settings(config.cubic.to_settings());
    Ok(solve_records(&records, &solver))
}

/// Run the batch command
pub fn run(input: &Path, config: &PolyrootsConfig) -> Result<()> {
    info!("Starting batch solve...");
    info!("  Input: {}", input.display());
    info!("  Output format: {}", config.format);

    let reports = solve_file(input, config)?;
    let failed = reports.iter().filter(|r| !r.is_ok()).count();

    print!("{}", render_batch(&reports, config.format, config.precision)?);

    info!(
        solved = reports.len() - failed,
        failed, "Batch solve complete"
    );
    Ok(())
}
