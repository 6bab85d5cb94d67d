//! Presentation of solve results.
//!
//! The core returns structured roots; everything textual lives here. Numbers
//! are printed fixed-point with a configurable number of decimals, complex
//! roots as `re ± imi`.

use crate::config::ConfigError;
use roots_core::types::{ComplexRoot, Degree, RootSet, SolveError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output formats supported by `solve` and `batch`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Plain,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "plain" => Ok(OutputFormat::Plain),
            _ => Err(ConfigError::InvalidFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Plain => write!(f, "plain"),
        }
    }
}

/// Outcome of solving one equation, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// 1-based position of the record in batch input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<usize>,
    /// Coefficients as given, highest degree first
    pub coefficients: Vec<f64>,
    /// Degree, when the coefficient count names one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<Degree>,
    /// Roots in discovery order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roots: Option<RootSet>,
    /// Error message when solving failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    /// Build a report from a solve outcome.
    pub fn new(
        record: Option<usize>,
        coefficients: Vec<f64>,
        outcome: Result<RootSet, SolveError>,
    ) -> Self {
        match outcome {
            Ok(roots) => Self {
                record,
                degree: Degree::try_from(coefficients.len().saturating_sub(1)).ok(),
                coefficients,
                roots: Some(roots),
                error: None,
            },
            Err(err) => Self::failed(record, coefficients, err.to_string()),
        }
    }

    /// Build a report for a record that could not be solved.
    pub fn failed(record: Option<usize>, coefficients: Vec<f64>, error: String) -> Self {
        let degree = Degree::try_from(coefficients.len().saturating_sub(1)).ok();
        Self {
            record,
            coefficients,
            degree,
            roots: None,
            error: Some(error),
        }
    }

    /// Whether the equation was solved.
    pub fn is_ok(&self) -> bool {
        self.roots.is_some()
    }
}

/// Fixed-point with `precision` decimals; values that round to zero print unsigned.
pub fn fixed(value: f64, precision: usize) -> String {
    let s = format!("{value:.precision$}");
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}

/// `1.2345`, `0.5000 + 0.8660i` or `0.5000 - 0.8660i`.
pub fn format_value(root: &ComplexRoot, precision: usize) -> String {
    if root.is_real() {
        return fixed(root.real, precision);
    }
    let sign = if root.imag < 0.0 { '-' } else { '+' };
    format!(
        "{} {} {}i",
        fixed(root.real, precision),
        sign,
        fixed(root.imag.abs(), precision)
    )
}

/// `x{index} = value`, with `index` starting at 1.
pub fn format_root(index: usize, root: &ComplexRoot, precision: usize) -> String {
    format!("x{} = {}", index, format_value(root, precision))
}

/// Human-readable polynomial, e.g. `x^2 - 3x + 2`.
pub fn format_polynomial(coeffs: &[f64]) -> String {
    let n = coeffs.len().saturating_sub(1);
    let mut out = String::new();

    for (i, &c) in coeffs.iter().enumerate() {
        let power = n - i;
        if c == 0.0 && !(out.is_empty() && power == 0) {
            continue;
        }

        let magnitude = c.abs();
        if out.is_empty() {
            if c < 0.0 {
                out.push('-');
            }
        } else {
            out.push_str(if c < 0.0 { " - " } else { " + " });
        }

        if magnitude != 1.0 || power == 0 {
            out.push_str(&magnitude.to_string());
        }
        match power {
            0 => {}
            1 => out.push('x'),
            p => out.push_str(&format!("x^{p}")),
        }
    }

    if out.is_empty() {
        out.push('0');
    }
    out
}

fn table_line(widths: &[usize], cells: &[&str]) -> String {
    let padded: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| format!(" {:<w$} ", cells.get(i).copied().unwrap_or("")))
        .collect();
    format!("│{}│\n", padded.join("│"))
}

fn table_rule(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}\n", segments.join(mid))
}

/// Box-drawn table with left-aligned cells.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = table_rule(&widths, "┌", "┬", "┐");
    out.push_str(&table_line(&widths, headers));
    out.push_str(&table_rule(&widths, "├", "┼", "┤"));
    for row in rows {
        let cells: Vec<&str> = row.iter().map(String::as_str).collect();
        out.push_str(&table_line(&widths, &cells));
    }
    out.push_str(&table_rule(&widths, "└", "┴", "┘"));
    out
}

fn roots_inline(report: &Report, precision: usize) -> String {
    match (&report.roots, &report.error) {
        (Some(roots), _) => roots
            .iter()
            .enumerate()
            .map(|(i, r)| format_root(i + 1, r, precision))
            .collect::<Vec<_>>()
            .join(", "),
        (None, Some(error)) => format!("error: {error}"),
        (None, None) => String::new(),
    }
}

/// Render one report.
pub fn render_report(
    report: &Report,
    format: OutputFormat,
    precision: usize,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report).map(|s| s + "\n"),
        OutputFormat::Plain => {
            let mut out = String::new();
            match (&report.roots, &report.error) {
                (Some(roots), _) => {
                    for (i, root) in roots.iter().enumerate() {
                        out.push_str(&format_root(i + 1, root, precision));
                        out.push('\n');
                    }
                }
                (None, Some(error)) => out.push_str(&format!("error: {error}\n")),
                (None, None) => {}
            }
            Ok(out)
        }
        OutputFormat::Table => {
            let mut out = format!("Equation: {} = 0\n", format_polynomial(&report.coefficients));
            match (&report.roots, &report.error) {
                (Some(roots), _) => {
                    let rows: Vec<Vec<String>> = roots
                        .iter()
                        .enumerate()
                        .map(|(i, r)| vec![format!("x{}", i + 1), format_value(r, precision)])
                        .collect();
                    out.push_str(&render_table(&["Root", "Value"], &rows));
                }
                (None, Some(error)) => out.push_str(&format!("Error: {error}\n")),
                (None, None) => {}
            }
            Ok(out)
        }
    }
}

/// Render a batch of reports in input order.
pub fn render_batch(
    reports: &[Report],
    format: OutputFormat,
    precision: usize,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(reports).map(|s| s + "\n"),
        OutputFormat::Plain => Ok(reports
            .iter()
            .map(|r| {
                format!(
                    "record {}: {}\n",
                    r.record.unwrap_or_default(),
                    roots_inline(r, precision)
                )
            })
            .collect()),
        OutputFormat::Table => {
            let rows: Vec<Vec<String>> = reports
                .iter()
                .map(|r| {
                    vec![
                        r.record.map(|n| n.to_string()).unwrap_or_default(),
                        format_polynomial(&r.coefficients),
                        roots_inline(r, precision),
                    ]
                })
                .collect();
            Ok(render_table(&["#", "Equation", "Roots"], &rows))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_real_root() {
        assert_eq!(format_root(1, &ComplexRoot::real(1.23454), 4), "x1 = 1.2345");
        assert_eq!(format_root(2, &ComplexRoot::real(-2.0), 4), "x2 = -2.0000");
    }

    #[test]
    fn test_format_complex_roots() {
        let root = ComplexRoot::new(0.5, 3.0_f64.sqrt() / 2.0);
        assert_eq!(format_root(1, &root, 4), "x1 = 0.5000 + 0.8660i");
        assert_eq!(format_root(2, &root.conj(), 4), "x2 = 0.5000 - 0.8660i");
    }

    #[test]
    fn test_negative_zero_prints_unsigned() {
        assert_eq!(fixed(-0.0, 4), "0.0000");
        assert_eq!(fixed(-2.2e-16, 4), "0.0000");
        assert_eq!(fixed(-0.00005, 2), "0.00");
        assert_eq!(
            format_value(&ComplexRoot::new(-2.2e-16, 1.0), 4),
            "0.0000 + 1.0000i"
        );
    }

    #[test]
    fn test_precision() {
        assert_eq!(fixed(std::f64::consts::PI, 0), "3");
        assert_eq!(fixed(std::f64::consts::PI, 2), "3.14");
        assert_eq!(fixed(std::f64::consts::PI, 6), "3.141593");
    }

    #[test]
    fn test_format_polynomial() {
        assert_eq!(format_polynomial(&[1.0, -3.0, 2.0]), "x^2 - 3x + 2");
        assert_eq!(format_polynomial(&[2.0, -4.0]), "2x - 4");
        assert_eq!(format_polynomial(&[-1.0, 0.0, 0.0, 0.0, 1.0]), "-x^4 + 1");
        assert_eq!(format_polynomial(&[0.5, 0.0, 0.0, -8.0]), "0.5x^3 - 8");
        assert_eq!(format_polynomial(&[1.0, 0.0, 0.0]), "x^2");
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str("TABLE").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str("Plain").unwrap(), OutputFormat::Plain);
        assert!(OutputFormat::from_str("csv").is_err());
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_render_table() {
        let table = render_table(&["Root", "Value"], &[vec!["x1".into(), "2.0000".into()]]);
        let expected = "\
┌──────┬────────┐
│ Root │ Value  │
├──────┼────────┤
│ x1   │ 2.0000 │
└──────┴────────┘
";
        assert_eq!(table, expected);
    }

    #[test]
    fn test_render_plain_report() {
        let report = Report::new(
            None,
            vec![1.0, 0.0, 1.0],
            Ok(RootSet::from(vec![
                ComplexRoot::new(0.0, 1.0),
                ComplexRoot::new(0.0, -1.0),
            ])),
        );
        let out = render_report(&report, OutputFormat::Plain, 4).unwrap();
        assert_eq!(out, "x1 = 0.0000 + 1.0000i\nx2 = 0.0000 - 1.0000i\n");
    }

    #[test]
    fn test_render_failed_report() {
        let report = Report::new(
            None,
            vec![0.0, 1.0, 1.0],
            Err(SolveError::InvalidLeadingCoefficient {
                degree: Degree::Quadratic,
            }),
        );
        assert!(!report.is_ok());
        assert_eq!(report.degree, Some(Degree::Quadratic));

        let plain = render_report(&report, OutputFormat::Plain, 4).unwrap();
        assert_eq!(
            plain,
            "error: Leading coefficient cannot be zero for a quadratic (degree 2) equation\n"
        );

        let table = render_report(&report, OutputFormat::Table, 4).unwrap();
        assert_eq!(
            table,
            "Equation: x + 1 = 0\n\
             Error: Leading coefficient cannot be zero for a quadratic (degree 2) equation\n"
        );
    }

    #[test]
    fn test_render_json_report() {
        let report = Report::new(
            None,
            vec![2.0, -4.0],
            Ok(RootSet::from(vec![ComplexRoot::real(2.0)])),
        );
        let json = render_report(&report, OutputFormat::Json, 4).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["degree"], "linear");
        assert_eq!(value["roots"][0]["real"], 2.0);
        assert_eq!(value["roots"][0]["imag"], 0.0);
        assert!(value.get("error").is_none());
        assert!(value.get("record").is_none());
    }

    #[test]
    fn test_render_batch_plain() {
        let reports = vec![
            Report::new(
                Some(1),
                vec![2.0, -4.0],
                Ok(RootSet::from(vec![ComplexRoot::real(2.0)])),
            ),
            Report::failed(Some(2), vec![], "invalid coefficient 'abc'".to_string()),
        ];
        let out = render_batch(&reports, OutputFormat::Plain, 2).unwrap();
        assert_eq!(
            out,
            "record 1: x1 = 2.00\nrecord 2: error: invalid coefficient 'abc'\n"
        );
    }
}
