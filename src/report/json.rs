//! JSON output formatter.
//!
//! Formats audit reports as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::audit::AuditReport;
use serde::Serialize;
use std::io::Write;

/// Formats audit output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    results: Vec<JsonResult<'a>>,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonResult<'a> {
    file: String,
    readable: bool,
    found: Vec<&'a str>,
    missing: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonSummary {
    files: usize,
    passed: usize,
    failed: usize,
    unreadable: usize,
    missing_topics: usize,
    all_passed: bool,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        let results = report
            .results
            .iter()
            .map(|r| JsonResult {
                file: r.file_path().display().to_string(),
                readable: r.file_readable(),
                found: r.found_topics(),
                missing: r.missing_topics(),
                error: r.read_error(),
            })
            .collect();

        let failed = report.failed_count();
        let summary = JsonSummary {
            files: report.results.len(),
            passed: report.results.len() - failed,
            failed,
            unreadable: report.unreadable_count(),
            missing_topics: report.missing_count(),
            all_passed: report.all_passed,
        };

        let output = JsonOutput { results, summary };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
