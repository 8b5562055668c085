//! Audit report formatters.
//!
//! This module provides formatters for writing an [`AuditReport`] in
//! different formats (human-readable, JSON, SARIF).

pub mod human;
pub mod json;
pub mod sarif;

use crate::audit::AuditReport;
use std::io::Write;

/// Output format for audit reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Human,
    Json,
    Sarif,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Human => write!(f, "human"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Sarif => write!(f, "sarif"),
        }
    }
}

/// Trait for formatting audit reports.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
