//! Human-readable output formatter.
//!
//! Prints one block per file in rule order:
//!
//! ```text
//! Checking docs/skills.md...
//!   ✅ PHP found
//!   ❌ Missing Flutter
//! ```

use super::ReportFormatter;
use crate::audit::{AuditReport, CoverageResult};
use crate::ui::AuditTheme;
use std::io::Write;

/// Formats audit reports for terminal display.
pub struct HumanFormatter {
    /// Whether to use colors (ANSI escape codes).
    pub use_color: bool,
    /// Hide found topics and fully covered files.
    pub quiet: bool,
}

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new(use_color: bool) -> Self {
        Self {
            use_color,
            quiet: false,
        }
    }

    /// Only report problems.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    fn write_result<W: Write>(
        &self,
        theme: &AuditTheme,
        result: &CoverageResult,
        writer: &mut W,
    ) -> std::io::Result<()> {
        writeln!(
            writer,
            "Checking {}...",
            theme.header.apply_to(result.file_path().display())
        )?;

        if !result.file_readable() {
            let reason = result.read_error().unwrap_or("unknown error");
            writeln!(
                writer,
                "  {}",
                theme
                    .warning
                    .apply_to(format!("⚠️  File not readable ({})", reason))
            )?;
        }

        for topic in result.required_topics() {
            if result.missing_topics().contains(topic) {
                writeln!(
                    writer,
                    "  {}",
                    theme.error.apply_to(format!("❌ Missing {}", topic))
                )?;
            } else if !self.quiet {
                writeln!(
                    writer,
                    "  {}",
                    theme.success.apply_to(format!("✅ {} found", topic))
                )?;
            }
        }

        Ok(())
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        let theme = AuditTheme::for_color(self.use_color);
        let mut printed = false;

        for result in &report.results {
            if self.quiet && result.passed() {
                continue;
            }
            self.write_result(&theme, result, writer)?;
            printed = true;
        }

        if printed {
            writeln!(writer)?;
        }

        // Summary
        if report.all_passed {
            writeln!(
                writer,
                "{}",
                theme.success.apply_to(format!(
                    "All {} file(s) cover their required topics",
                    report.results.len()
                ))
            )?;
        } else {
            let mut summary = format!(
                "Coverage audit failed: {} missing topic(s) across {} file(s)",
                report.missing_count(),
                report.failed_count()
            );
            let unreadable = report.unreadable_count();
            if unreadable > 0 {
                summary.push_str(&format!(", {} unreadable", unreadable));
            }
            writeln!(writer, "{}", theme.error.apply_to(summary))?;
        }

        Ok(())
    }
}
