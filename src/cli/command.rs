//! Audit command implementation.
//!
//! Resolves the rules for a run, checks them, writes the report, and maps
//! the outcome to an exit code:
//!
//! - `0` every file was readable and covered its topics
//! - `1` at least one topic was missing or a file could not be read
//!
//! Configuration problems surface as errors before any file is checked.
//! A report that cannot be written is an error as well.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::audit::{AuditReport, Auditor, MatchOptions};
use crate::cli::args::AuditArgs;
use crate::config::load_rules;
use crate::error::Result;
use crate::report::{HumanFormatter, JsonFormatter, ReportFormat, ReportFormatter, SarifFormatter};

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// The audit command.
pub struct AuditCommand {
    project_root: PathBuf,
    args: AuditArgs,
    use_color: bool,
    quiet: bool,
}

impl AuditCommand {
    /// Create a new audit command.
    pub fn new(project_root: &Path, args: AuditArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            use_color: false,
            quiet: false,
        }
    }

    /// Enable ANSI colors in human output.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Hide passing files and found topics in human output.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Topics from `--topics`, trimmed, with blanks dropped.
    fn topics(&self) -> Option<Vec<String>> {
        self.args.topics.as_ref().map(|topics| {
            topics
                .iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        })
    }

    /// Command-line flags take precedence over manifest settings.
    fn match_options(&self, manifest_options: MatchOptions) -> MatchOptions {
        let mut options = manifest_options;
        if let Some(mode) = self.args.match_mode {
            options.mode = mode;
        }
        if self.args.ignore_case {
            options.ignore_case = true;
        } else if self.args.case_sensitive {
            options.ignore_case = false;
        }
        options
    }

    fn write_report<W: Write>(&self, report: &AuditReport, out: &mut W) -> std::io::Result<()> {
        match self.args.format {
            ReportFormat::Human => HumanFormatter::new(self.use_color)
                .with_quiet(self.quiet)
                .format(report, out),
            ReportFormat::Json => JsonFormatter::new().format(report, out),
            ReportFormat::Sarif => {
                SarifFormatter::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
                    .format(report, out)
            }
        }
    }

    /// Execute the audit, writing the report to `out`.
    pub fn execute<W: Write>(&self, out: &mut W) -> Result<CommandResult> {
        let topics = self.topics();
        let manifest = load_rules(
            &self.project_root,
            &self.args.files,
            topics.as_deref(),
            self.args.manifest.as_deref(),
        )?;

        let options = self.match_options(manifest.settings.into());
        tracing::debug!(
            "Auditing {} rule(s) with {} matching (ignore_case: {})",
            manifest.rules.len(),
            options.mode,
            options.ignore_case
        );

        let auditor = Auditor::new(options).with_root(&self.project_root);
        let report = auditor.run_audit(&manifest.rules);

        self.write_report(&report, out)
            .and_then(|()| out.flush())
            .with_context(|| format!("Failed to write {} report", self.args.format))?;

        if report.all_passed {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}
