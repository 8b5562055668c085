//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::audit::MatchMode;
use crate::report::ReportFormat;

/// Coverage audit - check documentation files for required topics.
#[derive(Debug, Parser)]
#[command(name = "coverage-audit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Root that rule paths are resolved against (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Only show missing topics and the summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    #[command(flatten)]
    pub audit: AuditArgs,
}

/// Arguments selecting rules, matching, and output format.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AuditArgs {
    /// Documentation files to check (each needs --topics or the built-in list)
    pub files: Vec<PathBuf>,

    /// Rule manifest (YAML or tab-separated)
    #[arg(short, long, conflicts_with = "files")]
    pub manifest: Option<PathBuf>,

    /// Topics required in each FILE (comma-separated)
    #[arg(short, long, value_delimiter = ',', requires = "files")]
    pub topics: Option<Vec<String>>,

    /// Output format
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,

    /// How topics are located (overrides the manifest)
    #[arg(long = "match", value_enum, value_name = "MODE")]
    pub match_mode: Option<MatchMode>,

    /// Case-insensitive topic matching (overrides the manifest)
    #[arg(long)]
    pub ignore_case: bool,

    /// Case-sensitive topic matching (overrides the manifest)
    #[arg(long, conflicts_with = "ignore_case")]
    pub case_sensitive: bool,
}
