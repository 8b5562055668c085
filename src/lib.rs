//! coverage-audit - Documentation topic coverage gate.
//!
//! Checks that a list of documentation files each mention a set of required
//! topic markers (typically language or framework names) and reports which
//! are missing, so a multi-language support matrix can't silently drift from
//! the files that are supposed to back it.
//!
//! # Modules
//!
//! - [`audit`] - Coverage rules, per-file results, and the auditor
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Manifest discovery, parsing, and the built-in topic list
//! - [`error`] - Error types and result aliases
//! - [`report`] - Human, JSON, and SARIF report formatters
//! - [`ui`] - Terminal styling
//!
//! # Example
//!
//! ```
//! use coverage_audit::audit::{Auditor, CoverageRule, MatchOptions};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("guide.md"), "Laravel (PHP) and Django (Python)").unwrap();
//!
//! let rules = vec![CoverageRule::new("guide.md", ["PHP", "Python"]).unwrap()];
//! let report = Auditor::new(MatchOptions::default())
//!     .with_root(temp.path())
//!     .run_audit(&rules);
//!
//! assert!(report.all_passed);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod ui;

pub use error::{AuditError, Result};
