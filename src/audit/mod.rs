//! Topic coverage checking.
//!
//! # Overview
//!
//! The audit consists of:
//!
//! - **Rules** - A file path and the topics it must mention ([`CoverageRule`])
//! - **Results** - What was missing from one file ([`CoverageResult`])
//! - **Auditor** - Checks rules in order and aggregates an [`AuditReport`]
//!
//! # Example
//!
//! ```
//! use coverage_audit::audit::{Auditor, CoverageRule, MatchOptions};
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("foo.md"), "...supports Python and Go...").unwrap();
//!
//! let rule = CoverageRule::new("foo.md", ["Python", "Go", "Rust"]).unwrap();
//! let auditor = Auditor::new(MatchOptions::default()).with_root(temp.path());
//! let report = auditor.run_audit(&[rule]);
//!
//! assert!(!report.all_passed);
//! assert_eq!(report.results[0].missing_topics(), ["Rust"]);
//! ```

pub mod checker;
pub mod result;
pub mod rule;

pub use checker::{check_file, run_audit, AuditReport, Auditor};
pub use result::CoverageResult;
pub use rule::{CoverageRule, MatchMode, MatchOptions};
