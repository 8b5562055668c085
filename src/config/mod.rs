//! Rule configuration.
//!
//! This module handles where audit rules come from:
//! - Manifest schema in [`schema`]
//! - Discovery and parsing in [`loader`]
//! - The built-in topic list in [`builtin`]
//!
//! # Example
//!
//! ```
//! use coverage_audit::config::load_rules;
//! use std::fs;
//! use tempfile::TempDir;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(
//!     temp.path().join(".coverage-audit.tsv"),
//!     "skills/laravel.md\tPHP\n",
//! )
//! .unwrap();
//!
//! let manifest = load_rules(temp.path(), &[], None, None).unwrap();
//! assert_eq!(manifest.rules[0].required_topics(), ["PHP"]);
//! ```
//!
//! # Manifest Locations
//!
//! Without `--manifest`, the first of these in the project root is used:
//! 1. `.coverage-audit.yml`
//! 2. `.coverage-audit.yaml`
//! 3. `.coverage-audit.tsv`

pub mod builtin;
pub mod loader;
pub mod schema;

pub use builtin::{rules_for_files, DEFAULT_TOPICS};
pub use loader::{
    discover_manifest, load_manifest, load_rules, parse_manifest, parse_tsv_manifest,
    parse_yaml_manifest, MANIFEST_NAMES,
};
pub use schema::{Manifest, ManifestFile, RuleEntry, Settings};
