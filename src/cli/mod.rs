//! Command-line interface for coverage-audit.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and the audit command.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The audit command and its exit codes

pub mod args;
pub mod command;

pub use args::{AuditArgs, Cli};
pub use command::{AuditCommand, CommandResult};
