//! Error types for coverage audits.
//!
//! This module defines [`AuditError`], the error type used throughout the
//! crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - A file that cannot be read is *not* an error: it is recorded in its
//!   [`CoverageResult`](crate::audit::CoverageResult) and the audit continues
//! - `AuditError` covers configuration problems that make the audit itself
//!   malformed, and these abort before any documentation file is read
//! - Failures writing the report carry `anyhow` context (via `AuditError::Other`)

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for coverage audits.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A coverage rule was constructed with no usable topics.
    #[error("Invalid rule for {path}: {reason}")]
    InvalidRule { path: PathBuf, reason: String },

    /// No manifest exists at the given or discovered location.
    #[error("No manifest found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse a manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected failure with context, such as a report that could not be written.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for coverage audit operations.
pub type Result<T> = std::result::Result<T, AuditError>;
