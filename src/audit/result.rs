//! Per-file audit outcomes.

use std::path::{Path, PathBuf};

use super::rule::CoverageRule;

/// The outcome of checking one [`CoverageRule`].
///
/// `missing_topics` is always an ordered subset of the rule's topics. A file
/// that could not be read reports every topic as missing, with
/// [`file_readable`](Self::file_readable) telling the two cases apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageResult {
    file_path: PathBuf,
    required_topics: Vec<String>,
    missing_topics: Vec<String>,
    file_readable: bool,
    read_error: Option<String>,
}

impl CoverageResult {
    /// Result for a file that was read; `is_present` decides each topic.
    pub(crate) fn from_content(
        rule: &CoverageRule,
        mut is_present: impl FnMut(&str) -> bool,
    ) -> Self {
        let missing_topics = rule
            .required_topics()
            .iter()
            .filter(|topic| !is_present(topic.as_str()))
            .cloned()
            .collect();

        Self {
            file_path: rule.file_path().to_path_buf(),
            required_topics: rule.required_topics().to_vec(),
            missing_topics,
            file_readable: true,
            read_error: None,
        }
    }

    /// Result for a file that could not be read.
    pub(crate) fn unreadable(rule: &CoverageRule, reason: impl Into<String>) -> Self {
        Self {
            file_path: rule.file_path().to_path_buf(),
            required_topics: rule.required_topics().to_vec(),
            missing_topics: rule.required_topics().to_vec(),
            file_readable: false,
            read_error: Some(reason.into()),
        }
    }

    /// Path of the checked file, echoed from the rule.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Topics the rule required, in rule order.
    pub fn required_topics(&self) -> &[String] {
        &self.required_topics
    }

    /// Topics that were not found (or not confirmed), in rule order.
    pub fn missing_topics(&self) -> &[String] {
        &self.missing_topics
    }

    /// Topics that were found, in rule order.
    pub fn found_topics(&self) -> Vec<&str> {
        self.required_topics
            .iter()
            .filter(|t| !self.missing_topics.contains(t))
            .map(String::as_str)
            .collect()
    }

    /// Whether the file could be read at all.
    pub fn file_readable(&self) -> bool {
        self.file_readable
    }

    /// Why the file could not be read, if it couldn't.
    pub fn read_error(&self) -> Option<&str> {
        self.read_error.as_deref()
    }

    /// Readable and every topic present.
    pub fn passed(&self) -> bool {
        self.file_readable && self.missing_topics.is_empty()
    }
}
