//! Coverage rule definitions.
//!
//! This module provides the core types for describing what an audit expects:
//!
//! - [`CoverageRule`] - A file path paired with the topics it must mention
//! - [`MatchMode`] - How a topic is located in the file text
//! - [`MatchOptions`] - Matching configuration shared by every rule in a run

use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{AuditError, Result};

/// How a topic marker is located in a document.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Literal substring anywhere in the text.
    #[default]
    Substring,
    /// Literal topic that is not part of a longer word.
    Word,
}

impl std::fmt::Display for MatchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchMode::Substring => write!(f, "substring"),
            MatchMode::Word => write!(f, "word"),
        }
    }
}

/// Matching configuration for an audit run.
///
/// The default is a case-sensitive literal substring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    /// How topics are located.
    pub mode: MatchMode,
    /// Whether case differences are ignored.
    pub ignore_case: bool,
}

impl MatchOptions {
    /// Create options with the given mode, case-sensitive.
    pub fn new(mode: MatchMode) -> Self {
        Self {
            mode,
            ignore_case: false,
        }
    }

    /// Enable or disable case-insensitive matching.
    pub fn with_ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Check whether `topic` occurs in `text` under these options.
    ///
    /// The plain case-sensitive substring search never touches a regex.
    /// The other modes compile the escaped topic, so no topic is ever
    /// interpreted as a pattern.
    pub fn matches(&self, text: &str, topic: &str) -> bool {
        if self.mode == MatchMode::Substring && !self.ignore_case {
            return text.contains(topic);
        }

        let regex = self.pattern(topic).and_then(|pattern| {
            RegexBuilder::new(&pattern)
                .case_insensitive(self.ignore_case)
                .build()
        });
        match regex {
            Ok(re) => re.is_match(text),
            Err(e) => {
                tracing::warn!("Cannot match topic {:?}: {}", topic, e);
                false
            }
        }
    }

    /// Escaped topic, with `\b` on each edge that starts or ends with a
    /// word character. Edges are classified by the same `\w` that `\b` uses.
    fn pattern(&self, topic: &str) -> std::result::Result<String, regex::Error> {
        let mut pattern = regex::escape(topic);
        if self.mode == MatchMode::Word {
            if Regex::new(r"\A\w")?.is_match(topic) {
                pattern.insert_str(0, r"\b");
            }
            if Regex::new(r"\w\z")?.is_match(topic) {
                pattern.push_str(r"\b");
            }
        }
        Ok(pattern)
    }
}

/// One file's expected topic coverage.
///
/// A rule always has at least one non-blank topic; [`CoverageRule::new`]
/// rejects anything else. Duplicate topics collapse to their first
/// occurrence so the topic list behaves as an ordered set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageRule {
    file_path: PathBuf,
    required_topics: Vec<String>,
}

impl CoverageRule {
    /// Create a new rule.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRule` if the path is empty, or if `topics` is empty or
    /// contains a blank topic.
    pub fn new<I, S>(file_path: impl Into<PathBuf>, topics: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let file_path = file_path.into();
        if file_path.as_os_str().is_empty() {
            return Err(AuditError::InvalidRule {
                path: file_path,
                reason: "file path must not be empty".to_string(),
            });
        }

        let mut required_topics: Vec<String> = Vec::new();

        for topic in topics {
            let topic = topic.into();
            if topic.trim().is_empty() {
                return Err(AuditError::InvalidRule {
                    path: file_path,
                    reason: "topics must not be blank".to_string(),
                });
            }
            if !required_topics.contains(&topic) {
                required_topics.push(topic);
            }
        }

        if required_topics.is_empty() {
            return Err(AuditError::InvalidRule {
                path: file_path,
                reason: "a rule needs at least one required topic".to_string(),
            });
        }

        Ok(Self {
            file_path,
            required_topics,
        })
    }

    /// Path of the documentation file, as written in the rule.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Topics the file must mention, in rule order.
    pub fn required_topics(&self) -> &[String] {
        &self.required_topics
    }
}
