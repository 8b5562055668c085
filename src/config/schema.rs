//! Manifest schema definitions.
//!
//! These types mirror the YAML manifest layout:
//!
//! ```yaml
//! settings:
//!   match: word
//!   ignore_case: false
//! default_topics: [PHP, Python]
//! rules:
//!   - path: docs/a.md
//!     topics: [PHP]
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::audit::{CoverageRule, MatchMode, MatchOptions};

/// Root of a YAML manifest file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestFile {
    /// Matching settings.
    #[serde(default)]
    pub settings: Settings,

    /// Topics for rules that don't list their own.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_topics: Vec<String>,

    /// Coverage rules, checked in order.
    #[serde(default)]
    pub rules: Vec<RuleEntry>,
}

/// Matching settings from a manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// How topics are located in file text.
    #[serde(default, rename = "match")]
    pub match_mode: MatchMode,

    /// Case-insensitive matching.
    #[serde(default)]
    pub ignore_case: bool,
}

impl From<Settings> for MatchOptions {
    fn from(settings: Settings) -> Self {
        MatchOptions::new(settings.match_mode).with_ignore_case(settings.ignore_case)
    }
}

/// One rule as written in a YAML manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleEntry {
    /// Documentation file, relative to the project root.
    pub path: PathBuf,

    /// Required topics; `default_topics` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<Vec<String>>,
}

/// A loaded, validated set of rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    /// Rules in manifest order.
    pub rules: Vec<CoverageRule>,
    /// Matching settings.
    pub settings: Settings,
    /// File the rules came from, if any.
    pub source: Option<PathBuf>,
}

impl Manifest {
    /// A manifest built from rules given directly rather than loaded.
    pub fn from_rules(rules: Vec<CoverageRule>) -> Self {
        Self {
            rules,
            settings: Settings::default(),
            source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_to_case_sensitive_substring() {
        let settings = Settings::default();
        assert_eq!(settings.match_mode, MatchMode::Substring);
        assert!(!settings.ignore_case);
        assert_eq!(MatchOptions::from(settings), MatchOptions::default());
    }

    #[test]
    fn parses_full_manifest() {
        let yaml = r#"
settings:
  match: word
  ignore_case: true
default_topics: [PHP, Python]
rules:
  - path: docs/a.md
  - path: docs/b.md
    topics: [Flutter]
"#;
        let file: ManifestFile = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(file.settings.match_mode, MatchMode::Word);
        assert!(file.settings.ignore_case);
        assert_eq!(file.default_topics, vec!["PHP", "Python"]);
        assert_eq!(file.rules.len(), 2);
        assert!(file.rules[0].topics.is_none());
        assert_eq!(file.rules[1].topics, Some(vec!["Flutter".to_string()]));
    }

    #[test]
    fn rejects_unknown_fields() {
        let yaml = "rules:\n  - path: a.md\n    topic: [PHP]\n";
        assert!(serde_yaml::from_str::<ManifestFile>(yaml).is_err());
    }

    #[test]
    fn rejects_unknown_match_mode() {
        let yaml = "settings:\n  match: fuzzy\n";
        assert!(serde_yaml::from_str::<ManifestFile>(yaml).is_err());
    }
}
