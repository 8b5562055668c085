//! Manifest discovery and loading.
//!
//! Rules come from exactly one source, in this order:
//! 1. Files named on the command line (with `--topics` or the built-in list)
//! 2. An explicit `--manifest` path
//! 3. A manifest discovered in the project root (see [`MANIFEST_NAMES`])
//!
//! Every rule is constructed, and so validated, before any documentation
//! file is read.

use std::fs;
use std::path::{Path, PathBuf};

use crate::audit::CoverageRule;
use crate::config::builtin::rules_for_files;
use crate::config::schema::{Manifest, ManifestFile, Settings};
use crate::error::{AuditError, Result};

/// Manifest file names looked up in the project root, in priority order.
pub const MANIFEST_NAMES: [&str; 3] = [
    ".coverage-audit.yml",
    ".coverage-audit.yaml",
    ".coverage-audit.tsv",
];

/// Find a manifest in the project root.
pub fn discover_manifest(project_root: &Path) -> Option<PathBuf> {
    MANIFEST_NAMES
        .iter()
        .map(|name| project_root.join(name))
        .find(|path| path.is_file())
}

/// Resolve the rules for a run.
///
/// # Errors
///
/// Returns `ManifestNotFound` when no files are given and no manifest can be
/// found, `ManifestParse` for malformed manifests, and `InvalidRule` for
/// rules without topics.
pub fn load_rules(
    project_root: &Path,
    files: &[PathBuf],
    topics: Option<&[String]>,
    manifest: Option<&Path>,
) -> Result<Manifest> {
    if !files.is_empty() {
        tracing::debug!("Using {} file(s) from the command line", files.len());
        return Ok(Manifest::from_rules(rules_for_files(files, topics)?));
    }

    let path = match manifest {
        Some(path) => project_root.join(path),
        None => discover_manifest(project_root).ok_or_else(|| AuditError::ManifestNotFound {
            path: project_root.join(MANIFEST_NAMES[0]),
        })?,
    };

    load_manifest(&path)
}

/// Load and parse a manifest file.
///
/// # Errors
///
/// Returns `ManifestNotFound` if the file doesn't exist.
pub fn load_manifest(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AuditError::ManifestNotFound {
                path: path.to_path_buf(),
            }
        } else {
            AuditError::Io(e)
        }
    })?;

    let manifest = parse_manifest(&content, path)?;
    tracing::debug!(
        "Loaded {} rule(s) from {}",
        manifest.rules.len(),
        path.display()
    );
    Ok(manifest)
}

/// Parse manifest content, choosing the format from the file extension.
///
/// `.yml` and `.yaml` are YAML; anything else is tab-separated.
pub fn parse_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    let is_yaml = source_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"));

    let manifest = if is_yaml {
        parse_yaml_manifest(content, source_path)?
    } else {
        parse_tsv_manifest(content, source_path)?
    };

    if manifest.rules.is_empty() {
        return Err(AuditError::ManifestParse {
            path: source_path.to_path_buf(),
            message: "manifest defines no rules".to_string(),
        });
    }

    Ok(manifest)
}

/// Parse a YAML manifest.
pub fn parse_yaml_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    let file: ManifestFile =
        serde_yaml::from_str(content).map_err(|e| AuditError::ManifestParse {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    let rules = file
        .rules
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            if entry.path.as_os_str().is_empty() {
                return Err(AuditError::ManifestParse {
                    path: source_path.to_path_buf(),
                    message: format!("rule {}: path must not be empty", idx + 1),
                });
            }
            let topics = entry
                .topics
                .unwrap_or_else(|| file.default_topics.clone());
            CoverageRule::new(entry.path, topics)
                .map_err(|e| locate(e, &source_path.display().to_string()))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Manifest {
        rules,
        settings: file.settings,
        source: Some(source_path.to_path_buf()),
    })
}

/// Parse a tab-separated manifest: `<filePath>\t<topic1>,<topic2>,...`.
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_tsv_manifest(content: &str, source_path: &Path) -> Result<Manifest> {
    let mut rules = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (path, topics) = line
            .split_once('\t')
            .ok_or_else(|| AuditError::ManifestParse {
                path: source_path.to_path_buf(),
                message: format!("line {}: expected <path><TAB><topics>", line_no),
            })?;

        let path = path.trim();
        if path.is_empty() {
            return Err(AuditError::ManifestParse {
                path: source_path.to_path_buf(),
                message: format!("line {}: path must not be empty", line_no),
            });
        }

        let topics = topics
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty());

        let rule = CoverageRule::new(path, topics)
            .map_err(|e| locate(e, &format!("{}:{}", source_path.display(), line_no)))?;
        rules.push(rule);
    }

    Ok(Manifest {
        rules,
        settings: Settings::default(),
        source: Some(source_path.to_path_buf()),
    })
}

/// Attach a manifest location to a rule construction error.
fn locate(err: AuditError, location: &str) -> AuditError {
    match err {
        AuditError::InvalidRule { path, reason } => AuditError::InvalidRule {
            path,
            reason: format!("{} ({})", reason, location),
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MatchMode;
    use tempfile::TempDir;

    #[test]
    fn discover_prefers_yaml() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".coverage-audit.tsv"), "a.md\tPHP\n").unwrap();
        fs::write(temp.path().join(".coverage-audit.yml"), "rules: []\n").unwrap();

        let found = discover_manifest(temp.path()).unwrap();
        assert!(found.ends_with(".coverage-audit.yml"));
    }

    #[test]
    fn discover_returns_none_without_manifest() {
        let temp = TempDir::new().unwrap();
        assert!(discover_manifest(temp.path()).is_none());
    }

    #[test]
    fn tsv_parses_rules_in_order() {
        let content = "# header\n\ndocs/a.md\tPHP, Python\ndocs/b.md\tReact Native\n";
        let manifest = parse_manifest(content, Path::new("rules.tsv")).unwrap();

        assert_eq!(manifest.rules.len(), 2);
        assert_eq!(manifest.rules[0].file_path(), Path::new("docs/a.md"));
        assert_eq!(manifest.rules[0].required_topics(), ["PHP", "Python"]);
        assert_eq!(manifest.rules[1].required_topics(), ["React Native"]);
        assert_eq!(manifest.settings, Settings::default());
    }

    #[test]
    fn tsv_handles_crlf() {
        let content = "a.md\tPHP,Java\r\n";
        let manifest = parse_tsv_manifest(content, Path::new("rules.tsv")).unwrap();
        assert_eq!(manifest.rules[0].required_topics(), ["PHP", "Java"]);
    }

    #[test]
    fn tsv_missing_tab_reports_line() {
        let content = "a.md\tPHP\nb.md PHP\n";
        let err = parse_tsv_manifest(content, Path::new("rules.tsv")).unwrap_err();

        assert!(matches!(err, AuditError::ManifestParse { .. }));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn tsv_empty_path_is_parse_error() {
        let content = "a.md\tPHP\n\tPHP\n";
        let err = parse_tsv_manifest(content, Path::new("rules.tsv")).unwrap_err();

        assert!(matches!(err, AuditError::ManifestParse { .. }));
        assert!(err.to_string().contains("line 2: path must not be empty"));
    }

    #[test]
    fn tsv_rule_without_topics_is_invalid() {
        let content = "a.md\tPHP\nb.md\t , \n";
        let err = parse_tsv_manifest(content, Path::new("rules.tsv")).unwrap_err();

        assert!(matches!(err, AuditError::InvalidRule { .. }));
        assert!(err.to_string().contains("b.md"));
        assert!(err.to_string().contains("rules.tsv:2"));
    }

    #[test]
    fn yaml_applies_default_topics() {
        let content = r#"
settings:
  match: word
default_topics: [PHP, Java]
rules:
  - path: a.md
  - path: b.md
    topics: [Flutter]
"#;
        let manifest = parse_manifest(content, Path::new("audit.yml")).unwrap();

        assert_eq!(manifest.settings.match_mode, MatchMode::Word);
        assert_eq!(manifest.rules[0].required_topics(), ["PHP", "Java"]);
        assert_eq!(manifest.rules[1].required_topics(), ["Flutter"]);
        assert_eq!(manifest.source.as_deref(), Some(Path::new("audit.yml")));
    }

    #[test]
    fn yaml_rule_without_any_topics_is_invalid() {
        let content = "rules:\n  - path: a.md\n";
        let err = parse_manifest(content, Path::new("audit.yaml")).unwrap_err();
        assert!(matches!(err, AuditError::InvalidRule { .. }));
    }

    #[test]
    fn yaml_empty_path_is_parse_error() {
        let content = "rules:\n  - path: a.md\n    topics: [PHP]\n  - path: \"\"\n    topics: [PHP]\n";
        let err = parse_manifest(content, Path::new("audit.yml")).unwrap_err();

        assert!(matches!(err, AuditError::ManifestParse { .. }));
        assert!(err.to_string().contains("rule 2: path must not be empty"));
    }

    #[test]
    fn yaml_syntax_error_is_parse_error() {
        let err = parse_manifest("rules: [", Path::new("audit.yml")).unwrap_err();
        assert!(matches!(err, AuditError::ManifestParse { .. }));
    }

    #[test]
    fn empty_manifest_is_rejected() {
        let err = parse_manifest("# nothing here\n", Path::new("rules.tsv")).unwrap_err();
        assert!(err.to_string().contains("no rules"));
    }

    #[test]
    fn load_missing_manifest_is_not_found() {
        let temp = TempDir::new().unwrap();
        let err = load_manifest(&temp.path().join("nope.tsv")).unwrap_err();
        assert!(matches!(err, AuditError::ManifestNotFound { .. }));
    }

    #[test]
    fn load_rules_prefers_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".coverage-audit.tsv"), "x.md\tGo\n").unwrap();

        let manifest = load_rules(temp.path(), &[PathBuf::from("a.md")], None, None).unwrap();

        assert_eq!(manifest.rules.len(), 1);
        assert_eq!(manifest.rules[0].file_path(), Path::new("a.md"));
        assert!(manifest.source.is_none());
    }

    #[test]
    fn load_rules_discovers_manifest() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".coverage-audit.tsv"), "x.md\tGo\n").unwrap();

        let manifest = load_rules(temp.path(), &[], None, None).unwrap();

        assert_eq!(manifest.rules[0].required_topics(), ["Go"]);
    }

    #[test]
    fn load_rules_without_source_fails() {
        let temp = TempDir::new().unwrap();
        let err = load_rules(temp.path(), &[], None, None).unwrap_err();
        assert!(matches!(err, AuditError::ManifestNotFound { .. }));
    }
}
