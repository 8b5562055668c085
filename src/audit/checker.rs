//! Rule checking and audit aggregation.
//!
//! [`Auditor`] checks rules strictly in input order. A file that cannot be
//! read is recorded in its result and the audit moves on to the next rule,
//! so a single run reports every gap.

use std::fs;
use std::path::{Path, PathBuf};

use super::result::CoverageResult;
use super::rule::{CoverageRule, MatchOptions};

/// Outcome of a full audit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditReport {
    /// One result per rule, in rule order.
    pub results: Vec<CoverageResult>,
    /// True iff every file was readable and covered all of its topics.
    pub all_passed: bool,
}

impl AuditReport {
    /// Build a report from results, deriving `all_passed`.
    pub fn new(results: Vec<CoverageResult>) -> Self {
        let all_passed = results.iter().all(CoverageResult::passed);
        Self {
            results,
            all_passed,
        }
    }

    /// Number of files that failed, for any reason.
    pub fn failed_count(&self) -> usize {
        self.results.iter().filter(|r| !r.passed()).count()
    }

    /// Number of files that could not be read.
    pub fn unreadable_count(&self) -> usize {
        self.results.iter().filter(|r| !r.file_readable()).count()
    }

    /// Total missing topics across all files.
    pub fn missing_count(&self) -> usize {
        self.results.iter().map(|r| r.missing_topics().len()).sum()
    }

    /// Total required topics across all files.
    pub fn topic_count(&self) -> usize {
        self.results.iter().map(|r| r.required_topics().len()).sum()
    }
}

/// Checks coverage rules against files on disk.
#[derive(Debug, Clone, Default)]
pub struct Auditor {
    root: Option<PathBuf>,
    options: MatchOptions,
}

impl Auditor {
    /// Create an auditor that resolves paths against the current directory.
    pub fn new(options: MatchOptions) -> Self {
        Self {
            root: None,
            options,
        }
    }

    /// Resolve relative rule paths against `root`.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => path.to_path_buf(),
        }
    }

    /// Check one rule.
    ///
    /// Never fails: an unreadable file produces a result with every topic
    /// missing and `file_readable` false.
    pub fn check_file(&self, rule: &CoverageRule) -> CoverageResult {
        let path = self.resolve(rule.file_path());
        tracing::debug!("Checking {}", path.display());

        match fs::read(&path) {
            Ok(bytes) => {
                let text = String::from_utf8_lossy(&bytes);
                let result =
                    CoverageResult::from_content(rule, |topic| self.options.matches(&text, topic));
                tracing::debug!(
                    "{}: {} of {} topic(s) missing",
                    path.display(),
                    result.missing_topics().len(),
                    result.required_topics().len()
                );
                result
            }
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", path.display(), e);
                CoverageResult::unreadable(rule, e.to_string())
            }
        }
    }

    /// Check every rule in order and aggregate the results.
    pub fn run_audit(&self, rules: &[CoverageRule]) -> AuditReport {
        let results = rules.iter().map(|rule| self.check_file(rule)).collect();
        AuditReport::new(results)
    }
}

/// Check one rule, resolving its path against the current directory.
pub fn check_file(rule: &CoverageRule, options: MatchOptions) -> CoverageResult {
    Auditor::new(options).check_file(rule)
}

/// Check every rule in order, resolving paths against the current directory.
pub fn run_audit(rules: &[CoverageRule], options: MatchOptions) -> AuditReport {
    Auditor::new(options).run_audit(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::MatchMode;
    use tempfile::TempDir;

    fn setup(files: &[(&str, &str)]) -> TempDir {
        let temp = TempDir::new().unwrap();
        for (name, content) in files {
            fs::write(temp.path().join(name), content).unwrap();
        }
        temp
    }

    #[test]
    fn reports_only_absent_topics() {
        let temp = setup(&[("foo.md", "...supports Python and Go...")]);
        let auditor = Auditor::default().with_root(temp.path());
        let rule = CoverageRule::new("foo.md", ["Python", "Go", "Rust"]).unwrap();

        let result = auditor.check_file(&rule);

        assert!(result.file_readable());
        assert_eq!(result.missing_topics(), ["Rust"]);
        assert_eq!(result.file_path(), Path::new("foo.md"));
    }

    #[test]
    fn missing_file_is_unreadable() {
        let temp = TempDir::new().unwrap();
        let auditor = Auditor::default().with_root(temp.path());
        let rule = CoverageRule::new("missing.md", ["PHP"]).unwrap();

        let result = auditor.check_file(&rule);

        assert!(!result.file_readable());
        assert_eq!(result.missing_topics(), ["PHP"]);
        assert!(result.read_error().is_some());
    }

    #[test]
    fn directory_is_unreadable() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        let auditor = Auditor::default().with_root(temp.path());
        let rule = CoverageRule::new("docs", ["PHP"]).unwrap();

        assert!(!auditor.check_file(&rule).file_readable());
    }

    #[test]
    fn non_utf8_content_is_still_checked() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("bin.md"), b"\xff\xfe PHP \xff").unwrap();
        let auditor = Auditor::default().with_root(temp.path());
        let rule = CoverageRule::new("bin.md", ["PHP"]).unwrap();

        assert!(auditor.check_file(&rule).passed());
    }

    #[test]
    fn audit_continues_past_unreadable_files() {
        let temp = setup(&[("b.md", "PHP")]);
        let auditor = Auditor::default().with_root(temp.path());
        let rules = vec![
            CoverageRule::new("a.md", ["PHP"]).unwrap(),
            CoverageRule::new("b.md", ["PHP"]).unwrap(),
        ];

        let report = auditor.run_audit(&rules);

        assert_eq!(report.results.len(), 2);
        assert!(!report.results[0].file_readable());
        assert!(report.results[1].passed());
        assert!(!report.all_passed);
        assert_eq!(report.unreadable_count(), 1);
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn audit_preserves_rule_order() {
        let temp = setup(&[("a.md", "x"), ("b.md", "x"), ("c.md", "x")]);
        let auditor = Auditor::default().with_root(temp.path());
        let rules: Vec<_> = ["c.md", "a.md", "b.md"]
            .iter()
            .map(|p| CoverageRule::new(*p, ["x"]).unwrap())
            .collect();

        let report = auditor.run_audit(&rules);
        let paths: Vec<_> = report.results.iter().map(|r| r.file_path()).collect();

        assert_eq!(
            paths,
            vec![Path::new("c.md"), Path::new("a.md"), Path::new("b.md")]
        );
    }

    #[test]
    fn word_mode_flows_through_auditor() {
        let temp = setup(&[("js.md", "JavaScript and TypeScript")]);
        let auditor = Auditor::new(MatchOptions::new(MatchMode::Word)).with_root(temp.path());
        let rule = CoverageRule::new("js.md", ["Java"]).unwrap();

        assert_eq!(auditor.check_file(&rule).missing_topics(), ["Java"]);
    }

    #[test]
    fn report_counts() {
        let temp = setup(&[("a.md", "PHP"), ("b.md", "")]);
        let auditor = Auditor::default().with_root(temp.path());
        let rules = vec![
            CoverageRule::new("a.md", ["PHP", "Java"]).unwrap(),
            CoverageRule::new("b.md", ["PHP", "Java"]).unwrap(),
        ];

        let report = auditor.run_audit(&rules);

        assert_eq!(report.topic_count(), 4);
        assert_eq!(report.missing_count(), 3);
        assert_eq!(report.failed_count(), 2);
        assert_eq!(report.unreadable_count(), 0);
    }

    #[test]
    fn empty_report_passes() {
        let report = AuditReport::new(vec![]);
        assert!(report.all_passed);
    }
}
