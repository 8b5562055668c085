//! Built-in topic list for ad-hoc audits.

use std::path::PathBuf;

use crate::audit::CoverageRule;
use crate::error::Result;

/// Topics checked when files are named on the command line without `--topics`.
pub const DEFAULT_TOPICS: [&str; 5] = ["PHP", "Python", "Flutter", "React Native", "Java"];

/// Build one rule per file, each requiring `topics` (or [`DEFAULT_TOPICS`]).
///
/// # Errors
///
/// Returns `InvalidRule` if `topics` is given but has no usable entries.
pub fn rules_for_files(
    files: &[PathBuf],
    topics: Option<&[String]>,
) -> Result<Vec<CoverageRule>> {
    files
        .iter()
        .map(|file| match topics {
            Some(topics) => CoverageRule::new(file.clone(), topics.iter().cloned()),
            None => CoverageRule::new(file.clone(), DEFAULT_TOPICS),
        })
        .collect()
}
