//! SARIF output formatter.
//!
//! SARIF (Static Analysis Results Interchange Format) is an OASIS standard
//! for static analysis tools, supported by GitHub code scanning and others.
//! Each missing topic becomes a `missing-topic` result; each unreadable file
//! becomes a single `unreadable-file` result.

use super::ReportFormatter;
use crate::audit::AuditReport;
use serde::Serialize;
use std::io::Write;

/// SARIF version we generate.
const SARIF_VERSION: &str = "2.1.0";
const SARIF_SCHEMA: &str = "https://raw.githubusercontent.com/oasis-tcs/sarif-spec/master/Schemata/sarif-schema-2.1.0.json";

const MISSING_TOPIC: &str = "missing-topic";
const UNREADABLE_FILE: &str = "unreadable-file";

/// Formats audit output as SARIF.
pub struct SarifFormatter {
    /// Tool name to report.
    pub tool_name: String,
    /// Tool version to report.
    pub tool_version: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLog {
    #[serde(rename = "$schema")]
    schema: &'static str,
    version: &'static str,
    runs: Vec<SarifRun>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifRule {
    id: &'static str,
    short_description: SarifMessage,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifResult {
    rule_id: &'static str,
    level: &'static str,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifLocation {
    physical_location: SarifPhysicalLocation,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SarifPhysicalLocation {
    artifact_location: SarifArtifactLocation,
}

#[derive(Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

impl SarifFormatter {
    /// Create a new SARIF formatter.
    pub fn new(tool_name: impl Into<String>, tool_version: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            tool_version: tool_version.into(),
        }
    }

    fn result(rule_id: &'static str, text: String, uri: &str) -> SarifResult {
        SarifResult {
            rule_id,
            level: "error",
            message: SarifMessage { text },
            locations: vec![SarifLocation {
                physical_location: SarifPhysicalLocation {
                    artifact_location: SarifArtifactLocation {
                        uri: uri.to_string(),
                    },
                },
            }],
        }
    }
}

impl ReportFormatter for SarifFormatter {
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        let mut results = Vec::new();

        for result in &report.results {
            let uri = result.file_path().display().to_string().replace('\\', "/");

            if !result.file_readable() {
                let text = format!(
                    "File not readable ({}); unconfirmed topics: {}",
                    result.read_error().unwrap_or("unknown error"),
                    result.missing_topics().join(", ")
                );
                results.push(Self::result(UNREADABLE_FILE, text, &uri));
                continue;
            }

            for topic in result.missing_topics() {
                let text = format!("Missing topic '{}'", topic);
                results.push(Self::result(MISSING_TOPIC, text, &uri));
            }
        }

        let rules = vec![
            SarifRule {
                id: MISSING_TOPIC,
                short_description: SarifMessage {
                    text: "Required topic not mentioned in file".to_string(),
                },
            },
            SarifRule {
                id: UNREADABLE_FILE,
                short_description: SarifMessage {
                    text: "Documentation file could not be read".to_string(),
                },
            },
        ];

        let log = SarifLog {
            schema: SARIF_SCHEMA,
            version: SARIF_VERSION,
            runs: vec![SarifRun {
                tool: SarifTool {
                    driver: SarifDriver {
                        name: self.tool_name.clone(),
                        version: self.tool_version.clone(),
                        rules,
                    },
                },
                results,
            }],
        };

        serde_json::to_writer_pretty(&mut *writer, &log).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
