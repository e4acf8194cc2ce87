//! protolint findings and the JSON report they arrive in.
//!
//! `protolint lint -reporter=json` prints one object:
//!
//! ```text
//! {"lints":[{"filename":"a.proto","line":3,"column":1,
//!            "message":"Message name \"foo\" must be UpperCamelCase",
//!            "rule":"MESSAGE_NAMES_UPPER_CAMEL_CASE","severity":"error"}]}
//! ```
//!
//! Lines and columns are 1-based; columns count characters.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::LintError;

/// Diagnostic severity, as reported by protolint.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Error,
    #[default]
    Warning,
    Info,
}

impl Severity {
    /// Parse protolint's severity string. Unknown values become `Warning`.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "error" => Severity::Error,
            "info" | "note" => Severity::Info,
            _ => Severity::Warning,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding from the linter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintFinding {
    pub filename: String,
    /// 1-based line.
    pub line: usize,
    /// 1-based character column.
    pub column: usize,
    pub message: String,
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
}

impl LintFinding {
    pub fn severity(&self) -> Severity {
        self.severity.as_deref().map(Severity::parse).unwrap_or_default()
    }
}

#[derive(Deserialize)]
struct Report {
    #[serde(default)]
    lints: Vec<LintFinding>,
}

/// Parse a JSON report.
///
/// Empty output means no findings. Text before the first `{` and after the
/// report object is ignored; protolint prints warnings around the report
/// in some versions.
pub fn parse_report(output: &str) -> Result<Vec<LintFinding>, LintError> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let start = trimmed.find('{').unwrap_or(0);
    let mut reports = serde_json::Deserializer::from_str(&trimmed[start..]).into_iter::<Report>();
    match reports.next() {
        Some(report) => Ok(report?.lints),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests;
