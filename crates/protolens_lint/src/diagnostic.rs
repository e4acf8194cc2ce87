//! Findings turned into editor-ready diagnostics.

use protolens_locate::SourceText;

use crate::fixes::{fix_for, CodeFix};
use crate::resolve::{resolve_range, TextRange};
use crate::rules::lookup_rule;
use crate::{LintFinding, Severity};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LintDiagnostic {
    pub range: TextRange,
    pub severity: Severity,
    pub rule: String,
    pub message: String,
    pub fixes: Vec<CodeFix>,
}

/// Diagnostics for `findings`, all of which belong to `document`.
pub fn diagnose(document: &SourceText, findings: &[LintFinding]) -> Vec<LintDiagnostic> {
    findings
        .iter()
        .map(|finding| diagnose_finding(document, finding))
        .collect()
}

fn diagnose_finding(document: &SourceText, finding: &LintFinding) -> LintDiagnostic {
    let rule = lookup_rule(&finding.rule);
    let resolved = resolve_range(document, finding, rule);
    let fixes = rule
        .and_then(|rule| {
            let captures = rule.parse_message(&finding.message);
            fix_for(document, rule, &captures, &resolved)
        })
        .into_iter()
        .collect();
    LintDiagnostic {
        range: resolved.range,
        severity: finding.severity(),
        rule: finding.rule.clone(),
        message: finding.message.clone(),
        fixes,
    }
}
