// Conversions from bridge types to LSP types.
//
// The bridge counts columns in UTF-8 bytes; LSP clients count UTF-16 code
// units unless they negotiate otherwise.

use std::collections::HashMap;

use protolens_lint::{CodeFix, LintDiagnostic, Severity, TextRange};
use protolens_locate::{Position as SourcePosition, SourceText, TextDocument};
use tower_lsp::lsp_types::{
    CodeAction, CodeActionKind, Diagnostic, DiagnosticSeverity, NumberOrString, Position, Range,
    TextEdit, Url, WorkspaceEdit,
};

/// Diagnostic `source` shown by editors.
pub const SOURCE: &str = "protolint";

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

pub fn position(document: &SourceText, position: SourcePosition) -> Position {
    let character = document
        .line(position.line)
        .map_or(position.column, |line| line.utf16_column(position.column));
    Position::new(to_u32(position.line), to_u32(character))
}

pub fn range(document: &SourceText, range: TextRange) -> Range {
    Range::new(position(document, range.start), position(document, range.end))
}

pub fn severity(severity: Severity) -> DiagnosticSeverity {
    match severity {
        Severity::Error => DiagnosticSeverity::ERROR,
        Severity::Warning => DiagnosticSeverity::WARNING,
        Severity::Info => DiagnosticSeverity::INFORMATION,
    }
}

pub fn diagnostic(document: &SourceText, diagnostic: &LintDiagnostic) -> Diagnostic {
    Diagnostic {
        range: range(document, diagnostic.range),
        severity: Some(severity(diagnostic.severity)),
        code: Some(NumberOrString::String(diagnostic.rule.clone())),
        source: Some(SOURCE.to_string()),
        message: diagnostic.message.clone(),
        ..Default::default()
    }
}

/// A quick-fix action applying `fix` to the document at `uri`.
pub fn code_action(
    document: &SourceText,
    uri: &Url,
    fix: &CodeFix,
    diagnostic: Diagnostic,
) -> CodeAction {
    let edits = fix
        .edits
        .iter()
        .map(|edit| TextEdit::new(range(document, edit.range), edit.new_text.clone()))
        .collect();
    CodeAction {
        title: fix.title.clone(),
        kind: Some(CodeActionKind::QUICKFIX),
        diagnostics: Some(vec![diagnostic]),
        edit: Some(WorkspaceEdit {
            changes: Some(HashMap::from([(uri.clone(), edits)])),
            ..Default::default()
        }),
        is_preferred: Some(true),
        ..Default::default()
    }
}

/// Whether two LSP ranges share a position; touching ranges intersect.
pub fn intersects(a: &Range, b: &Range) -> bool {
    let key = |p: &Position| (p.line, p.character);
    key(&a.start) <= key(&b.end) && key(&b.start) <= key(&a.end)
}
