//! Quick fixes for findings whose range is known precisely.

use protolens_locate::{Position, SourceText, TextDocument};

use crate::case::{to_lower_snake_case, to_upper_camel_case, to_upper_snake_case};
use crate::resolve::{ResolvedRange, TextRange};
use crate::rules::{Case, FixKind, MessageCaptures, Rule};

/// Replace `range` with `new_text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextEdit {
    pub range: TextRange,
    pub new_text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeFix {
    pub title: String,
    pub edits: Vec<TextEdit>,
}

impl CodeFix {
    fn single(title: String, range: TextRange, new_text: String) -> Self {
        CodeFix {
            title,
            edits: vec![TextEdit { range, new_text }],
        }
    }
}

/// The fix for a finding of `rule`, if one applies.
///
/// Returns `None` for fallback ranges, for rules without a fix, when the
/// message lacks a value the fix needs, and when the fix would not change
/// the text.
pub fn fix_for(
    document: &SourceText,
    rule: &Rule,
    captures: &MessageCaptures,
    resolved: &ResolvedRange,
) -> Option<CodeFix> {
    if !resolved.is_precise() {
        return None;
    }
    let current = resolved.text.as_str();
    let expected = captures.expected.as_deref();

    let (title, new_text) = match rule.fix {
        FixKind::None => return None,
        FixKind::Rename(case) => {
            let renamed = recase(case, current);
            (format!("Rename `{current}` to `{renamed}`"), renamed)
        }
        FixKind::RenameToExpected => {
            let renamed = expected?.to_owned();
            (format!("Rename `{current}` to `{renamed}`"), renamed)
        }
        FixKind::Prefix => {
            let prefix = format!("{}{}", expected?, joiner(current));
            (format!("Add prefix `{prefix}`"), format!("{prefix}{current}"))
        }
        FixKind::Suffix => {
            let suffix = format!("{}{}", joiner(current), expected?);
            (format!("Add suffix `{suffix}`"), format!("{current}{suffix}"))
        }
        FixKind::Delete => {
            let range = with_trailing_whitespace(document, resolved.range);
            return Some(CodeFix::single(
                format!("Remove `{current}`"),
                range,
                String::new(),
            ));
        }
        FixKind::Indent => {
            let indent = expected?.to_owned();
            ("Fix indentation".to_owned(), indent)
        }
    };

    if new_text == current || (new_text.is_empty() && rule.fix != FixKind::Indent) {
        return None;
    }
    Some(CodeFix::single(title, resolved.range, new_text))
}

fn recase(case: Case, text: &str) -> String {
    match case {
        Case::UpperSnake => to_upper_snake_case(text),
        Case::LowerSnake => to_lower_snake_case(text),
        Case::UpperCamel => to_upper_camel_case(text),
        Case::Lower => text.to_lowercase(),
    }
}

/// Separator between an affix and `name`: `_` for SCREAMING_CASE names,
/// nothing for camel case.
fn joiner(name: &str) -> &'static str {
    if name.chars().any(char::is_lowercase) {
        ""
    } else {
        "_"
    }
}

/// Extend a single-line range over the whitespace that follows it.
fn with_trailing_whitespace(document: &SourceText, range: TextRange) -> TextRange {
    let Some(line) = document.line(range.end.line) else {
        return range;
    };
    let rest = line.text().get(range.end.column..).unwrap_or("");
    let whitespace = rest.len() - rest.trim_start().len();
    TextRange::new(
        range.start,
        Position::new(range.end.line, range.end.column + whitespace),
    )
}
