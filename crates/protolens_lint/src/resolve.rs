//! Turn a finding's line and column into the range a diagnostic covers.

use protolens_locate::{literal_pattern, locate, Line, Position, SourceText, Span, TextDocument};
use tracing::{debug, warn};

use crate::rules::{Rule, Target};
use crate::LintFinding;

/// A range between two positions. Columns are byte offsets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TextRange {
    pub start: Position,
    pub end: Position,
}

impl TextRange {
    pub const fn new(start: Position, end: Position) -> Self {
        TextRange { start, end }
    }

    /// A range within one line.
    pub const fn on_line(line: usize, start: usize, end: usize) -> Self {
        TextRange {
            start: Position::new(line, start),
            end: Position::new(line, end),
        }
    }

    /// Whether the two ranges share at least one position.
    ///
    /// Empty ranges touch a range they border.
    pub fn intersects(&self, other: &TextRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// How a range was obtained.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RangeSource {
    /// The engine located the token.
    Token,
    /// The line's leading whitespace.
    Indentation,
    /// The default line range; nothing more precise was available.
    Fallback,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRange {
    pub range: TextRange,
    pub source: RangeSource,
    /// Document text covered by `range`.
    pub text: String,
}

impl ResolvedRange {
    /// Whether fixes may edit this range.
    pub fn is_precise(&self) -> bool {
        self.source != RangeSource::Fallback
    }

    fn on_line(line: &Line<'_>, start: usize, end: usize, source: RangeSource) -> Self {
        ResolvedRange {
            range: TextRange::on_line(line.number(), start, end),
            source,
            text: line.slice(Span::new(start, end)).to_owned(),
        }
    }
}

/// Resolve the range of `finding` in `document`.
///
/// Never fails: anything the engine cannot pin down gets the default range,
/// from the line's first non-whitespace character to its end.
pub fn resolve_range(
    document: &SourceText,
    finding: &LintFinding,
    rule: Option<&Rule>,
) -> ResolvedRange {
    let last_line = document.line_count().saturating_sub(1);
    let number = finding.line.saturating_sub(1).min(last_line);
    let Some(line) = document.line(number) else {
        return ResolvedRange {
            range: TextRange::default(),
            source: RangeSource::Fallback,
            text: String::new(),
        };
    };

    match rule.map(|rule| rule.target) {
        Some(Target::Token(kind)) => {
            let column = line.byte_column(finding.column.saturating_sub(1));
            let search = rule
                .and_then(|rule| rule.parse_message(&finding.message).token)
                .map(|token| literal_pattern(&token));
            match locate(document, kind, number, column, search.as_deref()) {
                Ok(found) => {
                    debug!(rule = %finding.rule, %kind, start = %found.start, end = %found.end, "located token");
                    ResolvedRange {
                        range: TextRange::new(found.start, found.end),
                        source: RangeSource::Token,
                        text: found.text.to_owned(),
                    }
                }
                Err(error) => {
                    if error.is_recoverable() {
                        debug!(rule = %finding.rule, line = number, %error, "falling back to line range");
                    } else {
                        warn!(rule = %finding.rule, line = number, %error, "token lookup failed");
                    }
                    default_range(&line)
                }
            }
        }
        Some(Target::Indentation) => {
            ResolvedRange::on_line(&line, 0, line.first_non_whitespace(), RangeSource::Indentation)
        }
        None => default_range(&line),
    }
}

/// First non-whitespace column to the end of the line, or the whole line
/// when it is blank.
fn default_range(line: &Line<'_>) -> ResolvedRange {
    let start = line.first_non_whitespace();
    let start = if start == line.len() { 0 } else { start };
    ResolvedRange::on_line(line, start, line.len(), RangeSource::Fallback)
}
