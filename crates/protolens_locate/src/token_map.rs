//! Scan sessions: resolve one token kind from a start position.
//!
//! A [`ScanSession`] walks the document line by line. On every line it
//! first records comments (carrying [`CommentState`] across lines), then
//! runs the pending lookup tasks of the requested kind against the
//! non-comment parts of the line. Tasks that succeed are dropped from the
//! queue and move the cursor past their match; the first task that finds
//! nothing ends work on the line, and the queue resumes on the next line
//! from column 0.

use std::collections::VecDeque;

use regex::Regex;
use rustc_hash::FxHashMap;

use crate::comments::{scan_comments, CommentState};
use crate::exclude::exclude_line_ranges;
use crate::tasks::{task_list, LookupTask, TaskInput};
use crate::{Line, LocateError, MatchRange, Span, TextDocument, TokenKind, TokenRange};

/// Tokens discovered during one scan session, grouped by kind.
///
/// Within a kind, ranges keep discovery order; the first one is the answer
/// for that kind.
#[derive(Clone, Debug, Default)]
pub struct TokenMap<'a> {
    entries: FxHashMap<TokenKind, Vec<TokenRange<'a>>>,
}

impl<'a> TokenMap<'a> {
    pub fn new() -> Self {
        TokenMap::default()
    }

    pub fn push(&mut self, kind: TokenKind, range: TokenRange<'a>) {
        self.entries.entry(kind).or_default().push(range);
    }

    pub fn extend(&mut self, kind: TokenKind, ranges: impl IntoIterator<Item = TokenRange<'a>>) {
        let mut ranges = ranges.into_iter().peekable();
        if ranges.peek().is_some() {
            self.entries.entry(kind).or_default().extend(ranges);
        }
    }

    /// All ranges recorded for `kind`, in discovery order.
    pub fn get(&self, kind: TokenKind) -> &[TokenRange<'a>] {
        self.entries.get(&kind).map_or(&[], Vec::as_slice)
    }

    pub fn first(&self, kind: TokenKind) -> Option<&TokenRange<'a>> {
        self.get(kind).first()
    }

    pub fn contains(&self, kind: TokenKind) -> bool {
        !self.get(kind).is_empty()
    }

    /// Ranges of `kind` clamped to `line`, for exclusion.
    fn spans_on(&self, kind: TokenKind, line: &Line<'_>) -> Vec<Span> {
        self.get(kind)
            .iter()
            .filter_map(|token| token.range.clamp_to(line))
            .collect()
    }
}

/// Where the next search on the current line starts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ScanCursor {
    pub line: usize,
    pub last_index: usize,
}

/// One `locate` request in progress.
#[derive(Debug)]
pub struct ScanSession<'d, D: TextDocument + ?Sized> {
    document: &'d D,
    target: TokenKind,
    pending: VecDeque<LookupTask>,
    search: Option<Regex>,
    tokens: TokenMap<'d>,
    cursor: ScanCursor,
    comments: CommentState,
}

impl<'d, D: TextDocument + ?Sized> ScanSession<'d, D> {
    /// Prepare a session for `kind` starting at `(start_line, start_column)`.
    ///
    /// `start_column` is a byte column and is clamped to the line length.
    /// `search_text` is a regex that replaces the generic pattern of the
    /// kind's last task; see [`literal_pattern`].
    pub fn new(
        document: &'d D,
        kind: TokenKind,
        start_line: usize,
        start_column: usize,
        search_text: Option<&str>,
    ) -> Result<Self, LocateError> {
        let tasks = task_list(kind).ok_or(LocateError::NotImplemented { kind })?;

        let line_count = document.line_count();
        let line = document
            .line(start_line)
            .ok_or(LocateError::LineNumber {
                line: start_line,
                line_count,
            })?;

        let search = search_text
            .map(|pattern| {
                Regex::new(pattern).map_err(|err| LocateError::InvalidPattern {
                    pattern: pattern.to_owned(),
                    message: err.to_string(),
                })
            })
            .transpose()?;

        Ok(ScanSession {
            document,
            target: kind,
            pending: tasks.iter().copied().collect(),
            search,
            tokens: TokenMap::new(),
            cursor: ScanCursor {
                line: start_line,
                last_index: start_column.min(line.len()),
            },
            comments: CommentState::Closed,
        })
    }

    /// Tokens recorded so far, including comments and dependencies.
    pub fn tokens(&self) -> &TokenMap<'d> {
        &self.tokens
    }

    pub fn cursor(&self) -> ScanCursor {
        self.cursor
    }

    /// Scan until the target is found or the document ends.
    pub fn run(&mut self) -> Result<MatchRange<'d>, LocateError> {
        let document = self.document;
        let line_count = document.line_count();
        while self.cursor.line < line_count {
            let Some(line) = document.line(self.cursor.line) else {
                break;
            };
            if let Some(found) = self.scan_line(&line)? {
                return Ok(found);
            }
            self.cursor.line += 1;
            self.cursor.last_index = 0;
        }
        Err(LocateError::NotFound { kind: self.target })
    }

    /// Record comments, then run pending tasks on one line.
    fn scan_line(&mut self, line: &Line<'d>) -> Result<Option<MatchRange<'d>>, LocateError> {
        let (comments, state) = scan_comments(line, self.comments)?;
        self.comments = state;
        self.tokens.extend(TokenKind::Comment, comments);

        let excluded = self.tokens.spans_on(TokenKind::Comment, line);
        let ranges = exclude_line_ranges(line, &excluded)?;

        while let Some(&task) = self.pending.front() {
            let search = if self.pending.len() == 1 {
                self.search.as_ref()
            } else {
                None
            };
            let input = TaskInput {
                line,
                ranges: &ranges,
                last_index: self.cursor.last_index,
                search,
            };
            match task.resolve(&input, &self.tokens) {
                Ok(resolved) => {
                    for (kind, range) in resolved.tokens {
                        self.cursor.last_index = self.cursor.last_index.max(range.end.column);
                        self.tokens.push(kind, TokenRange::closed(range));
                    }
                    if !resolved.done {
                        break;
                    }
                    self.pending.pop_front();
                }
                Err(LocateError::NotFound { .. }) => break,
                Err(err) => return Err(err),
            }
        }

        Ok(self.tokens.first(self.target).map(|token| token.range))
    }
}

/// Find the range of `kind` at or after `(start_line, start_column)`.
///
/// Lines are zero-based and `start_column` is a byte column on the start
/// line. Only `NotFound` and the grammar-shape errors are expected for
/// well-formed calls; see [`LocateError::is_recoverable`].
///
/// ```
/// use protolens_locate::{locate, TokenKind};
///
/// let text = "syntax = \"proto2\";\nmessage TrickyMsgName {\n  required string foo = 1;\n}\n";
/// let name = locate(text, TokenKind::MessageName, 1, 0, None).unwrap();
/// assert_eq!(name.text, "TrickyMsgName");
/// assert_eq!((name.start.column, name.end.column), (8, 21));
///
/// let field = locate(text, TokenKind::FieldName, 2, 2, None).unwrap();
/// assert_eq!(field.text, "foo");
/// ```
pub fn locate<'d, D: TextDocument + ?Sized>(
    document: &'d D,
    kind: TokenKind,
    start_line: usize,
    start_column: usize,
    search_text: Option<&str>,
) -> Result<MatchRange<'d>, LocateError> {
    ScanSession::new(document, kind, start_line, start_column, search_text)?.run()
}

/// A search pattern matching `text` exactly, as a whole word where `text`
/// starts or ends with a word character.
///
/// ```
/// use protolens_locate::literal_pattern;
///
/// assert_eq!(literal_pattern("foo.bar"), r"\bfoo\.bar\b");
/// ```
pub fn literal_pattern(text: &str) -> String {
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut pattern = String::with_capacity(text.len() + 4);
    if text.starts_with(is_word) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(text));
    if text.ends_with(is_word) {
        pattern.push_str(r"\b");
    }
    pattern
}

#[cfg(test)]
mod tests;
