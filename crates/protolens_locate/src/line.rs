//! Line views and the range types produced by the engine.
//!
//! All columns are UTF-8 byte offsets into a single line's text. Callers
//! that speak in characters (protolint) or UTF-16 code units (LSP) convert
//! at the boundary with [`Line::byte_column`] and [`Line::char_column`].

use std::fmt;

/// Half-open `[start, end)` column range within one line.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span. `start` must not exceed `end`.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Span { start, end }
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub const fn contains_span(self, other: Span) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A zero-based `(line, column)` pair.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Position { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Immutable view of one document row.
///
/// The text never includes the line terminator (`\n` or `\r\n`).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Line<'a> {
    number: usize,
    text: &'a str,
}

impl<'a> Line<'a> {
    /// Create a line view. A trailing `\r` is stripped.
    pub fn new(number: usize, text: &'a str) -> Self {
        let text = text.strip_suffix('\r').unwrap_or(text);
        Line { number, text }
    }

    /// Zero-based line number.
    #[inline]
    pub fn number(&self) -> usize {
        self.number
    }

    #[inline]
    pub fn text(&self) -> &'a str {
        self.text
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The full range `[0, len)` of the line.
    #[inline]
    pub fn range(&self) -> Span {
        Span::new(0, self.text.len())
    }

    /// Text covered by `span`. Out-of-bounds spans are clamped.
    pub fn slice(&self, span: Span) -> &'a str {
        let end = span.end.min(self.text.len());
        let start = span.start.min(end);
        self.text.get(start..end).unwrap_or("")
    }

    /// Position of `column` on this line.
    #[inline]
    pub fn position(&self, column: usize) -> Position {
        Position::new(self.number, column)
    }

    /// Convert a character column (as reported by protolint) to a byte column.
    ///
    /// Columns past the end of the line clamp to `len()`.
    pub fn byte_column(&self, char_column: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_column)
            .map_or(self.text.len(), |(byte, _)| byte)
    }

    /// Convert a byte column back to a character column.
    pub fn char_column(&self, byte_column: usize) -> usize {
        self.text
            .char_indices()
            .take_while(|(byte, _)| *byte < byte_column)
            .count()
    }

    /// Convert a byte column to a UTF-16 column (LSP's default encoding).
    pub fn utf16_column(&self, byte_column: usize) -> usize {
        self.text
            .char_indices()
            .take_while(|(byte, _)| *byte < byte_column)
            .map(|(_, c)| c.len_utf16())
            .sum()
    }

    /// Column of the first non-whitespace character, or `len()` if blank.
    pub fn first_non_whitespace(&self) -> usize {
        self.text.len() - self.text.trim_start().len()
    }
}

/// A located occurrence of a pattern.
///
/// Single-line matches have `start.line == end.line`. A multi-line comment
/// starts on the line where it was opened and ends on the line scanned
/// last; its `text` is the portion on that last line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatchRange<'a> {
    pub text: &'a str,
    pub start: Position,
    pub end: Position,
}

impl<'a> MatchRange<'a> {
    /// A match of `span` on `line`.
    pub fn on_line(line: &Line<'a>, span: Span) -> Self {
        MatchRange {
            text: line.slice(span),
            start: line.position(span.start),
            end: line.position(span.end),
        }
    }

    /// The match's span if it starts and ends on `line`.
    pub fn span(&self) -> Option<Span> {
        (self.start.line == self.end.line).then(|| Span::new(self.start.column, self.end.column))
    }

    /// Clamp this range to `line`.
    ///
    /// Parts on earlier lines collapse to column 0 and parts on later lines
    /// to the line's end. Returns `None` when the range does not touch the
    /// line at all.
    pub fn clamp_to(&self, line: &Line<'_>) -> Option<Span> {
        let number = line.number();
        if self.start.line > number || self.end.line < number {
            return None;
        }
        let start = if self.start.line < number {
            0
        } else {
            self.start.column
        };
        let end = if self.end.line > number {
            line.len()
        } else {
            self.end.column
        };
        Some(Span::new(start.min(end), end))
    }
}

/// A [`MatchRange`] plus whether it is fully resolved.
///
/// `closed` is `false` only for a multi-line comment still open at the end
/// of the line it was recorded on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TokenRange<'a> {
    pub range: MatchRange<'a>,
    pub closed: bool,
}

impl<'a> TokenRange<'a> {
    #[inline]
    pub fn closed(range: MatchRange<'a>) -> Self {
        TokenRange {
            range,
            closed: true,
        }
    }

    #[inline]
    pub fn open(range: MatchRange<'a>) -> Self {
        TokenRange {
            range,
            closed: false,
        }
    }
}
