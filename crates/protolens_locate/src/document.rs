//! Document access for the engine.
//!
//! The engine only needs line-by-line access ([`TextDocument`]).
//! [`SourceText`] is the owned implementation used by the linter bridge and
//! the language server; it also converts between byte offsets and
//! positions for callers that compute whole-document edits.

use crate::{Line, Position};

/// Read-only, line-addressable text.
///
/// Implementations must return the same text for a line for as long as a
/// `locate` call borrows the document.
pub trait TextDocument {
    /// Number of lines. An empty document has one empty line.
    fn line_count(&self) -> usize;

    /// Line `number` (zero-based), or `None` past the end.
    fn line(&self, number: usize) -> Option<Line<'_>>;
}

/// Owned document text with a precomputed line-start table.
///
/// # Example
///
/// ```
/// use protolens_locate::{Position, SourceText, TextDocument};
///
/// let doc = SourceText::new("syntax = \"proto3\";\npackage foo;\n");
/// assert_eq!(doc.line_count(), 3);
/// assert_eq!(doc.line(1).map(|l| l.text()), Some("package foo;"));
/// assert_eq!(doc.position_at(20), Position::new(1, 1));
/// assert_eq!(doc.offset_at(Position::new(1, 8)), 27);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceText {
    text: String,
    /// Byte offset of each line start. `line_starts[0] == 0`.
    line_starts: Vec<usize>,
}

impl SourceText {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = vec![0];
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, byte)| byte == b'\n')
                .map(|(i, _)| i + 1),
        );
        SourceText { text, line_starts }
    }

    /// The whole document text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Position of a byte offset. Offsets past the end clamp to the end.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        Position::new(line, offset - self.line_starts[line])
    }

    /// Byte offset of a position. Columns past the end of their line clamp
    /// to the line end; lines past the end clamp to the document end.
    pub fn offset_at(&self, position: Position) -> usize {
        match self.line(position.line) {
            Some(line) => self.line_starts[position.line] + position.column.min(line.len()),
            None => self.text.len(),
        }
    }

    /// Raw text of line `number`, without the `\n` terminator.
    fn raw_line(&self, number: usize) -> Option<&str> {
        let start = *self.line_starts.get(number)?;
        let end = self
            .line_starts
            .get(number + 1)
            .map_or(self.text.len(), |next| next - 1);
        self.text.get(start..end)
    }
}

impl TextDocument for SourceText {
    fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    fn line(&self, number: usize) -> Option<Line<'_>> {
        self.raw_line(number).map(|text| Line::new(number, text))
    }
}

/// Splits on every call, so each lookup walks the text from the start.
/// Fine for short snippets and tests; index larger texts with `SourceText`.
impl TextDocument for str {
    fn line_count(&self) -> usize {
        self.split('\n').count()
    }

    fn line(&self, number: usize) -> Option<Line<'_>> {
        self.split('\n').nth(number).map(|text| Line::new(number, text))
    }
}
