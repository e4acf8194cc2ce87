//! Per-line comment scanning with multi-line state carried between lines.
//!
//! The scanner is a two-state machine. The state is a plain value passed
//! in and returned, so each line can be scanned (and tested) on its own:
//!
//! ```text
//!            "/*"                    "*/"
//!  Closed ─────────▶ Open{opened_at} ─────▶ Closed
//!    │ "//"              │ no "*/"
//!    ▼                   ▼
//!  comment to EOL      open comment to EOL, stay Open
//! ```

use crate::patterns::COMMENT_OPEN;
use crate::{Line, LocateError, MatchRange, Position, Span, TokenRange};

/// Multi-line comment state at a line boundary.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CommentState {
    /// Not inside a `/* */` comment.
    #[default]
    Closed,
    /// Inside a `/* */` comment opened at `opened_at`.
    Open { opened_at: Position },
}

impl CommentState {
    #[inline]
    pub fn is_closed(self) -> bool {
        matches!(self, CommentState::Closed)
    }
}

/// Find every comment on `line`, starting in `state`.
///
/// Returns the comment ranges in left-to-right order and the state to hand
/// to the next line. A block comment still open at the end of the line is
/// reported with `closed: false`; its range starts where it was opened,
/// which may be an earlier line.
pub fn scan_comments<'a>(
    line: &Line<'a>,
    state: CommentState,
) -> Result<(Vec<TokenRange<'a>>, CommentState), LocateError> {
    let text = line.text();
    let mut comments = Vec::new();
    let mut state = state;
    let mut cursor = 0;

    while cursor <= text.len() {
        match state {
            CommentState::Closed => {
                let Some(opener) = COMMENT_OPEN.find_at(text, cursor) else {
                    break;
                };
                match opener.as_str() {
                    "//" => {
                        let span = Span::new(opener.start(), text.len());
                        comments.push(TokenRange::closed(MatchRange::on_line(line, span)));
                        break;
                    }
                    "/*" => {
                        state = CommentState::Open {
                            opened_at: line.position(opener.start()),
                        };
                        cursor = opener.end();
                    }
                    other => {
                        return Err(LocateError::UnexpectedCommentOpen {
                            line: line.number(),
                            text: other.to_owned(),
                        });
                    }
                }
            }
            CommentState::Open { opened_at } => {
                let body_start = if opened_at.line == line.number() {
                    opened_at.column
                } else {
                    0
                };
                if let Some(offset) = text.get(cursor..).and_then(|rest| rest.find("*/")) {
                    let end = cursor + offset + 2;
                    comments.push(TokenRange::closed(MatchRange {
                        text: line.slice(Span::new(body_start, end)),
                        start: opened_at,
                        end: line.position(end),
                    }));
                    state = CommentState::Closed;
                    cursor = end;
                } else {
                    comments.push(TokenRange::open(MatchRange {
                        text: line.slice(Span::new(body_start, text.len())),
                        start: opened_at,
                        end: line.position(text.len()),
                    }));
                    break;
                }
            }
        }
    }

    Ok((comments, state))
}
