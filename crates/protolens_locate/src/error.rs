//! Engine error type.
//!
//! Every failure is a value. `NotFound` and the grammar-shape errors are
//! expected outcomes that callers answer with a fallback range; the rest
//! indicate a bug in the caller or in the engine itself.

use crate::{Span, TokenKind};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LocateError {
    /// An exclusion range is not contained in the line it applies to.
    #[error("excluded range {span} lies beyond line {line} (length {len})")]
    RangeBeyondLine { line: usize, span: Span, len: usize },

    /// Two exclusion ranges overlap.
    #[error("excluded ranges on line {line} intersect")]
    RangeIntersection { line: usize },

    /// The requested start line is outside the document.
    #[error("line {line} is out of bounds (document has {line_count} lines)")]
    LineNumber { line: usize, line_count: usize },

    /// The token is absent between the start position and the document end.
    #[error("no {kind} found")]
    NotFound { kind: TokenKind },

    /// The kind is only resolvable as a dependency of another kind.
    #[error("{kind} cannot be located on its own")]
    NotImplemented { kind: TokenKind },

    /// The comment scanner matched an opener it does not know.
    #[error("unexpected comment opener {text:?} on line {line}")]
    UnexpectedCommentOpen { line: usize, text: String },

    /// `option` or `reserved` found where an enum value name was expected.
    #[error("{text:?} is not an enum value name")]
    UnexpectedEnumValueName { text: String },

    /// A declaration keyword found where a field type was expected.
    #[error("{text:?} is not a field type")]
    UnexpectedFieldType { text: String },

    /// A `group` declaration preceded by a cardinality keyword.
    #[error("group cannot have a cardinality")]
    UnexpectedGroup,

    /// A caller-supplied search pattern failed to compile.
    #[error("invalid search pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
}

impl LocateError {
    /// Whether callers should quietly fall back to a default range.
    ///
    /// `false` means the error signals a defect worth reporting.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LocateError::NotFound { .. }
                | LocateError::UnexpectedEnumValueName { .. }
                | LocateError::UnexpectedFieldType { .. }
                | LocateError::UnexpectedGroup
        )
    }
}
