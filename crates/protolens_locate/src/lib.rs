//! Token-location engine for protolint diagnostics.
//!
//! protolint reports findings as a line and column, usually pointing at
//! the start of a declaration. Editors want the exact token: the message
//! name, the field name, the `required` keyword. This crate scans the
//! document from the reported position and returns the precise range of a
//! requested [`TokenKind`], skipping comments and honoring the order of
//! tokens within a declaration (cardinality, then type, then name).
//!
//! The building blocks, leaves first:
//!
//! - [`exclude_line_ranges`]: the searchable complement of comment spans
//! - [`find_matches`]: windowed regex search on one line
//! - [`scan_comments`]: per-line comment detection with [`CommentState`]
//! - [`locate`] / [`ScanSession`]: per-kind lookup task pipelines
//!
//! The engine performs no I/O and keeps no state between calls.

mod comments;
mod document;
mod error;
mod exclude;
mod line;
mod line_match;
mod patterns;
mod tasks;
mod token_kind;
mod token_map;

pub use comments::{scan_comments, CommentState};
pub use document::{SourceText, TextDocument};
pub use error::LocateError;
pub use exclude::exclude_line_ranges;
pub use line::{Line, MatchRange, Position, Span, TokenRange};
pub use line_match::{find_in_ranges, find_matches};
pub use tasks::{task_list, LookupTask};
pub use token_kind::TokenKind;
pub use token_map::{literal_pattern, locate, ScanCursor, ScanSession, TokenMap};
