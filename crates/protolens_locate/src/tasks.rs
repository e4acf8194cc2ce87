//! Per-kind lookup task pipelines.
//!
//! Each requestable [`TokenKind`] maps to a fixed, ordered list of tasks.
//! Earlier tasks find the tokens the target depends on (the `message`
//! keyword before a message name, the field type before a field name) and
//! move the cursor past them. Every task is a pure function of the line,
//! its searchable ranges, the cursor, the tokens recorded so far, and an
//! optional search pattern; the session in `token_map` owns all state.

use regex::Regex;

use crate::line_match::find_in_ranges;
use crate::patterns::{
    CARDINALITY, ENUM, FIELD_TYPE_CANDIDATE, FULL_IDENTIFIER, IDENTIFIER, MESSAGE,
    NOT_AN_ENUM_VALUE_NAME, NOT_A_FIELD_TYPE, PACKAGE, REQUIRED, RPC, SERVICE,
};
use crate::{Line, LocateError, MatchRange, Span, TokenKind, TokenMap};

/// One step of a kind's pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LookupTask {
    /// A fixed keyword (`package`, `message`, `enum`, `service`, `rpc`,
    /// `required`), recorded under its own kind.
    Keyword(TokenKind),
    /// The first identifier at or after the cursor. `dotted` accepts
    /// `foo.bar.baz`.
    Name { kind: TokenKind, dotted: bool },
    /// A field type, preceded by an optional cardinality keyword.
    FieldType,
    /// An enum value name, rejecting `option` and `reserved`.
    EnumValueName,
}

const PACKAGE_NAME_TASKS: &[LookupTask] = &[
    LookupTask::Keyword(TokenKind::Package),
    LookupTask::Name {
        kind: TokenKind::PackageName,
        dotted: true,
    },
];

const MESSAGE_NAME_TASKS: &[LookupTask] = &[
    LookupTask::Keyword(TokenKind::Message),
    LookupTask::Name {
        kind: TokenKind::MessageName,
        dotted: false,
    },
];

const ENUM_NAME_TASKS: &[LookupTask] = &[
    LookupTask::Keyword(TokenKind::Enum),
    LookupTask::Name {
        kind: TokenKind::EnumName,
        dotted: false,
    },
];

const ENUM_VALUE_NAME_TASKS: &[LookupTask] = &[LookupTask::EnumValueName];

const FIELD_NAME_TASKS: &[LookupTask] = &[
    LookupTask::FieldType,
    LookupTask::Name {
        kind: TokenKind::FieldName,
        dotted: false,
    },
];

const RPC_NAME_TASKS: &[LookupTask] = &[
    LookupTask::Keyword(TokenKind::Rpc),
    LookupTask::Name {
        kind: TokenKind::RpcName,
        dotted: false,
    },
];

const SERVICE_NAME_TASKS: &[LookupTask] = &[
    LookupTask::Keyword(TokenKind::Service),
    LookupTask::Name {
        kind: TokenKind::ServiceName,
        dotted: false,
    },
];

const REQUIRED_TASKS: &[LookupTask] = &[LookupTask::Keyword(TokenKind::Required)];

/// The pipeline for `kind`, or `None` if it cannot be requested on its own.
pub fn task_list(kind: TokenKind) -> Option<&'static [LookupTask]> {
    match kind {
        TokenKind::PackageName => Some(PACKAGE_NAME_TASKS),
        TokenKind::MessageName => Some(MESSAGE_NAME_TASKS),
        TokenKind::EnumName => Some(ENUM_NAME_TASKS),
        TokenKind::EnumValueName => Some(ENUM_VALUE_NAME_TASKS),
        TokenKind::FieldName => Some(FIELD_NAME_TASKS),
        TokenKind::RpcName => Some(RPC_NAME_TASKS),
        TokenKind::ServiceName => Some(SERVICE_NAME_TASKS),
        TokenKind::Required => Some(REQUIRED_TASKS),
        TokenKind::Comment
        | TokenKind::Package
        | TokenKind::Message
        | TokenKind::Enum
        | TokenKind::FieldCardinality
        | TokenKind::FieldType
        | TokenKind::Rpc
        | TokenKind::Service => None,
    }
}

/// What a task sees of the current line.
#[derive(Copy, Clone, Debug)]
pub(crate) struct TaskInput<'l, 'a> {
    pub line: &'l Line<'a>,
    /// Searchable (non-comment) ranges, left to right.
    pub ranges: &'l [Span],
    pub last_index: usize,
    /// Replaces the task's own pattern; only given to the last task.
    pub search: Option<&'l Regex>,
}

impl<'a> TaskInput<'_, 'a> {
    fn find(&self, pattern: &Regex, limit: usize) -> Vec<MatchRange<'a>> {
        find_in_ranges(self.line, self.ranges, pattern, self.last_index, limit)
    }

    fn first(&self, pattern: &Regex) -> Option<MatchRange<'a>> {
        self.find(pattern, 1).into_iter().next()
    }
}

/// Tokens recorded by one successful task run, in line order.
#[derive(Debug)]
pub(crate) struct Resolved<'a> {
    pub tokens: Vec<(TokenKind, MatchRange<'a>)>,
    /// False when only a prefix was found and the task stays pending for
    /// the following lines.
    pub done: bool,
}

impl<'a> Resolved<'a> {
    fn done(tokens: Vec<(TokenKind, MatchRange<'a>)>) -> Self {
        Resolved { tokens, done: true }
    }

    fn partial(tokens: Vec<(TokenKind, MatchRange<'a>)>) -> Self {
        Resolved {
            tokens,
            done: false,
        }
    }
}

impl LookupTask {
    /// The kind this task reports as not found.
    pub fn kind(self) -> TokenKind {
        match self {
            LookupTask::Keyword(kind) | LookupTask::Name { kind, .. } => kind,
            LookupTask::FieldType => TokenKind::FieldType,
            LookupTask::EnumValueName => TokenKind::EnumValueName,
        }
    }

    pub(crate) fn resolve<'a>(
        self,
        input: &TaskInput<'_, 'a>,
        map: &TokenMap<'a>,
    ) -> Result<Resolved<'a>, LocateError> {
        match self {
            LookupTask::Keyword(kind) => {
                let pattern = input.search.unwrap_or_else(|| keyword_pattern(kind));
                let found = input.first(pattern).ok_or(LocateError::NotFound { kind })?;
                Ok(Resolved::done(vec![(kind, found)]))
            }
            LookupTask::Name { kind, dotted } => {
                let generic: &Regex = if dotted { &FULL_IDENTIFIER } else { &IDENTIFIER };
                let found = input
                    .first(input.search.unwrap_or(generic))
                    .ok_or(LocateError::NotFound { kind })?;
                Ok(Resolved::done(vec![(kind, found)]))
            }
            LookupTask::EnumValueName => {
                let kind = TokenKind::EnumValueName;
                let found = input
                    .first(input.search.unwrap_or(&IDENTIFIER))
                    .ok_or(LocateError::NotFound { kind })?;
                if NOT_AN_ENUM_VALUE_NAME.is_match(found.text) {
                    return Err(LocateError::UnexpectedEnumValueName {
                        text: found.text.to_owned(),
                    });
                }
                Ok(Resolved::done(vec![(kind, found)]))
            }
            LookupTask::FieldType => resolve_field_type(input, map),
        }
    }
}

fn keyword_pattern(kind: TokenKind) -> &'static Regex {
    match kind {
        TokenKind::Package => &PACKAGE,
        TokenKind::Message => &MESSAGE,
        TokenKind::Enum => &ENUM,
        TokenKind::Service => &SERVICE,
        TokenKind::Rpc => &RPC,
        _ => &REQUIRED,
    }
}

/// Resolve a field type, recording a leading cardinality keyword if the
/// session has not seen one yet. A cardinality with nothing after it on
/// the line is recorded on its own and the task stays pending.
fn resolve_field_type<'a>(
    input: &TaskInput<'_, 'a>,
    map: &TokenMap<'a>,
) -> Result<Resolved<'a>, LocateError> {
    let not_found = LocateError::NotFound {
        kind: TokenKind::FieldType,
    };
    let mut resolved = Vec::with_capacity(2);

    let field_type = if map.contains(TokenKind::FieldCardinality) {
        input.first(&FIELD_TYPE_CANDIDATE).ok_or(not_found)?
    } else {
        let mut candidates = input.find(&FIELD_TYPE_CANDIDATE, 2).into_iter();
        let first = candidates.next().ok_or_else(|| not_found.clone())?;
        if CARDINALITY.is_match(first.text) {
            resolved.push((TokenKind::FieldCardinality, first));
            match candidates.next() {
                Some(field_type) => field_type,
                // The type follows on a later line.
                None => return Ok(Resolved::partial(resolved)),
            }
        } else {
            first
        }
    };

    let has_cardinality = !resolved.is_empty() || map.contains(TokenKind::FieldCardinality);
    if has_cardinality {
        if field_type.text == "group" {
            return Err(LocateError::UnexpectedGroup);
        }
    } else if NOT_A_FIELD_TYPE.is_match(field_type.text) {
        return Err(LocateError::UnexpectedFieldType {
            text: field_type.text.to_owned(),
        });
    }

    resolved.push((TokenKind::FieldType, field_type));
    Ok(Resolved::done(resolved))
}
