//! The rule table: what each protolint rule points at and how to fix it.
//!
//! protolint only reports a line and column. For every rule we know which
//! token the finding is about ([`Target`]), how to pull the token's text
//! and an expected value out of the message, and which edit fixes it.

use std::sync::LazyLock;

use protolens_locate::TokenKind;
use regex::Regex;

/// Which part of the line a rule's finding is about.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    /// A token the engine can locate.
    Token(TokenKind),
    /// The line's leading whitespace.
    Indentation,
}

/// Target casing of a rename fix.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Case {
    UpperSnake,
    LowerSnake,
    UpperCamel,
    Lower,
}

/// The edit that resolves a finding.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FixKind {
    None,
    /// Replace the token with its re-cased form.
    Rename(Case),
    /// Replace the token with the expected value from the message.
    RenameToExpected,
    /// Insert the expected value before the token.
    Prefix,
    /// Insert the expected value after the token.
    Suffix,
    /// Delete the token and the whitespace after it.
    Delete,
    /// Replace the leading whitespace with the expected indentation.
    Indent,
}

/// Values extracted from a finding's message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageCaptures {
    /// The offending token's text.
    pub token: Option<String>,
    /// The value the rule expects (prefix, suffix, replacement, indent).
    pub expected: Option<String>,
}

/// One protolint rule.
#[derive(Debug)]
pub struct Rule {
    pub name: &'static str,
    pub target: Target,
    pub fix: FixKind,
    /// Captures `token` and optionally `expected` from the message.
    message: Option<&'static LazyLock<Regex>>,
}

impl Rule {
    /// Extract the token text and expected value from `message`.
    ///
    /// Missing groups come back as `None`; a message that does not match at
    /// all yields empty captures rather than an error.
    pub fn parse_message(&self, message: &str) -> MessageCaptures {
        let Some(captures) = self.message.and_then(|pattern| pattern.captures(message)) else {
            return MessageCaptures::default();
        };
        // protolint writes tabs in INDENT messages as `\t`.
        let group = |name: &str| captures.name(name).map(|m| m.as_str().replace(r"\t", "\t"));
        MessageCaptures {
            token: group("token"),
            expected: group("expected"),
        }
    }
}

#[allow(clippy::expect_used, reason = "literal patterns are exercised by unit tests")]
fn literal(pattern: &str) -> Regex {
    Regex::new(pattern).expect("literal pattern must compile")
}

/// `<Kind> name "token" ...`: the first quoted string names the token.
static QUOTED_TOKEN: LazyLock<Regex> = LazyLock::new(|| literal(r#""(?P<token>[^"]+)""#));

static EXPECTED_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    literal(r#""(?P<token>[^"]+)".*?\bprefix\s+"(?P<expected>[^"]+)""#)
});

static EXPECTED_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    literal(r#""(?P<token>[^"]+)".*?\bsuffix\s+"(?P<expected>[^"]+)""#)
});

static EXPECTED_PLURAL: LazyLock<Regex> = LazyLock::new(|| {
    literal(r#""(?P<token>[^"]+)".*?\bpluralized name\s+"(?P<expected>[^"]+)""#)
});

static EXPECTED_END: LazyLock<Regex> = LazyLock::new(|| {
    literal(r#""(?P<token>[^"]+)".*?\bend with\s+"?(?P<expected>[A-Za-z0-9_]+)"?"#)
});

/// Both INDENT message shapes:
///
/// - `Found an incorrect indentation style "<got>". "<want>" is correct.`
/// - `Found a possible incorrect indentation style "<got>". "<a>" or "<b>" is correct.`
///
/// Some protolint versions emit the second shape without the expected
/// values, so `expected` is optional.
static INDENT_STYLE: LazyLock<Regex> = LazyLock::new(|| {
    literal(r#"incorrect indentation style "(?P<token>[^"]*)"\.?(?:\s*"(?P<expected>[^"]*)")?"#)
});

const fn rule(
    name: &'static str,
    target: Target,
    fix: FixKind,
    message: Option<&'static LazyLock<Regex>>,
) -> Rule {
    Rule {
        name,
        target,
        fix,
        message,
    }
}

static RULES: [Rule; 19] = [
    rule(
        "ENUM_FIELD_NAMES_UPPER_SNAKE_CASE",
        Target::Token(TokenKind::EnumValueName),
        FixKind::Rename(Case::UpperSnake),
        Some(&QUOTED_TOKEN),
    ),
    rule(
        "ENUM_FIELD_NAMES_PREFIX",
        Target::Token(TokenKind::EnumValueName),
        FixKind::Prefix,
        Some(&EXPECTED_PREFIX),
    ),
    rule(
        "ENUM_FIELD_NAMES_ZERO_VALUE_END_WITH",
        Target::Token(TokenKind::EnumValueName),
        FixKind::Suffix,
        Some(&EXPECTED_SUFFIX),
    ),
    rule(
        "ENUM_NAMES_UPPER_CAMEL_CASE",
        Target::Token(TokenKind::EnumName),
        FixKind::Rename(Case::UpperCamel),
        Some(&QUOTED_TOKEN),
    ),
    rule(
        "MESSAGE_NAMES_UPPER_CAMEL_CASE",
        Target::Token(TokenKind::MessageName),
        FixKind::Rename(Case::UpperCamel),
        Some(&QUOTED_TOKEN),
    ),
    rule(
        "RPC_NAMES_UPPER_CAMEL_CASE",
        Target::Token(TokenKind::RpcName),
        FixKind::Rename(Case::UpperCamel),
        Some(&QUOTED_TOKEN),
    ),
    rule(
        "SERVICE_NAMES_UPPER_CAMEL_CASE",
        Target::Token(TokenKind::ServiceName),
        FixKind::Rename(Case::UpperCamel),
        Some(&QUOTED_TOKEN),
    ),
    rule(
        "SERVICE_NAMES_END_WITH",
        Target::Token(TokenKind::ServiceName),
        FixKind::Suffix,
        Some(&EXPECTED_END),
    ),
    rule(
        "FIELD_NAMES_LOWER_SNAKE_CASE",
        Target::Token(TokenKind::FieldName),
        FixKind::Rename(Case::LowerSnake),
        Some(&QUOTED_TOKEN),
    ),
    rule(
        "REPEATED_FIELD_NAMES_PLURALIZED",
        Target::Token(TokenKind::FieldName),
        FixKind::RenameToExpected,
        Some(&EXPECTED_PLURAL),
    ),
    rule(
        "PACKAGE_NAME_LOWER_CASE",
        Target::Token(TokenKind::PackageName),
        FixKind::Rename(Case::Lower),
        Some(&QUOTED_TOKEN),
    ),
    // The message names the field, but the finding is about the keyword.
    rule(
        "PROTO3_FIELDS_AVOID_REQUIRED",
        Target::Token(TokenKind::Required),
        FixKind::Delete,
        None,
    ),
    rule(
        "FIELDS_HAVE_COMMENT",
        Target::Token(TokenKind::FieldName),
        FixKind::None,
        Some(&QUOTED_TOKEN),
    ),
    rule(
        "MESSAGES_HAVE_COMMENT",
        Target::Token(TokenKind::MessageName),
        FixKind::None,
        Some(&QUOTED_TOKEN),
    ),
    rule(
        "ENUMS_HAVE_COMMENT",
        Target::Token(TokenKind::EnumName),
        FixKind::None,
        Some(&QUOTED_TOKEN),
    ),
    rule(
        "ENUM_FIELDS_HAVE_COMMENT",
        Target::Token(TokenKind::EnumValueName),
        FixKind::None,
        Some(&QUOTED_TOKEN),
    ),
    rule(
        "RPCS_HAVE_COMMENT",
        Target::Token(TokenKind::RpcName),
        FixKind::None,
        Some(&QUOTED_TOKEN),
    ),
    rule(
        "SERVICES_HAVE_COMMENT",
        Target::Token(TokenKind::ServiceName),
        FixKind::None,
        Some(&QUOTED_TOKEN),
    ),
    rule(
        "INDENT",
        Target::Indentation,
        FixKind::Indent,
        Some(&INDENT_STYLE),
    ),
];

/// Rule for `name`, or `None` for rules without special handling.
pub fn lookup_rule(name: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.name == name)
}

/// All rules with special handling.
pub fn rules() -> &'static [Rule] {
    &RULES
}
