//! Compiled patterns for the minimal protobuf token vocabulary.

use std::sync::LazyLock;

use regex::Regex;

/// Compile a pattern written in this crate.
#[allow(clippy::expect_used, reason = "literal patterns are exercised by unit tests")]
fn literal(pattern: &str) -> Regex {
    Regex::new(pattern).expect("literal pattern must compile")
}

pub(crate) static COMMENT_OPEN: LazyLock<Regex> = LazyLock::new(|| literal(r"//|/\*"));

pub(crate) static PACKAGE: LazyLock<Regex> = LazyLock::new(|| literal(r"\bpackage\b"));
pub(crate) static MESSAGE: LazyLock<Regex> = LazyLock::new(|| literal(r"\bmessage\b"));
pub(crate) static ENUM: LazyLock<Regex> = LazyLock::new(|| literal(r"\benum\b"));
pub(crate) static SERVICE: LazyLock<Regex> = LazyLock::new(|| literal(r"\bservice\b"));
pub(crate) static RPC: LazyLock<Regex> = LazyLock::new(|| literal(r"\brpc\b"));
pub(crate) static REQUIRED: LazyLock<Regex> = LazyLock::new(|| literal(r"\brequired\b"));

pub(crate) static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| literal(r"\b[A-Za-z_][A-Za-z0-9_]*"));

/// Dotted name such as `foo.bar.v1`.
pub(crate) static FULL_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| literal(r"\b[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*"));

/// A cardinality keyword or a field type: `map<K, V>`, `.pkg.Type`,
/// `pkg.Type` or a scalar.
pub(crate) static FIELD_TYPE_CANDIDATE: LazyLock<Regex> = LazyLock::new(|| {
    literal(r"\bmap\s*<[^>]*>|\.?\b[A-Za-z_][A-Za-z0-9_]*(?:\.[A-Za-z_][A-Za-z0-9_]*)*")
});

pub(crate) static CARDINALITY: LazyLock<Regex> =
    LazyLock::new(|| literal(r"^(?:required|optional|repeated)$"));

/// Identifiers that may sit where a field type would, but start some
/// other declaration.
pub(crate) static NOT_A_FIELD_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    literal(
        r"^(?:group|message|enum|oneof|reserved|extensions|extend|option|required|optional|repeated)$",
    )
});

pub(crate) static NOT_AN_ENUM_VALUE_NAME: LazyLock<Regex> =
    LazyLock::new(|| literal(r"^(?:option|reserved)$"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_patterns_compile() {
        for pattern in [
            &COMMENT_OPEN,
            &PACKAGE,
            &MESSAGE,
            &ENUM,
            &SERVICE,
            &RPC,
            &REQUIRED,
            &IDENTIFIER,
            &FULL_IDENTIFIER,
            &FIELD_TYPE_CANDIDATE,
            &CARDINALITY,
            &NOT_A_FIELD_TYPE,
            &NOT_AN_ENUM_VALUE_NAME,
        ] {
            assert!(!pattern.as_str().is_empty());
        }
    }

    #[test]
    fn field_type_candidates() {
        let found: Vec<&str> = FIELD_TYPE_CANDIDATE
            .find_iter("repeated map<string, .foo.Bar> entries = 3;")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec!["repeated", "map<string, .foo.Bar>", "entries"]);

        let found: Vec<&str> = FIELD_TYPE_CANDIDATE
            .find_iter(".google.protobuf.Any detail = 1;")
            .map(|m| m.as_str())
            .collect();
        assert_eq!(found, vec![".google.protobuf.Any", "detail"]);
    }

    #[test]
    fn keyword_requires_word_boundary() {
        assert!(!MESSAGE.is_match("messages Foo"));
        assert!(MESSAGE.is_match("  message Foo {"));
    }

    #[test]
    fn exception_lists() {
        assert!(CARDINALITY.is_match("repeated"));
        assert!(!CARDINALITY.is_match("repeatedly"));
        assert!(NOT_A_FIELD_TYPE.is_match("oneof"));
        assert!(!NOT_A_FIELD_TYPE.is_match("string"));
        assert!(NOT_AN_ENUM_VALUE_NAME.is_match("reserved"));
        assert!(!NOT_AN_ENUM_VALUE_NAME.is_match("RESERVED"));
    }
}
