use super::*;
use crate::{Position, SourceText};
use pretty_assertions::assert_eq;

fn found(text: &str, kind: TokenKind, line: usize, column: usize) -> (usize, usize, usize, String) {
    let range = locate(text, kind, line, column, None).unwrap();
    (
        range.start.line,
        range.start.column,
        range.end.column,
        range.text.to_owned(),
    )
}

// === Declarations ===

#[test]
fn message_name_is_exact() {
    let text = "message TrickyMsgName {\n}\n";
    assert_eq!(
        found(text, TokenKind::MessageName, 0, 0),
        (0, 8, 21, "TrickyMsgName".to_owned())
    );
}

#[test]
fn package_name_is_dotted() {
    let text = "syntax = \"proto3\";\n\npackage acme.weather.v1;\n";
    assert_eq!(
        found(text, TokenKind::PackageName, 2, 0),
        (2, 8, 23, "acme.weather.v1".to_owned())
    );
}

#[test]
fn enum_service_and_rpc_names() {
    let text = "\
enum Color {
  COLOR_UNSPECIFIED = 0;
}
service WeatherService {
  rpc GetForecast(Req) returns (Resp);
}
";
    assert_eq!(found(text, TokenKind::EnumName, 0, 0).3, "Color");
    assert_eq!(found(text, TokenKind::EnumValueName, 1, 2).3, "COLOR_UNSPECIFIED");
    assert_eq!(found(text, TokenKind::ServiceName, 3, 0).3, "WeatherService");
    assert_eq!(
        found(text, TokenKind::RpcName, 4, 2),
        (4, 6, 17, "GetForecast".to_owned())
    );
}

#[test]
fn name_on_following_line() {
    let text = "message\n  Split {\n}";
    assert_eq!(
        found(text, TokenKind::MessageName, 0, 0),
        (1, 2, 7, "Split".to_owned())
    );
}

// === Fields ===

#[test]
fn field_name_resolves_cardinality_type_then_name() {
    let text = "message A {\n  required string foo = 1;\n}";
    let doc = SourceText::new(text);
    let mut session = ScanSession::new(&doc, TokenKind::FieldName, 1, 2, None).unwrap();
    let name = session.run().unwrap();

    let tokens = session.tokens();
    let cardinality = tokens.first(TokenKind::FieldCardinality).unwrap().range;
    let field_type = tokens.first(TokenKind::FieldType).unwrap().range;
    assert_eq!(cardinality.text, "required");
    assert_eq!(field_type.text, "string");
    assert_eq!(name.text, "foo");
    assert!(cardinality.end.column <= field_type.start.column);
    assert!(field_type.end.column <= name.start.column);
    assert_eq!(session.cursor().last_index, name.end.column);
}

#[test]
fn cardinality_on_its_own_line() {
    let text = "message A {\n  repeated\n    string names = 1;\n}";
    let doc = SourceText::new(text);
    let mut session = ScanSession::new(&doc, TokenKind::FieldName, 1, 2, None).unwrap();
    let name = session.run().unwrap();

    let tokens = session.tokens();
    let cardinality = tokens.first(TokenKind::FieldCardinality).unwrap().range;
    let field_type = tokens.first(TokenKind::FieldType).unwrap().range;
    assert_eq!((cardinality.start.line, cardinality.text), (1, "repeated"));
    assert_eq!((field_type.start.line, field_type.text), (2, "string"));
    assert_eq!((name.start.line, name.text), (2, "names"));
}

#[test]
fn field_without_cardinality() {
    let text = "  map<string, Forecast> by_city = 3;";
    assert_eq!(found(text, TokenKind::FieldName, 0, 2).3, "by_city");
}

#[test]
fn required_keyword() {
    let text = "  required int64 id = 1;";
    assert_eq!(
        found(text, TokenKind::Required, 0, 0),
        (0, 2, 10, "required".to_owned())
    );
}

#[test]
fn field_name_from_search_text() {
    // Without the search text the name task would take the first identifier.
    let text = "  Foo Foo = 1;";
    let pattern = literal_pattern("Foo");
    let range = locate(text, TokenKind::FieldName, 0, 0, Some(&pattern)).unwrap();
    assert_eq!(range.start.column, 6);
}

#[test]
fn search_text_only_applies_to_last_task() {
    // `message` must still be found by its keyword pattern.
    let text = "message Outer { message Inner {} }";
    let pattern = literal_pattern("Inner");
    let range = locate(text, TokenKind::MessageName, 0, 0, Some(&pattern)).unwrap();
    assert_eq!((range.start.column, range.text), (24, "Inner"));
}

// === Comments ===

#[test]
fn trailing_line_comment_is_skipped() {
    let text = "message // Fake\n  Real {";
    assert_eq!(
        found(text, TokenKind::MessageName, 0, 0),
        (1, 2, 6, "Real".to_owned())
    );
}

#[test]
fn search_after_code_ignores_comment() {
    let text = "  int32 a = 1; // message Fake {\nmessage Real {";
    assert_eq!(found(text, TokenKind::MessageName, 0, 0).3, "Real");
}

#[test]
fn inline_block_comment_between_tokens() {
    let text = "  optional /* string */ int32 count = 2;";
    let doc = SourceText::new(text);
    let mut session = ScanSession::new(&doc, TokenKind::FieldName, 0, 0, None).unwrap();
    assert_eq!(session.run().unwrap().text, "count");
    assert_eq!(
        session.tokens().first(TokenKind::FieldType).unwrap().range.text,
        "int32"
    );
}

#[test]
fn multi_line_comment_spans_both_lines() {
    let text = "/* opening comment\nclosing */ message Foo {\n}";
    let doc = SourceText::new(text);
    let mut session = ScanSession::new(&doc, TokenKind::MessageName, 0, 0, None).unwrap();
    let name = session.run().unwrap();
    assert_eq!((name.start, name.text), (Position::new(1, 19), "Foo"));

    let comments = session.tokens().get(TokenKind::Comment);
    assert_eq!(comments.len(), 2);
    assert!(!comments[0].closed);
    assert!(comments[1].closed);
    assert_eq!(comments[1].range.start, Position::new(0, 0));
    assert_eq!(comments[1].range.end, Position::new(1, 10));
}

#[test]
fn commented_out_declaration_is_skipped() {
    let text = "/*\nmessage Old {\n*/\nmessage New {";
    assert_eq!(found(text, TokenKind::MessageName, 0, 0).3, "New");
}

// === Errors ===

#[test]
fn dependency_kinds_are_not_implemented() {
    for kind in [TokenKind::Comment, TokenKind::FieldType, TokenKind::Message] {
        assert_eq!(
            locate("message A {}", kind, 0, 0, None),
            Err(LocateError::NotImplemented { kind })
        );
    }
}

#[test]
fn start_line_out_of_bounds() {
    assert_eq!(
        locate("a\nb", TokenKind::MessageName, 5, 0, None),
        Err(LocateError::LineNumber {
            line: 5,
            line_count: 2
        })
    );
}

#[test]
fn exhausted_document_is_not_found() {
    assert_eq!(
        locate("syntax = \"proto3\";\n", TokenKind::ServiceName, 0, 0, None),
        Err(LocateError::NotFound {
            kind: TokenKind::ServiceName
        })
    );
}

#[test]
fn enum_value_name_rejects_reserved() {
    let err = locate("  reserved 2;", TokenKind::EnumValueName, 0, 0, None).unwrap_err();
    assert_eq!(
        err,
        LocateError::UnexpectedEnumValueName {
            text: "reserved".to_owned()
        }
    );
    assert!(err.is_recoverable());
}

#[test]
fn field_type_keyword_aborts_scan() {
    let err = locate("  oneof kind {\n  string a = 1;", TokenKind::FieldName, 0, 0, None)
        .unwrap_err();
    assert!(matches!(err, LocateError::UnexpectedFieldType { .. }));
}

#[test]
fn group_after_lone_cardinality_is_rejected() {
    let text = "message A {\n  optional\n    group Result = 1 {\n  }\n}";
    assert_eq!(
        locate(text, TokenKind::FieldName, 1, 2, None),
        Err(LocateError::UnexpectedGroup)
    );
}

#[test]
fn invalid_search_text_is_reported() {
    assert!(matches!(
        locate("message A {}", TokenKind::MessageName, 0, 0, Some("(")),
        Err(LocateError::InvalidPattern { .. })
    ));
}

#[test]
fn start_column_past_line_end_is_clamped() {
    let text = "message A {\nmessage B {";
    assert_eq!(found(text, TokenKind::MessageName, 0, 99).3, "B");
}

// === Helpers ===

#[test]
fn literal_pattern_escapes_and_bounds() {
    assert_eq!(literal_pattern("foo"), r"\bfoo\b");
    assert_eq!(literal_pattern("a.b"), r"\ba\.b\b");
    assert_eq!(literal_pattern("(x)"), r"\(x\)");
}

#[test]
fn token_map_keeps_discovery_order() {
    let line = crate::Line::new(0, "a b");
    let mut map = TokenMap::new();
    map.push(
        TokenKind::FieldName,
        TokenRange::closed(MatchRange::on_line(&line, Span::new(2, 3))),
    );
    map.push(
        TokenKind::FieldName,
        TokenRange::closed(MatchRange::on_line(&line, Span::new(0, 1))),
    );
    assert_eq!(map.first(TokenKind::FieldName).unwrap().range.text, "b");
    assert_eq!(map.get(TokenKind::FieldName).len(), 2);
    assert!(!map.contains(TokenKind::FieldType));
}
