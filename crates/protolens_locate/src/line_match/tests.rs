use super::*;
use pretty_assertions::assert_eq;

fn ident() -> Regex {
    Regex::new(r"[A-Za-z_]\w*").unwrap()
}

fn texts<'a>(found: &[MatchRange<'a>]) -> Vec<&'a str> {
    found.iter().map(|m| m.text).collect()
}

// === find_matches ===

#[test]
fn finds_all_without_limit() {
    let line = Line::new(0, "repeated string names = 2;");
    let found = find_matches(&line, line.range(), &ident(), 0, 0);
    assert_eq!(texts(&found), vec!["repeated", "string", "names"]);
    assert_eq!(found[1].start.column, 9);
    assert_eq!(found[1].end.column, 15);
}

#[test]
fn respects_limit() {
    let line = Line::new(0, "repeated string names = 2;");
    let found = find_matches(&line, line.range(), &ident(), 0, 2);
    assert_eq!(texts(&found), vec!["repeated", "string"]);
}

#[test]
fn starts_at_last_index() {
    let line = Line::new(4, "message Foo {");
    let found = find_matches(&line, line.range(), &ident(), 7, 1);
    assert_eq!(texts(&found), vec!["Foo"]);
    assert_eq!(found[0].start.line, 4);
    assert_eq!(found[0].start.column, 8);
}

#[test]
fn seek_start_wins_over_smaller_last_index() {
    let line = Line::new(0, "aa bb cc");
    let found = find_matches(&line, Span::new(3, 8), &ident(), 1, 0);
    assert_eq!(texts(&found), vec!["bb", "cc"]);
}

#[test]
fn window_end_truncates_match() {
    let line = Line::new(0, "abcdef");
    let found = find_matches(&line, Span::new(0, 3), &ident(), 0, 0);
    assert_eq!(texts(&found), vec!["abc"]);
}

#[test]
fn empty_window_finds_nothing() {
    let line = Line::new(0, "abc");
    assert!(find_matches(&line, Span::new(0, 3), &ident(), 3, 0).is_empty());
    assert!(find_matches(&line, Span::new(2, 2), &ident(), 0, 0).is_empty());
}

#[test]
fn word_boundary_at_window_edge() {
    let pattern = Regex::new(r"\bFoo\b").unwrap();
    let line = Line::new(0, "xFoo Foo");
    let found = find_matches(&line, line.range(), &pattern, 0, 0);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].start.column, 5);
}

// === find_in_ranges ===

#[test]
fn continues_into_next_range() {
    let line = Line::new(0, "optional /* c */ string x = 1;");
    let ranges = [Span::new(0, 9), Span::new(16, 30)];
    let found = find_in_ranges(&line, &ranges, &ident(), 0, 2);
    assert_eq!(texts(&found), vec!["optional", "string"]);
}

#[test]
fn limit_spans_ranges() {
    let line = Line::new(0, "a b /* c */ d e");
    let ranges = [Span::new(0, 4), Span::new(11, 15)];
    let found = find_in_ranges(&line, &ranges, &ident(), 0, 3);
    assert_eq!(texts(&found), vec!["a", "b", "d"]);
}

#[test]
fn unlimited_collects_everything() {
    let line = Line::new(0, "a b /* c */ d e");
    let ranges = [Span::new(0, 4), Span::new(11, 15)];
    let found = find_in_ranges(&line, &ranges, &ident(), 0, 0);
    assert_eq!(texts(&found), vec!["a", "b", "d", "e"]);
}
