use super::*;
use pretty_assertions::assert_eq;

const REPORT: &str = r#"{"lints":[
  {"filename":"api/weather.proto","line":5,"column":3,
   "message":"Field name \"cityName\" must be underscore_separated_names",
   "rule":"FIELD_NAMES_LOWER_SNAKE_CASE","severity":"error"},
  {"filename":"api/weather.proto","line":9,"column":1,
   "message":"Enum name \"color\" must be UpperCamelCase",
   "rule":"ENUM_NAMES_UPPER_CAMEL_CASE"}
]}"#;

// === Report parsing ===

#[test]
fn parses_json_report() {
    let findings = parse_report(REPORT).unwrap();
    assert_eq!(findings.len(), 2);
    assert_eq!(
        findings[0],
        LintFinding {
            filename: "api/weather.proto".to_owned(),
            line: 5,
            column: 3,
            message: "Field name \"cityName\" must be underscore_separated_names".to_owned(),
            rule: "FIELD_NAMES_LOWER_SNAKE_CASE".to_owned(),
            severity: Some("error".to_owned()),
        }
    );
    assert_eq!(findings[0].severity(), Severity::Error);
    assert_eq!(findings[1].severity(), Severity::Warning);
}

#[test]
fn empty_output_has_no_findings() {
    assert_eq!(parse_report("").unwrap(), vec![]);
    assert_eq!(parse_report("  \n").unwrap(), vec![]);
    assert_eq!(parse_report("{}").unwrap(), vec![]);
    assert_eq!(parse_report(r#"{"lints":[]}"#).unwrap(), vec![]);
}

#[test]
fn surrounding_noise_is_ignored() {
    let output = format!("[WARN] deprecated flag\n{REPORT}\ndone\n");
    assert_eq!(parse_report(&output).unwrap().len(), 2);
}

#[test]
fn malformed_report_is_an_error() {
    assert!(matches!(
        parse_report(r#"{"lints": [{"line": "x"}]}"#),
        Err(LintError::Report(_))
    ));
    assert!(matches!(
        parse_report("not json at all"),
        Err(LintError::Report(_))
    ));
}

// === Severity ===

#[test]
fn severity_parsing() {
    assert_eq!(Severity::parse("ERROR"), Severity::Error);
    assert_eq!(Severity::parse("warning"), Severity::Warning);
    assert_eq!(Severity::parse("note"), Severity::Info);
    assert_eq!(Severity::parse("whatever"), Severity::Warning);
    assert_eq!(Severity::Info.to_string(), "info");
}
