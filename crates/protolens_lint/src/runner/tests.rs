use super::*;
use crate::Settings;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn args(command: &Command) -> Vec<String> {
    command
        .get_args()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}

// === Command line ===

#[test]
fn command_line() {
    let linter = Linter::new(Settings {
        executable: PathBuf::from("/opt/protolint"),
        extra_args: vec!["-plugin".to_owned(), "./p".to_owned()],
        ..Settings::default()
    });
    let command = linter.command(Path::new("api/a.proto"), Some(Path::new("/cfg")));
    assert_eq!(command.get_program(), "/opt/protolint");
    assert_eq!(
        args(&command),
        vec![
            "lint",
            "-reporter=json",
            "-config_dir_path",
            "/cfg",
            "-plugin",
            "./p",
            "api/a.proto"
        ]
    );

    let command = Linter::default().command(Path::new("a.proto"), None);
    assert_eq!(args(&command), vec!["lint", "-reporter=json", "a.proto"]);
}

#[test]
fn missing_executable() {
    let linter = Linter::new(Settings {
        executable: PathBuf::from("/nonexistent/protolint"),
        ..Settings::default()
    });
    let error = linter.lint_file(Path::new("a.proto")).unwrap_err();
    assert!(matches!(error, LintError::Spawn { .. }), "{error}");
}

// === Fake linter ===

#[cfg(unix)]
mod fake {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::os::unix::fs::PermissionsExt;

    const REPORT: &str = r#"{"lints":[{"filename":"FILE","line":2,"column":9,"message":"Message name \"foo\" must be UpperCamelCase","rule":"MESSAGE_NAMES_UPPER_CAMEL_CASE","severity":"error"}]}"#;

    /// A protolint stand-in: records its arguments and the linted file's
    /// contents next to itself, then runs `body`.
    fn fake_linter(dir: &Path, body: &str) -> Linter {
        let script = dir.join("protolint");
        let contents = format!(
            "#!/bin/sh\nhere=$(dirname \"$0\")\necho \"$@\" > \"$here/args\"\nfor last; do :; done\ncat \"$last\" > \"$here/seen\"\n{body}\n"
        );
        fs::write(&script, contents).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        Linter::new(Settings {
            executable: script,
            ..Settings::default()
        })
    }

    fn report_body(stream: &str, status: u8) -> String {
        format!("printf '%s\\n' '{REPORT}' {stream}\nexit {status}")
    }

    #[test]
    fn findings_on_stdout_with_status_one() {
        let dir = tempfile::tempdir().unwrap();
        let linter = fake_linter(dir.path(), &report_body("", 1));
        let file = dir.path().join("weather.proto");
        fs::write(&file, "syntax = \"proto3\";\nmessage foo {}\n").unwrap();

        let findings = linter.lint_file(&file).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule, "MESSAGE_NAMES_UPPER_CAMEL_CASE");
        assert_eq!(
            fs::read_to_string(dir.path().join("args")).unwrap().trim(),
            format!("lint -reporter=json {}", file.display())
        );
    }

    #[test]
    fn findings_on_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let linter = fake_linter(dir.path(), &report_body(">&2", 1));
        let file = dir.path().join("weather.proto");
        fs::write(&file, "").unwrap();
        assert_eq!(linter.lint_file(&file).unwrap().len(), 1);
    }

    #[test]
    fn clean_run_has_no_findings() {
        let dir = tempfile::tempdir().unwrap();
        let linter = fake_linter(dir.path(), "exit 0");
        let file = dir.path().join("weather.proto");
        fs::write(&file, "").unwrap();
        assert_eq!(linter.lint_file(&file).unwrap(), vec![]);
    }

    #[test]
    fn other_status_is_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let linter = fake_linter(dir.path(), "echo 'unknown flag' >&2\nexit 2");
        let file = dir.path().join("weather.proto");
        fs::write(&file, "").unwrap();
        match linter.lint_file(&file).unwrap_err() {
            LintError::LinterFailed { stderr, .. } => assert_eq!(stderr, "unknown flag"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unsaved_text_is_mirrored() {
        let dir = tempfile::tempdir().unwrap();
        let linter = fake_linter(dir.path(), &report_body("", 1));
        fs::write(dir.path().join(".protolint.yaml"), "lint:\n").unwrap();
        let original = dir.path().join("api").join("weather.proto");
        let text = "syntax = \"proto3\";\nmessage foo {}\n";

        let findings = linter.lint_text(&original, text).unwrap();
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].filename, original.display().to_string());
        assert_eq!(fs::read_to_string(dir.path().join("seen")).unwrap(), text);

        let args = fs::read_to_string(dir.path().join("args")).unwrap();
        let args: Vec<_> = args.split_whitespace().collect();
        assert_eq!(args[..3], ["lint", "-reporter=json", "-config_dir_path"]);
        assert_eq!(args[3], dir.path().display().to_string());
        assert!(args[4].ends_with("/weather.proto"));
        assert!(!args[4].starts_with(&dir.path().display().to_string()));
    }
}
