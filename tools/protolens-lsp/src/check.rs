// `protolens-lsp check`: lint files and print diagnostics.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use protolens_lint::{diagnose, LintDiagnostic, Linter, Settings};
use protolens_locate::{Position, SourceText, TextDocument};

/// Parsed `check` arguments.
#[derive(Debug, PartialEq, Eq)]
pub struct CheckOptions {
    pub settings: Settings,
    pub files: Vec<PathBuf>,
}

/// Parse the arguments after `check`.
pub fn parse_args(args: &[String]) -> Result<CheckOptions, String> {
    let mut settings = Settings::default();
    let mut files = Vec::new();
    for arg in args {
        if let Some(executable) = arg.strip_prefix("--protolint=") {
            settings.executable = PathBuf::from(executable);
        } else if let Some(config) = arg.strip_prefix("--config=") {
            settings.config_path = Some(PathBuf::from(config));
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}`"));
        } else {
            files.push(PathBuf::from(arg));
        }
    }
    if files.is_empty() {
        return Err("missing file path".to_string());
    }
    Ok(CheckOptions { settings, files })
}

/// Exit status: 0 clean, 1 diagnostics reported, 2 a file could not be linted.
pub fn run(args: &[String]) -> ExitCode {
    let options = match parse_args(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("Usage: protolens-lsp check [--protolint=<path>] [--config=<path>] <file.proto>...");
            return ExitCode::from(2);
        }
    };

    let linter = Linter::new(options.settings);
    let mut reported = false;
    let mut failed = false;
    for path in &options.files {
        match check_file(&linter, path) {
            Ok(output) => {
                reported |= !output.is_empty();
                print!("{output}");
            }
            Err(error) => {
                eprintln!("error: {}: {error}", path.display());
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::from(2)
    } else if reported {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn check_file(linter: &Linter, path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let document = SourceText::new(fs::read_to_string(path)?);
    let findings = linter.lint_file(path)?;
    let mut output = String::new();
    for diagnostic in diagnose(&document, &findings) {
        output.push_str(&format_diagnostic(&path.display().to_string(), &document, &diagnostic));
    }
    Ok(output)
}

/// `file:line:col-endcol: severity[RULE] message`, 1-based character
/// columns, followed by one indented line per available fix.
pub fn format_diagnostic(file: &str, document: &SourceText, diagnostic: &LintDiagnostic) -> String {
    let column = |position: Position| {
        document
            .line(position.line)
            .map_or(position.column, |line| line.char_column(position.column))
            + 1
    };
    let range = diagnostic.range;
    let mut out = format!(
        "{file}:{}:{}-{}: {}[{}] {}\n",
        range.start.line + 1,
        column(range.start),
        column(range.end),
        diagnostic.severity,
        diagnostic.rule,
        diagnostic.message,
    );
    for fix in &diagnostic.fixes {
        let _ = writeln!(out, "    fix: {}", fix.title);
    }
    out
}
