//! Running protolint.

use std::ffi::OsStr;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tracing::debug;

use crate::{parse_report, LintError, LintFinding, Settings};

/// Runs the configured protolint executable.
#[derive(Clone, Debug, Default)]
pub struct Linter {
    settings: Settings,
}

impl Linter {
    pub fn new(settings: Settings) -> Self {
        Linter { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// `<executable> lint -reporter=json [-config_dir_path DIR] [extra] FILE`
    pub fn command(&self, file: &Path, config_dir: Option<&Path>) -> Command {
        let mut command = Command::new(&self.settings.executable);
        command.arg("lint").arg("-reporter=json");
        if let Some(dir) = config_dir {
            command.arg("-config_dir_path").arg(dir);
        }
        command.args(&self.settings.extra_args).arg(file);
        command
    }

    /// Lint a file as it is on disk.
    pub fn lint_file(&self, path: &Path) -> Result<Vec<LintFinding>, LintError> {
        let config_dir = self.settings.config_dir_for(path);
        self.run(self.command(path, config_dir.as_deref()))
    }

    /// Lint unsaved `text` for the file at `path`.
    ///
    /// The text is written to a temporary directory under the same file
    /// name, linted with the config that applies at `path`, and the
    /// findings are reported against `path`.
    pub fn lint_text(&self, path: &Path, text: &str) -> Result<Vec<LintFinding>, LintError> {
        let dir = tempfile::tempdir()?;
        let name = path.file_name().unwrap_or(OsStr::new("buffer.proto"));
        let mirror = dir.path().join(name);
        fs::write(&mirror, text)?;

        let config_dir = self.settings.config_dir_for(path);
        let mut findings = self.run(self.command(&mirror, config_dir.as_deref()))?;
        let filename = path.display().to_string();
        for finding in &mut findings {
            finding.filename.clone_from(&filename);
        }
        Ok(findings)
    }

    fn run(&self, mut command: Command) -> Result<Vec<LintFinding>, LintError> {
        debug!(?command, "running linter");
        let output = command.output().map_err(|source| LintError::Spawn {
            executable: self.settings.executable.display().to_string(),
            source,
        })?;
        read_output(&output)
    }
}

/// Exit status 1 means "findings reported"; anything but 0 or 1 is a failure.
fn read_output(output: &Output) -> Result<Vec<LintFinding>, LintError> {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !matches!(output.status.code(), Some(0 | 1)) {
        return Err(LintError::LinterFailed {
            status: output.status.to_string(),
            stderr: stderr.trim().to_owned(),
        });
    }
    let report = if stdout.contains('{') { &stdout } else { &stderr };
    let findings = parse_report(report)?;
    debug!(count = findings.len(), "linter finished");
    Ok(findings)
}

#[cfg(test)]
mod tests;
