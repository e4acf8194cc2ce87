//! Bridge error type.

use std::io;

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    /// The linter executable could not be started.
    #[error("failed to run `{executable}`: {source}")]
    Spawn {
        executable: String,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    /// The linter ran but reported a failure other than lint findings.
    #[error("protolint exited with {status}: {stderr}")]
    LinterFailed { status: String, stderr: String },

    /// The linter's JSON report could not be parsed.
    #[error("malformed protolint report: {0}")]
    Report(#[from] serde_json::Error),

    /// Settings sent by the editor have the wrong shape.
    #[error("invalid settings: {0}")]
    Settings(#[source] serde_json::Error),
}
