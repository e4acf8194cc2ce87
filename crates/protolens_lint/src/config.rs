//! Bridge settings and protolint config discovery.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::LintError;

/// File names protolint reads its configuration from, in lookup order.
pub const CONFIG_FILE_NAMES: [&str; 4] = [
    ".protolint.yaml",
    ".protolint.yml",
    "protolint.yaml",
    "protolint.yml",
];

/// User-facing settings.
///
/// Editors send these as `initializationOptions` and with
/// `workspace/didChangeConfiguration`, either bare or nested under a
/// `protolens` key:
///
/// ```
/// use protolens_lint::Settings;
///
/// let settings = Settings::from_value(&serde_json::json!({
///     "protolens": { "executable": "/opt/bin/protolint", "lintOnChange": false }
/// }))
/// .unwrap();
/// assert_eq!(settings.executable.to_str(), Some("/opt/bin/protolint"));
/// assert!(!settings.lint_on_change);
/// assert!(settings.extra_args.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// The protolint executable, looked up on `PATH` if relative.
    pub executable: PathBuf,
    /// Arguments passed after the bridge's own.
    pub extra_args: Vec<String>,
    /// Lint unsaved buffers on every change, not just on open and save.
    pub lint_on_change: bool,
    /// Explicit config directory or file; disables discovery.
    pub config_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            executable: PathBuf::from("protolint"),
            extra_args: Vec::new(),
            lint_on_change: true,
            config_path: None,
        }
    }
}

impl Settings {
    /// Parse editor settings. `null` yields the defaults.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, LintError> {
        let value = value.get("protolens").unwrap_or(value);
        if value.is_null() {
            return Ok(Settings::default());
        }
        Settings::deserialize(value).map_err(LintError::Settings)
    }

    /// The `-config_dir_path` to use for a file at `path`.
    ///
    /// An explicit `config_path` wins (a file path means its directory);
    /// otherwise the nearest ancestor holding a protolint config file.
    pub fn config_dir_for(&self, path: &Path) -> Option<PathBuf> {
        match &self.config_path {
            Some(explicit) if explicit.is_file() => explicit.parent().map(Path::to_path_buf),
            Some(explicit) => Some(explicit.clone()),
            None => discover_config_dir(path.parent()?),
        }
    }
}

/// Nearest directory at or above `start` that contains a protolint config.
pub fn discover_config_dir(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| CONFIG_FILE_NAMES.iter().any(|name| dir.join(name).is_file()))
        .map(Path::to_path_buf)
}
