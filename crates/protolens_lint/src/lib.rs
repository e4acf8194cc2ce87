//! protolint bridge.
//!
//! Runs protolint, parses its JSON report, and turns each finding into a
//! [`LintDiagnostic`] whose range covers the offending token rather than
//! just the reported column. Token ranges come from `protolens_locate`;
//! the [rule table](rules) says which token each rule is about and which
//! quick fix applies.
//!
//! ```no_run
//! use std::path::Path;
//! use protolens_lint::{diagnose, Linter, Settings};
//! use protolens_locate::SourceText;
//!
//! let path = Path::new("api/weather.proto");
//! let text = std::fs::read_to_string(path)?;
//! let findings = Linter::new(Settings::default()).lint_file(path)?;
//! for diagnostic in diagnose(&SourceText::new(text), &findings) {
//!     println!("{}: {}", diagnostic.rule, diagnostic.message);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod case;
mod config;
mod diagnostic;
mod error;
mod finding;
mod fixes;
mod resolve;
pub mod rules;
mod runner;

pub use case::{to_lower_snake_case, to_upper_camel_case, to_upper_snake_case};
pub use config::{discover_config_dir, Settings, CONFIG_FILE_NAMES};
pub use diagnostic::{diagnose, LintDiagnostic};
pub use error::LintError;
pub use finding::{parse_report, LintFinding, Severity};
pub use fixes::{fix_for, CodeFix, TextEdit};
pub use resolve::{resolve_range, RangeSource, ResolvedRange, TextRange};
pub use runner::Linter;
