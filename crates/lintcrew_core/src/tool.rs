//! The polymorphic analyzer contract.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ToolError;
use crate::command::CommandOutput;
use crate::problems::SharedProblems;

/// Outcome of one check-phase batch.
///
/// An analyzer that ran quietly and one whose whole report was filtered
/// away both land on `NoFindings`; neither is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The analyzer ran and nothing was appended to the store.
    NoFindings,
    /// Number of diagnostics appended to the store.
    Findings(usize),
}

/// One line of an analyzer's native report, normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// File path as the analyzer printed it.
    pub file: String,
    /// 1-based line number, or 0 for a file-level finding.
    pub line: u32,
    /// Column, when the format carries one.
    pub position: Option<u32>,
    /// Message text, opaque; may itself contain the format's delimiter.
    pub body: String,
}

/// Per-tool configuration, immutable for the instance's lifetime.
///
/// Keys a concrete tool does not recognize are ignored, not errors.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolOptions(HashMap<String, serde_json::Value>);

impl ToolOptions {
    /// Creates an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, mostly for tests and embedders.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// String view of an option value. Numbers are rendered so that
    /// `"max-line-length": 120` works like `"120"`; other shapes are
    /// absent.
    pub fn value(&self, key: &str) -> Option<String> {
        match self.0.get(key) {
            Some(serde_json::Value::String(s)) => Some(s.clone()),
            Some(serde_json::Value::Number(n)) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Truthy flags: boolean `true` or the string `"true"`.
    pub fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            Some(serde_json::Value::Bool(b)) => *b,
            Some(serde_json::Value::String(s)) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }

    /// Process time budget from the `timeout` option, in seconds.
    pub fn timeout(&self) -> Option<Duration> {
        match self.0.get("timeout") {
            Some(serde_json::Value::Number(n)) => n.as_f64().map(Duration::from_secs_f64),
            _ => None,
        }
    }
}

/// A unit integrating one external static-analysis program into the
/// uniform check/fix contract.
///
/// Implementations are stateless beyond their options and the shared
/// store handle, constructed once per review session and discarded after
/// it. Integrating a new analyzer means a new implementation and a
/// registry entry, never a change to this trait.
pub trait Tool {
    /// Configuration name of this tool.
    fn name(&self) -> &'static str;

    /// Whether the analyzer is invocable in the current environment.
    /// Absence is a normal outcome, not an error.
    fn check_dependencies(&self) -> bool;

    /// Whether this tool applies to the given file. Pure and
    /// deterministic.
    fn match_file(&self, path: &Path) -> bool;

    /// Runs the analyzer once across the whole batch and appends every
    /// parsed diagnostic to the shared store.
    ///
    /// One process per batch, not per file, so process-spawn overhead is
    /// bounded by the number of tools rather than tools × files. Empty
    /// analyzer output is `NoFindings`, not an error.
    fn process_files(&self, files: &[PathBuf]) -> Result<CheckOutcome, ToolError>;

    /// True when the analyzer has an auto-correct mode and the `fixer`
    /// option enables it.
    fn has_fixer(&self) -> bool {
        false
    }

    /// Runs the analyzer's auto-correct mode, mutating files in place.
    /// Appends no diagnostics; callers re-run `process_files` to see the
    /// residual, post-fix findings.
    fn process_fixer(&self, _files: &[PathBuf]) -> Result<(), ToolError> {
        Ok(())
    }
}

/// Extension match helper shared by the concrete tools.
pub(crate) fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(ext)
}

/// Appends every parseable report line to the store.
///
/// A malformed line is logged and skipped; it must not hide the valid
/// diagnostics in the same run.
pub(crate) fn append_report<F>(
    problems: &SharedProblems,
    output: &CommandOutput,
    parse: F,
) -> CheckOutcome
where
    F: Fn(&str) -> Result<ParsedLine, ToolError>,
{
    let mut found = 0;
    let mut problems = problems.lock();
    for line in output.lines() {
        match parse(line) {
            Ok(parsed) => {
                problems.add_at(parsed.file, parsed.line, parsed.position, parsed.body);
                found += 1;
            }
            Err(e) => warn!("Skipping report line: {}", e),
        }
    }
    if found == 0 {
        CheckOutcome::NoFindings
    } else {
        CheckOutcome::Findings(found)
    }
}
