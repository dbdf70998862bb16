//! Review configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ToolError;
use crate::tool::ToolOptions;

/// Default configuration file name looked up by `discover`.
const CONFIG_FILE: &str = ".lintcrew.json";

/// Configuration for one review session.
///
/// Tools are an ordered list so every run visits them, and reports
/// their diagnostics, in the same order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Analyzers to run, in order.
    #[serde(default)]
    pub tools: Vec<ToolEntry>,
}

/// One configured analyzer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolEntry {
    /// Registry name of the tool.
    pub name: String,

    /// Options scoped to this tool instance.
    #[serde(default)]
    pub options: ToolOptions,
}

impl ReviewConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ToolError> {
        serde_json::from_str(json)
            .map_err(|e| ToolError::config(format!("invalid config: {e}")))
    }

    /// Loads configuration from a file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ToolError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            ToolError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_json(&content)
    }

    /// Looks for `.lintcrew.json` in the given directory.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let candidate = dir.as_ref().join(CONFIG_FILE);
        candidate.is_file().then_some(candidate)
    }
}
