//! One review session: every configured tool over one set of candidate
//! files.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::ToolError;
use crate::config::ReviewConfig;
use crate::fixer::fix_and_recheck;
use crate::problems::{Problems, SharedProblems};
use crate::tool::{CheckOutcome, Tool};
use crate::tools;

/// What happened to each configured tool in one run.
#[derive(Debug, Default)]
pub struct SessionReport {
    /// Tools that ran, with their check outcome, in configuration order.
    pub ran: Vec<(String, CheckOutcome)>,
    /// Tools skipped because their analyzer is not installed.
    pub skipped: Vec<String>,
    /// Tools whose run failed. A failure aborts that tool's contribution
    /// only; the other tools still report.
    pub failures: Vec<(String, ToolError)>,
}

impl SessionReport {
    /// No failures and nothing found.
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
            && self
                .ran
                .iter()
                .all(|(_, outcome)| *outcome == CheckOutcome::NoFindings)
    }
}

/// Drives every configured tool sequentially over a shared store.
///
/// Tools are constructed once per session from the registry and run one
/// at a time, one external process at a time, in configuration order, so
/// the aggregated diagnostic set is deterministic.
pub struct ReviewSession {
    tools: Vec<Box<dyn Tool>>,
    problems: SharedProblems,
}

impl ReviewSession {
    /// Builds the configured tools, all wired to one shared store.
    /// An unknown tool name is a configuration error.
    pub fn new(config: &ReviewConfig) -> Result<Self, ToolError> {
        let problems = Problems::shared();
        let mut built = Vec::with_capacity(config.tools.len());
        for entry in &config.tools {
            let tool = tools::build_tool(&entry.name, problems.clone(), entry.options.clone())
                .ok_or_else(|| ToolError::config(format!("unknown tool '{}'", entry.name)))?;
            built.push(tool);
        }
        Ok(Self {
            tools: built,
            problems,
        })
    }

    /// The shared store accumulating every tool's diagnostics.
    pub fn problems(&self) -> SharedProblems {
        self.problems.clone()
    }

    /// Runs the check phase over the candidate files; with `fix`, tools
    /// that have a fixer auto-correct first and the check then reports
    /// the residual findings.
    pub fn run(&self, files: &[PathBuf], fix: bool) -> SessionReport {
        let mut report = SessionReport::default();

        for tool in &self.tools {
            let name = tool.name().to_string();

            if !tool.check_dependencies() {
                warn!("Skipping {}: analyzer not installed", name);
                report.skipped.push(name);
                continue;
            }

            let batch: Vec<PathBuf> = files
                .iter()
                .filter(|file| tool.match_file(file))
                .cloned()
                .collect();
            if batch.is_empty() {
                debug!("No files match {}", name);
                continue;
            }

            info!("Running {} on {} files", name, batch.len());
            let result = if fix && tool.has_fixer() {
                fix_and_recheck(tool.as_ref(), &batch)
            } else {
                tool.process_files(&batch)
            };

            match result {
                Ok(outcome) => report.ran.push((name, outcome)),
                Err(e) => {
                    warn!("{} failed: {}", name, e);
                    report.failures.push((name, e));
                }
            }
        }

        report
    }
}
