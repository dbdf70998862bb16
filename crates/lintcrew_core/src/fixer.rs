//! Fix-then-verify orchestration.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::ToolError;
use crate::tool::{CheckOutcome, Tool};

/// Byte-for-byte content capture taken before a fixer runs.
pub type FileSnapshot = HashMap<PathBuf, Vec<u8>>;

/// Captures file contents so a caller that persists or displays the
/// change can diff after the fixer ran. The workflow itself never diffs.
pub fn snapshot_files(files: &[PathBuf]) -> Result<FileSnapshot, ToolError> {
    files
        .iter()
        .map(|file| Ok((file.clone(), fs::read(file)?)))
        .collect()
}

/// Files whose on-disk bytes differ from the snapshot, sorted. A file
/// deleted since the snapshot counts as changed.
pub fn changed_files(snapshot: &FileSnapshot) -> Vec<PathBuf> {
    let mut changed: Vec<PathBuf> = snapshot
        .iter()
        .filter(|(file, original)| {
            fs::read(file).map(|now| now != **original).unwrap_or(true)
        })
        .map(|(file, _)| file.clone())
        .collect();
    changed.sort();
    changed
}

/// Runs the tool's auto-correct mode, then re-checks the same batch.
///
/// The fixer process has exited before the re-check is issued, so the
/// returned outcome reflects post-fix file content. If the fixer failed
/// partway, whatever it left on disk is the new ground truth and the
/// re-check surfaces any resulting anomalies.
pub fn fix_and_recheck(tool: &dyn Tool, files: &[PathBuf]) -> Result<CheckOutcome, ToolError> {
    debug!("Fixing {} files with {}", files.len(), tool.name());
    tool.process_fixer(files)?;
    tool.process_files(files)
}
