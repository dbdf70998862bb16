//! Candidate-file discovery.
//!
//! The engine only sees a flat file list; expanding the caller's
//! arguments is this collaborator's job.

use std::path::PathBuf;

use tracing::{info, warn};
use walkdir::WalkDir;

/// Expands paths into a sorted, deduplicated file list: files are kept
/// as-is, directories are walked recursively, anything else is dropped
/// with a warning.
pub fn expand_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
                if entry.path().is_file() {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            warn!("Skipping {}: not a file or directory", path.display());
        }
    }

    files.sort();
    files.dedup();

    info!("Discovered {} candidate files", files.len());
    files
}
