//! The shared diagnostic store.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;

/// A single reported finding, tied to a file and line.
///
/// `line` 0 marks a file-level finding. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// File the finding applies to.
    pub file: PathBuf,

    /// 1-based line number, or 0 for a file-level finding.
    pub line: u32,

    /// Column, when the analyzer reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,

    /// The analyzer's message, opaque to the engine.
    pub body: String,
}

/// Shared handle to the session store.
///
/// Every tool in one review session writes into the same store. Tools run
/// sequentially, one external process at a time; the lock documents the
/// write rule and keeps `add` safe should independent check-only tools
/// ever run concurrently. A fixer is exclusive-write over its files and
/// must never run concurrently with any other phase over the same files.
pub type SharedProblems = Arc<Mutex<Problems>>;

/// Ordered, per-file collection of diagnostics accumulated across every
/// tool in one review session.
///
/// An append log that happens to be queried by key: entries are never
/// reordered or deduplicated. Two tools flagging the same location yield
/// two entries, and that duplication is meaningful.
#[derive(Debug, Default)]
pub struct Problems {
    /// Files in first-seen order.
    order: Vec<PathBuf>,
    by_file: HashMap<PathBuf, Vec<Diagnostic>>,
}

impl Problems {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a fresh store in the shared handle passed to every tool.
    pub fn shared() -> SharedProblems {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Appends a diagnostic. Never fails; duplicates are kept.
    pub fn add(&mut self, file: impl Into<PathBuf>, line: u32, body: impl Into<String>) {
        self.add_at(file, line, None, body);
    }

    /// Appends a diagnostic carrying a column position.
    pub fn add_at(
        &mut self,
        file: impl Into<PathBuf>,
        line: u32,
        position: Option<u32>,
        body: impl Into<String>,
    ) {
        let file = file.into();
        if !self.by_file.contains_key(&file) {
            self.order.push(file.clone());
        }
        let diagnostic = Diagnostic {
            file: file.clone(),
            line,
            position,
            body: body.into(),
        };
        self.by_file.entry(file).or_default().push(diagnostic);
    }

    /// Snapshot of every diagnostic, files in first-seen order, insertion
    /// order within a file. Later `add` calls do not affect it.
    pub fn all(&self) -> Vec<Diagnostic> {
        self.order
            .iter()
            .flat_map(|file| self.by_file[file].iter().cloned())
            .collect()
    }

    /// Snapshot of one file's diagnostics. Unknown files yield an empty
    /// sequence, never an error.
    pub fn for_file(&self, file: impl AsRef<Path>) -> Vec<Diagnostic> {
        self.by_file
            .get(file.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    /// Total number of diagnostics across all files.
    pub fn len(&self) -> usize {
        self.by_file.values().map(Vec::len).sum()
    }

    /// Whether the store holds no diagnostics.
    pub fn is_empty(&self) -> bool {
        self.by_file.values().all(Vec::is_empty)
    }
}
