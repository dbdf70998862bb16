//! Tool error types.

use thiserror::Error;

/// Errors that can occur while driving an external analyzer.
///
/// A missing executable is kept apart from a non-zero exit: the former is
/// a deployment problem, the latter is often just an analyzer's way of
/// saying "findings exist".
#[derive(Debug, Error)]
pub enum ToolError {
    /// The analyzer executable could not be spawned because it is not on
    /// the search path.
    #[error("executable '{name}' not found")]
    MissingExecutable {
        /// Program name as it appeared in the command.
        name: String,
    },

    /// The analyzer exited non-zero and the caller did not tolerate it.
    #[error("command exited with status {code}: {stderr}")]
    ExecutionFailed {
        /// Exit code reported by the process.
        code: i32,
        /// Captured standard-error stream.
        stderr: String,
    },

    /// The analyzer exceeded the caller-supplied time budget and was killed.
    #[error("command timed out after {seconds}s")]
    TimedOut {
        /// The budget that elapsed, in seconds.
        seconds: u64,
    },

    /// An output line did not conform to any known format variant.
    #[error("unparseable report line: {0}")]
    BadReportLine(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ToolError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
