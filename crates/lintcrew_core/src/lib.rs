//! # lintcrew_core
//!
//! Engine for driving external static-analysis tools over a set of
//! changed files and merging their heterogeneous reports into one
//! ordered diagnostic set.
//!
//! This crate provides:
//! - The `Tool` contract and the built-in analyzer integrations
//! - The shared `Problems` diagnostic store
//! - External process execution with analyzer-friendly error tolerance
//! - The fix-then-verify workflow
//!
//! ## Example
//!
//! ```rust,ignore
//! use lintcrew_core::{ReviewConfig, ReviewSession};
//!
//! let config = ReviewConfig::from_file(".lintcrew.json")?;
//! let session = ReviewSession::new(&config)?;
//!
//! let report = session.run(&files, false);
//! for diag in session.problems().lock().all() {
//!     println!("{}:{} {}", diag.file.display(), diag.line, diag.body);
//! }
//! ```

pub mod command;
mod config;
pub mod deps;
mod error;
mod fixer;
mod problems;
mod session;
mod tool;
pub mod tools;

pub use command::{CommandOutput, RunOptions, run_command};
pub use config::{ReviewConfig, ToolEntry};
pub use error::ToolError;
pub use fixer::{FileSnapshot, changed_files, fix_and_recheck, snapshot_files};
pub use problems::{Diagnostic, Problems, SharedProblems};
pub use session::{ReviewSession, SessionReport};
pub use tool::{CheckOutcome, ParsedLine, Tool, ToolOptions};

#[cfg(test)]
pub mod test_utils;
