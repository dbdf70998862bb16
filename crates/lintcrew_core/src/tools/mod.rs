//! Built-in analyzer integrations and their registry.

mod flake8;
mod rubocop;

pub use flake8::Flake8;
pub use rubocop::Rubocop;

use crate::problems::SharedProblems;
use crate::tool::{Tool, ToolOptions};

/// Configuration names of every tool the registry can build, in a stable
/// order.
pub fn available_tools() -> &'static [&'static str] {
    &[Flake8::NAME, Rubocop::NAME]
}

/// Builds the tool registered under `name`, wired to the shared store.
///
/// Returns `None` for unknown names; adding an analyzer means adding an
/// arm here and nothing else.
pub fn build_tool(
    name: &str,
    problems: SharedProblems,
    options: ToolOptions,
) -> Option<Box<dyn Tool>> {
    match name {
        Flake8::NAME => Some(Box::new(Flake8::new(problems, options))),
        Rubocop::NAME => Some(Box::new(Rubocop::new(problems, options))),
        _ => None,
    }
}
