//! Check command implementation

use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use tracing::info;

use lintcrew_core::{ReviewConfig, ReviewSession, ToolEntry, tools};

use crate::cli::{Cli, OutputFormat};
use crate::files::expand_paths;
use crate::output::{output_json, output_text};

pub fn run_check(cli: &Cli, paths: &[PathBuf], format: OutputFormat, fix: bool) -> Result<bool> {
    let config = load_config(cli)?;
    let session = ReviewSession::new(&config).into_diagnostic()?;
    let files = expand_paths(paths);

    let report = session.run(&files, fix);

    let problems = session.problems();
    let diagnostics = problems.lock().all();

    match format {
        OutputFormat::Text => output_text(&diagnostics, &report),
        OutputFormat::Json => output_json(&diagnostics)?,
    }

    Ok(!diagnostics.is_empty() || !report.failures.is_empty())
}

fn load_config(cli: &Cli) -> Result<ReviewConfig> {
    if let Some(ref path) = cli.config {
        return ReviewConfig::from_file(path).into_diagnostic();
    }

    if let Some(path) = ReviewConfig::discover(".") {
        info!("Using config: {}", path.display());
        return ReviewConfig::from_file(&path).into_diagnostic();
    }

    info!("No config file found, checking with every known tool");
    Ok(default_config())
}

/// With no config file every registry tool runs with default options;
/// unavailable analyzers are skipped by the session.
fn default_config() -> ReviewConfig {
    ReviewConfig {
        tools: tools::available_tools()
            .iter()
            .map(|name| ToolEntry {
                name: (*name).to_string(),
                options: Default::default(),
            })
            .collect(),
    }
}
