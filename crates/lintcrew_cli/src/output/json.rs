//! JSON output formatter

use lintcrew_core::Diagnostic;
use miette::{IntoDiagnostic, Result};

pub fn output_json(diagnostics: &[Diagnostic]) -> Result<()> {
    let json = serde_json::to_string_pretty(diagnostics).into_diagnostic()?;
    println!("{json}");
    Ok(())
}
