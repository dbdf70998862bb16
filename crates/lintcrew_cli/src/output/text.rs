//! Text output formatter

use std::path::Path;

use lintcrew_core::{Diagnostic, SessionReport};

pub fn output_text(diagnostics: &[Diagnostic], report: &SessionReport) {
    let mut current: Option<&Path> = None;
    for diag in diagnostics {
        if current != Some(diag.file.as_path()) {
            println!("\n{}:", diag.file.display());
            current = Some(diag.file.as_path());
        }
        match diag.position {
            Some(position) => println!("  {}:{} {}", diag.line, position, diag.body),
            None => println!("  {} {}", diag.line, diag.body),
        }
    }

    println!();
    println!(
        "Ran {} tools ({} skipped), found {} issues",
        report.ran.len(),
        report.skipped.len(),
        diagnostics.len()
    );

    for name in &report.skipped {
        eprintln!("{}: analyzer not installed, skipped", name);
    }
    for (name, error) in &report.failures {
        eprintln!("{} failed: {}", name, error);
    }
}
