//! RuboCop integration for Ruby sources.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ToolError;
use crate::command::{RunOptions, run_command};
use crate::deps;
use crate::problems::SharedProblems;
use crate::tool::{CheckOutcome, ParsedLine, Tool, ToolOptions, append_report, has_extension};

/// Drives `rubocop` over a batch of Ruby files.
///
/// The auto-correct mode is rubocop's own `--auto-correct` flag, so the
/// fixer reuses the check command.
pub struct Rubocop {
    problems: SharedProblems,
    options: ToolOptions,
}

impl Rubocop {
    pub const NAME: &'static str = "rubocop";

    pub fn new(problems: SharedProblems, options: ToolOptions) -> Self {
        Self { problems, options }
    }

    /// The `command` option overrides the executable for nonstandard
    /// installs.
    fn executable(&self) -> String {
        self.options
            .value("command")
            .unwrap_or_else(|| Self::NAME.to_string())
    }

    /// `bundle exec` prefix when the gem is vendored through Bundler;
    /// `--format emacs` keeps the report line-oriented.
    fn base_command(&self) -> Vec<String> {
        let mut command = if self.options.value("command").is_none() && deps::bundle_exists(Self::NAME)
        {
            vec![
                "bundle".to_string(),
                "exec".to_string(),
                Self::NAME.to_string(),
            ]
        } else {
            vec![self.executable()]
        };
        command.push("--format".to_string());
        command.push("emacs".to_string());
        if self.options.flag("display_cop_names") {
            command.push("--display-cop-names".to_string());
        }
        command
    }

    fn make_command(&self, files: &[PathBuf]) -> Vec<String> {
        let mut command = self.base_command();
        command.extend(files.iter().map(|f| f.display().to_string()));
        command
    }

    fn make_fixer_command(&self, files: &[PathBuf]) -> Vec<String> {
        let mut command = self.base_command();
        command.push("--auto-correct".to_string());
        command.extend(files.iter().map(|f| f.display().to_string()));
        command
    }

    /// `rubocop --format emacs` lines look like
    /// `filename:lineno:charno: severity: message`. The severity stays in
    /// the body; everything after the third delimiter is opaque.
    fn parse_line(line: &str) -> Result<ParsedLine, ToolError> {
        let parts: Vec<&str> = line.splitn(4, ':').collect();
        if parts.len() < 4 {
            return Err(ToolError::BadReportLine(line.to_string()));
        }
        let lineno: u32 = parts[1]
            .trim()
            .parse()
            .map_err(|_| ToolError::BadReportLine(line.to_string()))?;
        Ok(ParsedLine {
            file: parts[0].to_string(),
            line: lineno,
            position: parts[2].trim().parse().ok(),
            body: parts[3].trim().to_string(),
        })
    }
}

impl Tool for Rubocop {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check_dependencies(&self) -> bool {
        deps::in_path(&self.executable()) || deps::bundle_exists(Self::NAME)
    }

    fn match_file(&self, path: &Path) -> bool {
        has_extension(path, "rb")
    }

    fn process_files(&self, files: &[PathBuf]) -> Result<CheckOutcome, ToolError> {
        debug!("Processing {} files with {}", files.len(), self.name());
        let opts = RunOptions {
            ignore_error: true,
            include_errors: false,
            timeout: self.options.timeout(),
        };
        let output = run_command(&self.make_command(files), &opts)?;
        if output.is_empty() {
            debug!("No {} errors found", self.name());
            return Ok(CheckOutcome::NoFindings);
        }
        Ok(append_report(&self.problems, &output, Self::parse_line))
    }

    fn has_fixer(&self) -> bool {
        self.options.flag("fixer")
    }

    fn process_fixer(&self, files: &[PathBuf]) -> Result<(), ToolError> {
        debug!("Fixing {} files with {}", files.len(), self.name());
        let opts = RunOptions {
            ignore_error: true,
            include_errors: false,
            timeout: self.options.timeout(),
        };
        run_command(&self.make_fixer_command(files), &opts)?;
        Ok(())
    }
}
