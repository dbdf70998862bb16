//! flake8 integration for Python sources.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::ToolError;
use crate::command::{RunOptions, run_command};
use crate::deps;
use crate::problems::SharedProblems;
use crate::tool::{CheckOutcome, ParsedLine, Tool, ToolOptions, append_report, has_extension};

/// Option keys forwarded one-to-one as `--<key> <value>` flags.
const PASSTHROUGH_OPTIONS: &[&str] = &["ignore", "max-line-length", "max-complexity"];

/// Drives `flake8` over a batch of Python files.
///
/// The auto-correct mode shells out to `autopep8`, since flake8 itself
/// only reports.
pub struct Flake8 {
    problems: SharedProblems,
    options: ToolOptions,
}

impl Flake8 {
    pub const NAME: &'static str = "flake8";

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

    /// Builds the check command for one batch. `--isolated` keeps the
    /// user's own flake8 config files out of the run.
    fn make_command(&self, files: &[PathBuf]) -> Vec<String> {
        let mut command = vec![self.executable(), "--isolated".to_string()];
        for key in PASSTHROUGH_OPTIONS {
            if let Some(value) = self.options.value(key) {
                command.push(format!("--{key}"));
                command.push(value);
            }
        }
        command.extend(files.iter().map(|f| f.display().to_string()));
        command
    }

    fn make_fixer_command(&self, files: &[PathBuf]) -> Vec<String> {
        let mut command = vec![
            self.options
                .value("fixer_command")
                .unwrap_or_else(|| "autopep8".to_string()),
            "--in-place".to_string(),
        ];
        command.extend(files.iter().map(|f| f.display().to_string()));
        command
    }

    /// flake8 reports `file:line:col: message` on stdout. Some plugins
    /// omit the column, so the message is taken from whichever trailing
    /// field is actually present; it is never re-split, colons and all.
    fn parse_line(line: &str) -> Result<ParsedLine, ToolError> {
        let parts: Vec<&str> = line.splitn(4, ':').collect();
        if parts.len() < 3 {
            return Err(ToolError::BadReportLine(line.to_string()));
        }
        let lineno: u32 = parts[1]
            .trim()
            .parse()
            .map_err(|_| ToolError::BadReportLine(line.to_string()))?;
        let (position, body) = if parts.len() == 3 {
            (None, parts[2].trim())
        } else {
            (parts[2].trim().parse().ok(), parts[3].trim())
        };
        Ok(ParsedLine {
            file: parts[0].to_string(),
            line: lineno,
            position,
            body: body.to_string(),
        })
    }
}

impl Tool for Flake8 {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn check_dependencies(&self) -> bool {
        deps::in_path(&self.executable())
    }

    fn match_file(&self, path: &Path) -> bool {
        has_extension(path, "py")
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
        debug!("Fixing {} files with autopep8", files.len());
        let opts = RunOptions {
            ignore_error: true,
            include_errors: false,
            timeout: self.options.timeout(),
        };
        run_command(&self.make_fixer_command(files), &opts)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Problems;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn tool_with(options: ToolOptions) -> (Flake8, SharedProblems) {
        let problems = Problems::shared();
        (Flake8::new(problems.clone(), options), problems)
    }

    #[test]
    fn matches_only_python_files() {
        let (tool, _) = tool_with(ToolOptions::new());

        assert!(!tool.match_file(Path::new("test.php")));
        assert!(!tool.match_file(Path::new("test.js")));
        assert!(!tool.match_file(Path::new("dir/name/test.js")));
        assert!(tool.match_file(Path::new("test.py")));
        assert!(tool.match_file(Path::new("dir/name/test.py")));
    }

    #[test]
    fn make_command_forwards_configured_options() {
        let (tool, _) = tool_with(
            ToolOptions::new()
                .set("ignore", "F4,W603")
                .set("max-line-length", 120)
                .set("max-complexity", 10)
                .set("unrecognized", "dropped"),
        );

        let command = tool.make_command(&[PathBuf::from("tests/has_errors.py")]);
        assert_eq!(
            command,
            vec![
                "flake8",
                "--isolated",
                "--ignore",
                "F4,W603",
                "--max-line-length",
                "120",
                "--max-complexity",
                "10",
                "tests/has_errors.py",
            ]
        );
    }

    #[test]
    fn make_command_without_options_is_bare() {
        let (tool, _) = tool_with(ToolOptions::new());
        let command = tool.make_command(&[PathBuf::from("a.py")]);
        assert_eq!(command, vec!["flake8", "--isolated", "a.py"]);
    }

    #[rstest]
    #[case::with_column(
        "app/models.py:2:10: E401 multiple imports on one line",
        "app/models.py",
        2,
        Some(10),
        "E401 multiple imports on one line"
    )]
    #[case::without_column("app/models.py:24: invalid syntax", "app/models.py", 24, None, "invalid syntax")]
    #[case::colons_in_message(
        "web.py:3:1: E501 line too long: 82 > 79",
        "web.py",
        3,
        Some(1),
        "E501 line too long: 82 > 79"
    )]
    fn parse_line_variants(
        #[case] raw: &str,
        #[case] file: &str,
        #[case] line: u32,
        #[case] position: Option<u32>,
        #[case] body: &str,
    ) {
        let parsed = Flake8::parse_line(raw).unwrap();
        assert_eq!(parsed.file, file);
        assert_eq!(parsed.line, line);
        assert_eq!(parsed.position, position);
        assert_eq!(parsed.body, body);
    }

    #[rstest]
    #[case::no_delimiters("collecting flake8 results")]
    #[case::line_not_numeric("app.py:abc: message")]
    fn malformed_lines_are_rejected(#[case] raw: &str) {
        assert!(matches!(
            Flake8::parse_line(raw),
            Err(ToolError::BadReportLine(_))
        ));
    }

    #[test]
    fn fixer_is_configuration_gated() {
        let (plain, _) = tool_with(ToolOptions::new());
        assert!(!plain.has_fixer());

        let (enabled, _) = tool_with(ToolOptions::new().set("fixer", true));
        assert!(enabled.has_fixer());
    }

    #[cfg(unix)]
    mod with_fake_analyzer {
        use super::*;
        use crate::test_utils::{clean_py, dirty_py, fake_flake8};
        use pretty_assertions::assert_eq;

        fn script_tool(dir: &Path) -> (Flake8, SharedProblems) {
            let script = fake_flake8(dir);
            tool_with(ToolOptions::new().set("command", script.display().to_string()))
        }

        #[test]
        fn clean_file_yields_no_diagnostics() {
            let dir = tempfile::tempdir().unwrap();
            let (tool, problems) = script_tool(dir.path());
            let clean = clean_py(dir.path());

            let outcome = tool.process_files(&[clean.clone()]).unwrap();

            assert_eq!(outcome, CheckOutcome::NoFindings);
            assert!(problems.lock().for_file(&clean).is_empty());
        }

        #[test]
        fn dirty_file_yields_positioned_diagnostics() {
            let dir = tempfile::tempdir().unwrap();
            let (tool, problems) = script_tool(dir.path());
            let dirty = dirty_py(dir.path());

            let outcome = tool.process_files(&[dirty.clone()]).unwrap();

            assert_eq!(outcome, CheckOutcome::Findings(6));
            let found = problems.lock().for_file(&dirty);
            assert!(found.len() >= 6);
            assert_eq!(found[0].line, 1);
            assert_eq!(found[0].position, Some(31));
            assert!(found[0].body.contains("line too long"));
        }

        #[test]
        fn batch_with_clean_and_dirty_files_separates_them() {
            let dir = tempfile::tempdir().unwrap();
            let (tool, problems) = script_tool(dir.path());
            let clean = clean_py(dir.path());
            let dirty = dirty_py(dir.path());

            tool.process_files(&[clean.clone(), dirty.clone()]).unwrap();

            let problems = problems.lock();
            assert!(problems.for_file(&clean).is_empty());
            assert!(problems.for_file(&dirty).len() >= 6);
        }

        #[test]
        fn ignored_categories_never_reach_the_store() {
            let dir = tempfile::tempdir().unwrap();
            let script = fake_flake8(dir.path());
            let (tool, problems) = tool_with(
                ToolOptions::new()
                    .set("command", script.display().to_string())
                    .set("ignore", "E501,W603"),
            );
            let dirty = dirty_py(dir.path());

            let outcome = tool.process_files(&[dirty]).unwrap();

            assert_eq!(outcome, CheckOutcome::NoFindings);
            assert!(problems.lock().is_empty());
        }

        #[test]
        fn script_tool_reports_itself_available() {
            let dir = tempfile::tempdir().unwrap();
            let (tool, _) = script_tool(dir.path());
            assert!(tool.check_dependencies());
        }

        #[test]
        fn missing_override_reports_itself_unavailable() {
            let dir = tempfile::tempdir().unwrap();
            let gone = dir.path().join("not-installed");
            let (tool, _) =
                tool_with(ToolOptions::new().set("command", gone.display().to_string()));
            assert!(!tool.check_dependencies());
        }
    }
}
