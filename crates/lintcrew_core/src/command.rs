//! External process execution.
//!
//! Analyzers run synchronously: the calling thread blocks until the
//! process exits or the optional time budget elapses. Many analyzers
//! exit non-zero purely to signal "findings exist", so callers opt into
//! tolerating that through [`RunOptions::ignore_error`].

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::ToolError;

/// Poll interval while waiting on a child with a time budget.
const WAIT_TICK: Duration = Duration::from_millis(10);

/// Behavior knobs for one process invocation.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Treat a non-zero exit status as a normal outcome.
    pub ignore_error: bool,
    /// Merge the standard-error stream into the captured output.
    pub include_errors: bool,
    /// Kill the process and fail once this budget elapses.
    pub timeout: Option<Duration>,
}

/// Captured output of a completed process.
///
/// `exit_code` is non-zero only when `ignore_error` let it through, so
/// `success()` together with the error variants of [`run_command`] covers
/// the full outcome space: clean exit, tolerated findings exit, execution
/// failure, missing executable.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code reported by the process.
    pub exit_code: i32,
    /// Captured standard output, plus standard error when requested.
    pub text: String,
}

impl CommandOutput {
    /// Whether the process exited zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// The capture split into lines, blank lines dropped.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines().filter(|line| !line.trim().is_empty())
    }

    /// Whether the capture contains no report text at all.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Runs `argv` to completion and captures its output.
///
/// The first element is the program, the rest its arguments. Standard
/// output is always fully captured; standard error is captured for error
/// reporting and merged into the output only with
/// [`RunOptions::include_errors`].
pub fn run_command(argv: &[String], opts: &RunOptions) -> Result<CommandOutput, ToolError> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| ToolError::config("empty command"))?;

    debug!("Running {:?}", argv);

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ToolError::MissingExecutable {
                name: program.clone(),
            },
            _ => ToolError::Io(e),
        })?;

    // Drain both pipes on their own threads so a chatty analyzer cannot
    // deadlock against a full pipe buffer while we wait on it.
    let mut stdout_pipe = child.stdout.take().expect("stdout is piped");
    let stdout_reader = thread::spawn(move || {
        let mut buf = String::new();
        let _ = stdout_pipe.read_to_string(&mut buf);
        buf
    });
    let mut stderr_pipe = child.stderr.take().expect("stderr is piped");
    let stderr_reader = thread::spawn(move || {
        let mut buf = String::new();
        let _ = stderr_pipe.read_to_string(&mut buf);
        buf
    });

    let status = match opts.timeout {
        None => child.wait().map_err(ToolError::Io)?,
        Some(limit) => {
            let deadline = Instant::now() + limit;
            loop {
                if let Some(status) = child.try_wait().map_err(ToolError::Io)? {
                    break status;
                }
                if Instant::now() >= deadline {
                    let _ = child.kill();
                    let _ = child.wait();
                    return Err(ToolError::TimedOut {
                        seconds: limit.as_secs_f64().ceil() as u64,
                    });
                }
                thread::sleep(WAIT_TICK);
            }
        }
    };

    let stdout = stdout_reader.join().unwrap_or_default();
    let stderr = stderr_reader.join().unwrap_or_default();

    let exit_code = status.code().unwrap_or(-1);
    if exit_code != 0 && !opts.ignore_error {
        return Err(ToolError::ExecutionFailed {
            code: exit_code,
            stderr,
        });
    }

    let mut text = stdout;
    if opts.include_errors {
        text.push_str(&stderr);
    }

    Ok(CommandOutput { exit_code, text })
}
