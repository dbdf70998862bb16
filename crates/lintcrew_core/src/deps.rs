//! Probes for analyzer availability.
//!
//! Both probes answer "can this analyzer be invoked here" without ever
//! erroring; a missing program is a normal outcome that callers turn into
//! a skipped tool, not a failed run.

use std::env;
use std::path::Path;

use tracing::debug;

use crate::command::{RunOptions, run_command};

/// True when `name` resolves to an executable file.
///
/// Bare names are searched on `PATH`; names carrying a path separator
/// (the `command` override case) are checked directly.
pub fn in_path(name: &str) -> bool {
    let Some(paths) = env::var_os("PATH") else {
        return false;
    };
    env::split_paths(&paths).any(|dir| is_executable(&dir.join(name)))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.is_file()
        && path
            .metadata()
            .map(|m| m.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// True when the gem is vendored through Bundler in the working
/// directory. A missing `bundle` executable is `false`, not an error.
pub fn bundle_exists(gem: &str) -> bool {
    if !in_path("bundle") {
        return false;
    }
    let command = vec!["bundle".to_string(), "list".to_string(), gem.to_string()];
    let opts = RunOptions {
        ignore_error: true,
        ..RunOptions::default()
    };
    match run_command(&command, &opts) {
        Ok(output) => output.success(),
        Err(e) => {
            debug!("bundle probe failed: {}", e);
            false
        }
    }
}
