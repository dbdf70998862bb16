//! Helpers shared by the in-crate tests.
//!
//! The fake analyzers are tiny shell scripts with real analyzer behavior:
//! they read the files they are given and report every line longer than
//! 30 bytes, in their namesake's output format. Their matching fixers
//! truncate long lines, so a fix-then-recheck round trip genuinely
//! converges. All of them exit 1 whether or not they find anything,
//! which is exactly the loose exit-code behavior the runner must
//! tolerate.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};

/// Writes an executable shell script and returns its path.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;
    let path = dir.join(name);
    fs::write(&path, body).expect("write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("chmod script");
    path
}

/// A fake flake8: `file:line:col: message` for every line longer than 30
/// bytes. Honors `--ignore` for the E501 category it reports.
pub fn fake_flake8(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "fake-flake8",
        r#"#!/bin/sh
ignore=""
prev=""
for a in "$@"; do
    [ "$prev" = "--ignore" ] && ignore="$a"
    prev="$a"
done
case "$ignore" in *E501*) exit 1 ;; esac
for f in "$@"; do
    [ -f "$f" ] || continue
    awk -v f="$f" 'length($0) > 30 { printf "%s:%d:31: E501 line too long\n", f, NR }' "$f"
done
exit 1
"#,
    )
}

/// A fake autopep8: truncates every line of its file arguments to 30
/// bytes, in place.
pub fn fake_autopep8(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "fake-autopep8",
        r#"#!/bin/sh
for f in "$@"; do
    [ -f "$f" ] || continue
    tmp="$f.tmp"
    cut -c1-30 "$f" > "$tmp" && mv "$tmp" "$f"
done
exit 0
"#,
    )
}

/// A fake rubocop: emacs-format report for long lines, or an in-place
/// truncation when `--auto-correct` is among the arguments.
pub fn fake_rubocop(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "fake-rubocop",
        r#"#!/bin/sh
fix=0
for a in "$@"; do
    [ "$a" = "--auto-correct" ] && fix=1
done
for f in "$@"; do
    [ -f "$f" ] || continue
    if [ "$fix" = "1" ]; then
        tmp="$f.tmp"
        cut -c1-30 "$f" > "$tmp" && mv "$tmp" "$f"
    else
        awk -v f="$f" 'length($0) > 30 { printf "%s:%d:31: C: Metrics/LineLength: Line is too long\n", f, NR }' "$f"
    fi
done
exit 1
"#,
    )
}

/// A Python fixture with no long lines.
pub fn clean_py(dir: &Path) -> PathBuf {
    let path = dir.join("no_errors.py");
    fs::write(&path, "import os\n\nprint(os.getcwd())\n").expect("write fixture");
    path
}

/// A Python fixture with six lines longer than 30 bytes, the first two on
/// lines 1 and 2.
pub fn dirty_py(dir: &Path) -> PathBuf {
    let path = dir.join("has_errors.py");
    fs::write(
        &path,
        "import os, sys, json, collections, itertools\n\
         value = {'alpha': 1, 'beta': 2, 'gamma': 3}\n\
         first = value.get('alpha', 0) + value.get('beta', 0)\n\
         second = sorted(value.items(), key=lambda kv: kv[1])\n\
         third = [item for item in value if len(item) > 4]\n\
         print(os.getcwd(), sys.argv, json.dumps(value), first, second, third)\n",
    )
    .expect("write fixture");
    path
}

/// A Ruby fixture with two lines longer than 30 bytes.
pub fn dirty_rb(dir: &Path) -> PathBuf {
    let path = dir.join("has_errors.rb");
    fs::write(
        &path,
        "values = { alpha: 1, beta: 2, gamma: 3, delta: 4 }\n\
         puts values\n\
         total = values.values.reduce(0) { |sum, v| sum + v }\n",
    )
    .expect("write fixture");
    path
}
