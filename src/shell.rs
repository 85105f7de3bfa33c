//! Shell command execution.
//!
//! All diagnostic queries go through a single synchronous executor. Commands
//! run in the user's login shell so that version managers (nvm, rbenv, mise)
//! activated in profile files are on PATH. The command set is fixed and
//! trusted; there is no escaping, no timeout and no output size cap.

use crate::error::{PreflightError, Result};
use std::path::Path;
use std::process::Command;

/// Execute a shell command and return its stdout with surrounding
/// whitespace trimmed.
///
/// Fails if the process cannot be spawned or exits non-zero. Callers that
/// only need a success signal should use [`check`] instead.
pub fn run(command: &str) -> Result<String> {
    run_inner(command, None)
}

/// Execute a shell command in the given working directory.
pub fn run_in(command: &str, cwd: &Path) -> Result<String> {
    run_inner(command, Some(cwd))
}

/// Execute a command and collapse any failure to `false`.
pub fn check(command: &str) -> bool {
    run(command).is_ok()
}

fn run_inner(command: &str, cwd: Option<&Path>) -> Result<String> {
    tracing::debug!("running `{}`", command);

    let shell = detect_shell();
    let mut cmd = Command::new(&shell);
    cmd.arg(shell_flag());
    cmd.arg(command);

    if let Some(cwd) = cwd {
        cmd.current_dir(cwd);
    }

    let output = cmd.output().map_err(|_| PreflightError::CommandFailed {
        command: command.to_string(),
        code: None,
    })?;

    if !output.status.success() {
        return Err(PreflightError::CommandFailed {
            command: command.to_string(),
            code: output.status.code(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Detect the current shell.
fn detect_shell() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string())
    }
}

/// Get the flag to pass commands to the shell.
///
/// Uses `-lc` (login shell) on Unix so that PATH entries added by
/// `.zprofile`/`.bash_profile` are visible to the runtime queries.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-lc"
    }
}
