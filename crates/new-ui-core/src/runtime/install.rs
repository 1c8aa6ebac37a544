//! Dependency installation inside a generated project
//!
//! Installation is a convenience: callers downgrade every [`InstallError`] to
//! a warning with manual instructions. No timeout or retry is applied; the
//! package manager decides how long it takes.

use crate::config::PackageManager;
use std::io;
use std::path::Path;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;

/// Lines of stderr kept for the error message
const STDERR_TAIL_LINES: usize = 5;

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("{0} not found. Dependencies will not be installed automatically.")]
    NotFound(PackageManager),

    #[error("Network error: failed to install dependencies. Please check your internet connection.")]
    Network,

    #[error("`{command}` failed with exit code {code}:\n{stderr}")]
    Failed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("Failed to run {pm}: {source}")]
    Io {
        pm: PackageManager,
        #[source]
        source: io::Error,
    },
}

/// Run `<pm> install` with `project_dir` as the working directory
pub async fn install_dependencies(
    pm: PackageManager,
    project_dir: &Path,
) -> Result<(), InstallError> {
    tracing::debug!(pm = %pm, dir = %project_dir.display(), "installing dependencies");

    let output = Command::new(pm.program())
        .arg("install")
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output()
        .await
        .map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => InstallError::NotFound(pm),
            _ => InstallError::Io { pm, source },
        })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    Err(classify_failure(
        pm,
        output.status.code().unwrap_or(-1),
        &stderr,
    ))
}

fn classify_failure(pm: PackageManager, code: i32, stderr: &str) -> InstallError {
    if stderr.contains("ENOTFOUND") || stderr.to_lowercase().contains("network") {
        return InstallError::Network;
    }

    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let tail = lines[lines.len().saturating_sub(STDERR_TAIL_LINES)..].join("\n");
    InstallError::Failed {
        command: pm.install_command(),
        code,
        stderr: tail,
    }
}
