//! Package manager detection

use crate::config::PackageManager;
use std::process::Stdio;
use tokio::process::Command;

/// Detection result for a package manager
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

/// Check whether `<pm> --version` runs successfully
pub async fn check_package_manager(pm: PackageManager) -> RuntimeInfo {
    probe(pm.program()).await
}

/// The probe is killed if the future is dropped, e.g. on cancellation
async fn probe(program: &'static str) -> RuntimeInfo {
    let output = Command::new(program)
        .arg("--version")
        .stdin(Stdio::null())
        .kill_on_drop(true)
        .output()
        .await;

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name: program,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name: program,
            version: None,
            available: false,
        },
    }
}
