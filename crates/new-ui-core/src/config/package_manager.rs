//! Package manager selection

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Package managers the generated project can be installed with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown package manager '{0}' (expected npm, pnpm, yarn or bun)")]
pub struct UnknownPackageManager(pub String);

impl PackageManager {
    /// Binary name on PATH
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    pub fn install_command(&self) -> String {
        format!("{} install", self.program())
    }

    /// Command that runs a `package.json` script
    pub fn run_command(&self, script: &str) -> String {
        match self {
            PackageManager::Npm => format!("npm run {}", script),
            PackageManager::Pnpm => format!("pnpm run {}", script),
            PackageManager::Yarn => format!("yarn {}", script),
            PackageManager::Bun => format!("bun run {}", script),
        }
    }
}

impl FromStr for PackageManager {
    type Err = UnknownPackageManager;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "pnpm" => Ok(PackageManager::Pnpm),
            "yarn" => Ok(PackageManager::Yarn),
            "bun" => Ok(PackageManager::Bun),
            _ => Err(UnknownPackageManager(s.to_string())),
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.program())
    }
}

/// Resolve the package manager from an (optional) environment override
pub fn resolve_package_manager(
    env_value: Option<&str>,
    default: PackageManager,
) -> PackageManager {
    match env_value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => match value.parse() {
            Ok(pm) => pm,
            Err(err) => {
                tracing::warn!("{}, falling back to {}", err, default);
                default
            }
        },
        None => default,
    }
}
