//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to brand the wizard and to decide which
//! package manager the generated project is installed with.

use crate::config::{resolve_package_manager, PackageManager};
use std::path::Path;

/// Configuration trait for the CLI product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Banner shown when the wizard starts
    fn display_name(&self) -> &'static str;

    /// Placeholder for the project name prompt
    fn default_project_name(&self) -> &'static str;

    /// Environment variable name for overriding the package manager
    fn package_manager_env(&self) -> &'static str;

    /// Package manager used when the environment does not override it
    fn default_package_manager(&self) -> PackageManager {
        PackageManager::Npm
    }

    /// Generate the "next steps" instructions after project creation
    fn next_steps(&self, dir: &Path, pm: PackageManager, installed: bool) -> Vec<String>;

    /// Package manager for this run, honoring the environment override
    fn package_manager(&self) -> PackageManager {
        let value = std::env::var(self.package_manager_env()).ok();
        resolve_package_manager(value.as_deref(), self.default_package_manager())
    }
}
