//! Package manager detection and dependency installation
//!
//! This module provides:
//! - Availability checks for npm, pnpm, yarn and bun
//! - A best-effort `install` run inside the generated project

pub mod check;
pub mod install;

pub use check::{check_package_manager, RuntimeInfo};
pub use install::{install_dependencies, InstallError};
