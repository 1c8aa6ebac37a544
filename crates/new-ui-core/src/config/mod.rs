//! Project configuration model

pub mod package_manager;
pub mod project;

pub use package_manager::{resolve_package_manager, PackageManager, UnknownPackageManager};
pub use project::{
    Bundler, ConfigError, Foundation, Framework, NameError, ProjectConfig, ProjectName,
    MAX_NAME_LEN, SCOPE,
};
