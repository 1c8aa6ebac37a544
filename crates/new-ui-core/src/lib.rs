//! New UI Core - Shared library for the New UI project scaffolder
//!
//! This library turns a handful of user choices (project name, New UI
//! foundations, framework, bundler) into a ready-to-install frontend project.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Configuration** - [`ProjectConfig`] and the closed vocabularies it is built from
//! - **Layer 2: Generation** - Pure renderers in [`templates`] plus the directory/file writer
//! - **Layer 3: Runtime** - Package manager detection and best-effort dependency installation
//! - **Layer 4: CLI/TUI Interface** - Optional cliclack-based wizard (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based setup wizard
//!
//! # Example Usage (without TUI)
//!
//! ```no_run
//! use new_ui_core::config::{Bundler, Foundation, Framework, ProjectConfig, ProjectName};
//! use new_ui_core::templates;
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let config = ProjectConfig::new(
//!     ProjectName::parse("demo-react")?,
//!     [Foundation::Reset, Foundation::Colors],
//!     Some(Framework::React),
//!     Some(Bundler::Vite),
//! )?;
//! let dir = templates::generate_project(&config, std::path::Path::new(".")).await?;
//! # let _ = dir;
//! # Ok(())
//! # }
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use cancel::Cancellation;
pub use config::{Bundler, Foundation, Framework, PackageManager, ProjectConfig, ProjectName};
pub use error::ScaffoldError;
pub use product::ProductConfig;
pub use templates::{generate_project, render_project, Artifact, GeneratedFile, Rendered};

#[cfg(feature = "tui")]
pub use tui::run;
