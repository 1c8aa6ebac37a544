//! Project file rendering and writing
//!
//! This module provides:
//! - Pure renderers mapping a [`ProjectConfig`] to file contents
//! - The fixed order in which renderers run ([`Artifact::ORDER`])
//! - Writing rendered files into a freshly created project directory

pub mod bundler;
pub mod manifest;
pub mod markup;
pub mod readme;
pub mod scaffold;
pub mod styles;
pub mod writer;

use crate::config::ProjectConfig;
use crate::error::ScaffoldError;
use std::path::{Path, PathBuf};

pub use writer::{create_project_dir, write_rendered};

/// One generated file, relative to the project root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: &'static str,
    pub contents: String,
}

impl GeneratedFile {
    pub fn new(path: &'static str, contents: impl Into<String>) -> Self {
        Self {
            path,
            contents: contents.into(),
        }
    }
}

/// Output of a renderer: directories to create and files to write
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    pub directories: Vec<&'static str>,
    pub files: Vec<GeneratedFile>,
}

impl Rendered {
    pub fn file(file: GeneratedFile) -> Self {
        Self {
            directories: Vec::new(),
            files: vec![file],
        }
    }

    pub fn extend(&mut self, other: Rendered) {
        self.directories.extend(other.directories);
        self.files.extend(other.files);
    }

    /// Look up a rendered file by its relative path
    pub fn get(&self, path: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|f| f.path == path)
    }

    pub fn paths(&self) -> Vec<&'static str> {
        self.files.iter().map(|f| f.path).collect()
    }
}

/// The renderers, in the order they are run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Artifact {
    Manifest,
    Readme,
    Markup,
    Scaffold,
}

impl Artifact {
    pub const ORDER: [Artifact; 4] = [
        Artifact::Manifest,
        Artifact::Readme,
        Artifact::Markup,
        Artifact::Scaffold,
    ];

    /// Progress label shown while the artifact is written
    pub fn label(&self) -> &'static str {
        match self {
            Artifact::Manifest => "package.json",
            Artifact::Readme => "README.md",
            Artifact::Markup => "index.html",
            Artifact::Scaffold => "source files",
        }
    }

    pub fn render(&self, config: &ProjectConfig) -> Rendered {
        match self {
            Artifact::Manifest => Rendered::file(manifest::render(config)),
            Artifact::Readme => Rendered::file(readme::render(config)),
            Artifact::Markup => markup::render(config),
            Artifact::Scaffold => scaffold::render(config),
        }
    }
}

/// Render every artifact, in order
pub fn render_project(config: &ProjectConfig) -> Rendered {
    let mut rendered = Rendered::default();
    for artifact in Artifact::ORDER {
        rendered.extend(artifact.render(config));
    }
    rendered
}

/// Create `<parent>/<name>` and write every artifact into it.
///
/// Fails before writing anything if the directory already exists. A failure
/// part-way through leaves the files written so far in place.
pub async fn generate_project(
    config: &ProjectConfig,
    parent: &Path,
) -> Result<PathBuf, ScaffoldError> {
    let root = create_project_dir(parent, config.name()).await?;
    for artifact in Artifact::ORDER {
        write_rendered(&root, &artifact.render(config)).await?;
    }
    Ok(root)
}
