//! Project configuration: the user's choices for a single run

use super::package_manager::PackageManager;
use std::fmt;
use thiserror::Error;

/// npm refuses package names longer than this
pub const MAX_NAME_LEN: usize = 214;

/// npm scope every foundation package is published under
pub const SCOPE: &str = "@new-ui";

/// Version range used for a foundation missing from [`FOUNDATION_VERSIONS`]
pub const DEFAULT_VERSION_RANGE: &str = "^0.1.0";

/// Version range per foundation, maintained independently of each other
const FOUNDATION_VERSIONS: &[(Foundation, &str)] = &[
    (Foundation::Reset, "^0.0.9"),
    (Foundation::Colors, "^2.0.1"),
    (Foundation::Spacings, "^0.1.5"),
    (Foundation::Typography, "^0.1.8"),
    (Foundation::Effects, "^0.1.5"),
];

/// Reasons a project name is rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Project name is required")]
    Empty,

    #[error("Project name can only contain letters, numbers, hyphens, and underscores")]
    InvalidCharacters,

    #[error("Project name is too long ({len} characters, max {max})", max = MAX_NAME_LEN)]
    TooLong { len: usize },
}

/// Combinations that can never form a valid [`ProjectConfig`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{bundler} is not compatible with {framework}")]
    IncompatibleBundler {
        framework: Framework,
        bundler: Bundler,
    },

    #[error("SCSS preprocessing is only wired up for Vite")]
    ScssRequiresVite,
}

/// A validated project (and directory) name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate a raw name: `^[a-z0-9-_]+$` (case-insensitive), at most 214 chars
    pub fn parse(raw: &str) -> Result<Self, NameError> {
        if raw.is_empty() {
            return Err(NameError::Empty);
        }
        if !raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(NameError::InvalidCharacters);
        }
        if raw.len() > MAX_NAME_LEN {
            return Err(NameError::TooLong { len: raw.len() });
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// New UI foundation packages a project can depend on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Foundation {
    Reset,
    Colors,
    Spacings,
    Typography,
    Effects,
}

impl Foundation {
    /// All foundations, in the order they are offered to the user
    pub const ALL: [Foundation; 5] = [
        Foundation::Reset,
        Foundation::Colors,
        Foundation::Spacings,
        Foundation::Typography,
        Foundation::Effects,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Foundation::Reset => "reset",
            Foundation::Colors => "colors",
            Foundation::Spacings => "spacings",
            Foundation::Typography => "typography",
            Foundation::Effects => "effects",
        }
    }

    /// Scoped npm package name, e.g. `@new-ui/colors`
    pub fn package_name(&self) -> String {
        format!("{}/{}", SCOPE, self.id())
    }

    pub fn version_range(&self) -> &'static str {
        FOUNDATION_VERSIONS
            .iter()
            .find(|(foundation, _)| foundation == self)
            .map(|(_, range)| *range)
            .unwrap_or(DEFAULT_VERSION_RANGE)
    }

    /// Sass namespace the foundation module is aliased under
    pub fn namespace(&self) -> &'static str {
        match self {
            Foundation::Reset => "reset",
            Foundation::Colors => "colors",
            Foundation::Spacings => "spacings",
            Foundation::Typography => "typography",
            Foundation::Effects => "effects",
        }
    }
}

impl fmt::Display for Foundation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// UI frameworks a project can be scaffolded around
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Framework {
    React,
    Vue,
    Svelte,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::React, Framework::Vue, Framework::Svelte];

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::React => "React",
            Framework::Vue => "Vue",
            Framework::Svelte => "Svelte",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Build tools a project can be wired to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bundler {
    Vite,
    Rspack,
}

impl Bundler {
    pub fn display_name(&self) -> &'static str {
        match self {
            Bundler::Vite => "Vite",
            Bundler::Rspack => "Rspack",
        }
    }

    /// Bundlers that may be offered for the given framework.
    ///
    /// Rspack has no usable Svelte integration, so it is never offered there.
    pub fn available_for(framework: Option<Framework>) -> &'static [Bundler] {
        match framework {
            Some(Framework::Svelte) => &[Bundler::Vite],
            _ => &[Bundler::Vite, Bundler::Rspack],
        }
    }

    pub fn supports(&self, framework: Option<Framework>) -> bool {
        Self::available_for(framework).contains(self)
    }
}

impl fmt::Display for Bundler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Everything the renderers need to know about the project being generated.
///
/// Built once by the wizard and never mutated afterwards. Constructors reject
/// combinations the generated project could not support, so every value of
/// this type is renderable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    name: ProjectName,
    foundations: Vec<Foundation>,
    framework: Option<Framework>,
    bundler: Option<Bundler>,
    scss: bool,
    package_manager: PackageManager,
}

impl ProjectConfig {
    /// Foundations keep the order given; repeated entries are dropped.
    pub fn new(
        name: ProjectName,
        foundations: impl IntoIterator<Item = Foundation>,
        framework: Option<Framework>,
        bundler: Option<Bundler>,
    ) -> Result<Self, ConfigError> {
        if let (Some(framework), Some(bundler)) = (framework, bundler) {
            if !bundler.supports(Some(framework)) {
                return Err(ConfigError::IncompatibleBundler { framework, bundler });
            }
        }

        let mut unique = Vec::new();
        for foundation in foundations {
            if !unique.contains(&foundation) {
                unique.push(foundation);
            }
        }

        Ok(Self {
            name,
            foundations: unique,
            framework,
            bundler,
            scss: false,
            package_manager: PackageManager::default(),
        })
    }

    /// Request the SCSS entry point and preprocessor wiring
    pub fn with_scss(mut self, scss: bool) -> Result<Self, ConfigError> {
        if scss && self.bundler != Some(Bundler::Vite) {
            return Err(ConfigError::ScssRequiresVite);
        }
        self.scss = scss;
        Ok(self)
    }

    pub fn with_package_manager(mut self, package_manager: PackageManager) -> Self {
        self.package_manager = package_manager;
        self
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn foundations(&self) -> &[Foundation] {
        &self.foundations
    }

    pub fn has_foundation(&self, foundation: Foundation) -> bool {
        self.foundations.contains(&foundation)
    }

    pub fn framework(&self) -> Option<Framework> {
        self.framework
    }

    pub fn bundler(&self) -> Option<Bundler> {
        self.bundler
    }

    pub fn scss(&self) -> bool {
        self.scss
    }

    pub fn package_manager(&self) -> PackageManager {
        self.package_manager
    }
}
