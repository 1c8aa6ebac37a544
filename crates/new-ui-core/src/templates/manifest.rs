//! `package.json` rendering

use super::GeneratedFile;
use crate::config::{Bundler, Framework, ProjectConfig};
use serde::Serialize;
use std::collections::BTreeMap;

/// Script used for `dev` and `build` when no bundler was chosen
pub const NO_BUNDLER_SCRIPT: &str = "echo \"No bundler configured\"";

const TYPESCRIPT: (&str, &str) = ("typescript", "^5.0.0");

/// `package.json` contents. Maps are sorted so output is stable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    pub name: String,
    pub version: &'static str,
    pub private: bool,
    pub scripts: BTreeMap<&'static str, &'static str>,
    pub dependencies: BTreeMap<String, &'static str>,
    pub dev_dependencies: BTreeMap<String, &'static str>,
}

impl PackageJson {
    pub fn from_config(config: &ProjectConfig) -> Self {
        Self {
            name: config.name().to_string(),
            version: "0.1.0",
            private: true,
            scripts: scripts(config.bundler()),
            dependencies: dependencies(config),
            dev_dependencies: dev_dependencies(config),
        }
    }
}

fn scripts(bundler: Option<Bundler>) -> BTreeMap<&'static str, &'static str> {
    let entries: &[(&str, &str)] = match bundler {
        Some(Bundler::Vite) => &[
            ("dev", "vite"),
            ("build", "vite build"),
            ("preview", "vite preview"),
        ],
        Some(Bundler::Rspack) => &[("dev", "rspack serve"), ("build", "rspack build")],
        None => &[("dev", NO_BUNDLER_SCRIPT), ("build", NO_BUNDLER_SCRIPT)],
    };
    entries.iter().copied().collect()
}

fn framework_dependencies(framework: Framework) -> &'static [(&'static str, &'static str)] {
    match framework {
        Framework::React => &[
            ("react", "^18.2.0"),
            ("react-dom", "^18.2.0"),
            ("@types/react", "^18.2.0"),
            ("@types/react-dom", "^18.2.0"),
        ],
        Framework::Vue => &[("vue", "^3.3.0")],
        Framework::Svelte => &[("svelte", "^4.0.0")],
    }
}

fn bundler_dev_dependencies(bundler: Bundler) -> &'static [(&'static str, &'static str)] {
    match bundler {
        Bundler::Vite => &[("vite", "^4.5.0")],
        Bundler::Rspack => &[("@rspack/cli", "^0.3.0"), ("@rspack/core", "^0.3.0")],
    }
}

/// Plugin or loader wiring a framework into a bundler
fn integration_dev_dependency(
    bundler: Bundler,
    framework: Framework,
) -> Option<(&'static str, &'static str)> {
    match (bundler, framework) {
        (Bundler::Vite, Framework::React) => Some(("@vitejs/plugin-react", "^4.0.0")),
        (Bundler::Vite, Framework::Vue) => Some(("@vitejs/plugin-vue", "^4.2.0")),
        (Bundler::Vite, Framework::Svelte) => Some(("@sveltejs/vite-plugin-svelte", "^2.4.0")),
        (Bundler::Rspack, Framework::React) => Some(("@rspack/plugin-react-refresh", "^0.3.0")),
        (Bundler::Rspack, Framework::Vue) => Some(("vue-loader", "^17.2.0")),
        (Bundler::Rspack, Framework::Svelte) => None,
    }
}

fn dependencies(config: &ProjectConfig) -> BTreeMap<String, &'static str> {
    let mut deps: BTreeMap<String, &'static str> = config
        .foundations()
        .iter()
        .map(|f| (f.package_name(), f.version_range()))
        .collect();

    if let Some(framework) = config.framework() {
        for (name, version) in framework_dependencies(framework) {
            deps.insert(name.to_string(), *version);
        }
    }

    deps
}

fn dev_dependencies(config: &ProjectConfig) -> BTreeMap<String, &'static str> {
    let mut deps = BTreeMap::new();

    if let Some(bundler) = config.bundler() {
        for (name, version) in bundler_dev_dependencies(bundler) {
            deps.insert(name.to_string(), *version);
        }
        if let Some((name, version)) = config
            .framework()
            .and_then(|framework| integration_dev_dependency(bundler, framework))
        {
            deps.insert(name.to_string(), version);
        }
    }

    // The generated tsconfig extends this package
    if config.framework() == Some(Framework::Svelte) {
        deps.insert("@tsconfig/svelte".to_string(), "^5.0.0");
    }

    if config.scss() {
        deps.insert("sass-embedded".to_string(), "^1.69.0");
    }

    deps.insert(TYPESCRIPT.0.to_string(), TYPESCRIPT.1);
    deps
}

/// Serialize a value as two-space indented JSON with a trailing newline
pub(crate) fn to_json<T: Serialize>(value: &T) -> String {
    // Maps keyed by strings and plain structs cannot fail to serialize
    let mut json = serde_json::to_string_pretty(value).unwrap_or_default();
    json.push('\n');
    json
}

pub fn render(config: &ProjectConfig) -> GeneratedFile {
    GeneratedFile::new("package.json", to_json(&PackageJson::from_config(config)))
}
