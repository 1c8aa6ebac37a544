//! End-to-end generation against temporary directories

use new_ui_core::config::{Bundler, Foundation, Framework, ProjectConfig, ProjectName};
use new_ui_core::{generate_project, ScaffoldError};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

fn config(
    name: &str,
    foundations: &[Foundation],
    framework: Option<Framework>,
    bundler: Option<Bundler>,
) -> ProjectConfig {
    ProjectConfig::new(
        ProjectName::parse(name).unwrap(),
        foundations.iter().copied(),
        framework,
        bundler,
    )
    .unwrap()
}

/// Relative path -> contents for every file below `root`
fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            (relative, std::fs::read(entry.path()).unwrap())
        })
        .collect()
}

fn read(root: &Path, path: &str) -> String {
    std::fs::read_to_string(root.join(path)).unwrap()
}

#[tokio::test]
async fn test_scenario_vanilla_without_bundler() {
    let tmp = tempfile::tempdir().unwrap();
    let root = generate_project(&config("demo-app", &[], None, None), tmp.path())
        .await
        .unwrap();

    assert_eq!(root, tmp.path().join("demo-app"));

    let manifest: serde_json::Value = serde_json::from_str(&read(&root, "package.json")).unwrap();
    assert!(manifest["dependencies"].as_object().unwrap().is_empty());
    assert_eq!(manifest["scripts"]["dev"], "echo \"No bundler configured\"");
    assert_eq!(manifest["scripts"]["build"], "echo \"No bundler configured\"");

    let html = read(&root, "index.html");
    assert!(html.contains(r#"<script type="module" src="/src/main.ts"></script>"#));

    let main = read(&root, "src/main.ts");
    assert!(!main.contains("@new-ui"));
    assert!(!main.starts_with('\n'));

    assert!(root.join("src/styles.css").is_file());
    assert!(root.join("public").is_dir());
    assert!(!root.join("vite.config.ts").exists());
    assert!(!root.join("src/main.tsx").exists());
}

#[tokio::test]
async fn test_scenario_react_with_vite() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config(
        "demo-react",
        &[Foundation::Reset, Foundation::Colors],
        Some(Framework::React),
        Some(Bundler::Vite),
    );
    let root = generate_project(&config, tmp.path()).await.unwrap();

    let manifest: serde_json::Value = serde_json::from_str(&read(&root, "package.json")).unwrap();
    for dep in ["react", "react-dom", "@types/react", "@types/react-dom"] {
        assert!(manifest["dependencies"][dep].is_string(), "missing {}", dep);
    }
    for dep in ["vite", "@vitejs/plugin-react"] {
        assert!(manifest["devDependencies"][dep].is_string(), "missing {}", dep);
    }

    let html = read(&root, "index.html");
    assert!(html.contains(r#"src="/src/main.tsx""#));
    assert!(html.contains(r#"<meta name="description""#));

    let main = read(&root, "src/main.tsx");
    assert!(main.starts_with("import '@new-ui/reset';\nimport '@new-ui/colors';\n"));
    let reset = main.find("@new-ui/reset").unwrap();
    let colors = main.find("@new-ui/colors").unwrap();
    let render = main.find(".render(").unwrap();
    assert!(reset < colors && colors < render);

    assert!(root.join("src/App.tsx").is_file());
    assert!(root.join("tsconfig.node.json").is_file());
    assert!(read(&root, "vite.config.ts").contains("plugins: [react()]"));
    assert!(!root.join("src/main.ts").exists());
}

#[tokio::test]
async fn test_manifest_dependencies_match_foundations() {
    let tmp = tempfile::tempdir().unwrap();
    let foundations = [
        Foundation::Effects,
        Foundation::Typography,
        Foundation::Spacings,
    ];
    let root = generate_project(&config("deps", &foundations, None, None), tmp.path())
        .await
        .unwrap();

    let manifest: serde_json::Value = serde_json::from_str(&read(&root, "package.json")).unwrap();
    let mut keys: Vec<String> = manifest["dependencies"]
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    let mut expected: Vec<String> = foundations.iter().map(|f| f.package_name()).collect();
    keys.sort();
    expected.sort();
    assert_eq!(keys, expected);

    for range in manifest["dependencies"].as_object().unwrap().values() {
        assert!(semver::VersionReq::parse(range.as_str().unwrap()).is_ok());
    }
}

#[tokio::test]
async fn test_generation_is_deterministic() {
    let config = config(
        "same",
        &[Foundation::Colors, Foundation::Reset],
        Some(Framework::Vue),
        Some(Bundler::Vite),
    )
    .with_scss(true)
    .unwrap();

    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let a = generate_project(&config, first.path()).await.unwrap();
    let b = generate_project(&config, second.path()).await.unwrap();

    let left = snapshot(&a);
    assert!(!left.is_empty());
    assert_eq!(left, snapshot(&b));
}

#[tokio::test]
async fn test_existing_directory_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let existing = tmp.path().join("taken");
    std::fs::create_dir(&existing).unwrap();

    let err = generate_project(&config("taken", &[], None, None), tmp.path())
        .await
        .unwrap_err();

    assert!(matches!(err, ScaffoldError::AlreadyExists(_)));
    assert_eq!(std::fs::read_dir(&existing).unwrap().count(), 0);
}

#[tokio::test]
async fn test_scss_project_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let config = config(
        "styled",
        &[Foundation::Typography, Foundation::Colors],
        None,
        Some(Bundler::Vite),
    )
    .with_scss(true)
    .unwrap();
    let root = generate_project(&config, tmp.path()).await.unwrap();

    let scss = read(&root, "src/scss/main.scss");
    assert!(scss.starts_with(
        "@use '@new-ui/typography' as typography;\n@use '@new-ui/colors' as colors;"
    ));

    let vite = read(&root, "vite.config.ts");
    assert!(vite.contains("@use '@new-ui/typography' as typography_0;"));
    assert!(vite.contains("@use '@new-ui/colors' as colors_1;"));
    assert!(read(&root, "index.html").contains("/src/scss/main.scss"));
}

#[tokio::test]
async fn test_rspack_project_layout() {
    let tmp = tempfile::tempdir().unwrap();
    let root = generate_project(
        &config("packed", &[], Some(Framework::Vue), Some(Bundler::Rspack)),
        tmp.path(),
    )
    .await
    .unwrap();

    assert!(root.join("rspack.config.mjs").is_file());
    assert!(!root.join("vite.config.ts").exists());
    assert!(root.join("src/App.vue").is_file());
}
