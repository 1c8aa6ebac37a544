//! `README.md` rendering

use super::GeneratedFile;
use crate::config::{Bundler, ProjectConfig};

pub fn render(config: &ProjectConfig) -> GeneratedFile {
    let framework = config
        .framework()
        .map(|f| f.display_name())
        .unwrap_or("None");
    let bundler = config
        .bundler()
        .map(|b| b.display_name())
        .unwrap_or("None");

    let dependencies = if config.foundations().is_empty() {
        "- None".to_string()
    } else {
        config
            .foundations()
            .iter()
            .map(|f| format!("- {}", f.package_name()))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let pm = config.package_manager();
    let mut scripts = format!(
        "# Start development server\n{}\n\n# Build for production\n{}",
        pm.run_command("dev"),
        pm.run_command("build")
    );
    if config.bundler() == Some(Bundler::Vite) {
        scripts.push_str(&format!(
            "\n\n# Preview production build\n{}",
            pm.run_command("preview")
        ));
    }

    let contents = format!(
        "# {name}

A frontend project created with create-new-ui.

## Technologies
- Framework: {framework}
- Bundler: {bundler}
- UI Components: New UI

## Dependencies
{dependencies}

## Getting Started

```bash
# Install dependencies
{install}

{scripts}
```
",
        name = config.name(),
        install = pm.install_command(),
    );

    GeneratedFile::new("README.md", contents)
}
