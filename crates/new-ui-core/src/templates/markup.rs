//! `index.html` rendering

use super::{scaffold, styles, GeneratedFile, Rendered};
use crate::config::{Foundation, ProjectConfig};

/// Static assets directory, created empty next to `index.html`
pub const PUBLIC_DIR: &str = "public";

const DESCRIPTION_META: &str = r#"<meta name="description" content="New UI">"#;

/// The project name is interpolated as-is, without HTML escaping.
pub fn render(config: &ProjectConfig) -> Rendered {
    let name = config.name();

    let mut head = vec![
        r#"<meta charset="UTF-8">"#.to_string(),
        r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.to_string(),
        format!("<title>{}</title>", name),
    ];
    if config.has_foundation(Foundation::Reset) {
        head.push(DESCRIPTION_META.to_string());
    }
    if config.scss() {
        head.push(format!(
            r#"<link rel="stylesheet" href="/{}">"#,
            styles::MAIN_SCSS
        ));
    }
    let head = head
        .iter()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n");

    let entry = scaffold::entry_path(config.framework());
    let contents = format!(
        r#"<!DOCTYPE html>
<html data-new-ui-theme="light" lang="en">
<head>
{head}
</head>
<body>
  <div id="app">
    <h1>Welcome to {name}</h1>
  </div>
  <script type="module" src="/{entry}"></script>
</body>
</html>
"#
    );

    Rendered {
        directories: vec![PUBLIC_DIR],
        files: vec![GeneratedFile::new("index.html", contents)],
    }
}
