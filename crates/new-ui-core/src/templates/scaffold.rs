//! Framework-specific source files
//!
//! One branch per framework (plus vanilla). Every entry script starts with the
//! foundation import preamble, in the order the foundations were selected.

use super::manifest::to_json;
use super::{bundler, styles, GeneratedFile, Rendered};
use crate::config::{Foundation, Framework, ProjectConfig};
use serde_json::json;

pub const SRC_DIR: &str = "src";

/// Entry script path referenced by `index.html`
pub fn entry_path(framework: Option<Framework>) -> &'static str {
    match framework {
        Some(Framework::React) => "src/main.tsx",
        _ => "src/main.ts",
    }
}

/// One side-effect import per foundation, in selection order
pub fn import_preamble(foundations: &[Foundation]) -> String {
    foundations
        .iter()
        .map(|f| format!("import '{}';\n", f.package_name()))
        .collect()
}

pub fn render(config: &ProjectConfig) -> Rendered {
    let preamble = import_preamble(config.foundations());

    let files = match config.framework() {
        Some(Framework::React) => react(config, &preamble),
        Some(Framework::Vue) => vue(config, &preamble),
        Some(Framework::Svelte) => svelte(config, &preamble),
        None => vanilla(config, &preamble),
    };

    let mut rendered = Rendered {
        directories: vec![SRC_DIR],
        files,
    };
    if config.scss() {
        rendered.extend(styles::render(config.foundations()));
    }
    if let Some(file) = bundler::render(config) {
        rendered.files.push(file);
    }
    rendered
}

fn react(config: &ProjectConfig, preamble: &str) -> Vec<GeneratedFile> {
    let main = format!(
        "{preamble}import React from 'react';
import ReactDOM from 'react-dom/client';
import App from './App';

ReactDOM.createRoot(document.getElementById('app')!).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>
);
"
    );

    let app = format!(
        r#"import React from 'react';

function App() {{
  return (
    <div className="container">
      <h1>Welcome to {name}</h1>
      <p>Edit src/App.tsx to customize this page</p>
    </div>
  );
}}

export default App;
"#,
        name = config.name()
    );

    let tsconfig = json!({
        "compilerOptions": {
            "target": "ES2020",
            "useDefineForClassFields": true,
            "lib": ["ES2020", "DOM", "DOM.Iterable"],
            "module": "ESNext",
            "skipLibCheck": true,
            "moduleResolution": "bundler",
            "allowImportingTsExtensions": true,
            "resolveJsonModule": true,
            "isolatedModules": true,
            "noEmit": true,
            "jsx": "react-jsx",
            "strict": true,
            "noUnusedLocals": true,
            "noUnusedParameters": true,
            "noFallthroughCasesInSwitch": true,
        },
        "include": ["src"],
        "references": [{ "path": "./tsconfig.node.json" }],
    });

    let tool_config = config
        .bundler()
        .map(bundler::config_path)
        .unwrap_or(bundler::VITE_CONFIG);
    let tsconfig_node = json!({
        "compilerOptions": {
            "composite": true,
            "skipLibCheck": true,
            "module": "ESNext",
            "moduleResolution": "bundler",
            "allowSyntheticDefaultImports": true,
        },
        "include": [tool_config],
    });

    vec![
        GeneratedFile::new(entry_path(Some(Framework::React)), main),
        GeneratedFile::new("src/App.tsx", app),
        GeneratedFile::new("tsconfig.json", to_json(&tsconfig)),
        GeneratedFile::new("tsconfig.node.json", to_json(&tsconfig_node)),
    ]
}

fn vue(config: &ProjectConfig, preamble: &str) -> Vec<GeneratedFile> {
    let main = format!(
        "{preamble}import {{ createApp }} from 'vue';
import App from './App.vue';

createApp(App).mount('#app');
"
    );

    let app = format!(
        r#"<template>
  <div class="container">
    <h1>Welcome to {name}</h1>
    <p>Edit src/App.vue to customize this page</p>
  </div>
</template>

<script setup lang="ts">
// Your component logic here
</script>

<style>
/* Your styles here */
</style>
"#,
        name = config.name()
    );

    let tsconfig = json!({
        "compilerOptions": {
            "target": "ESNext",
            "useDefineForClassFields": true,
            "module": "ESNext",
            "moduleResolution": "node",
            "strict": true,
            "jsx": "preserve",
            "resolveJsonModule": true,
            "isolatedModules": true,
            "esModuleInterop": true,
            "lib": ["ESNext", "DOM"],
            "skipLibCheck": true,
            "noEmit": true,
        },
        "include": ["src/**/*.ts", "src/**/*.d.ts", "src/**/*.tsx", "src/**/*.vue"],
    });

    vec![
        GeneratedFile::new(entry_path(Some(Framework::Vue)), main),
        GeneratedFile::new("src/App.vue", app),
        GeneratedFile::new("tsconfig.json", to_json(&tsconfig)),
    ]
}

fn svelte(config: &ProjectConfig, preamble: &str) -> Vec<GeneratedFile> {
    let main = format!(
        "{preamble}import App from './App.svelte';

const app = new App({{
  target: document.getElementById('app')!,
}});

export default app;
"
    );

    let app = format!(
        r#"<script lang="ts">
  // Your component logic here
</script>

<div class="container">
  <h1>Welcome to {name}</h1>
  <p>Edit src/App.svelte to customize this page</p>
</div>

<style>
  /* Your styles here */
</style>
"#,
        name = config.name()
    );

    let tsconfig = json!({
        "extends": "@tsconfig/svelte/tsconfig.json",
        "compilerOptions": {
            "target": "ESNext",
            "useDefineForClassFields": true,
            "module": "ESNext",
            "resolveJsonModule": true,
            "allowJs": true,
            "checkJs": true,
            "isolatedModules": true,
        },
        "include": ["src/**/*.d.ts", "src/**/*.ts", "src/**/*.js", "src/**/*.svelte"],
    });

    vec![
        GeneratedFile::new(entry_path(Some(Framework::Svelte)), main),
        GeneratedFile::new("src/App.svelte", app),
        GeneratedFile::new("tsconfig.json", to_json(&tsconfig)),
    ]
}

fn vanilla(config: &ProjectConfig, preamble: &str) -> Vec<GeneratedFile> {
    let main = format!(
        r#"{preamble}import './styles.css';

document.addEventListener('DOMContentLoaded', () => {{
  const appElement = document.getElementById('app');
  if (appElement) {{
    appElement.innerHTML = `
      <div class="container">
        <h1>Welcome to {name}</h1>
        <p>Edit src/main.ts to customize this page</p>
      </div>
    `;
  }}
}});
"#,
        name = config.name()
    );

    let stylesheet = "\
.container {
  max-width: 960px;
  margin: 0 auto;
  padding: 2rem;
  font-family: system-ui, sans-serif;
}
";

    let tsconfig = json!({
        "compilerOptions": {
            "target": "ESNext",
            "useDefineForClassFields": true,
            "module": "ESNext",
            "moduleResolution": "node",
            "strict": true,
            "resolveJsonModule": true,
            "isolatedModules": true,
            "esModuleInterop": true,
            "lib": ["ESNext", "DOM"],
            "skipLibCheck": true,
            "noEmit": true,
        },
        "include": ["src/**/*.ts", "src/**/*.d.ts"],
    });

    vec![
        GeneratedFile::new(entry_path(None), main),
        GeneratedFile::new("src/styles.css", stylesheet),
        GeneratedFile::new("tsconfig.json", to_json(&tsconfig)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Bundler, ProjectName};

    fn config(
        foundations: &[Foundation],
        framework: Option<Framework>,
        bundler: Option<Bundler>,
    ) -> ProjectConfig {
        ProjectConfig::new(
            ProjectName::parse("demo").unwrap(),
            foundations.iter().copied(),
            framework,
            bundler,
        )
        .unwrap()
    }

    fn entry(rendered: &Rendered) -> &str {
        rendered
            .files
            .iter()
            .find(|f| f.path.starts_with("src/main."))
            .map(|f| f.contents.as_str())
            .unwrap()
    }

    #[test]
    fn test_empty_preamble() {
        assert_eq!(import_preamble(&[]), "");
        let rendered = render(&config(&[], None, None));
        assert!(entry(&rendered).starts_with("import './styles.css';"));
    }

    #[test]
    fn test_preamble_follows_selection_order() {
        assert_eq!(
            import_preamble(&[Foundation::Colors, Foundation::Reset]),
            "import '@new-ui/colors';\nimport '@new-ui/reset';\n"
        );
    }

    #[test]
    fn test_every_entry_starts_with_preamble() {
        let foundations = [Foundation::Effects, Foundation::Spacings];
        let expected = import_preamble(&foundations);
        for framework in [
            None,
            Some(Framework::React),
            Some(Framework::Vue),
            Some(Framework::Svelte),
        ] {
            let rendered = render(&config(&foundations, framework, None));
            assert!(entry(&rendered).starts_with(&expected), "{:?}", framework);
            assert!(!entry(&rendered).contains("@new-ui/reset"));
        }
    }

    #[test]
    fn test_react_files() {
        let rendered = render(&config(
            &[Foundation::Reset],
            Some(Framework::React),
            Some(Bundler::Vite),
        ));
        assert_eq!(
            rendered.paths(),
            vec![
                "src/main.tsx",
                "src/App.tsx",
                "tsconfig.json",
                "tsconfig.node.json",
                "vite.config.ts",
            ]
        );
        let tsconfig: serde_json::Value =
            serde_json::from_str(&rendered.get("tsconfig.json").unwrap().contents).unwrap();
        assert_eq!(tsconfig["compilerOptions"]["jsx"], "react-jsx");
        assert_eq!(tsconfig["compilerOptions"]["strict"], true);
    }

    #[test]
    fn test_react_node_tsconfig_points_at_bundler_config() {
        let rendered = render(&config(&[], Some(Framework::React), Some(Bundler::Rspack)));
        let node: serde_json::Value =
            serde_json::from_str(&rendered.get("tsconfig.node.json").unwrap().contents).unwrap();
        assert_eq!(node["include"][0], "rspack.config.mjs");
    }

    #[test]
    fn test_vue_files() {
        let rendered = render(&config(&[], Some(Framework::Vue), None));
        assert_eq!(
            rendered.paths(),
            vec!["src/main.ts", "src/App.vue", "tsconfig.json"]
        );
        let tsconfig: serde_json::Value =
            serde_json::from_str(&rendered.get("tsconfig.json").unwrap().contents).unwrap();
        assert_eq!(tsconfig["compilerOptions"]["moduleResolution"], "node");
        assert_eq!(tsconfig["compilerOptions"]["jsx"], "preserve");
    }

    #[test]
    fn test_svelte_files() {
        let rendered = render(&config(&[], Some(Framework::Svelte), Some(Bundler::Vite)));
        assert_eq!(
            rendered.paths(),
            vec![
                "src/main.ts",
                "src/App.svelte",
                "tsconfig.json",
                "vite.config.ts"
            ]
        );
        let tsconfig: serde_json::Value =
            serde_json::from_str(&rendered.get("tsconfig.json").unwrap().contents).unwrap();
        assert_eq!(tsconfig["extends"], "@tsconfig/svelte/tsconfig.json");
    }

    #[test]
    fn test_vanilla_files() {
        let rendered = render(&config(&[], None, None));
        assert_eq!(
            rendered.paths(),
            vec!["src/main.ts", "src/styles.css", "tsconfig.json"]
        );
        assert_eq!(rendered.directories, vec![SRC_DIR]);
    }

    #[test]
    fn test_component_embeds_name() {
        let rendered = render(&config(&[], Some(Framework::Vue), None));
        assert!(rendered
            .get("src/App.vue")
            .unwrap()
            .contents
            .contains("<h1>Welcome to demo</h1>"));
    }
}
