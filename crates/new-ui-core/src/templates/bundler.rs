//! Bundler configuration files

use super::{scaffold, styles, GeneratedFile};
use crate::config::{Bundler, Framework, ProjectConfig};

pub const VITE_CONFIG: &str = "vite.config.ts";
pub const RSPACK_CONFIG: &str = "rspack.config.mjs";

pub fn config_path(bundler: Bundler) -> &'static str {
    match bundler {
        Bundler::Vite => VITE_CONFIG,
        Bundler::Rspack => RSPACK_CONFIG,
    }
}

/// The bundler's config file, if a bundler was chosen
pub fn render(config: &ProjectConfig) -> Option<GeneratedFile> {
    let bundler = config.bundler()?;
    let contents = match bundler {
        Bundler::Vite => vite(config),
        Bundler::Rspack => rspack(config),
    };
    Some(GeneratedFile::new(config_path(bundler), contents))
}

fn vite(config: &ProjectConfig) -> String {
    let plugin = config.framework().map(|framework| match framework {
        Framework::React => ("import react from '@vitejs/plugin-react';", "react()"),
        Framework::Vue => ("import vue from '@vitejs/plugin-vue';", "vue()"),
        Framework::Svelte => (
            "import { svelte } from '@sveltejs/vite-plugin-svelte';",
            "svelte()",
        ),
    });

    let mut imports = vec!["import { defineConfig } from 'vite';"];
    let mut fields = Vec::new();
    if let Some((import, call)) = plugin {
        imports.push(import);
        fields.push(format!("  plugins: [{}],", call));
    }
    if config.scss() {
        fields.push(format!(
            "  css: {{
    preprocessorOptions: {{
      scss: {{
        additionalData: `{}`,
        includePaths: ['{}'],
      }},
    }},
  }},",
            styles::injected_preamble(config.foundations()),
            styles::INCLUDE_PATH
        ));
    }

    let body = if fields.is_empty() {
        "{}".to_string()
    } else {
        format!("{{\n{}\n}}", fields.join("\n"))
    };

    format!(
        "{}\n\nexport default defineConfig({});\n",
        imports.join("\n"),
        body
    )
}

fn rspack(config: &ProjectConfig) -> String {
    let entry = scaffold::entry_path(config.framework());
    let jsx = config.framework() == Some(Framework::React);

    let mut imports = vec![
        "import { defineConfig } from '@rspack/cli';".to_string(),
        "import { rspack } from '@rspack/core';".to_string(),
    ];
    let mut rules = vec![format!(
        "      {{
        test: /\\.tsx?$/,
        loader: 'builtin:swc-loader',
        options: {{
          jsc: {{
            parser: {{ syntax: 'typescript', tsx: {jsx} }},{transform}
          }},
        }},
        type: 'javascript/auto',
      }},",
        transform = if jsx {
            "\n            transform: { react: { runtime: 'automatic' } },"
        } else {
            ""
        }
    )];
    let mut plugins = vec!["    new rspack.HtmlRspackPlugin({ template: './index.html' }),".to_string()];

    match config.framework() {
        Some(Framework::React) => {
            imports.push("import ReactRefreshPlugin from '@rspack/plugin-react-refresh';".into());
            plugins.push("    new ReactRefreshPlugin(),".into());
        }
        Some(Framework::Vue) => {
            imports.push("import { VueLoaderPlugin } from 'vue-loader';".into());
            rules.push(
                "      {\n        test: /\\.vue$/,\n        loader: 'vue-loader',\n      },".into(),
            );
            plugins.push("    new VueLoaderPlugin(),".into());
        }
        _ => {}
    }
    rules.push("      {\n        test: /\\.css$/,\n        type: 'css',\n      },".into());

    format!(
        "{imports}

export default defineConfig({{
  entry: {{
    main: './{entry}',
  }},
  resolve: {{
    extensions: ['...', '.ts', '.tsx'],
  }},
  module: {{
    rules: [
{rules}
    ],
  }},
  plugins: [
{plugins}
  ],
  experiments: {{
    css: true,
  }},
}});
",
        imports = imports.join("\n"),
        rules = rules.join("\n"),
        plugins = plugins.join("\n"),
    )
}
