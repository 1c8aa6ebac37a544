//! SCSS entry point and preprocessor preamble
//!
//! Two aliasing conventions exist for foundation modules:
//! - [`AliasStyle::Name`]: `@use '@new-ui/colors' as colors;`, used in
//!   `main.scss` and anywhere a person writes `colors.$token`
//! - [`AliasStyle::Position`]: `@use '@new-ui/colors' as colors_0;`, used only
//!   for the preamble the bundler injects into every stylesheet, so it never
//!   collides with the names a stylesheet declares itself

use super::{GeneratedFile, Rendered};
use crate::config::{Foundation, SCOPE};

pub const SCSS_DIR: &str = "src/scss";
pub const MAIN_SCSS: &str = "src/scss/main.scss";

/// Where the preprocessor looks up bare foundation imports
pub const INCLUDE_PATH: &str = "node_modules/@new-ui";

const BASE_STYLES: &str = "\
:root {
  font-size: 16px;
}

body {
  background: var(--background);
  color: var(--text-primary);
  font-family: var(--system-ui);
  font-size: var(--desktop-body-xl);
  line-height: var(--lh-desktop-body-xl);
}
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasStyle {
    Name,
    Position,
}

/// Foundations with repeats removed, first occurrence wins
fn unique(foundations: &[Foundation]) -> Vec<Foundation> {
    let mut seen = Vec::with_capacity(foundations.len());
    for foundation in foundations {
        if !seen.contains(foundation) {
            seen.push(*foundation);
        }
    }
    seen
}

/// One `@use` line per foundation
pub fn use_directives(foundations: &[Foundation], style: AliasStyle) -> Vec<String> {
    unique(foundations)
        .iter()
        .enumerate()
        .map(|(index, foundation)| {
            let alias = match style {
                AliasStyle::Name => foundation.namespace().to_string(),
                AliasStyle::Position => format!("{}_{}", foundation.id(), index),
            };
            format!("@use '{}/{}' as {};", SCOPE, foundation.id(), alias)
        })
        .collect()
}

/// The code the bundler prepends to every stylesheet
pub fn injected_preamble(foundations: &[Foundation]) -> String {
    use_directives(foundations, AliasStyle::Position).join("\n")
}

/// `src/scss/main.scss`
pub fn render(foundations: &[Foundation]) -> Rendered {
    let directives = use_directives(foundations, AliasStyle::Name);
    let contents = if directives.is_empty() {
        BASE_STYLES.to_string()
    } else {
        format!("{}\n\n{}", directives.join("\n"), BASE_STYLES)
    };

    Rendered {
        directories: vec![SCSS_DIR],
        files: vec![GeneratedFile::new(MAIN_SCSS, contents)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_scss_uses_names() {
        let rendered = render(&[Foundation::Colors, Foundation::Typography]);
        let main = &rendered.files[0];
        assert_eq!(main.path, MAIN_SCSS);
        assert!(main.contents.starts_with(
            "@use '@new-ui/colors' as colors;\n@use '@new-ui/typography' as typography;\n\n:root"
        ));
        assert!(main.contents.contains("line-height: var(--lh-desktop-body-xl);"));
    }

    #[test]
    fn test_main_scss_without_foundations() {
        let rendered = render(&[]);
        assert!(rendered.files[0].contents.starts_with(":root {"));
    }

    #[test]
    fn test_preamble_numbers_by_position() {
        assert_eq!(
            injected_preamble(&[Foundation::Reset, Foundation::Colors, Foundation::Effects]),
            "@use '@new-ui/reset' as reset_0;\n\
             @use '@new-ui/colors' as colors_1;\n\
             @use '@new-ui/effects' as effects_2;"
        );
    }

    #[test]
    fn test_duplicates_collapse_in_first_seen_order() {
        let lines = use_directives(
            &[Foundation::Spacings, Foundation::Reset, Foundation::Spacings],
            AliasStyle::Position,
        );
        assert_eq!(
            lines,
            vec![
                "@use '@new-ui/spacings' as spacings_0;",
                "@use '@new-ui/reset' as reset_1;"
            ]
        );
    }

    #[test]
    fn test_empty_preamble() {
        assert_eq!(injected_preamble(&[]), "");
    }
}
