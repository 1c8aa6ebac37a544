//! Charm-style setup wizard using cliclack

use crate::cancel::Cancellation;
use crate::config::{Bundler, Foundation, Framework, PackageManager, ProjectConfig, ProjectName};
use crate::product::ProductConfig;
use crate::runtime::{check, install_dependencies, InstallError};
use crate::templates::{self, Artifact};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io;
use std::path::{Path, PathBuf};

const FAREWELL: &str = "Setup cancelled. Goodbye!";

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Directory the project folder is created in (defaults to the current directory)
    pub parent_dir: Option<PathBuf>,

    /// Skip the dependency installation step
    pub skip_install: bool,
}

/// How a wizard run ended. Every variant is a successful exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created { dir: PathBuf, installed: bool },
    /// The user answered "no" at the final confirmation
    Declined,
    /// Ctrl+C or Esc at any point
    Cancelled,
}

enum Collected {
    Confirmed(ProjectConfig),
    Declined,
    Cancelled,
}

/// Run the setup wizard, then generate the project
pub async fn run<C: ProductConfig>(
    product: &C,
    args: CreateArgs,
    cancel: &Cancellation,
) -> Result<Outcome> {
    cliclack::intro(product.display_name().cyan().to_string())?;

    let parent = match args.parent_dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve the current directory")?,
    };

    let config = match collect_config(product, &parent, cancel)? {
        Collected::Confirmed(config) => config,
        Collected::Declined => {
            cliclack::outro_cancel(
                "Project creation cancelled. Run the command again to start over.",
            )?;
            return Ok(Outcome::Declined);
        }
        Collected::Cancelled => return farewell(),
    };
    tracing::debug!(?config, "configuration confirmed");

    let created = tokio::select! {
        result = create_project(&config, &parent, args.skip_install) => result?,
        _ = cancel.cancelled() => return farewell(),
    };
    let (dir, installed) = created;

    print_next_steps(product, &dir, config.package_manager(), installed)?;

    Ok(Outcome::Created { dir, installed })
}

fn farewell() -> Result<Outcome> {
    let _ = console::Term::stderr().show_cursor();
    cliclack::outro_cancel(FAREWELL)?;
    Ok(Outcome::Cancelled)
}

/// Unwrap a prompt answer; `None` means the user cancelled
fn answer<T>(result: io::Result<T>, cancel: &Cancellation) -> Result<Option<T>> {
    match result {
        Ok(_) if cancel.is_cancelled() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::Interrupted => {
            cancel.cancel();
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Validation shared by the inline prompt check and the final parse
fn validate_name(input: &str, parent: &Path) -> std::result::Result<(), String> {
    ProjectName::parse(input).map_err(|e| e.to_string())?;
    if parent.join(input).exists() {
        return Err("Directory already exists".to_string());
    }
    Ok(())
}

fn collect_config<C: ProductConfig>(
    product: &C,
    parent: &Path,
    cancel: &Cancellation,
) -> Result<Collected> {
    loop {
        // Step 1: Project name
        let validate_parent = parent.to_path_buf();
        let Some(raw_name) = answer(
            cliclack::input("What is your project name?")
                .placeholder(product.default_project_name())
                .validate(move |input: &String| validate_name(input, &validate_parent))
                .interact::<String>(),
            cancel,
        )?
        else {
            return Ok(Collected::Cancelled);
        };
        let name = ProjectName::parse(&raw_name)?;

        // Step 2: Foundations
        let Some(foundations) = select_foundations(cancel)? else {
            return Ok(Collected::Cancelled);
        };
        if foundations.is_empty() {
            let Some(proceed) = answer(
                cliclack::confirm(
                    "No New UI foundations selected. Are you sure you want to continue?",
                )
                .initial_value(false)
                .interact(),
                cancel,
            )?
            else {
                return Ok(Collected::Cancelled);
            };
            if !proceed {
                cliclack::log::info("Starting over")?;
                continue;
            }
        }

        // Step 3: Framework
        let Some(framework) = select_framework(cancel)? else {
            return Ok(Collected::Cancelled);
        };

        // Step 4: Bundler
        let Some(bundler) = select_bundler(framework, cancel)? else {
            return Ok(Collected::Cancelled);
        };

        // Step 5: SCSS entry point (Vite only)
        let scss = if bundler == Some(Bundler::Vite) {
            let Some(scss) = answer(
                cliclack::confirm("Generate an SCSS entry point for the selected foundations?")
                    .initial_value(false)
                    .interact(),
                cancel,
            )?
            else {
                return Ok(Collected::Cancelled);
            };
            scss
        } else {
            false
        };

        let config = ProjectConfig::new(name, foundations, framework, bundler)?
            .with_scss(scss)?
            .with_package_manager(product.package_manager());

        // Step 6: Summary and confirmation
        cliclack::note("Project summary", summary(&config))?;
        let Some(confirmed) = answer(
            cliclack::confirm("Create project with these settings?")
                .initial_value(true)
                .interact(),
            cancel,
        )?
        else {
            return Ok(Collected::Cancelled);
        };

        return Ok(if confirmed {
            Collected::Confirmed(config)
        } else {
            Collected::Declined
        });
    }
}

/// Foundations in the order the user picked them
#[derive(Debug, Default)]
struct FoundationPicks {
    picked: Vec<Foundation>,
}

impl FoundationPicks {
    /// Not yet picked, in offer order
    fn remaining(&self) -> Vec<Foundation> {
        Foundation::ALL
            .into_iter()
            .filter(|f| !self.picked.contains(f))
            .collect()
    }

    fn pick(&mut self, foundation: Foundation) {
        if !self.picked.contains(&foundation) {
            self.picked.push(foundation);
        }
    }

    fn hint(&self) -> String {
        if self.picked.is_empty() {
            return "no foundations".to_string();
        }
        self.picked
            .iter()
            .map(|f| f.id())
            .collect::<Vec<_>>()
            .join(" → ")
    }

    fn into_order(self) -> Vec<Foundation> {
        self.picked
    }
}

/// One pick per prompt so the load order is the order of the answers
fn select_foundations(cancel: &Cancellation) -> Result<Option<Vec<Foundation>>> {
    let mut picks = FoundationPicks::default();
    loop {
        let remaining = picks.remaining();
        if remaining.is_empty() {
            break;
        }

        let prompt = if picks.picked.is_empty() {
            "Select a New UI foundation to include (they load in the order you pick them):"
        } else {
            "Add another foundation, or finish:"
        };
        let mut select = cliclack::select(prompt);
        for foundation in remaining {
            select = select.item(Some(foundation), foundation.package_name(), "");
        }
        select = select.item(None, "Done", picks.hint());

        let Some(choice) = answer(select.interact(), cancel)? else {
            return Ok(None);
        };
        match choice {
            Some(foundation) => picks.pick(foundation),
            None => break,
        }
    }
    Ok(Some(picks.into_order()))
}

fn select_framework(cancel: &Cancellation) -> Result<Option<Option<Framework>>> {
    let Some(include) = answer(
        cliclack::confirm("Do you want to include a frontend framework?").interact(),
        cancel,
    )?
    else {
        return Ok(None);
    };
    if !include {
        return Ok(Some(None));
    }

    let mut select = cliclack::select("Select a frontend framework:");
    for framework in Framework::ALL {
        select = select.item(Some(framework), framework.display_name(), "");
    }
    select = select.item(None, "None", "");
    answer(select.interact(), cancel)
}

fn select_bundler(
    framework: Option<Framework>,
    cancel: &Cancellation,
) -> Result<Option<Option<Bundler>>> {
    let Some(include) = answer(
        cliclack::confirm("Do you want to include a bundler?").interact(),
        cancel,
    )?
    else {
        return Ok(None);
    };
    if !include {
        return Ok(Some(None));
    }

    let available = Bundler::available_for(framework);
    if !available.contains(&Bundler::Rspack) {
        if let Some(framework) = framework {
            cliclack::log::warning(format!(
                "Rspack is not fully compatible with {}. Only Vite is offered.",
                framework
            ))?;
        }
    }

    let mut select = cliclack::select("Select a bundler:");
    for bundler in available {
        select = select.item(Some(*bundler), bundler.display_name(), "");
    }
    select = select.item(None, "None", "");
    answer(select.interact(), cancel)
}

fn summary(config: &ProjectConfig) -> String {
    let foundations = if config.foundations().is_empty() {
        "None".to_string()
    } else {
        config
            .foundations()
            .iter()
            .map(|f| f.id())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut lines = vec![
        format!("Name: {}", config.name()),
        format!("New UI foundations: {}", foundations),
        format!(
            "Framework: {}",
            config.framework().map(|f| f.display_name()).unwrap_or("None")
        ),
        format!(
            "Bundler: {}",
            config.bundler().map(|b| b.display_name()).unwrap_or("None")
        ),
    ];
    if config.scss() {
        lines.push("Styles: SCSS entry point".to_string());
    }
    lines.push(format!("Package manager: {}", config.package_manager()));
    lines.join("\n")
}

async fn create_project(
    config: &ProjectConfig,
    parent: &Path,
    skip_install: bool,
) -> Result<(PathBuf, bool)> {
    let spinner = cliclack::spinner();
    spinner.start("Creating your project");

    let root = match templates::create_project_dir(parent, config.name()).await {
        Ok(root) => root,
        Err(e) => {
            spinner.stop("Could not create the project directory");
            return Err(e.into());
        }
    };

    for artifact in Artifact::ORDER {
        spinner.set_message(format!("Generating {}...", artifact.label()));
        if let Err(e) = templates::write_rendered(&root, &artifact.render(config)).await {
            spinner.stop(format!("Failed to generate {}", artifact.label()));
            return Err(e.into());
        }
    }
    spinner.stop("Project structure created");

    let installed = if skip_install {
        cliclack::log::info("Skipping dependency installation")?;
        false
    } else {
        install(config.package_manager(), &root).await?
    };

    Ok((root, installed))
}

/// Best-effort install; failures become warnings
async fn install(pm: PackageManager, root: &Path) -> Result<bool> {
    let info = check::check_package_manager(pm).await;
    if !info.available {
        cliclack::log::warning(InstallError::NotFound(pm).to_string())?;
        return Ok(false);
    }
    tracing::debug!(pm = info.name, version = ?info.version, "package manager detected");

    let spinner = cliclack::spinner();
    spinner.start("Installing dependencies (this may take a moment)");

    match install_dependencies(pm, root).await {
        Ok(()) => {
            spinner.stop("Dependencies installed successfully");
            Ok(true)
        }
        Err(e) => {
            spinner.stop("Project created but dependencies could not be installed automatically");
            cliclack::log::warning(e.to_string())?;
            Ok(false)
        }
    }
}

fn print_next_steps<C: ProductConfig>(
    product: &C,
    project_dir: &Path,
    pm: PackageManager,
    installed: bool,
) -> Result<()> {
    let steps = product.next_steps(project_dir, pm, installed);

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }

    cliclack::outro("Your New UI project is ready!".green().to_string())?;

    Ok(())
}
