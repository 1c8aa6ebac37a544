//! create-new-ui - Interactive scaffolding for New UI frontend projects

mod logging;

use clap::Parser;
use colored::Colorize;
use new_ui_core::tui::{CreateArgs, Outcome};
use new_ui_core::{Cancellation, PackageManager, ProductConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// New UI product configuration
#[derive(Clone)]
pub struct NewUiConfig;

impl ProductConfig for NewUiConfig {
    fn name(&self) -> &'static str {
        "create-new-ui"
    }

    fn display_name(&self) -> &'static str {
        "Create New UI App - Setup Wizard"
    }

    fn default_project_name(&self) -> &'static str {
        "my-new-ui-app"
    }

    fn package_manager_env(&self) -> &'static str {
        "NEW_UI_PACKAGE_MANAGER"
    }

    fn next_steps(&self, dir: &Path, pm: PackageManager, installed: bool) -> Vec<String> {
        let mut steps = Vec::new();
        let current = std::env::current_dir().ok();

        // Step 1: cd to the project unless we are already there
        let target = match (&current, dir.parent()) {
            (Some(cwd), Some(parent)) if cwd == parent => dir
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| dir.to_path_buf()),
            _ => dir.to_path_buf(),
        };
        if current.as_deref() != Some(dir) {
            steps.push(format!("cd {}", target.display()));
        }

        // Step 2: install if the automatic install did not happen
        if !installed {
            steps.push(pm.install_command());
        }

        // Step 3: start the dev server
        steps.push(pm.run_command("dev"));

        steps
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-new-ui")]
#[command(about = "Create a New UI app")]
#[command(version)]
pub struct Args {
    /// Directory to create the project in (defaults to the current directory)
    #[arg(long = "cwd", value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Skip installing dependencies after the project is generated
    #[arg(long = "skip-install")]
    pub skip_install: bool,

    /// Print debug diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl From<&Args> for CreateArgs {
    fn from(args: &Args) -> Self {
        CreateArgs {
            parent_dir: args.cwd.clone(),
            skip_install: args.skip_install,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Ctrl+C outside a prompt: restore the cursor and let the wizard wind down
    let cancel = Cancellation::new();
    {
        let cancel = cancel.clone();
        ctrlc::set_handler(move || {
            let _ = console::Term::stderr().show_cursor();
            cancel.cancel();
        })
        .ok();
    }

    let args = Args::parse();
    if let Err(e) = logging::initialize_logging(args.verbose) {
        eprintln!("{} {:#}", "Warning:".yellow(), e);
    }

    let config = NewUiConfig;
    let result = new_ui_core::run(&config, CreateArgs::from(&args), &cancel).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(outcome) => {
            tracing::debug!(?outcome, "{} finished", config.name());
            if let Outcome::Created { dir, .. } = outcome {
                tracing::debug!(dir = %dir.display(), "project created");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
