//! Logging initialization
//!
//! Diagnostics go to stderr through `tracing`. Prompts and progress are drawn
//! by cliclack, so the default level stays at WARN to keep the wizard clean.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install the global subscriber; `verbose` enables debug output
pub fn initialize_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
