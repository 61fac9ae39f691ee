//! Mastermind - CLI
//!
//! Plays a single game of Mastermind on the terminal.

use anyhow::{Context, Result};
use mastermind::{cli::Cli, commands::run_play};
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse_lenient();
    let color = !cli.no_color && io::stdout().is_terminal();
    let settings = cli
        .into_settings()
        .context("Invalid secret code given with -c")?;

    run_play(settings, color).context("Terminal I/O failed")?;
    Ok(())
}

/// Log to stderr so the game transcript on stdout stays clean
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}
