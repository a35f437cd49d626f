//! Strictly Checkers - two-player console checkers.

use anyhow::Result;
use clap::Parser;
use strictly_checkers_console::{Cli, Config, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load(&cli)?;
    info!(?config, "Starting Strictly Checkers");

    let stdin = std::io::stdin().lock();
    let stdout = std::io::stdout().lock();
    run(&config, stdin, stdout)?;

    Ok(())
}
