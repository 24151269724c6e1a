use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use md_cli::commands::{self, Mode, Options};
use md_cli::{Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so reports on stdout stay clean
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let mut config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(secs) = cli.tolerance {
        config.tolerance_secs = secs;
    }
    tracing::debug!(?config, "loaded configuration");

    let options = Options {
        tolerance: config.tolerance().context("invalid tolerance")?,
        name_width: config.name_width,
        json: cli.json,
    };
    if !config.color {
        colored::control::set_override(false);
    }

    let mode = Mode::resolve(&cli.paths, cli.raw)?;
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();
    commands::run(&mut writer, &mode, options)?;
    writer.flush()?;
    Ok(())
}
