//! pge-runner - stages packaged assets, then launches the renderer over them.

#![allow(dead_code)]

mod asset;
mod cli;
mod config;
mod core;
mod deploy;
mod launch;
mod logger;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::RunnerConfig;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = RunnerConfig::load(&cli)?;

    match &cli.command {
        Commands::Deploy { .. } => cli::deploy::deploy_assets(&config),
        Commands::Run { .. } => cli::run::run_launch(&config),
    }
}
