use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use game_dev_cli::cli::Cli;
use game_dev_cli::commands;
use game_dev_kit::config::EnvConfig;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.project_root {
        Some(root) => EnvConfig::for_root(root),
        None => EnvConfig::from_env().context("failed to read environment config")?,
    };
    game_dev_kit::logging::init(&config);

    let stdout = io::stdout();
    let status = commands::run(cli.command, &config, &mut stdout.lock())?;
    Ok(status.into())
}
