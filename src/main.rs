//! Strictly Timeline - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_timeline::{HistoryOrder, TimelineConfig, render_text, replay, run_tui};
use tracing::{info, instrument};
use std::path::PathBuf;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, descending } => run_play(config, descending),
        Command::Replay {
            cells,
            config,
            jump,
            descending,
        } => run_replay(cells, config, jump, descending),
    }
}

/// Loads the config and applies the `--descending` override.
fn load_config(path: Option<PathBuf>, descending: bool) -> Result<TimelineConfig> {
    let config = TimelineConfig::load(path.as_deref()).context("Failed to load config")?;
    Ok(if descending {
        config.with_history_order(HistoryOrder::Descending)
    } else {
        config
    })
}

/// Run the interactive terminal game
#[instrument]
fn run_play(config: Option<PathBuf>, descending: bool) -> Result<()> {
    let config = load_config(config, descending)?;
    run_tui(&config)
}

/// Play the given cells and print the result
#[instrument]
fn run_replay(
    cells: Vec<usize>,
    config: Option<PathBuf>,
    jump: Option<usize>,
    descending: bool,
) -> Result<()> {
    let config = load_config(config, descending)?;
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .init();

    info!(moves = cells.len(), ?jump, "Replaying moves");
    let timeline = replay(&cells, jump, config.history_order());
    print!("{}", render_text(&timeline.view()));
    Ok(())
}
