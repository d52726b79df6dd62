//! Command-line interface for strictly_timeline.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Timeline - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_timeline")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Show the newest move first in the move list
        #[arg(long)]
        descending: bool,
    },

    /// Play a sequence of cells and print the resulting game
    Replay {
        /// Cells to play, 0-8 in row-major order. Illegal cells are ignored.
        cells: Vec<usize>,

        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Jump to this history step after playing
        #[arg(long)]
        jump: Option<usize>,

        /// Show the newest move first in the move list
        #[arg(long)]
        descending: bool,
    },
}
