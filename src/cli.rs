//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Games - two-player tic-tac-toe with a session scoreboard
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Two-player tic-tac-toe with session scoring", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./strictly_games.toml if present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Play a list of commands headlessly and print the notifications
    Script {
        /// Cells (0-8 or labels like `center`), `new` and `reset`,
        /// separated by commas or spaces
        #[arg(required = true, num_args = 1..)]
        commands: Vec<String>,

        /// Print one JSON object per notification
        #[arg(long)]
        json: bool,
    },
}
