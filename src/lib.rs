//! Strictly Games - terminal front ends for strictly_tictactoe
//!
//! # Architecture
//!
//! - **Engine**: round and score logic live in the `strictly_tictactoe` crate
//! - **TUI**: interactive two-player board (ratatui)
//! - **Script**: headless runner printing the notification transcript
//! - **Config**: display glyphs and logging, from an optional TOML file
//!
//! # Example
//!
//! ```
//! use strictly_games::{Session, parse_commands, run_script};
//!
//! let commands = parse_commands("0 4 1 3 2").unwrap();
//! let mut session = Session::new();
//! run_script(&mut session, &commands);
//! assert_eq!(session.scorer().tally().x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod script;
pub mod tui;

// Crate-level exports - CLI
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH, DisplayConfig, LogConfig};

// Crate-level exports - Headless play
pub use script::{
    ScriptCommand, ScriptError, TranscriptFormat, TranscriptWriter, parse_commands,
    run as run_script,
};

// Crate-level exports - Game types
pub use strictly_tictactoe::{
    Board, GameEngine, Notification, Observer, Outcome, Player, Position, RoundStatus,
    ScoreTally, Session, SessionScorer, Square, WinningLine,
};
