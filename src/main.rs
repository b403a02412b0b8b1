//! Strictly Games - Unified CLI
//!
//! Two-player tic-tac-toe with a session scoreboard.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use strictly_games::{
    Cli, Command, Config, Session, TranscriptFormat, TranscriptWriter, parse_commands, run_script,
    tui,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Command::Play => run_play(&config),
        Command::Script { commands, json } => run_headless(&config, &commands.join(" "), json),
    }
}

fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log().filter()))
}

/// Run the interactive terminal UI
fn run_play(config: &Config) -> Result<()> {
    // Log to file to avoid interfering with the TUI
    let log_path = config.log().file();
    let log_file = std::fs::File::create(log_path)
        .with_context(|| format!("Failed to create log file {}", log_path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    tui::run(config)
}

/// Run a command list and print the transcript to stdout
fn run_headless(config: &Config, input: &str, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(std::io::stderr)
        .init();

    let commands = parse_commands(input)?;
    info!(count = commands.len(), "Running script");

    let format = if json {
        TranscriptFormat::Json
    } else {
        TranscriptFormat::Text
    };
    let mut session = Session::new();
    session.subscribe(Box::new(TranscriptWriter::new(std::io::stdout(), format)));
    run_script(&mut session, &commands);

    if format == TranscriptFormat::Text {
        println!();
        println!("{}", session.engine().board().display());
        println!();
        println!("{}", session.scorer().tally());
    }

    Ok(())
}
