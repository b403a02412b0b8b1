//! Terminal UI for local two-player games.

mod app;
mod input;
mod ui;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use ratatui::DefaultTerminal;
use tracing::{error, info, instrument};

use crate::config::Config;
pub use app::App;
pub use input::{Action, action_for, move_cursor};

/// Runs the terminal UI until the user quits.
///
/// Logging must already point away from the terminal.
#[instrument(skip_all)]
pub fn run(config: &Config) -> Result<()> {
    info!("Starting terminal UI");

    let mut terminal = ratatui::init();
    let result = run_app(&mut terminal, config);
    ratatui::restore();

    if let Err(err) = &result {
        error!(error = ?err, "Terminal UI loop failed");
    }
    info!("Terminal UI closed");
    result
}

fn run_app(terminal: &mut DefaultTerminal, config: &Config) -> Result<()> {
    let mut app = App::new();

    while !app.should_quit() {
        terminal
            .draw(|frame| ui::draw(frame, &app, config.display()))
            .context("Failed to draw frame")?;

        if let Event::Key(key) = event::read().context("Failed to read terminal event")?
            && let Some(action) = action_for(key, app.cursor())
        {
            app.handle(action);
        }
    }

    Ok(())
}
