//! Headless play: run a list of commands and print the notifications.

use derive_more::{Display, Error};
use std::io::Write;
use strictly_tictactoe::{Notification, Observer, Position, Session};
use tracing::{instrument, warn};

/// One scripted user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Select a cell by raw index. Out-of-range indices are passed through
    /// so the engine can ignore them like any other invalid click; negative
    /// or oversized numbers become `usize::MAX`.
    Select(usize),
    /// Start a new round.
    NewRound,
    /// Reset the tally and start a new round.
    ResetScore,
}

/// Parses commands separated by commas or whitespace.
///
/// Accepts cell numbers, position labels (`center`, `top-left`), `new` and
/// `reset`.
#[instrument]
pub fn parse_commands(input: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_command)
        .collect()
}

fn parse_command(token: &str) -> Result<ScriptCommand, ScriptError> {
    match token.to_ascii_lowercase().as_str() {
        "new" | "n" => return Ok(ScriptCommand::NewRound),
        "reset" | "r" => return Ok(ScriptCommand::ResetScore),
        _ => {}
    }
    if let Ok(index) = token.parse::<usize>() {
        return Ok(ScriptCommand::Select(index));
    }
    let digits = token.strip_prefix('-').unwrap_or(token);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(ScriptCommand::Select(usize::MAX));
    }
    Position::from_label_or_number(token)
        .map(|pos| ScriptCommand::Select(pos.to_index()))
        .ok_or_else(|| ScriptError::new(format!("Unrecognised command: {:?}", token)))
}

/// Transcript output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TranscriptFormat {
    /// Banner text, one line per notification.
    #[default]
    Text,
    /// One JSON object per notification.
    Json,
}

/// Observer writing each notification as one line.
pub struct TranscriptWriter<W: Write> {
    out: W,
    format: TranscriptFormat,
}

impl<W: Write> TranscriptWriter<W> {
    /// Creates a writer over `out`.
    pub fn new(out: W, format: TranscriptFormat) -> Self {
        Self { out, format }
    }

    fn write_line(&mut self, notification: &Notification) -> std::io::Result<()> {
        match self.format {
            TranscriptFormat::Text => writeln!(self.out, "{}", notification),
            TranscriptFormat::Json => {
                serde_json::to_writer(&mut self.out, notification)?;
                writeln!(self.out)
            }
        }
    }
}

impl<W: Write> Observer for TranscriptWriter<W> {
    fn notify(&mut self, notification: &Notification) {
        if let Err(e) = self.write_line(notification) {
            warn!(error = %e, "Failed to write transcript line");
        }
    }
}

/// Plays the commands against a session.
#[instrument(skip(session))]
pub fn run(session: &mut Session, commands: &[ScriptCommand]) {
    for command in commands {
        match *command {
            ScriptCommand::Select(index) => session.select_cell(index),
            ScriptCommand::NewRound => session.request_new_round(),
            ScriptCommand::ResetScore => session.request_score_reset(),
        };
    }
}

/// Script error.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
