//! Terminal UI state.

use super::input::Action;
use strictly_tictactoe::{Notification, Position, Session};
use tracing::{debug, instrument};

/// View state built from session notifications.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    banner: String,
    winning_cells: Option<[usize; 3]>,
    score: String,
    quit: bool,
}

impl App {
    /// Creates the app over a fresh session.
    pub fn new() -> Self {
        let session = Session::new();
        let score = session.scorer().tally().to_string();
        Self {
            session,
            cursor: Position::Center,
            banner: Notification::RoundReset.to_string(),
            winning_cells: None,
            score,
            quit: false,
        }
    }

    /// Applies one user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, action: Action) {
        let notifications = match action {
            Action::Cursor(pos) => {
                self.cursor = pos;
                return;
            }
            Action::Quit => {
                self.quit = true;
                return;
            }
            Action::SelectCursor => self.session.select_cell(self.cursor.to_index()),
            Action::Select(pos) => {
                self.cursor = pos;
                self.session.select_cell(pos.to_index())
            }
            Action::NewRound => self.session.request_new_round(),
            Action::ResetScore => self.session.request_score_reset(),
        };
        for notification in &notifications {
            self.absorb(notification);
        }
    }

    /// Updates the view from one notification.
    fn absorb(&mut self, notification: &Notification) {
        debug!(%notification, "Updating view");
        match notification {
            Notification::RoundReset => {
                self.winning_cells = None;
                self.banner = notification.to_string();
            }
            Notification::CellMarked { .. } => {}
            Notification::TurnChanged { .. } | Notification::RoundDrawn => {
                self.banner = notification.to_string();
            }
            Notification::RoundWon { cells, .. } => {
                self.winning_cells = Some(*cells);
                self.banner = notification.to_string();
            }
            Notification::ScoreChanged { .. } => {
                self.score = notification.to_string();
            }
        }
    }

    /// Returns the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the status banner.
    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Returns true if the position is part of the winning line.
    pub fn is_winning(&self, pos: Position) -> bool {
        self.winning_cells
            .is_some_and(|cells| cells.contains(&pos.to_index()))
    }

    /// Returns the score line.
    pub fn score(&self) -> &str {
        &self.score
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
