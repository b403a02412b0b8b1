//! Keyboard handling for the terminal UI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use strictly_tictactoe::Position;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor.
    Cursor(Position),
    /// Select the cell under the cursor.
    SelectCursor,
    /// Select a cell directly.
    Select(Position),
    /// Start a new round.
    NewRound,
    /// Reset the score (and the round).
    ResetScore,
    /// Leave the app.
    Quit,
}

/// Maps a key event to an action, given the current cursor.
pub fn action_for(key: KeyEvent, cursor: Position) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::Cursor(move_cursor(cursor, key.code)))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Position::from_index(index).map(Action::Select)
        }
        KeyCode::Char('n') => Some(Action::NewRound),
        KeyCode::Char('r') => Some(Action::ResetScore),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_moves_and_clamps() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
    }

    #[test]
    fn test_digit_keys_select_cells() {
        assert_eq!(
            action_for(press(KeyCode::Char('1')), Position::Center),
            Some(Action::Select(Position::TopLeft))
        );
        assert_eq!(
            action_for(press(KeyCode::Char('9')), Position::Center),
            Some(Action::Select(Position::BottomRight))
        );
        assert_eq!(action_for(press(KeyCode::Char('0')), Position::Center), None);
    }

    #[test]
    fn test_command_keys() {
        assert_eq!(action_for(press(KeyCode::Enter), Position::Center), Some(Action::SelectCursor));
        assert_eq!(action_for(press(KeyCode::Char('n')), Position::Center), Some(Action::NewRound));
        assert_eq!(action_for(press(KeyCode::Char('r')), Position::Center), Some(Action::ResetScore));
        assert_eq!(action_for(press(KeyCode::Esc), Position::Center), Some(Action::Quit));
    }
}
