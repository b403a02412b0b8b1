//! Board invariants checked after every applied move.
//!
//! Checks run in debug builds only; release builds skip them entirely.

use crate::{Board, GameEngine, Player};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// X opens every round, so X has as many marks as O or exactly one more.
pub struct BoardConsistent;

impl Invariant<Board> for BoardConsistent {
    #[instrument(skip(board))]
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "X has as many marks as O or one more"
    }
}

/// Every occupied square is accounted for by exactly one move.
pub struct HistoryComplete;

impl Invariant<GameEngine> for HistoryComplete {
    #[instrument(skip(engine))]
    fn holds(engine: &GameEngine) -> bool {
        let filled = engine.board().occupied();
        let history_len = engine.history().len();

        let valid = filled == history_len
            && engine
                .history()
                .iter()
                .all(|m| engine.board().get(m.position).player() == Some(m.player));
        if !valid {
            warn!(filled, history_len, "History completeness violated");
        }
        valid
    }

    fn description() -> &'static str {
        "history matches the occupied squares"
    }
}

/// Asserts that all engine invariants hold (debug builds only).
pub fn assert_invariants(engine: &GameEngine) {
    debug_assert!(
        BoardConsistent::holds(engine.board()),
        "{}",
        BoardConsistent::description()
    );
    debug_assert!(
        HistoryComplete::holds(engine),
        "{}",
        HistoryComplete::description()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    #[test]
    fn test_invariants_hold_through_a_round() {
        let mut engine = GameEngine::new();
        for index in [4, 0, 8, 2, 1, 7, 6, 3, 5] {
            engine.apply_move(index);
            assert!(BoardConsistent::holds(engine.board()));
            assert!(HistoryComplete::holds(&engine));
        }
    }

    #[test]
    fn test_board_consistency_detects_extra_o() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::O));
        assert!(!BoardConsistent::holds(&board));
    }
}
