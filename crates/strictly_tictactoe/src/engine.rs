//! Round engine for tic-tac-toe.
//!
//! [`GameEngine`] owns the board, the player to move and the round status.
//! Invalid input is ignored rather than reported as an error: the engine only
//! hears from a constrained UI, so a rejected move simply changes nothing.

use crate::events::Notification;
use crate::invariants::assert_invariants;
use crate::rules::find_winning_line;
use crate::{Board, Move, Player, Position, RoundStatus, Square};
use tracing::{debug, info, instrument};

/// Why a move would be ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The index is not a board cell.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfRange(usize),
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),
    /// The round is already won or drawn.
    #[display("Round is already over")]
    RoundOver,
}

/// Tic-tac-toe round engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    to_move: Player,
    status: RoundStatus,
    history: Vec<Move>,
}

impl GameEngine {
    /// Creates an engine with a fresh round in progress.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: RoundStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Starts a new round from any state.
    #[instrument(skip(self), fields(previous = ?self.status))]
    pub fn start_round(&mut self) -> Notification {
        self.board = Board::new();
        self.to_move = Player::X;
        self.status = RoundStatus::InProgress;
        self.history.clear();
        debug!("Round reset");
        Notification::RoundReset
    }

    /// Checks whether a move at `index` would be accepted.
    pub fn check_move(&self, index: usize) -> Result<Position, MoveRejection> {
        if self.status.is_terminal() {
            return Err(MoveRejection::RoundOver);
        }
        let pos = Position::from_index(index).ok_or(MoveRejection::OutOfRange(index))?;
        if !self.board.is_empty(pos) {
            return Err(MoveRejection::Occupied(pos));
        }
        Ok(pos)
    }

    /// Places the current player's mark at `index`.
    ///
    /// Returns the notifications for the move: `CellMarked` followed by one of
    /// `RoundWon`, `RoundDrawn` or `TurnChanged`. An ignored move returns
    /// nothing and leaves the engine untouched.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> Vec<Notification> {
        let pos = match self.check_move(index) {
            Ok(pos) => pos,
            Err(rejection) => {
                debug!(%rejection, "Move ignored");
                return Vec::new();
            }
        };

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        let mut notifications = vec![Notification::CellMarked { index, player }];

        if let Some((winner, line)) = find_winning_line(&self.board) {
            info!(%winner, %line, "Round won");
            self.status = RoundStatus::Won {
                player: winner,
                line,
            };
            notifications.push(Notification::round_won(winner, line));
        } else if self.board.is_full() {
            info!("Round drawn");
            self.status = RoundStatus::Drawn;
            notifications.push(Notification::RoundDrawn);
        } else {
            self.to_move = player.opponent();
            notifications.push(Notification::TurnChanged {
                player: self.to_move,
            });
        }

        assert_invariants(self);
        notifications
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move (the winner, once a round is won).
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns the round status.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Returns the moves played this round.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the positions still open, empty once the round is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
