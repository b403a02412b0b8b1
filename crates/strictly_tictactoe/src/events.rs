//! State-change notifications and the observer contract.
//!
//! Every state change in the engine or the scorer is reported as a
//! [`Notification`]. Presentation layers render from these alone and never
//! need to poll or diff state.

use crate::{Player, WinningLine};
use serde::{Deserialize, Serialize};
use std::sync::mpsc::Sender;
use tracing::warn;

/// A state change reported to presentation adapters.
///
/// The `Display` text is the status banner a UI shows for the change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Notification {
    /// Board cleared; X moves first.
    #[display("Player X's Turn")]
    RoundReset,
    /// One cell went from empty to a mark.
    #[display("Player {} marked cell {}", player, index)]
    CellMarked {
        /// Board index (0-8).
        index: usize,
        /// Mark placed in the cell.
        player: Player,
    },
    /// The other player is now to move.
    #[display("Player {}'s Turn", player)]
    TurnChanged {
        /// Player to move next.
        player: Player,
    },
    /// The last move completed a line.
    #[display("Player {} Wins!", player)]
    RoundWon {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: WinningLine,
        /// Indices of the three winning cells.
        cells: [usize; 3],
    },
    /// The board filled with no line completed.
    #[display("Game Ended in a Draw!")]
    RoundDrawn,
    /// The session tally changed.
    #[display("X: {}  O: {}  Draws: {}", x_wins, o_wins, draws)]
    ScoreChanged {
        /// Rounds won by X.
        x_wins: u32,
        /// Rounds won by O.
        o_wins: u32,
        /// Drawn rounds.
        draws: u32,
    },
}

impl Notification {
    /// Builds the win notification for a line, filling in its cells.
    pub fn round_won(player: Player, line: WinningLine) -> Self {
        Notification::RoundWon {
            player,
            line,
            cells: line.indices(),
        }
    }

    /// Returns true for the notifications that end a round.
    pub fn ends_round(&self) -> bool {
        matches!(
            self,
            Notification::RoundWon { .. } | Notification::RoundDrawn
        )
    }
}

/// Receives notifications from a session.
///
/// Observers are called synchronously, in subscription order, after the
/// state change has been applied.
pub trait Observer {
    /// Handles one notification.
    fn notify(&mut self, notification: &Notification);
}

impl Observer for Sender<Notification> {
    fn notify(&mut self, notification: &Notification) {
        if self.send(notification.clone()).is_err() {
            warn!(%notification, "Notification receiver dropped");
        }
    }
}
