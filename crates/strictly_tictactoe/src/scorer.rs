//! Session score tallying across rounds.

use crate::events::Notification;
use crate::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Win and draw counters for a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreTally {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl ScoreTally {
    /// Rounds won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Rounds won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Drawn rounds.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Rounds completed since the last reset.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn notification(&self) -> Notification {
        Notification::ScoreChanged {
            x_wins: self.x_wins,
            o_wins: self.o_wins,
            draws: self.draws,
        }
    }
}

impl std::fmt::Display for ScoreTally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.notification(), f)
    }
}

/// Keeps the score of a session, independent of any single round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionScorer {
    tally: ScoreTally,
}

impl SessionScorer {
    /// Creates a scorer with every counter at zero.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished round.
    #[instrument(skip(self))]
    pub fn record_outcome(&mut self, outcome: Outcome) -> Notification {
        match outcome {
            Outcome::Won(Player::X) => self.tally.x_wins += 1,
            Outcome::Won(Player::O) => self.tally.o_wins += 1,
            Outcome::Drawn => self.tally.draws += 1,
        }
        info!(tally = %self.tally, "Outcome recorded");
        self.tally.notification()
    }

    /// Zeroes every counter.
    #[instrument(skip(self), fields(previous = %self.tally))]
    pub fn reset_tally(&mut self) -> Notification {
        self.tally = ScoreTally::default();
        info!("Tally reset");
        self.tally.notification()
    }

    /// Returns the current tally.
    pub fn tally(&self) -> ScoreTally {
        self.tally
    }
}
