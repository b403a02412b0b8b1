//! A play session: one engine, one scorer, and the observers watching them.

use crate::events::{Notification, Observer};
use crate::{GameEngine, SessionScorer};
use tracing::{debug, info, instrument};

/// Wires user input to the engine and scorer and fans out notifications.
///
/// Every input returns the notifications it caused, in order, after they have
/// been delivered to each subscribed observer.
pub struct Session {
    engine: GameEngine,
    scorer: SessionScorer,
    observers: Vec<Box<dyn Observer>>,
}

impl Session {
    /// Creates a session with a round in progress and a zero tally.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new session");
        Self {
            engine: GameEngine::new(),
            scorer: SessionScorer::new(),
            observers: Vec::new(),
        }
    }

    /// Adds an observer; it hears every notification from now on.
    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.observers.push(observer);
        debug!(observers = self.observers.len(), "Observer subscribed");
    }

    /// A cell was selected.
    ///
    /// When the move ends the round the outcome is scored straight away, so
    /// the result is followed by `ScoreChanged`.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> Vec<Notification> {
        let mut notifications = self.engine.apply_move(index);
        if notifications.iter().any(Notification::ends_round)
            && let Some(outcome) = self.engine.status().outcome()
        {
            info!(%outcome, "Round finished");
            notifications.push(self.scorer.record_outcome(outcome));
        }
        self.publish(notifications)
    }

    /// A new round was requested. An unfinished round is dropped unscored.
    #[instrument(skip(self))]
    pub fn request_new_round(&mut self) -> Vec<Notification> {
        let notification = self.engine.start_round();
        self.publish(vec![notification])
    }

    /// A score reset was requested; this also starts a new round.
    #[instrument(skip(self))]
    pub fn request_score_reset(&mut self) -> Vec<Notification> {
        let notifications = vec![self.scorer.reset_tally(), self.engine.start_round()];
        self.publish(notifications)
    }

    /// Returns the round engine.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Returns the session scorer.
    pub fn scorer(&self) -> &SessionScorer {
        &self.scorer
    }

    fn publish(&mut self, notifications: Vec<Notification>) -> Vec<Notification> {
        for notification in &notifications {
            for observer in &mut self.observers {
                observer.notify(notification);
            }
        }
        notifications
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("engine", &self.engine)
            .field("scorer", &self.scorer)
            .field("observers", &self.observers.len())
            .finish()
    }
}
