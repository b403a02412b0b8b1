//! Pure tic-tac-toe logic with session scoring.
//!
//! # Architecture
//!
//! - [`GameEngine`]: board, turn and round status for the current round
//! - [`SessionScorer`]: X-wins / O-wins / draws across rounds
//! - [`Notification`] / [`Observer`]: the state-change contract presentation
//!   layers consume
//! - [`Session`]: one engine and one scorer driven by user input
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{Notification, Player, Session};
//!
//! let mut session = Session::new();
//! for cell in [0, 4, 1, 3] {
//!     session.select_cell(cell);
//! }
//! let notifications = session.select_cell(2);
//! assert_eq!(
//!     notifications[1],
//!     Notification::RoundWon {
//!         player: Player::X,
//!         line: strictly_tictactoe::WinningLine::TopRow,
//!         cells: [0, 1, 2],
//!     }
//! );
//! assert_eq!(session.scorer().tally().x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod events;
mod invariants;
mod position;
pub mod rules;
mod scorer;
mod session;
mod types;

pub use engine::{GameEngine, MoveRejection};
pub use events::{Notification, Observer};
pub use invariants::{BoardConsistent, HistoryComplete, Invariant};
pub use position::Position;
pub use rules::WinningLine;
pub use scorer::{ScoreTally, SessionScorer};
pub use session::Session;
pub use types::{Board, Move, Outcome, Player, RoundStatus, Square};
