//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so adapters and tests can evaluate any board directly.

pub mod win;

pub use win::{WinningLine, find_winning_line};
