//! What happened when a move was offered to the engine.
//!
//! Invalid moves are not errors: the engine declines them and leaves the
//! match untouched. The reason is still reported so adapters and logs can
//! tell a rejected click from an accepted one.

use super::{GameStatus, Position, Seat};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Why a move was declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum IgnoreReason {
    /// The match has already ended.
    #[display("game is already over")]
    GameOver,
    /// The index does not name a square.
    #[display("index {_0} is off the board")]
    OutOfRange(usize),
    /// The square already holds a marker.
    #[display("{_0} is already occupied")]
    Occupied(Position),
}

/// Result of offering a move to [`Game::apply_move`](super::Game::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// The mark was placed and the turn passed to `next`.
    Continued {
        /// Seat now on move.
        next: Seat,
    },
    /// The mark was placed and ended the match.
    ///
    /// Reported exactly once per match, on the move that ends it.
    Finished(GameStatus),
}

impl MoveOutcome {
    /// Returns true if the move changed the board.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, MoveOutcome::Ignored(_))
    }
}
