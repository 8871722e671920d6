mod action;
mod game;
mod position;
pub mod rules;
mod stats;
mod types;

pub use action::{IgnoreReason, MoveOutcome};
pub use game::Game;
pub use position::Position;
pub use stats::Statistics;
pub use types::{Board, GameStatus, Marker, Player, Roster, Seat, Square};
