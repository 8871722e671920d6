//! Two-player tic-tac-toe with a running win/draw tally.
//!
//! # Architecture
//!
//! - **Games**: board, rules engine and statistics for tic-tac-toe
//! - **Session**: one match plus its tally, driven by input events
//! - **Adapters**: a terminal UI and a headless script runner
//!
//! # Example
//!
//! ```
//! use tictactoe_tally::{GameStatus, Roster, Seat, Session};
//!
//! let mut session = Session::new(Roster::default());
//! for index in [0, 3, 1, 4, 2] {
//!     session.select(index);
//! }
//! assert_eq!(session.game().status(), GameStatus::Won(Seat::First));
//! assert_eq!(session.stats().total_games(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod events;
mod games;
pub mod logging;
mod script;
mod session;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, PlayerConfig};

// Crate-level exports - Input events
pub use events::{EventParseError, InputEvent, parse_events};

// Crate-level exports - Headless adapter
pub use script::{Snapshot, run as run_script, stats_line};

// Crate-level exports - Session management
pub use session::Session;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, IgnoreReason, Marker, MoveOutcome, Player, Position, Roster, Seat,
    Square, Statistics, rules,
};
