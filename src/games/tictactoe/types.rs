//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Identity of one of the two fixed players.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, Display,
)]
pub enum Seat {
    /// The player who moves first.
    #[display("first")]
    First,
    /// The player who moves second.
    #[display("second")]
    Second,
}

impl Seat {
    /// Returns the other seat.
    pub fn opponent(self) -> Self {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }
}

/// Symbol a player leaves on the board.
///
/// Markers are opaque: any non-empty text (emoji included) will do.
/// Nothing in the rules or the statistics compares marker text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(transparent)]
pub struct Marker(String);

impl Marker {
    /// Wraps a symbol as a marker.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Returns the marker text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A named player with a marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct Player {
    /// Display name.
    name: String,
    /// Board symbol.
    marker: Marker,
}

/// The two fixed players of a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    first: Player,
    second: Player,
}

impl Roster {
    /// Creates a roster from the first and second player.
    #[instrument(skip_all, fields(first = %first.name(), second = %second.name()))]
    pub fn new(first: Player, second: Player) -> Self {
        Self { first, second }
    }

    /// Returns the player sitting in `seat`.
    pub fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::First => &self.first,
            Seat::Second => &self.second,
        }
    }

    /// Returns the seat whose player uses `marker`, if any.
    pub fn seat_of(&self, marker: &Marker) -> Option<Seat> {
        if self.first.marker() == marker {
            Some(Seat::First)
        } else if self.second.marker() == marker {
            Some(Seat::Second)
        } else {
            None
        }
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new(
            Player::new("Player 1".to_string(), Marker::new("🐱")),
            Player::new("Player 2".to_string(), Marker::new("🐶")),
        )
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a seat's marker.
    Occupied(Seat),
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Clears every square.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board using the roster's markers.
    ///
    /// Empty squares show their 1-based key so the output doubles as a
    /// keypad legend.
    pub fn display(&self, roster: &Roster) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(seat) => roster.player(seat).marker().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Moves are still accepted.
    InProgress,
    /// A seat completed a line.
    Won(Seat),
    /// The board filled up with no line.
    Draw,
}

impl GameStatus {
    /// Returns true once the match has ended.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winning seat, if any.
    pub fn winner(self) -> Option<Seat> {
        match self {
            GameStatus::Won(seat) => Some(seat),
            _ => None,
        }
    }
}
