//! Running tally across matches.

use super::types::{GameStatus, Seat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win and draw counters.
///
/// `total_games` always equals the sum of the other three counters.
/// Independent of [`Game`](super::Game): resetting a match leaves the tally
/// alone, and [`Statistics::reset`] leaves the match alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Statistics {
    /// Wins for the first seat.
    #[getter(copy)]
    first_wins: u32,
    /// Wins for the second seat.
    #[getter(copy)]
    second_wins: u32,
    /// Drawn matches.
    #[getter(copy)]
    draws: u32,
    /// All completed matches.
    #[getter(copy)]
    total_games: u32,
}

impl Statistics {
    /// Creates a zeroed tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts a win for `seat`.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, seat: Seat) {
        match seat {
            Seat::First => self.first_wins += 1,
            Seat::Second => self.second_wins += 1,
        }
        self.total_games += 1;
        debug!(total_games = self.total_games, "Win recorded");
    }

    /// Counts a draw.
    #[instrument(skip(self))]
    pub fn record_draw(&mut self) {
        self.draws += 1;
        self.total_games += 1;
        debug!(total_games = self.total_games, "Draw recorded");
    }

    /// Counts a finished match. `InProgress` is not a result and is ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(seat) => self.record_win(seat),
            GameStatus::Draw => self.record_draw(),
            GameStatus::InProgress => {}
        }
    }

    /// Wins for `seat`.
    pub fn wins(&self, seat: Seat) -> u32 {
        match seat {
            Seat::First => self.first_wins,
            Seat::Second => self.second_wins,
        }
    }

    /// Zeroes every counter.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
        debug!("Statistics reset");
    }

    /// Copy of the current counters.
    pub fn snapshot(&self) -> Statistics {
        *self
    }
}
