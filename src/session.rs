//! A match plus its running tally, driven by a presentation layer.

use crate::events::InputEvent;
use crate::games::tictactoe::{Game, GameStatus, MoveOutcome, Roster, Statistics};
use tracing::{debug, info, instrument};

/// One game instance and its statistics.
///
/// Presentation layers call [`Session::handle`] (or the individual
/// operations) for each user action, then pull state back out to render.
/// The tally is updated only when the engine reports the move that ended
/// the match, so rendering or querying never counts a result twice.
#[derive(Debug, Clone, Default)]
pub struct Session {
    game: Game,
    stats: Statistics,
}

impl Session {
    /// Creates a session for the given players.
    #[instrument(skip(roster))]
    pub fn new(roster: Roster) -> Self {
        info!("Creating new session");
        Self {
            game: Game::new(roster),
            stats: Statistics::new(),
        }
    }

    /// Forwards a user action.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: InputEvent) -> Option<MoveOutcome> {
        match event {
            InputEvent::Select(index) => Some(self.select(index)),
            InputEvent::Restart => {
                self.restart();
                None
            }
            InputEvent::ResetStatistics => {
                self.reset_statistics();
                None
            }
        }
    }

    /// Offers a move at `index` and records the result if it ended the match.
    #[instrument(skip(self))]
    pub fn select(&mut self, index: usize) -> MoveOutcome {
        let outcome = self.game.apply_move(index);
        if let MoveOutcome::Finished(status) = outcome {
            self.stats.record(status);
            info!(
                ?status,
                total_games = self.stats.total_games(),
                "Result recorded"
            );
        }
        outcome
    }

    /// Starts a new match. Statistics are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.game.reset();
    }

    /// Zeroes the statistics. The match in progress is kept.
    #[instrument(skip(self))]
    pub fn reset_statistics(&mut self) {
        self.stats.reset();
    }

    /// The match engine.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current tally.
    pub fn stats(&self) -> Statistics {
        self.stats.snapshot()
    }

    /// Status line: whose turn, who won, or draw.
    pub fn status_text(&self) -> String {
        let text = match self.game.status() {
            GameStatus::InProgress => {
                format!("{}'s turn", self.game.current_player().marker())
            }
            GameStatus::Won(seat) => {
                format!("{} wins!", self.game.roster().player(seat).marker())
            }
            GameStatus::Draw => "It's a draw!".to_string(),
        };
        debug!(%text, "Status text");
        text
    }
}
