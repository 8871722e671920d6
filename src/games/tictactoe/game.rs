//! Match engine for tic-tac-toe.
//!
//! [`Game`] is the single authority over the board and the match state.
//! It has two phases, in progress and terminal, and only the move that
//! ends a match moves it from one to the other. [`Game::reset`] is the
//! only way back.

use super::action::{IgnoreReason, MoveOutcome};
use super::position::Position;
use super::rules;
use super::types::{Board, GameStatus, Player, Roster, Seat, Square};
use tracing::{debug, info, instrument};

/// Tic-tac-toe match engine.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    roster: Roster,
    to_move: Seat,
    status: GameStatus,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new match in progress with the first seat on move.
    #[instrument(skip(roster))]
    pub fn new(roster: Roster) -> Self {
        Self {
            board: Board::new(),
            roster,
            to_move: Seat::First,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Offers a move at `index` (0-8) for the player on move.
    ///
    /// Declined without any state change when the match is over, the index
    /// is off the board, or the square is taken.
    #[instrument(skip(self), fields(seat = %self.to_move))]
    pub fn apply_move(&mut self, index: usize) -> MoveOutcome {
        if self.status.is_terminal() {
            return self.ignore(IgnoreReason::GameOver);
        }
        let Some(pos) = Position::from_index(index) else {
            return self.ignore(IgnoreReason::OutOfRange(index));
        };
        if !self.board.is_empty(pos) {
            return self.ignore(IgnoreReason::Occupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);
        debug!(position = %pos, "Mark placed");

        self.evaluate()
    }

    fn ignore(&self, reason: IgnoreReason) -> MoveOutcome {
        debug!(%reason, "Move ignored");
        MoveOutcome::Ignored(reason)
    }

    /// Decides whether the last move ended the match.
    fn evaluate(&mut self) -> MoveOutcome {
        if let Some(winner) = rules::check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
        } else if rules::is_full(&self.board) {
            self.status = GameStatus::Draw;
        } else {
            self.switch_turn();
            return MoveOutcome::Continued { next: self.to_move };
        }
        info!(status = ?self.status, moves = self.history.len(), "Match finished");
        MoveOutcome::Finished(self.status)
    }

    fn switch_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Clears the board and starts a fresh match with the first seat on move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.history.clear();
        self.to_move = Seat::First;
        self.status = GameStatus::InProgress;
        debug!("Match reset");
    }

    /// Player on move. Once the match ends this is the player who moved last.
    pub fn current_player(&self) -> &Player {
        self.roster.player(self.to_move)
    }

    /// Seat on move.
    pub fn to_move(&self) -> Seat {
        self.to_move
    }

    /// True once a line is complete or the board is full.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Read-only board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The two fixed players.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Positions played this match, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// The completed line, when the match was won.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        let winner = self.status.winner()?;
        rules::winning_line(&self.board)
            .filter(|(seat, _)| *seat == winner)
            .map(|(_, line)| line)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Roster::default())
    }
}
