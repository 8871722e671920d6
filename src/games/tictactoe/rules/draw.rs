//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if every square is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no completed line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::super::super::{Position, Seat, Square};
    use super::*;

    fn fill(board: &mut Board, pattern: &str) {
        for (pos, ch) in Position::ALL.iter().zip(pattern.chars()) {
            let square = match ch {
                'A' => Square::Occupied(Seat::First),
                'B' => Square::Occupied(Seat::Second),
                _ => Square::Empty,
            };
            board.set(*pos, square);
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let mut board = Board::new();
        fill(&mut board, "AB.......");
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // A B A / B A A / B A B
        fill(&mut board, "ABABAABAB");
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        let mut board = Board::new();
        fill(&mut board, "AAABBABAB");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
