//! Win detection logic for tic-tac-toe.

use super::super::{Board, Position, Seat, Square};
use tracing::instrument;

/// The 8 winning lines, in scan order: rows, columns, diagonals.
///
/// When more than one line is complete the earliest one here wins.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and the seat that owns it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Seat, [Position; 3])> {
    WIN_LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        match board.get(a) {
            Square::Occupied(seat)
                if board.get(b) == board.get(a) && board.get(c) == board.get(a) =>
            {
                Some((seat, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Seat> {
    winning_line(board).map(|(seat, _)| seat)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(first: &[usize], second: &[usize]) -> Board {
        let mut board = Board::new();
        for &i in first {
            board.set(Position::ALL[i], Square::Occupied(Seat::First));
        }
        for &i in second {
            board.set(Position::ALL[i], Square::Occupied(Seat::Second));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected_on_otherwise_empty_board() {
        for line in WIN_LINES {
            let indices: Vec<usize> = line.iter().map(|p| p.to_index()).collect();
            let board = board_with(&[], &indices);
            assert_eq!(winning_line(&board), Some((Seat::Second, line)));
        }
    }

    #[test]
    fn test_every_line_is_detected_beside_opponent_marks() {
        for line in WIN_LINES {
            let indices: Vec<usize> = line.iter().map(|p| p.to_index()).collect();
            // Two marks elsewhere can never form a line of their own.
            let others: Vec<usize> = (0..9).filter(|i| !indices.contains(i)).take(2).collect();
            let board = board_with(&indices, &others);
            assert_eq!(winning_line(&board), Some((Seat::First, line)));
            assert_eq!(check_winner(&board), Some(Seat::First));
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[0, 1], &[2]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_two_lines_report_first_in_scan_order() {
        // Only reachable by setting squares directly: top row and left column.
        let board = board_with(&[0, 1, 2, 3, 6], &[]);
        let (_, line) = winning_line(&board).expect("line");
        assert_eq!(line, WIN_LINES[0]);
    }
}
