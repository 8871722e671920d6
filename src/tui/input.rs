//! Key and mouse mapping for the terminal UI.

use crate::events::InputEvent;
use crate::games::tictactoe::Position;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Forward to the session.
    Game(InputEvent),
    /// Move the selection cursor.
    Cursor(Position),
    /// Leave the UI.
    Quit,
    /// Unbound key.
    Nothing,
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };
    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

/// Maps a key press to an action.
///
/// Digits `1`-`9` select squares like a phone keypad read left to right,
/// so `1` is index 0.
pub fn action_for_key(key: KeyEvent, cursor: Position) -> Action {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') | KeyCode::Char('R') => Action::Game(InputEvent::Restart),
        KeyCode::Char('s') | KeyCode::Char('S') => Action::Game(InputEvent::ResetStatistics),
        KeyCode::Enter | KeyCode::Char(' ') => Action::Game(InputEvent::Select(cursor.to_index())),
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(d @ 1..=9) => Action::Game(InputEvent::Select(d as usize - 1)),
            _ => Action::Nothing,
        },
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Action::Cursor(move_cursor(cursor, code))
        }
        _ => Action::Nothing,
    }
}

/// Finds the square drawn under terminal cell (`column`, `row`).
pub fn cell_at(areas: &[Rect; 9], column: u16, row: u16) -> Option<Position> {
    areas
        .iter()
        .position(|area| covers(area, column, row))
        .and_then(Position::from_index)
}

fn covers(area: &Rect, column: u16, row: u16) -> bool {
    let columns = area.x..area.x + area.width;
    let rows = area.y..area.y + area.height;
    columns.contains(&column) && rows.contains(&row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let cases = [
            (Position::TopLeft, KeyCode::Up, Position::TopLeft),
            (Position::TopLeft, KeyCode::Left, Position::TopLeft),
            (Position::BottomRight, KeyCode::Down, Position::BottomRight),
            (Position::Center, KeyCode::Right, Position::MiddleRight),
            (Position::Center, KeyCode::Up, Position::TopCenter),
        ];
        for (from, key, to) in cases {
            assert_eq!(move_cursor(from, key), to);
        }
    }

    #[test]
    fn test_digit_keys_select_cells() {
        assert_eq!(
            action_for_key(press(KeyCode::Char('1')), Position::Center),
            Action::Game(InputEvent::Select(0))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('9')), Position::Center),
            Action::Game(InputEvent::Select(8))
        );
        assert_eq!(
            action_for_key(press(KeyCode::Char('0')), Position::Center),
            Action::Nothing
        );
    }

    #[test]
    fn test_enter_selects_cursor() {
        assert_eq!(
            action_for_key(press(KeyCode::Enter), Position::BottomLeft),
            Action::Game(InputEvent::Select(6))
        );
    }

    #[test]
    fn test_hit_testing() {
        let mut areas = [Rect::default(); 9];
        for (i, area) in areas.iter_mut().enumerate() {
            let (r, c) = (i as u16 / 3, i as u16 % 3);
            *area = Rect::new(c * 9, r * 3, 9, 3);
        }
        assert_eq!(cell_at(&areas, 0, 0), Some(Position::TopLeft));
        assert_eq!(cell_at(&areas, 10, 4), Some(Position::Center));
        assert_eq!(cell_at(&areas, 40, 40), None);
    }
}
