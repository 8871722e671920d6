//! Application state and logic.

use super::input::{self, Action};
use crate::games::tictactoe::Position;
use crate::session::Session;
use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::{debug, info};

/// Main application state.
pub struct App {
    session: Session,
    cursor: Position,
    cell_areas: [Rect; 9],
    should_quit: bool,
}

impl App {
    /// Creates a new application around a session.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            cursor: Position::Center,
            cell_areas: [Rect::default(); 9],
            should_quit: false,
        }
    }

    /// The session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Square under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Remembers where the last frame drew each square, for mouse hits.
    pub fn set_cell_areas(&mut self, areas: [Rect; 9]) {
        self.cell_areas = areas;
    }

    /// Handles a key press.
    pub fn on_key(&mut self, key: KeyEvent) {
        match input::action_for_key(key, self.cursor) {
            Action::Game(event) => {
                let outcome = self.session.handle(event);
                debug!(%event, ?outcome, "Key event handled");
            }
            Action::Cursor(pos) => self.cursor = pos,
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Nothing => {}
        }
    }

    /// Handles a mouse event. A left click on a square selects it.
    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(pos) = input::cell_at(&self.cell_areas, mouse.column, mouse.row) {
            self.cursor = pos;
            let outcome = self.session.select(pos.to_index());
            debug!(position = %pos, ?outcome, "Click handled");
        }
    }
}
