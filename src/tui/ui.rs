//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Game, Position, Seat, Square};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Redraws the whole screen from the session and returns where each square landed.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 9] {
    let area = frame.area();
    let session = app.session();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                // Title
            Constraint::Min(CELL_HEIGHT * 3 + 2), // Board
            Constraint::Length(3),                // Status
            Constraint::Length(3),                // Statistics
            Constraint::Length(1),                // Help
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let areas = draw_board(frame, chunks[1], session.game(), app.cursor());

    let status_style = if session.game().is_game_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(session.status_text())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    draw_stats(frame, chunks[3], app);

    let help = Paragraph::new(
        "←↑↓→ move | Enter/1-9/click play | r: Restart | s: Reset stats | q: Quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    areas
}

fn draw_board(frame: &mut Frame, area: Rect, game: &Game, cursor: Position) -> [Rect; 9] {
    let board_area = center_rect(area, CELL_WIDTH * 3, CELL_HEIGHT * 3);
    let winning = game.winning_line();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board_area);

    let mut areas = [Rect::default(); 9];
    for (r, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (c, cell_area) in cols.iter().enumerate() {
            let Some(pos) = Position::from_row_col(r, c) else {
                continue;
            };
            let highlighted = winning.is_some_and(|line| line.contains(&pos));
            let selected = pos == cursor && !game.is_game_over();
            draw_cell(frame, *cell_area, game, pos, selected, highlighted);
            areas[pos.to_index()] = *cell_area;
        }
    }
    areas
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    game: &Game,
    pos: Position,
    selected: bool,
    winning: bool,
) {
    let (symbol, base_style) = match game.board().get(pos) {
        Square::Empty => (String::new(), Style::default().fg(Color::DarkGray)),
        Square::Occupied(seat) => (
            game.roster().player(seat).marker().to_string(),
            Style::default().fg(seat_color(seat)).add_modifier(Modifier::BOLD),
        ),
    };

    let border_style = if winning {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if selected {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cell = Paragraph::new(Line::from(Span::styled(symbol, base_style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(cell, area);
}

fn draw_stats(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let stats = session.stats();
    let roster = session.game().roster();

    let line = Line::from(vec![
        Span::styled(
            format!(
                "{} wins: {}",
                roster.player(Seat::First).marker(),
                stats.first_wins()
            ),
            Style::default().fg(seat_color(Seat::First)),
        ),
        Span::raw("   "),
        Span::styled(
            format!(
                "{} wins: {}",
                roster.player(Seat::Second).marker(),
                stats.second_wins()
            ),
            Style::default().fg(seat_color(Seat::Second)),
        ),
        Span::raw("   "),
        Span::raw(format!("Draws: {}", stats.draws())),
        Span::raw("   "),
        Span::raw(format!("Games: {}", stats.total_games())),
    ]);

    let widget = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Statistics"));
    frame.render_widget(widget, area);
}

fn seat_color(seat: Seat) -> Color {
    match seat {
        Seat::First => Color::Blue,
        Seat::Second => Color::Red,
    }
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
