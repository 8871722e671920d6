//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io;
use tracing::{error, info, instrument};

use crate::config::GameConfig;
use crate::logging;
use crate::session::Session;
use app::App;

/// Runs the interactive game until the user quits.
///
/// The terminal is put back into cooked mode on every exit path, including
/// setup failures and panics.
pub fn run_tui(config: &GameConfig) -> Result<()> {
    // Log to a file so tracing output does not scribble over the screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let subscriber = logging::subscriber(
        std::sync::Arc::new(log_file),
        logging::env_filter("info"),
        false,
    );
    let _ = tracing::subscriber::set_global_default(subscriber);

    info!("Starting terminal UI");

    let guard = terminal::enter().context("Failed to prepare terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let mut app = App::new(Session::new(config.roster()));
    let res = run_loop(&mut terminal, &mut app);
    let restored = guard.finish().context("Failed to restore terminal");

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res.and(restored)
}

/// Draw, wait for one input, apply it, repeat.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        let mut areas = [Rect::default(); 9];
        terminal.draw(|frame| areas = ui::draw(frame, &*app))?;
        app.set_cell_areas(areas);

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
            Event::Mouse(mouse) => app.on_mouse(mouse),
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
