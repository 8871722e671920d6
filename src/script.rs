//! Headless adapter: replays events and prints what a player would see.

use crate::events::InputEvent;
use crate::games::tictactoe::{GameStatus, MoveOutcome, Position, Seat, Square, Statistics};
use crate::session::Session;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Everything a display would show, in one serializable value.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Marker per square, `None` when empty.
    pub board: Vec<Option<String>>,
    /// Status line.
    pub status: String,
    /// Match result.
    pub outcome: GameStatus,
    /// Running tally.
    pub statistics: Statistics,
    /// Positions played this match, as indices.
    pub history: Vec<usize>,
}

impl Snapshot {
    /// Captures the session's current state.
    pub fn capture(session: &Session) -> Self {
        let game = session.game();
        let board = game
            .board()
            .squares()
            .iter()
            .map(|square| match square {
                Square::Empty => None,
                Square::Occupied(seat) => Some(game.roster().player(*seat).marker().to_string()),
            })
            .collect();
        Self {
            board,
            status: session.status_text(),
            outcome: game.status(),
            statistics: session.stats(),
            history: game.history().iter().map(|p| p.to_index()).collect(),
        }
    }
}

/// Applies `events` in order, writing text after each one or a JSON snapshot at the end.
#[instrument(skip(session, events, out), fields(count = events.len()))]
pub fn run<W: Write>(
    session: &mut Session,
    events: &[InputEvent],
    json: bool,
    out: &mut W,
) -> Result<()> {
    for event in events {
        let outcome = session.handle(*event);
        debug!(%event, ?outcome, "Event applied");
        if !json {
            render_text(session, *event, outcome, out)?;
        }
    }

    if json {
        let snapshot = Snapshot::capture(session);
        serde_json::to_writer_pretty(&mut *out, &snapshot).context("Failed to write snapshot")?;
        writeln!(out)?;
    }
    Ok(())
}

fn render_text<W: Write>(
    session: &Session,
    event: InputEvent,
    outcome: Option<MoveOutcome>,
    out: &mut W,
) -> Result<()> {
    let game = session.game();
    match (event, outcome) {
        (_, Some(MoveOutcome::Ignored(reason))) => {
            writeln!(out, "> {} (ignored: {})", event, reason)?
        }
        (InputEvent::Select(index), _) => {
            let label = Position::from_index(index)
                .map(Position::label)
                .unwrap_or("?");
            writeln!(out, "> {} ({})", event, label)?
        }
        _ => writeln!(out, "> {}", event)?,
    }
    writeln!(out, "{}", game.board().display(game.roster()))?;
    writeln!(out, "{}", session.status_text())?;
    writeln!(out, "{}", stats_line(session))?;
    writeln!(out)?;
    Ok(())
}

/// One-line summary of the tally.
pub fn stats_line(session: &Session) -> String {
    let stats = session.stats();
    let roster = session.game().roster();
    let wins: Vec<String> = Seat::iter()
        .map(|seat| {
            format!(
                "{} wins: {}",
                roster.player(seat).marker(),
                stats.wins(seat)
            )
        })
        .collect();
    format!(
        "{}  Draws: {}  Games: {}",
        wins.join("  "),
        stats.draws(),
        stats.total_games()
    )
}
