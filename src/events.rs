//! Input events a presentation layer forwards to a [`Session`](crate::Session).

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A user action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum InputEvent {
    /// A cell was selected (index 0-8).
    #[display("select {_0}")]
    Select(usize),
    /// Start a new match.
    #[display("restart")]
    Restart,
    /// Zero the statistics.
    #[display("reset statistics")]
    ResetStatistics,
}

impl FromStr for InputEvent {
    type Err = EventParseError;

    /// Parses a script token.
    ///
    /// A bare number is a cell index. `r`/`restart` restarts and
    /// `s`/`reset-stats` resets the statistics.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_lowercase();
        match token.as_str() {
            "r" | "restart" => Ok(InputEvent::Restart),
            "s" | "reset-stats" => Ok(InputEvent::ResetStatistics),
            other => other
                .parse::<usize>()
                .map(InputEvent::Select)
                .map_err(|_| EventParseError::new(format!("Unrecognised event '{}'", s))),
        }
    }
}

/// Parses every token, stopping at the first bad one.
#[instrument(skip_all, fields(count = tokens.len()))]
pub fn parse_events(tokens: &[String]) -> Result<Vec<InputEvent>, EventParseError> {
    tokens.iter().map(|t| t.parse()).collect()
}

/// Event parsing error.
#[derive(Debug, Clone, Display, Error)]
#[display("Event error: {} at {}:{}", message, file, line)]
pub struct EventParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl EventParseError {
    /// Creates a new event parsing error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
