//! tictactoe_tally - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_tally::{GameConfig, Session, logging, parse_events, run_script, tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => {
            // The UI installs its own file logger once the log path is known,
            // so config loading logs to stderr only for its own duration.
            let startup = stderr_subscriber();
            let config =
                tracing::subscriber::with_default(startup, || load_config(&cli.config))?;
            tui::run_tui(&config)
        }
        Command::Script { events, json } => {
            tracing::subscriber::set_global_default(stderr_subscriber())
                .context("Failed to install tracing subscriber")?;
            let config = load_config(&cli.config)?;
            run_headless(&config, &events, json)
        }
    }
}

/// Stderr logging, `warn` unless `RUST_LOG` says otherwise.
fn stderr_subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
    logging::subscriber(std::io::stderr, logging::env_filter("warn"), true)
}

fn load_config(path: &Path) -> Result<GameConfig> {
    GameConfig::load_or_default(path)
        .with_context(|| format!("Failed to load {}", path.display()))
}

/// Replay events and print the result to stdout.
#[instrument(skip_all, fields(count = events.len(), json = json))]
fn run_headless(config: &GameConfig, events: &[String], json: bool) -> Result<()> {
    let events = parse_events(events)?;
    info!(count = events.len(), "Replaying events");

    let mut session = Session::new(config.roster());
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_script(&mut session, &events, json, &mut out)
}
