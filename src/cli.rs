//! Command-line interface for tictactoe_tally.

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe with a running tally
#[derive(Parser, Debug)]
#[command(name = "tictactoe_tally")]
#[command(about = "Two-player tic-tac-toe with win/draw statistics", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config (defaults apply if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play,

    /// Replay a sequence of events without a UI
    Script {
        /// Events: a cell index 0-8, `r` to restart, `s` to reset statistics
        #[arg(required = true)]
        events: Vec<String>,

        /// Print a final JSON snapshot instead of the board after each event
        #[arg(long)]
        json: bool,
    },
}
