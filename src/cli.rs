//! Command-line interface for trivia_board.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Trivia Board - random categories, revealed one cell at a time
#[derive(Parser, Debug)]
#[command(name = "trivia_board")]
#[command(about = "Terminal trivia board backed by a remote clue service", long_about = None)]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Trivia service base URL (overrides config and TRIVIA_BASE_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Seed for category and clue sampling
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play on the terminal board
    Play,

    /// Deal one board and print it
    Deal {
        /// Print the board as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
