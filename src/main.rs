//! Trivia Board - Unified CLI
//!
//! Deals trivia boards from a remote clue service.

#![warn(missing_docs)]

mod cli;
mod tui;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use trivia_board::{BoardBuilder, HttpTriviaSource, TriviaConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Play);

    if let Command::Deal { .. } = command {
        tracing_subscriber::fmt()
            .with_env_filter(default_filter())
            .with_writer(std::io::stderr)
            .init();
    }

    let config = TriviaConfig::resolve(cli.config.as_deref(), cli.base_url)?;
    let source = HttpTriviaSource::new(config.base_url(), config.request_timeout())?;
    let builder = BoardBuilder::new(Arc::new(source), config.board());
    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match command {
        Command::Play => tui::run_tui(builder, rng).await,
        Command::Deal { json } => run_deal(builder, rng, json).await,
    }
}

/// Deal one board and print it to stdout
#[instrument(skip(builder, rng))]
async fn run_deal(
    builder: BoardBuilder<HttpTriviaSource>,
    mut rng: StdRng,
    json: bool,
) -> Result<()> {
    info!("Dealing a board");
    let board = builder.build(&mut rng).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&board)?);
    } else {
        print!("{}", board.display());
    }
    Ok(())
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,trivia_board=debug"))
}
