//! Trivia Board library - random categories, random clues, progressive reveal
//!
//! Deals a grid of trivia categories from a remote clue service and tracks
//! how much of each clue the players have uncovered.
//!
//! # Architecture
//!
//! - **Games**: board types, clue sampling, category loading, board building
//!   and the per-clue reveal state machine
//! - **Source**: the remote trivia data service behind the [`TriviaSource`] trait
//! - **Session**: owner of the in-play board and of restart ordering
//! - **Config**: board shape and service settings
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use rand::SeedableRng;
//! use trivia_board::{BoardBuilder, Coord, GameSession, HttpTriviaSource, TriviaConfig};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = TriviaConfig::default();
//! let source = HttpTriviaSource::new(config.base_url(), config.request_timeout())?;
//! let builder = BoardBuilder::new(Arc::new(source), config.board());
//!
//! let mut session = GameSession::new();
//! let mut rng = rand::rngs::StdRng::from_entropy();
//! session.restart(&builder, &mut rng).await?;
//!
//! let question = session.interact(Coord::new(0, 0))?;
//! println!("{question}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod session;
mod source;

// Crate-level exports - Configuration
pub use config::{BASE_URL_ENV, BoardSettings, ConfigError, TriviaConfig};

// Crate-level exports - Board, sampling, loading, reveal
pub use games::trivia::{
    Board, BoardBuildError, BoardBuilder, BoardError, Category, CategoryDetail, CategoryId,
    CategoryLoadError, CategoryLoadFailure, CategorySummary, Clue, Coord, RawClue, RevealState,
    SampleError, load_category, sample, sample_clues,
};

// Crate-level exports - Session management
pub use session::{BuildOutcome, BuildTicket, GameSession};

// Crate-level exports - Data service
pub use source::{HttpTriviaSource, SourceError, SourceErrorKind, TriviaSource};
