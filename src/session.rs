//! Game session: owns the current board and decides which build wins.
//!
//! Restarting never waits for or cancels an in-flight build. Each build is
//! stamped with a [`BuildTicket`]; only the most recently issued ticket may
//! install its board. Results from superseded builds are dropped, and a
//! failed build leaves the previous board in place.

use rand::Rng;
use tracing::{debug, info, instrument, warn};

use crate::games::trivia::{Board, BoardBuildError, BoardBuilder, BoardError, Coord};
use crate::source::TriviaSource;

/// Stamp identifying one board build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuildTicket(u64);

impl BuildTicket {
    /// Build generation this ticket was issued for.
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// What happened to a finished build.
#[derive(Debug)]
pub enum BuildOutcome {
    /// The board is now the session's board.
    Installed,
    /// A newer build was started; this result was thrown away.
    Discarded,
    /// The current build failed; the previous board (if any) is untouched.
    Failed(BoardBuildError),
}

/// The single owner of the in-play board.
#[derive(Debug, Default)]
pub struct GameSession {
    board: Option<Board>,
    generation: u64,
    in_flight: bool,
    last_error: Option<String>,
}

impl GameSession {
    /// Creates a session with no board.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// The board in play, if one has been dealt.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    /// True while the latest build has not reported back.
    pub fn is_building(&self) -> bool {
        self.in_flight
    }

    /// Message from the most recent failed build, cleared on the next start.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Starts a new build, superseding any build still in flight.
    #[instrument(skip(self), fields(previous = self.generation))]
    pub fn begin_build(&mut self) -> BuildTicket {
        if self.in_flight {
            debug!("Superseding in-flight build");
        }
        self.generation += 1;
        self.in_flight = true;
        self.last_error = None;
        info!(generation = self.generation, "Build started");
        BuildTicket(self.generation)
    }

    /// Reports a finished build.
    ///
    /// Installs `result` only if `ticket` belongs to the latest build.
    #[instrument(skip(self, result), fields(generation = ticket.0, current = self.generation))]
    pub fn complete_build(
        &mut self,
        ticket: BuildTicket,
        result: Result<Board, BoardBuildError>,
    ) -> BuildOutcome {
        if ticket.0 != self.generation {
            debug!("Discarding stale build result");
            return BuildOutcome::Discarded;
        }
        self.in_flight = false;
        match result {
            Ok(board) => {
                info!("Installing new board");
                self.board = Some(board);
                BuildOutcome::Installed
            }
            Err(e) => {
                warn!(error = %e, "Build failed, keeping previous board");
                self.last_error = Some(e.to_string());
                BuildOutcome::Failed(e)
            }
        }
    }

    /// Builds a board and installs it in one step.
    ///
    /// # Errors
    ///
    /// Returns the build error; the previous board stays in play.
    #[instrument(skip_all)]
    pub async fn restart<S, R>(
        &mut self,
        builder: &BoardBuilder<S>,
        rng: &mut R,
    ) -> Result<&Board, BoardBuildError>
    where
        S: TriviaSource + ?Sized,
        R: Rng + ?Sized,
    {
        // `&mut self` is held across the await, so this ticket stays current.
        let ticket = self.begin_build();
        let result = builder.build(rng).await;
        match self.complete_build(ticket, result) {
            BuildOutcome::Installed => self.board.as_ref().ok_or(BoardBuildError::Superseded),
            BuildOutcome::Failed(e) => Err(e),
            BuildOutcome::Discarded => Err(BoardBuildError::Superseded),
        }
    }

    /// Routes an interaction to the clue at `coord`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::NoBoard`] before the first board is installed,
    /// or [`BoardError::OutOfBounds`] for a coordinate off the board.
    pub fn interact(&mut self, coord: Coord) -> Result<&str, BoardError> {
        self.board
            .as_mut()
            .ok_or(BoardError::NoBoard)?
            .interact(coord)
    }
}
