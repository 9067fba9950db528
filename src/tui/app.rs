//! Application state and logic.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use trivia_board::{
    Board, BoardBuildError, BoardBuilder, BuildOutcome, BuildTicket, Coord, GameSession,
    TriviaSource,
};

use super::input::{Action, move_cursor};

type BuildResult = (BuildTicket, Result<Board, BoardBuildError>);

/// Main application state.
pub struct App<S> {
    session: GameSession,
    builder: BoardBuilder<S>,
    rng: StdRng,
    cursor: Coord,
    status_message: String,
    results_tx: mpsc::UnboundedSender<BuildResult>,
    results_rx: mpsc::UnboundedReceiver<BuildResult>,
    should_quit: bool,
}

impl<S: TriviaSource + 'static> App<S> {
    /// Creates a new application with no board yet.
    pub fn new(builder: BoardBuilder<S>, rng: StdRng) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            session: GameSession::new(),
            builder,
            rng,
            cursor: Coord::new(0, 0),
            status_message: String::new(),
            results_tx,
            results_rx,
            should_quit: false,
        }
    }

    /// Gets the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Starts dealing a new board in the background.
    ///
    /// Any build already running keeps going, but its result will be
    /// discarded when it arrives.
    pub fn start_build(&mut self) {
        let ticket = self.session.begin_build();
        let seed = self.rng.next_u64();
        let builder = self.builder.clone();
        let tx = self.results_tx.clone();

        info!(generation = ticket.generation(), "Spawning board build");
        tokio::spawn(async move {
            let mut rng = StdRng::seed_from_u64(seed);
            let result = builder.build(&mut rng).await;
            if tx.send((ticket, result)).is_err() {
                debug!("App gone before build finished");
            }
        });
        self.status_message = "Dealing a new board...".to_string();
    }

    /// Applies any finished builds.
    pub fn poll_builds(&mut self) {
        while let Ok((ticket, result)) = self.results_rx.try_recv() {
            match self.session.complete_build(ticket, result) {
                BuildOutcome::Installed => {
                    self.cursor = Coord::new(0, 0);
                    self.status_message =
                        "Enter or click reveals, arrows move, 'r' deals again, 'q' quits.".to_string();
                }
                BuildOutcome::Discarded => {}
                BuildOutcome::Failed(e) => {
                    self.status_message =
                        format!("Could not deal a board: {}. Press 'r' to retry.", e);
                }
            }
        }
    }

    /// Handles one key action.
    pub fn handle_action(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Quit => self.should_quit = true,
            Action::Restart => self.start_build(),
            Action::Move(key) => {
                if let Some(board) = self.session.board() {
                    self.cursor = move_cursor(self.cursor, key, board.width(), board.height());
                }
            }
            Action::Reveal => self.reveal(),
            Action::RevealAt(coord) => {
                self.cursor = coord;
                self.reveal();
            }
            Action::None => {}
        }
    }

    fn reveal(&mut self) {
        if let Err(e) = self.session.interact(self.cursor) {
            warn!(error = %e, "Reveal ignored");
        }
    }
}
