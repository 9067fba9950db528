//! The remote trivia data service, seen from the board's side.

mod http;

pub use http::HttpTriviaSource;

use async_trait::async_trait;
use derive_more::Display;
use tracing::{error, instrument};

use crate::games::trivia::{CategoryDetail, CategoryId, CategorySummary};

/// Where the board gets its categories and clues.
///
/// Each call is independent; implementations must not cache between calls.
#[async_trait]
pub trait TriviaSource: Send + Sync {
    /// Lists up to `count` categories to sample board columns from.
    async fn categories(&self, count: usize) -> Result<Vec<CategorySummary>, SourceError>;

    /// Fetches one category with its full clue pool.
    async fn category(&self, id: CategoryId) -> Result<CategoryDetail, SourceError>;
}

/// How a data service call failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SourceErrorKind {
    /// The request never produced a response.
    #[display("transport")]
    Transport,
    /// The service answered with a non-success status.
    #[display("status {}", _0)]
    Status(u16),
    /// The response body was not the expected shape.
    #[display("malformed payload")]
    Malformed,
}

/// Data service error with location tracking.
#[derive(Debug, Clone, Display, derive_more::Error)]
#[display("Trivia source error ({}): {} at {}:{}", kind, message, file, line)]
pub struct SourceError {
    /// Failure category.
    pub kind: SourceErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SourceError {
    /// Creates a new source error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: SourceErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        let message = message.into();
        error!(%kind, error_message = %message, "Trivia source error created");
        Self {
            kind,
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<reqwest::Error> for SourceError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_decode() {
            SourceErrorKind::Malformed
        } else if let Some(status) = err.status() {
            SourceErrorKind::Status(status.as_u16())
        } else {
            SourceErrorKind::Transport
        };
        Self::new(kind, err.to_string())
    }
}
