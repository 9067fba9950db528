//! Per-clue reveal state machine.
//!
//! A clue only ever moves forward:
//!
//! ```text
//! Hidden ──interact──▶ ShowingQuestion ──interact──▶ ShowingAnswer ─┐
//!                                                         ▲          │
//!                                                         └─interact─┘
//! ```
//!
//! `ShowingAnswer` is terminal for the lifetime of the board. The machine is
//! total: every state accepts an interaction.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::types::Clue;

/// How much of a clue is currently visible.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum RevealState {
    /// Nothing shown yet.
    #[default]
    Hidden,
    /// The question is showing.
    ShowingQuestion,
    /// The answer is showing.
    ShowingAnswer,
}

impl RevealState {
    /// Returns the state after one interaction.
    pub fn advance(self) -> Self {
        match self {
            Self::Hidden => Self::ShowingQuestion,
            Self::ShowingQuestion | Self::ShowingAnswer => Self::ShowingAnswer,
        }
    }

    /// True once the answer is visible.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::ShowingAnswer)
    }
}

impl Clue {
    /// Applies one interaction and returns the text that should now be shown.
    #[instrument(level = "debug", skip(self), fields(from = %self.reveal_state()))]
    pub fn interact(&mut self) -> &str {
        let next = self.reveal_state().advance();
        if next != self.reveal_state() {
            debug!(to = %next, "Clue advanced");
            self.set_reveal_state(next);
        }
        self.displayed_text().unwrap_or_default()
    }

    /// The text currently visible on this clue, or `None` while hidden.
    pub fn displayed_text(&self) -> Option<&str> {
        match self.reveal_state() {
            RevealState::Hidden => None,
            RevealState::ShowingQuestion => Some(self.question().as_str()),
            RevealState::ShowingAnswer => Some(self.answer().as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_advance_never_regresses() {
        for state in RevealState::iter() {
            assert!(state.advance() >= state);
        }
    }

    #[test]
    fn test_only_answer_is_terminal() {
        let terminal: Vec<_> = RevealState::iter().filter(|s| s.is_terminal()).collect();
        assert_eq!(terminal, [RevealState::ShowingAnswer]);
    }
}
