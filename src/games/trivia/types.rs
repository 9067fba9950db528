//! Core domain types for the trivia board.

use derive_getters::Getters;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::instrument;

use super::reveal::RevealState;

/// Opaque category identifier assigned by the data service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

/// A category as listed by the id pool endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySummary {
    /// Category identifier.
    pub id: CategoryId,
    /// Category title, as sent by the service.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
}

/// Reads a string that the service may send as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A question/answer pair exactly as the data service sent it.
///
/// Either field may be missing, `null` or blank; [`RawClue::is_playable`] decides
/// whether the pair can become a [`Clue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct RawClue {
    /// Question text.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[new(into)]
    pub question: String,
    /// Answer text.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[new(into)]
    pub answer: String,
}

impl RawClue {
    /// True when both question and answer carry visible text.
    pub fn is_playable(&self) -> bool {
        !self.question.trim().is_empty() && !self.answer.trim().is_empty()
    }
}

/// Full category payload: metadata plus the whole clue pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetail {
    /// Category identifier.
    pub id: CategoryId,
    /// Category title.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    /// Every clue the service knows for this category.
    #[serde(default)]
    pub clues: Vec<RawClue>,
}

/// One question/answer cell on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Clue {
    /// Question text, never empty.
    question: String,
    /// Answer text, never empty.
    answer: String,
    /// How much of the clue has been revealed.
    #[getter(copy)]
    reveal_state: RevealState,
}

impl Clue {
    /// Normalizes a raw clue into a hidden board cell.
    ///
    /// Returns `None` for blank questions or answers.
    #[instrument(level = "trace", skip(raw))]
    pub fn from_raw(raw: &RawClue) -> Option<Self> {
        if !raw.is_playable() {
            return None;
        }
        Some(Self {
            question: raw.question.trim().to_string(),
            answer: raw.answer.trim().to_string(),
            reveal_state: RevealState::Hidden,
        })
    }

    pub(super) fn set_reveal_state(&mut self, state: RevealState) {
        self.reveal_state = state;
    }
}

/// A titled column of clues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Category {
    /// Identifier from the data service.
    #[getter(copy)]
    id: CategoryId,
    /// Display title, never empty.
    title: String,
    /// Clues in display order.
    clues: Vec<Clue>,
}

impl Category {
    /// Creates a category from already-sampled clues.
    pub fn new(id: CategoryId, title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            id,
            title: title.into(),
            clues,
        }
    }

    pub(super) fn clue_mut(&mut self, index: usize) -> Option<&mut Clue> {
        self.clues.get_mut(index)
    }
}
