//! The board: an ordered grid of categories addressed by coordinate.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

use super::types::{Category, CategoryId, Clue};

/// A cell address on the board: which column, then which row.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_new::new,
)]
pub struct Coord {
    /// Index into [`Board::categories`].
    #[getter(copy)]
    category: usize,
    /// Index into [`Category::clues`].
    #[getter(copy)]
    clue: usize,
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.category, self.clue)
    }
}

/// Errors addressing a cell on the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The coordinate points outside the board.
    #[display("No clue at {}", _0)]
    OutOfBounds(Coord),

    /// No board has been dealt yet.
    #[display("No board has been dealt")]
    NoBoard,
}

impl std::error::Error for BoardError {}

/// One game's worth of categories.
///
/// Column and row order are fixed once the board is built; interaction
/// events refer to cells by [`Coord`], never by identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Board {
    /// Categories in column order.
    categories: Vec<Category>,
}

impl Board {
    /// Creates a board from fully loaded categories.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.categories.len()
    }

    /// Number of rows (the longest column).
    pub fn height(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.clues().len())
            .max()
            .unwrap_or(0)
    }

    /// Category ids in column order.
    pub fn category_ids(&self) -> Vec<CategoryId> {
        self.categories.iter().map(|c| c.id()).collect()
    }

    /// Looks up the clue at `coord`.
    pub fn clue(&self, coord: Coord) -> Option<&Clue> {
        self.categories
            .get(coord.category())
            .and_then(|c| c.clues().get(coord.clue()))
    }

    /// Applies one interaction to the clue at `coord` and returns its
    /// displayed text.
    ///
    /// Only the addressed clue changes.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OutOfBounds`] if `coord` is not on the board.
    #[instrument(level = "debug", skip(self), fields(coord = %coord))]
    pub fn interact(&mut self, coord: Coord) -> Result<&str, BoardError> {
        let clue = self
            .categories
            .get_mut(coord.category())
            .and_then(|c| c.clue_mut(coord.clue()));
        match clue {
            Some(clue) => Ok(clue.interact()),
            None => {
                warn!("Interaction outside the board");
                Err(BoardError::OutOfBounds(coord))
            }
        }
    }

    /// Formats the board as a plain-text listing, one category per block.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (col, category) in self.categories.iter().enumerate() {
            if col > 0 {
                result.push('\n');
            }
            result.push_str(&format!("{}. {} [{}]\n", col + 1, category.title(), category.id()));
            for (row, clue) in category.clues().iter().enumerate() {
                result.push_str(&format!(
                    "   {}) {}\n      -> {}\n",
                    row + 1,
                    clue.question(),
                    clue.answer()
                ));
            }
        }
        result
    }
}
