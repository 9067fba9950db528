//! Category loader: one category id in, one playable column out.

use rand::Rng;
use tracing::{info, instrument, warn};

use super::sampler::{SampleError, sample_clues};
use super::types::{Category, CategoryId};
use crate::source::{SourceError, TriviaSource};

/// Why a category could not be loaded.
#[derive(Debug, Clone, derive_more::Display)]
pub enum CategoryLoadFailure {
    /// The data service call failed.
    #[display("{}", _0)]
    Source(SourceError),
    /// The category has fewer playable clues than a column needs.
    #[display("{}", _0)]
    InsufficientClues(SampleError),
    /// The category came back without a usable title.
    #[display("category has no title")]
    MissingTitle,
}

/// A specific category could not be turned into a board column.
#[derive(Debug, Clone, derive_more::Display)]
#[display("Failed to load category {}: {}", id, reason)]
pub struct CategoryLoadError {
    /// The category that failed.
    pub id: CategoryId,
    /// What went wrong.
    pub reason: CategoryLoadFailure,
}

impl std::error::Error for CategoryLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.reason {
            CategoryLoadFailure::Source(e) => Some(e),
            CategoryLoadFailure::InsufficientClues(e) => Some(e),
            CategoryLoadFailure::MissingTitle => None,
        }
    }
}

/// Fetches category `id` and samples `clue_count` hidden clues from it.
///
/// Every call goes to the source; nothing is cached.
///
/// # Errors
///
/// Returns [`CategoryLoadError`] carrying `id` when the fetch fails, the
/// title is blank, or fewer than `clue_count` playable clues exist.
#[instrument(skip(source, rng), fields(category_id = %id))]
pub async fn load_category<S, R>(
    source: &S,
    id: CategoryId,
    clue_count: usize,
    rng: &mut R,
) -> Result<Category, CategoryLoadError>
where
    S: TriviaSource + ?Sized,
    R: Rng + ?Sized,
{
    let fail = |reason| CategoryLoadError { id, reason };

    let detail = source
        .category(id)
        .await
        .map_err(|e| fail(CategoryLoadFailure::Source(e)))?;

    let title = detail.title.trim();
    if title.is_empty() {
        warn!("Category has a blank title");
        return Err(fail(CategoryLoadFailure::MissingTitle));
    }

    let clues = sample_clues(&detail.clues, clue_count, rng)
        .map_err(|e| fail(CategoryLoadFailure::InsufficientClues(e)))?;

    info!(title, clues = clues.len(), "Category loaded");
    Ok(Category::new(id, title, clues))
}
