//! Board builder: samples category ids and loads every column concurrently.

use std::collections::HashSet;
use std::sync::Arc;

use futures::future::try_join_all;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use tracing::{info, instrument, warn};

use super::board::Board;
use super::loader::{CategoryLoadError, load_category};
use super::sampler::{SampleError, sample};
use super::types::{CategoryId, CategorySummary};
use crate::config::BoardSettings;
use crate::source::{SourceError, TriviaSource};

/// A board could not be built. The whole build is abandoned.
#[derive(Debug, Clone, derive_more::Display)]
pub enum BoardBuildError {
    /// The category id pool could not be fetched.
    #[display("Failed to fetch category ids: {}", _0)]
    CategoryIdFetch(SourceError),

    /// The category id pool had fewer distinct ids than the board is wide.
    #[display("Not enough categories for a board: {}", _0)]
    NotEnoughCategories(SampleError),

    /// One of the chosen categories failed to load.
    #[display("{}", _0)]
    CategoryLoad(CategoryLoadError),

    /// A newer build was started before this one could be installed.
    #[display("Build was superseded by a newer one")]
    Superseded,
}

impl std::error::Error for BoardBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CategoryIdFetch(e) => Some(e),
            Self::NotEnoughCategories(e) => Some(e),
            Self::CategoryLoad(e) => Some(e),
            Self::Superseded => None,
        }
    }
}

impl From<CategoryLoadError> for BoardBuildError {
    fn from(err: CategoryLoadError) -> Self {
        Self::CategoryLoad(err)
    }
}

/// Deals fresh boards from a [`TriviaSource`].
///
/// The builder keeps no memory of earlier boards; every call to
/// [`BoardBuilder::build`] samples from scratch.
#[derive(Debug)]
pub struct BoardBuilder<S: ?Sized> {
    source: Arc<S>,
    settings: BoardSettings,
}

impl<S: ?Sized> Clone for BoardBuilder<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            settings: self.settings,
        }
    }
}

impl<S: TriviaSource + ?Sized> BoardBuilder<S> {
    /// Creates a builder dealing boards shaped by `settings`.
    pub fn new(source: Arc<S>, settings: BoardSettings) -> Self {
        Self { source, settings }
    }

    /// Board shape this builder produces.
    pub fn settings(&self) -> &BoardSettings {
        &self.settings
    }

    /// Builds a new board.
    ///
    /// Columns appear in the order their ids were sampled. Each column gets
    /// its own seed drawn from `rng` before any load starts, so the result is
    /// fully determined by `rng` no matter which load finishes first.
    ///
    /// # Errors
    ///
    /// Fails fast with [`BoardBuildError`] if the id pool cannot be fetched,
    /// has too few distinct ids, or any single category fails to load.
    #[instrument(skip(self, rng), fields(
        categories = self.settings.categories,
        clues_per_category = self.settings.clues_per_category,
    ))]
    pub async fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Board, BoardBuildError> {
        let pool = self
            .source
            .categories(self.settings.id_pool_size)
            .await
            .map_err(BoardBuildError::CategoryIdFetch)?;

        let ids = distinct_ids(&pool);
        let chosen = sample(&ids, self.settings.categories, rng)
            .map_err(BoardBuildError::NotEnoughCategories)?;
        info!(ids = ?chosen, "Sampled categories");

        let seeds: Vec<u64> = chosen.iter().map(|_| rng.next_u64()).collect();
        let source = self.source.as_ref();
        let clue_count = self.settings.clues_per_category;

        let loads = chosen.iter().zip(seeds).map(|(&id, seed)| async move {
            let mut rng = StdRng::seed_from_u64(seed);
            load_category(source, id, clue_count, &mut rng).await
        });
        let categories = try_join_all(loads).await.inspect_err(|e| {
            warn!(error = %e, "Board build aborted");
        })?;

        info!("Board ready");
        Ok(Board::new(categories))
    }
}

/// Collapses the pool to unique ids, keeping first-seen order.
fn distinct_ids(pool: &[CategorySummary]) -> Vec<CategoryId> {
    let mut seen = HashSet::with_capacity(pool.len());
    pool.iter()
        .map(|c| c.id)
        .filter(|id| seen.insert(*id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_ids_keeps_first_occurrence() {
        let pool = [3, 1, 3, 2, 1].map(|id| CategorySummary {
            id: CategoryId(id),
            title: String::new(),
        });
        assert_eq!(
            distinct_ids(&pool),
            [CategoryId(3), CategoryId(1), CategoryId(2)]
        );
    }
}
