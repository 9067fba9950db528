//! Shared in-memory trivia source for integration tests.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Barrier;
use trivia_board::{
    CategoryDetail, CategoryId, CategorySummary, RawClue, SourceError, SourceErrorKind,
    TriviaSource,
};

/// A trivia service held entirely in memory.
#[derive(Debug, Default)]
pub struct FakeSource {
    pool: Vec<CategorySummary>,
    details: HashMap<CategoryId, CategoryDetail>,
    failing: HashSet<CategoryId>,
    pool_fails: bool,
    delays: HashMap<CategoryId, Duration>,
    barrier: Option<Arc<Barrier>>,
    category_calls: AtomicUsize,
}

impl FakeSource {
    /// `categories` categories with ids `1..=categories`, each holding
    /// `clues` playable clues.
    pub fn uniform(categories: u64, clues: usize) -> Self {
        let mut source = Self::default();
        for id in 1..=categories {
            source.add_category(id, clues);
        }
        source
    }

    /// Adds (or replaces) a category with `clues` playable clues.
    pub fn add_category(&mut self, id: u64, clues: usize) {
        let id = CategoryId(id);
        let title = format!("Category {}", id);
        let clues = (0..clues)
            .map(|n| RawClue::new(format!("Q{}-{}", id, n), format!("A{}-{}", id, n)))
            .collect();
        self.pool.push(CategorySummary {
            id,
            title: title.clone(),
        });
        self.details.insert(id, CategoryDetail { id, title, clues });
    }

    /// Replaces a category's detail payload as-is.
    pub fn set_detail(&mut self, detail: CategoryDetail) {
        self.details.insert(detail.id, detail);
    }

    /// Makes loads of `id` fail at the transport level.
    pub fn fail_category(mut self, id: u64) -> Self {
        self.failing.insert(CategoryId(id));
        self
    }

    /// Makes the id pool request fail.
    pub fn fail_pool(mut self) -> Self {
        self.pool_fails = true;
        self
    }

    /// Delays responses for `id`.
    pub fn delay(mut self, id: u64, delay: Duration) -> Self {
        self.delays.insert(CategoryId(id), delay);
        self
    }

    /// Every category load waits until `parties` loads are in flight.
    pub fn rendezvous(mut self, parties: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(parties)));
        self
    }

    /// Duplicates the pool listing for `id`.
    pub fn duplicate_in_pool(mut self, id: u64, times: usize) -> Self {
        let entry = CategorySummary {
            id: CategoryId(id),
            title: String::new(),
        };
        for _ in 0..times {
            self.pool.push(entry.clone());
        }
        self
    }

    /// Number of category loads served so far.
    pub fn category_calls(&self) -> usize {
        self.category_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TriviaSource for FakeSource {
    async fn categories(&self, count: usize) -> Result<Vec<CategorySummary>, SourceError> {
        if self.pool_fails {
            return Err(SourceError::new(SourceErrorKind::Transport, "pool unavailable"));
        }
        Ok(self.pool.iter().take(count).cloned().collect())
    }

    async fn category(&self, id: CategoryId) -> Result<CategoryDetail, SourceError> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        if let Some(delay) = self.delays.get(&id) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(&id) {
            return Err(SourceError::new(SourceErrorKind::Transport, "connection reset"));
        }
        self.details
            .get(&id)
            .cloned()
            .ok_or_else(|| SourceError::new(SourceErrorKind::Status(404), "no such category"))
    }
}
