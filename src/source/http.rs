//! reqwest-backed client for the trivia data service.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use super::{SourceError, SourceErrorKind, TriviaSource};
use crate::games::trivia::{CategoryDetail, CategoryId, CategorySummary};

/// HTTP client for a jService-style trivia API.
///
/// Talks to two endpoints under `base_url`:
/// `GET /categories?count=N` and `GET /category?id=ID`.
#[derive(Debug, Clone)]
pub struct HttpTriviaSource {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTriviaSource {
    /// Creates a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the underlying HTTP client cannot be built.
    #[instrument(skip_all, fields(base_url = %base_url.as_ref()))]
    pub fn new(base_url: impl AsRef<str>, timeout: Duration) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.as_ref().trim_end_matches('/').to_string();
        info!("Trivia source ready");
        Ok(Self { base_url, client })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        debug!(url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SourceError::new(
                SourceErrorKind::Status(status.as_u16()),
                format!("GET {} returned {}: {}", url, status, body),
            ));
        }

        debug!(body_length = body.len(), "Parsing response");
        serde_json::from_str(&body).map_err(|e| {
            SourceError::new(
                SourceErrorKind::Malformed,
                format!("Failed to parse response from {}: {}", url, e),
            )
        })
    }
}

#[async_trait]
impl TriviaSource for HttpTriviaSource {
    #[instrument(skip(self))]
    async fn categories(&self, count: usize) -> Result<Vec<CategorySummary>, SourceError> {
        let url = format!("{}/categories?count={}", self.base_url, count);
        let categories: Vec<CategorySummary> = self.get_json(&url).await?;
        info!(received = categories.len(), "Fetched category pool");
        Ok(categories)
    }

    #[instrument(skip(self), fields(category_id = %id))]
    async fn category(&self, id: CategoryId) -> Result<CategoryDetail, SourceError> {
        let url = format!("{}/category?id={}", self.base_url, id);
        let detail: CategoryDetail = self.get_json(&url).await?;
        if detail.id != id {
            return Err(SourceError::new(
                SourceErrorKind::Malformed,
                format!("Asked for category {} but received {}", id, detail.id),
            ));
        }
        debug!(clues = detail.clues.len(), "Fetched category");
        Ok(detail)
    }
}
