use crate::domain::entities::record::ScoredMatch;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::embedding_store::EmbeddingStore;
use crate::domain::ranking;
use crate::domain::values::metric::Metric;
use std::sync::Arc;

/// Matches returned when the caller doesn't ask for a specific count.
pub const DEFAULT_LIMIT: usize = 2;

pub struct RecommendUseCase {
    store: Arc<dyn EmbeddingStore>,
    embedder: Arc<dyn EmbeddingProvider>,
    metric: Metric,
}

impl RecommendUseCase {
    pub fn new(
        store: Arc<dyn EmbeddingStore>,
        embedder: Arc<dyn EmbeddingProvider>,
        metric: Metric,
    ) -> Self {
        Self {
            store,
            embedder,
            metric,
        }
    }

    /// Embeds the article text and returns the `limit` nearest corpus
    /// articles, closest first. An empty corpus yields an empty list.
    pub async fn execute(
        &self,
        text: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ScoredMatch>, DomainError> {
        let vectors = self
            .embedder
            .embed(&[text.to_string()], InputType::Query)
            .await?;
        let query = vectors
            .into_iter()
            .next()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                DomainError::Embedding("provider returned no embedding for the query".into())
            })?;

        let snapshot = self.store.snapshot();
        ranking::top_k(&snapshot, &query, limit.unwrap_or(DEFAULT_LIMIT), self.metric)
    }
}
