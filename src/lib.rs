pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod server;

use crate::application::ingest::{IngestReceipt, IngestUseCase};
use crate::application::recommend::RecommendUseCase;
use crate::application::stats::{CorpusStats, StatsUseCase};
use crate::domain::entities::record::ScoredMatch;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::embedding_store::EmbeddingStore;
use crate::domain::values::metric::Metric;
use crate::infrastructure::corpus::file::read_corpus_rows;
use crate::infrastructure::embeddings::gemini::GeminiProvider;
use crate::infrastructure::embeddings::noop::NoopProvider;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::memory::store::InMemoryStore;
use std::path::Path;
use std::sync::Arc;

pub struct ReadNext {
    recommend_uc: RecommendUseCase,
    ingest_uc: IngestUseCase,
    stats_uc: StatsUseCase,
}

impl ReadNext {
    /// Loads the corpus file and wires the embedding provider from the
    /// environment (`READNEXT_EMBEDDING_PROVIDER`: gemini | openai;
    /// anything else gets the always-failing noop provider).
    pub fn new(corpus_path: &Path, metric: Metric) -> Result<Self, DomainError> {
        let provider =
            std::env::var("READNEXT_EMBEDDING_PROVIDER").unwrap_or_else(|_| "noop".into());
        let api_key = std::env::var("READNEXT_EMBEDDING_API_KEY").unwrap_or_default();
        let model = std::env::var("READNEXT_EMBEDDING_MODEL").ok();

        let embedder: Arc<dyn EmbeddingProvider> = match provider.as_str() {
            "gemini" => Arc::new(GeminiProvider::new(api_key, model)),
            "openai" => Arc::new(OpenAiProvider::new(api_key, model)),
            _ => Arc::new(NoopProvider),
        };

        let rows = read_corpus_rows(corpus_path)?;
        let store = Arc::new(InMemoryStore::load(rows)?);
        tracing::info!(
            articles = store.len(),
            dimension = ?store.dimension(),
            "corpus loaded from {}",
            corpus_path.display()
        );

        // Vectors from a different model are numerically incompatible with
        // the corpus even when the length happens to match, so at minimum
        // flag a length disagreement up front.
        let provider_dim = embedder.dimension();
        if provider_dim > 0 {
            if let Some(stored_dim) = store.dimension() {
                if stored_dim != provider_dim {
                    tracing::warn!(
                        stored_dim,
                        provider_dim,
                        "corpus vectors and embedding provider disagree on dimension; \
                         recommendation requests will be rejected"
                    );
                }
            }
        }

        Ok(Self::with_providers(store, embedder, metric))
    }

    pub fn with_providers(
        store: Arc<dyn EmbeddingStore>,
        embedder: Arc<dyn EmbeddingProvider>,
        metric: Metric,
    ) -> Self {
        Self {
            recommend_uc: RecommendUseCase::new(store.clone(), embedder.clone(), metric),
            ingest_uc: IngestUseCase::new(store.clone(), embedder),
            stats_uc: StatsUseCase::new(store),
        }
    }

    // Delegating methods
    pub async fn recommend(
        &self,
        text: &str,
        limit: Option<usize>,
    ) -> Result<Vec<ScoredMatch>, DomainError> {
        self.recommend_uc.execute(text, limit).await
    }

    pub async fn upload(&self, title: String, text: String) -> Result<IngestReceipt, DomainError> {
        self.ingest_uc.execute(title, text).await
    }

    pub fn stats(&self) -> CorpusStats {
        self.stats_uc.stats()
    }
}
