use crate::domain::ports::embedding_store::EmbeddingStore;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct CorpusStats {
    pub articles: usize,
    pub dimension: Option<usize>,
}

pub struct StatsUseCase {
    store: Arc<dyn EmbeddingStore>,
}

impl StatsUseCase {
    pub fn new(store: Arc<dyn EmbeddingStore>) -> Self {
        Self { store }
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            articles: self.store.len(),
            dimension: self.store.dimension(),
        }
    }
}
