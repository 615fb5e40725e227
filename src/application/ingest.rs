use crate::domain::entities::record::Record;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use crate::domain::ports::embedding_store::EmbeddingStore;
use std::sync::Arc;

/// Outcome of a successful ingest.
#[derive(Debug, Clone)]
pub struct IngestReceipt {
    pub id: String,
    pub dimension: usize,
}

pub struct IngestUseCase {
    store: Arc<dyn EmbeddingStore>,
    embedder: Arc<dyn EmbeddingProvider>,
}

impl IngestUseCase {
    pub fn new(store: Arc<dyn EmbeddingStore>, embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self { store, embedder }
    }

    /// Embeds an uploaded article and appends it to the corpus. Unlike a
    /// side index, the vector IS the record here, so an embedding failure
    /// fails the ingest.
    pub async fn execute(&self, title: String, text: String) -> Result<IngestReceipt, DomainError> {
        let vectors = self
            .embedder
            .embed(&[text], InputType::Document)
            .await?;
        let vector = vectors
            .into_iter()
            .next()
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                DomainError::Embedding("provider returned no embedding for the document".into())
            })?;

        let dimension = vector.len();
        self.store.append(Record::new(title.clone(), vector))?;
        Ok(IngestReceipt {
            id: title,
            dimension,
        })
    }
}
