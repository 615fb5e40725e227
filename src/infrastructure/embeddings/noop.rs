use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};

/// Placeholder used when no provider credentials are configured. Always
/// fails, so a misconfigured deployment rejects requests loudly instead of
/// ranking against a garbage query vector.
pub struct NoopProvider;

#[async_trait::async_trait]
impl EmbeddingProvider for NoopProvider {
    async fn embed(
        &self,
        _texts: &[String],
        _input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        Err(DomainError::Embedding(
            "no embedding provider configured (set READNEXT_EMBEDDING_PROVIDER)".into(),
        ))
    }

    fn dimension(&self) -> usize {
        0
    }
}
