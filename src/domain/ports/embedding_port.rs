use crate::domain::error::DomainError;

/// How the provider should treat the text: corpus documents and incoming
/// queries are embedded with different task hints on providers that
/// distinguish them.
#[derive(Debug, Clone, Copy)]
pub enum InputType {
    Document,
    Query,
}

/// External embedding generation. A fallible, potentially slow remote call;
/// the ranking engine never touches this — callers resolve the query vector
/// first.
#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(
        &self,
        texts: &[String],
        input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, DomainError>;

    /// Advertised output dimension, or 0 when unknown. Used only for the
    /// startup cross-check against the corpus dimension.
    fn dimension(&self) -> usize;
}
