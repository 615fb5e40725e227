use readnext::domain::error::DomainError;
use readnext::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use readnext::domain::values::metric::Metric;
use readnext::infrastructure::embeddings::noop::NoopProvider;
use readnext::infrastructure::memory::store::InMemoryStore;
use readnext::ReadNext;
use std::collections::HashMap;
use std::sync::Arc;

/// Maps known texts to canned vectors, standing in for the remote model.
struct StubProvider {
    vectors: HashMap<String, Vec<f32>>,
}

impl StubProvider {
    fn new(entries: &[(&str, &[f32])]) -> Self {
        Self {
            vectors: entries
                .iter()
                .map(|(text, v)| (text.to_string(), v.to_vec()))
                .collect(),
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for StubProvider {
    async fn embed(
        &self,
        texts: &[String],
        _input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        texts
            .iter()
            .map(|t| {
                self.vectors
                    .get(t)
                    .cloned()
                    .ok_or_else(|| DomainError::Embedding(format!("no stub vector for {t:?}")))
            })
            .collect()
    }

    fn dimension(&self) -> usize {
        2
    }
}

fn setup() -> ReadNext {
    let store = InMemoryStore::load(vec![
        ("Hurricane season outlook", "1.0,0.0"),
        ("Transit fare increase", "0.0,1.0"),
        ("Storm surge preparedness", "0.9,0.1"),
    ])
    .unwrap();

    let embedder = StubProvider::new(&[
        ("a story about weather", &[1.0, 0.0][..]),
        ("a story about buses", &[0.0, 1.0][..]),
        ("brand new article", &[0.8, 0.2][..]),
    ]);

    ReadNext::with_providers(Arc::new(store), Arc::new(embedder), Metric::Cosine)
}

#[tokio::test]
async fn test_recommend_returns_closest_articles() {
    let app = setup();
    let matches = app.recommend("a story about weather", Some(2)).await.unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].id, "Hurricane season outlook");
    assert_eq!(matches[1].id, "Storm surge preparedness");
}

#[tokio::test]
async fn test_recommend_defaults_to_two_matches() {
    let app = setup();
    let matches = app.recommend("a story about weather", None).await.unwrap();
    assert_eq!(matches.len(), 2);
}

#[tokio::test]
async fn test_recommend_against_empty_corpus_is_empty() {
    let store = InMemoryStore::new();
    let embedder = StubProvider::new(&[("anything", &[1.0, 0.0][..])]);
    let app = ReadNext::with_providers(Arc::new(store), Arc::new(embedder), Metric::Cosine);

    let matches = app.recommend("anything", Some(5)).await.unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn test_recommend_surfaces_provider_failure() {
    let app = setup();
    let err = app.recommend("text the stub has never seen", Some(2)).await;
    assert!(matches!(err, Err(DomainError::Embedding(_))));
}

#[tokio::test]
async fn test_noop_provider_rejects_recommendations() {
    let store = InMemoryStore::load(vec![("A", "1.0,0.0")]).unwrap();
    let app = ReadNext::with_providers(Arc::new(store), Arc::new(NoopProvider), Metric::Cosine);

    let err = app.recommend("anything", None).await;
    assert!(matches!(err, Err(DomainError::Embedding(_))));
}

#[tokio::test]
async fn test_upload_then_recommend_finds_new_article() {
    let app = setup();
    app.upload("Bus route changes".into(), "a story about buses".into())
        .await
        .unwrap();

    let matches = app.recommend("a story about buses", Some(1)).await.unwrap();
    assert_eq!(matches[0].id, "Bus route changes");

    let stats = app.stats();
    assert_eq!(stats.articles, 4);
    assert_eq!(stats.dimension, Some(2));
}

#[tokio::test]
async fn test_upload_with_mismatched_provider_dimension_fails() {
    let store = InMemoryStore::load(vec![("A", "1.0,0.0,0.0")]).unwrap();
    let embedder = StubProvider::new(&[("short text", &[1.0, 0.0][..])]);
    let app = ReadNext::with_providers(Arc::new(store), Arc::new(embedder), Metric::Cosine);

    let err = app.upload("New".into(), "short text".into()).await;
    assert!(matches!(
        err,
        Err(DomainError::DimensionMismatch {
            expected: 3,
            got: 2,
            ..
        })
    ));
    assert_eq!(app.stats().articles, 1);
}

#[tokio::test]
async fn test_stats_reflects_corpus() {
    let app = setup();
    let stats = app.stats();
    assert_eq!(stats.articles, 3);
    assert_eq!(stats.dimension, Some(2));
}
