use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::{EmbeddingProvider, InputType};
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Google Gemini embeddings (`text-embedding-004` by default).
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BatchRequest {
    requests: Vec<EmbedRequest>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EmbedRequest {
    model: String,
    content: Content,
    task_type: String,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct BatchResponse {
    embeddings: Vec<Embedding>,
}

#[derive(Deserialize)]
struct Embedding {
    values: Vec<f32>,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model: model.unwrap_or_else(|| "models/text-embedding-004".to_string()),
        }
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for GeminiProvider {
    async fn embed(
        &self,
        texts: &[String],
        input_type: InputType,
    ) -> Result<Vec<Vec<f32>>, DomainError> {
        let task_type = match input_type {
            InputType::Document => "RETRIEVAL_DOCUMENT",
            InputType::Query => "SEMANTIC_SIMILARITY",
        };

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/{}:batchEmbedContents?key={}",
            self.model, self.api_key
        );

        let resp = self
            .client
            .post(&url)
            .json(&BatchRequest {
                requests: texts
                    .iter()
                    .map(|text| EmbedRequest {
                        model: self.model.clone(),
                        content: Content {
                            parts: vec![Part { text: text.clone() }],
                        },
                        task_type: task_type.to_string(),
                    })
                    .collect(),
            })
            .send()
            .await
            .map_err(|e| DomainError::Embedding(format!("Gemini API error: {e}")))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(DomainError::Embedding(format!("Gemini API {status}: {body}")));
        }

        let result: BatchResponse = resp
            .json()
            .await
            .map_err(|e| DomainError::Embedding(format!("Gemini parse error: {e}")))?;
        Ok(result.embeddings.into_iter().map(|e| e.values).collect())
    }

    fn dimension(&self) -> usize {
        match self.model.as_str() {
            "models/text-embedding-004" => 768,
            "models/embedding-001" => 768,
            _ => 0,
        }
    }
}
