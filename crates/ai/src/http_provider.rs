use crate::{AiError, EmbeddingConfig, EmbeddingProvider, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Embedding provider backed by an OpenAI-compatible `/embeddings` endpoint
#[derive(Debug, Clone)]
pub struct HttpEmbeddingProvider {
    client: Client,
    config: EmbeddingConfig,
    api_key: Option<String>,
}

impl HttpEmbeddingProvider {
    /// Create provider, reading the API key from `config.api_key_env`
    pub fn new(config: EmbeddingConfig) -> Result<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty());
        Self::with_api_key(config, api_key)
    }

    pub fn with_api_key(config: EmbeddingConfig, api_key: Option<String>) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AiError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        info!(
            endpoint = %config.endpoint,
            model = %config.model_name,
            authenticated = api_key.is_some(),
            "HTTP embedding provider initialized"
        );

        Ok(Self {
            client,
            config,
            api_key,
        })
    }

    pub fn config(&self) -> &EmbeddingConfig {
        &self.config
    }

    fn url(&self) -> String {
        format!("{}/embeddings", self.config.endpoint.trim_end_matches('/'))
    }

    /// Один HTTP запрос; возвращает векторы в порядке входа
    fn request(&self, input: EmbeddingInput<'_>, expected: usize) -> Result<Vec<Vec<f32>>> {
        let body = EmbeddingRequest {
            model: &self.config.model_name,
            input,
        };

        let mut request = self.client.post(self.url()).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().unwrap_or_default();
            return Err(AiError::NetworkError(format!(
                "HTTP {}: {}",
                status.as_u16(),
                text
            )));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .map_err(|e| AiError::InferenceError(format!("Malformed embedding response: {e}")))?;

        self.collect_vectors(parsed, expected)
    }

    fn collect_vectors(
        &self,
        mut parsed: EmbeddingResponse,
        expected: usize,
    ) -> Result<Vec<Vec<f32>>> {
        if parsed.data.len() != expected {
            return Err(AiError::InferenceError(format!(
                "Expected {} embeddings, got {}",
                expected,
                parsed.data.len()
            )));
        }

        // API не обязан сохранять порядок, поэтому восстанавливаем его по index
        parsed.data.sort_by_key(|item| item.index);
        for (position, item) in parsed.data.iter().enumerate() {
            if item.index != position {
                return Err(AiError::InferenceError(format!(
                    "Embedding indices are not contiguous: missing index {position}"
                )));
            }
            if let Some(dim) = self.config.embedding_dim {
                if item.embedding.len() != dim {
                    return Err(AiError::ValidationError(format!(
                        "Embedding dimension mismatch: expected {}, got {}",
                        dim,
                        item.embedding.len()
                    )));
                }
            }
        }

        Ok(parsed.data.into_iter().map(|item| item.embedding).collect())
    }
}

impl EmbeddingProvider for HttpEmbeddingProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut vectors = self.request(EmbeddingInput::Single(text), 1)?;
        vectors
            .pop()
            .ok_or_else(|| AiError::InferenceError("Empty embedding response".to_string()))
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        let mut vectors = Vec::with_capacity(texts.len());

        for chunk in texts.chunks(self.config.batch_size) {
            debug!(batch_len = chunk.len(), "Requesting embeddings");
            vectors.extend(self.request(EmbeddingInput::Batch(chunk), chunk.len())?);
        }

        Ok(vectors)
    }
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: EmbeddingInput<'a>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum EmbeddingInput<'a> {
    Single(&'a str),
    Batch(&'a [&'a str]),
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    index: usize,
    embedding: Vec<f32>,
}
