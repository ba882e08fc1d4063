use crate::{AiError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for an OpenAI-compatible embedding endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Base URL of the API (the `/embeddings` path is appended)
    pub endpoint: String,
    /// Model name sent with every request
    pub model_name: String,
    /// Environment variable holding the API key; a missing variable means no auth header
    pub api_key_env: String,
    /// Maximum number of texts per HTTP request
    pub batch_size: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Expected embedding dimension (optional, checked against every response)
    pub embedding_dim: Option<usize>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080/v1".to_string(), // Локальный сервер эмбеддингов
            model_name: "all-MiniLM-L6-v2".to_string(),
            api_key_env: "SUMMARIZE_API_KEY".to_string(),
            batch_size: 64,
            timeout_secs: 60,
            embedding_dim: None,
        }
    }
}

impl EmbeddingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            return Err(AiError::ConfigError("endpoint must not be empty".to_string()));
        }
        if self.model_name.trim().is_empty() {
            return Err(AiError::ConfigError("model_name must not be empty".to_string()));
        }
        if self.batch_size == 0 {
            return Err(AiError::ConfigError(
                "batch_size must be greater than 0".to_string(),
            ));
        }
        if self.timeout_secs == 0 {
            return Err(AiError::ConfigError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }
        if self.embedding_dim == Some(0) {
            return Err(AiError::ConfigError(
                "embedding_dim must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
