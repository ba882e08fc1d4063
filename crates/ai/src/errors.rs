use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    /// Model-side failure reported by the provider
    #[error("Model error: {0}")]
    ModelError(String),
    /// Inference error (malformed or incomplete provider output)
    #[error("Inference error: {0}")]
    InferenceError(String),
    /// Input validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
    /// Configuration error
    #[error("Config error: {0}")]
    ConfigError(String),
    /// Network error (for remote APIs)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<reqwest::Error> for AiError {
    fn from(e: reqwest::Error) -> Self {
        AiError::NetworkError(e.to_string())
    }
}
