pub mod config;
pub mod errors;
pub mod http_provider;
pub mod mock_provider;
pub mod provider;

// Core exports
pub use config::EmbeddingConfig;
pub use errors::AiError;
pub use http_provider::HttpEmbeddingProvider;
pub use mock_provider::MockEmbeddingProvider;
pub use provider::EmbeddingProvider;

/// Result type for AI operations
pub type Result<T> = std::result::Result<T, AiError>;
