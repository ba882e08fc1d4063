use ai::AiError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummarizerError {
    /// Malformed caller input, e.g. `top_fraction` outside `[0, 1]`
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Embedding provider failure, passed through untouched
    #[error(transparent)]
    Provider(#[from] AiError),

    /// Vectors of different dimension, or a batch of the wrong length
    #[error("Shape mismatch: expected {expected}, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
}
