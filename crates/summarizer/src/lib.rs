//! Extractive summarization by relevance to the whole document.
//!
//! The document and each of its sentences are embedded by an
//! [`ai::EmbeddingProvider`]; the sentences closest to the document vector
//! are kept and returned in reading order.

pub mod config;
pub mod errors;
pub mod extractor;
pub mod segmenter;
pub mod similarity;

pub use config::SummarizerConfig;
pub use errors::SummarizerError;
pub use extractor::{
    extract_top_sentences, score_sentences, select_top_sentences, selection_size,
    RelevanceExtractor, ScoredSentence, DEFAULT_TOP_FRACTION,
};
pub use segmenter::{Sentence, SentenceSegmenter, UnicodeSentenceSegmenter};
pub use similarity::{cosine_similarity, cosine_similarity_many};

/// Result type for summarization operations
pub type Result<T> = std::result::Result<T, SummarizerError>;
