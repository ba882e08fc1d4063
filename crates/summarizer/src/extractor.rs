//! Relevance-based sentence selection
//!
//! The whole document is embedded once, every sentence is embedded in a
//! single batch call, and each sentence is scored by cosine similarity to
//! the document vector. The best `round(k * top_fraction)` sentences are
//! returned in their original order.

use crate::segmenter::{Sentence, SentenceSegmenter, UnicodeSentenceSegmenter};
use crate::similarity::cosine_similarity_many;
use crate::{Result, SummarizerConfig, SummarizerError};
use ai::EmbeddingProvider;
use serde::Serialize;
use std::cmp::Ordering;
use tracing::debug;

/// Доля предложений по умолчанию
pub const DEFAULT_TOP_FRACTION: f64 = 0.2;

/// A sentence with its similarity to the whole document
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoredSentence<'a> {
    /// Position in reading order
    pub index: usize,
    pub text: &'a str,
    /// Cosine similarity to the document embedding
    pub score: f32,
}

pub(crate) fn validate_fraction(top_fraction: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&top_fraction) {
        return Err(SummarizerError::InvalidArgument(format!(
            "top_fraction must be within [0, 1], got {top_fraction}"
        )));
    }
    Ok(())
}

/// Number of sentences kept out of `sentence_count`.
///
/// Rounds half to even: 2.5 → 2, 1.5 → 2, 0.5 → 0.
pub fn selection_size(sentence_count: usize, top_fraction: f64) -> Result<usize> {
    validate_fraction(top_fraction)?;
    Ok((sentence_count as f64 * top_fraction).round_ties_even() as usize)
}

/// Highest score first, NaN after every real score; equal scores keep reading order
fn by_relevance(a: &ScoredSentence<'_>, b: &ScoredSentence<'_>) -> Ordering {
    let by_score = match (a.score.is_nan(), b.score.is_nan()) {
        (false, false) => b.score.total_cmp(&a.score),
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (true, true) => Ordering::Equal,
    };
    by_score.then_with(|| a.index.cmp(&b.index))
}

/// Экстрактор наиболее репрезентативных предложений
#[derive(Debug, Clone, Default)]
pub struct RelevanceExtractor<S = UnicodeSentenceSegmenter> {
    segmenter: S,
    config: SummarizerConfig,
}

impl RelevanceExtractor {
    /// Create with the Unicode segmenter and default config
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: SentenceSegmenter> RelevanceExtractor<S> {
    pub fn with_segmenter(segmenter: S) -> Self {
        Self {
            segmenter,
            config: SummarizerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SummarizerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the fraction of sentences to keep. Validated on use, never clamped.
    pub fn with_top_fraction(mut self, top_fraction: f64) -> Self {
        self.config.top_fraction = top_fraction;
        self
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    /// Score every sentence against the document, in reading order
    pub fn score<'a, P>(&self, text: &'a str, provider: &P) -> Result<Vec<ScoredSentence<'a>>>
    where
        P: EmbeddingProvider + ?Sized,
    {
        let sentences = self.segmenter.segment(text);
        score_segmented(text, sentences, provider)
    }

    /// Selected sentences with their scores, in reading order
    pub fn select<'a, P>(&self, text: &'a str, provider: &P) -> Result<Vec<ScoredSentence<'a>>>
    where
        P: EmbeddingProvider + ?Sized,
    {
        validate_fraction(self.config.top_fraction)?;
        self.select_segmented(text, self.segmenter.segment(text), provider)
    }

    /// [`Self::select`] over sentences already produced by [`Self::segmenter`]
    pub fn select_segmented<'a, P>(
        &self,
        text: &'a str,
        sentences: Vec<Sentence<'a>>,
        provider: &P,
    ) -> Result<Vec<ScoredSentence<'a>>>
    where
        P: EmbeddingProvider + ?Sized,
    {
        let top_fraction = self.config.top_fraction;
        let n = selection_size(sentences.len(), top_fraction)?;

        debug!(
            sentences = sentences.len(),
            selected = n,
            top_fraction,
            "Selecting relevant sentences"
        );

        // Ничего не выбираем - провайдер не вызываем
        if n == 0 {
            return Ok(Vec::new());
        }

        let mut scored = score_segmented(text, sentences, provider)?;
        scored.sort_by(by_relevance);
        scored.truncate(n);
        scored.sort_by_key(|sentence| sentence.index);

        Ok(scored)
    }

    /// Selected sentences joined by a single space
    pub fn extract<P>(&self, text: &str, provider: &P) -> Result<String>
    where
        P: EmbeddingProvider + ?Sized,
    {
        let selected = self.select(text, provider)?;
        Ok(selected
            .iter()
            .map(|sentence| sentence.text)
            .collect::<Vec<_>>()
            .join(" "))
    }
}

fn score_segmented<'a, P>(
    text: &'a str,
    sentences: Vec<Sentence<'a>>,
    provider: &P,
) -> Result<Vec<ScoredSentence<'a>>>
where
    P: EmbeddingProvider + ?Sized,
{
    if sentences.is_empty() {
        return Ok(Vec::new());
    }

    let document_embedding = provider.embed(text)?;

    let texts: Vec<&str> = sentences.iter().map(|sentence| sentence.text).collect();
    let sentence_embeddings = provider.embed_batch(&texts)?;
    if sentence_embeddings.len() != sentences.len() {
        return Err(SummarizerError::ShapeMismatch {
            expected: sentences.len(),
            actual: sentence_embeddings.len(),
        });
    }

    let scores = cosine_similarity_many(&document_embedding, &sentence_embeddings)?;

    Ok(sentences
        .into_iter()
        .zip(scores)
        .map(|(sentence, score)| ScoredSentence {
            index: sentence.index,
            text: sentence.text,
            score,
        })
        .collect())
}

/// Keep the `top_fraction` of sentences most similar to the whole document.
///
/// Returns them joined by a single space, in original order. Empty input or
/// a selection size that rounds to zero yields an empty string. Pass
/// [`DEFAULT_TOP_FRACTION`] for the usual 20%.
pub fn extract_top_sentences<P>(
    document_text: &str,
    embedding_provider: &P,
    top_fraction: f64,
) -> Result<String>
where
    P: EmbeddingProvider + ?Sized,
{
    RelevanceExtractor::new()
        .with_top_fraction(top_fraction)
        .extract(document_text, embedding_provider)
}

/// Same selection as [`extract_top_sentences`], keeping index and score
pub fn select_top_sentences<'a, P>(
    document_text: &'a str,
    embedding_provider: &P,
    top_fraction: f64,
) -> Result<Vec<ScoredSentence<'a>>>
where
    P: EmbeddingProvider + ?Sized,
{
    RelevanceExtractor::new()
        .with_top_fraction(top_fraction)
        .select(document_text, embedding_provider)
}

/// Every sentence with its score, in reading order
pub fn score_sentences<'a, P>(
    document_text: &'a str,
    embedding_provider: &P,
) -> Result<Vec<ScoredSentence<'a>>>
where
    P: EmbeddingProvider + ?Sized,
{
    RelevanceExtractor::new().score(document_text, embedding_provider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ai::MockEmbeddingProvider;

    const DOC: &str = "A. B is similar. C. B is similar too.";

    fn provider() -> MockEmbeddingProvider {
        MockEmbeddingProvider::new(vec![0.0, 1.0])
            .with_embedding(DOC, vec![1.0, 0.0])
            .with_embedding("B is similar.", vec![1.0, 0.1])
            .with_embedding("B is similar too.", vec![1.0, 0.2])
    }

    #[test]
    fn test_selection_size_rounding() {
        assert_eq!(selection_size(4, 0.5).unwrap(), 2);
        assert_eq!(selection_size(5, 0.5).unwrap(), 2);
        assert_eq!(selection_size(3, 0.5).unwrap(), 2);
        assert_eq!(selection_size(1, 0.5).unwrap(), 0);
        assert_eq!(selection_size(10, 0.2).unwrap(), 2);
        assert_eq!(selection_size(0, 1.0).unwrap(), 0);
    }

    #[test]
    fn test_example_document() {
        let summary = extract_top_sentences(DOC, &provider(), 0.5).unwrap();
        assert_eq!(summary, "B is similar. B is similar too.");
    }

    #[test]
    fn test_select_keeps_scores_and_indices() {
        let selected = select_top_sentences(DOC, &provider(), 0.5).unwrap();

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].index, 1);
        assert_eq!(selected[1].index, 3);
        assert!(selected[0].score > selected[1].score);
    }

    #[test]
    fn test_score_covers_every_sentence() {
        let scored = score_sentences(DOC, &provider()).unwrap();

        assert_eq!(scored.len(), 4);
        assert_eq!(scored[0].score, 0.0);
        assert_eq!(scored[2].score, 0.0);
        assert!(scored[1].score > 0.9);
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        // Все предложения получают один и тот же вектор
        let provider = MockEmbeddingProvider::new(vec![1.0, 1.0]);
        let summary = extract_top_sentences("One. Two. Three. Four.", &provider, 0.5).unwrap();
        assert_eq!(summary, "One. Two.");
    }

    #[test]
    fn test_extractor_uses_config_fraction() {
        let extractor =
            RelevanceExtractor::new().with_config(SummarizerConfig { top_fraction: 0.25 });
        assert_eq!(extractor.config().top_fraction, 0.25);
        assert_eq!(extractor.extract(DOC, &provider()).unwrap(), "B is similar.");
    }
}
