use crate::{AiError, EmbeddingProvider, Result};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Table-driven provider for development/testing.
///
/// Texts found in the table get their registered vector, everything else
/// gets the fallback vector.
#[derive(Debug)]
pub struct MockEmbeddingProvider {
    table: HashMap<String, Vec<f32>>,
    fallback: Vec<f32>,
    failure: Option<String>,
    single_calls: AtomicUsize,
    batch_calls: AtomicUsize,
}

impl MockEmbeddingProvider {
    pub fn new(fallback: Vec<f32>) -> Self {
        Self {
            table: HashMap::new(),
            fallback,
            failure: None,
            single_calls: AtomicUsize::new(0),
            batch_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_embedding(mut self, text: impl Into<String>, embedding: Vec<f32>) -> Self {
        self.table.insert(text.into(), embedding);
        self
    }

    /// Every call fails with `AiError::ModelError(message)`
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.failure = Some(message.into());
        self
    }

    pub fn single_calls(&self) -> usize {
        self.single_calls.load(Ordering::SeqCst)
    }

    pub fn batch_calls(&self) -> usize {
        self.batch_calls.load(Ordering::SeqCst)
    }

    fn lookup(&self, text: &str) -> Result<Vec<f32>> {
        if let Some(message) = &self.failure {
            return Err(AiError::ModelError(message.clone()));
        }
        Ok(self
            .table
            .get(text)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone()))
    }
}

impl EmbeddingProvider for MockEmbeddingProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.single_calls.fetch_add(1, Ordering::SeqCst);
        self.lookup(text)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        self.batch_calls.fetch_add(1, Ordering::SeqCst);
        texts.iter().map(|text| self.lookup(text)).collect()
    }
}
