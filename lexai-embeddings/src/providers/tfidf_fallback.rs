//! Hashing term-frequency embedder.
//!
//! Terms are FNV-1a hashed into fixed buckets and weighted by frequency and
//! a length-based IDF approximation. Used offline, in tests, and as the last
//! link of the fallback chain when enabled.

use std::collections::HashMap;

use lexai_core::errors::LexaiResult;
use lexai_core::traits::IEmbeddingProvider;

pub struct TfIdfFallback {
    dimensions: usize,
}

impl TfIdfFallback {
    pub fn new(dimensions: usize) -> Self {
        Self { dimensions }
    }

    fn bucket(term: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in term.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    /// Lowercased alphanumeric runs of at least two characters. Digits are
    /// kept so article numbers ("175") contribute.
    fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
        text.split(|c: char| !c.is_alphanumeric())
            .filter(|s| s.chars().count() >= 2)
            .map(str::to_lowercase)
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let mut vec = vec![0.0f32; self.dimensions];
        if self.dimensions == 0 {
            return vec;
        }

        let mut tf: HashMap<String, f32> = HashMap::new();
        let mut total = 0.0f32;
        for tok in Self::tokenize(text) {
            *tf.entry(tok).or_default() += 1.0;
            total += 1.0;
        }
        if total == 0.0 {
            return vec;
        }

        for (term, count) in &tf {
            let idf = 1.0 + (term.chars().count() as f32).ln();
            vec[Self::bucket(term, self.dimensions)] += (count / total) * idf;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for TfIdfFallback {
    fn embed(&self, text: &str) -> LexaiResult<Vec<f32>> {
        Ok(self.vectorize(text))
    }

    fn embed_batch(&self, texts: &[String]) -> LexaiResult<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf-fallback"
    }

    fn is_available(&self) -> bool {
        true
    }
}
