//! Maximal Marginal Relevance selection.
//!
//! mmr(j) = λ · rel(j) − (1 − λ) · max_{s ∈ selected} sim(j, s)
//!
//! The first pick is the most relevant candidate. Ties go to the earliest
//! candidate in pool order.

use lexai_core::config::MmrConfig;
use lexai_core::models::Hit;
use lexai_core::traits::IEmbeddingProvider;
use tracing::{debug, warn};

/// Cosine similarity over the common prefix of `a` and `b`; 0.0 when either
/// side has zero norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let (mut dot, mut na, mut nb) = (0.0f64, 0.0f64, 0.0f64);
    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (x as f64, y as f64);
        dot += x * y;
        na += x * x;
        nb += y * y;
    }
    if na == 0.0 || nb == 0.0 {
        return 0.0;
    }
    dot / (na.sqrt() * nb.sqrt())
}

#[derive(Debug, Clone, Default)]
pub struct MmrSelector {
    config: MmrConfig,
}

impl MmrSelector {
    pub fn new(config: MmrConfig) -> Self {
        Self { config }
    }

    pub fn lambda(&self) -> f64 {
        self.config.lambda
    }

    /// Select up to `top_n` hits from the fused pool.
    ///
    /// Candidate texts are embedded in one batched call. Without a query
    /// vector, or when that call fails, the pool order is kept and the first
    /// `top_n` hits are returned.
    pub fn select(
        &self,
        embedder: &dyn IEmbeddingProvider,
        query_vector: Option<&[f32]>,
        candidates: &[Hit],
        top_n: usize,
    ) -> Vec<Hit> {
        if candidates.is_empty() || top_n == 0 {
            return Vec::new();
        }
        let Some(query_vector) = query_vector else {
            warn!("no query vector, keeping fused order");
            return candidates.iter().take(top_n).cloned().collect();
        };

        let working = &candidates[..candidates.len().min(self.config.max_candidates)];
        let texts: Vec<String> = working.iter().map(|h| h.embedding_text().to_string()).collect();

        match embedder.embed_batch(&texts) {
            Ok(embeddings) if embeddings.len() == working.len() => {
                self.select_with_embeddings(query_vector, working, &embeddings, top_n)
            }
            Ok(embeddings) => {
                warn!(
                    sent = working.len(),
                    received = embeddings.len(),
                    "candidate embedding count mismatch, keeping fused order"
                );
                candidates.iter().take(top_n).cloned().collect()
            }
            Err(e) => {
                warn!(error = %e, "candidate embedding failed, keeping fused order");
                candidates.iter().take(top_n).cloned().collect()
            }
        }
    }

    /// Greedy MMR over precomputed candidate embeddings, aligned with
    /// `candidates`. The working set is capped at `max_candidates`.
    pub fn select_with_embeddings(
        &self,
        query_vector: &[f32],
        candidates: &[Hit],
        embeddings: &[Vec<f32>],
        top_n: usize,
    ) -> Vec<Hit> {
        let pool = candidates
            .len()
            .min(embeddings.len())
            .min(self.config.max_candidates);
        let target = top_n.min(pool);
        if target == 0 {
            return Vec::new();
        }

        let lambda = self.config.lambda;
        let relevance: Vec<f64> = embeddings[..pool]
            .iter()
            .map(|e| cosine_similarity(e, query_vector))
            .collect();

        let mut first = 0;
        for (i, &r) in relevance.iter().enumerate() {
            if r > relevance[first] {
                first = i;
            }
        }

        let mut chosen = vec![false; pool];
        let mut selected = Vec::with_capacity(target);
        chosen[first] = true;
        selected.push(first);

        while selected.len() < target {
            let mut best: Option<(usize, f64)> = None;
            for j in 0..pool {
                if chosen[j] {
                    continue;
                }
                let redundancy = selected
                    .iter()
                    .map(|&s| cosine_similarity(&embeddings[j], &embeddings[s]))
                    .fold(f64::NEG_INFINITY, f64::max);
                let score = lambda * relevance[j] - (1.0 - lambda) * redundancy;
                if best.map_or(true, |(_, b)| score > b) {
                    best = Some((j, score));
                }
            }
            let Some((j, _)) = best else {
                break;
            };
            chosen[j] = true;
            selected.push(j);
        }

        debug!(pool, selected = selected.len(), lambda, "mmr selection complete");
        selected.into_iter().map(|i| candidates[i].clone()).collect()
    }
}
