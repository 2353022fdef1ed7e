//! Dense search adapter.

use lexai_core::constants::DENSE_BACKEND;
use lexai_core::errors::{LexaiResult, SearchError};
use lexai_core::models::{Hit, HitSource};
use lexai_core::traits::{IDenseIndex, IEmbeddingProvider};
use tracing::debug;

use crate::passage::PassageMaterializer;

/// Embeds the query and runs a vector search against the dense index.
pub struct DenseSearcher<'a> {
    index: &'a dyn IDenseIndex,
    embedder: &'a dyn IEmbeddingProvider,
    passages: &'a PassageMaterializer,
}

impl<'a> DenseSearcher<'a> {
    pub fn new(
        index: &'a dyn IDenseIndex,
        embedder: &'a dyn IEmbeddingProvider,
        passages: &'a PassageMaterializer,
    ) -> Self {
        Self {
            index,
            embedder,
            passages,
        }
    }

    /// Embed `query`. A failed embedding makes the dense backend unusable
    /// for this request, so it is reported as the backend being unavailable.
    pub fn embed_query(&self, query: &str) -> LexaiResult<Vec<f32>> {
        self.embedder.embed(query).map_err(|e| {
            SearchError::BackendUnavailable {
                backend: DENSE_BACKEND.to_string(),
                reason: format!("query embedding failed: {e}"),
            }
            .into()
        })
    }

    /// Search with a precomputed query vector.
    pub fn search_vector(&self, vector: &[f32], top_k: usize) -> LexaiResult<Vec<Hit>> {
        super::check_top_k(top_k)?;
        let raw = self.index.search(vector, top_k)?;
        let hits = super::into_hits(raw, HitSource::Dense, self.passages);
        debug!(backend = self.index.name(), hits = hits.len(), "dense search complete");
        Ok(hits)
    }

    pub fn search(&self, query: &str, top_k: usize) -> LexaiResult<Vec<Hit>> {
        let vector = self.embed_query(query)?;
        self.search_vector(&vector, top_k)
    }
}
