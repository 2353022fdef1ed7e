//! HybridRetriever: implements IRetriever, orchestrates the full pipeline.
//!
//! query → citation tags → (lexical search ∥ query embedding + dense search)
//! → weighted fusion → MMR → hits.

use lexai_core::config::LexaiConfig;
use lexai_core::errors::{LexaiError, LexaiResult, RetrievalError};
use lexai_core::models::{Hit, Passage};
use lexai_core::traits::{IDenseIndex, IEmbeddingProvider, ILexicalIndex, IRetriever};
use lexai_observability::{embedding_span, fusion_span, mmr_span, retrieval_span, search_span};
use tracing::{debug, info, warn};

use crate::citation::CitationDetector;
use crate::passage::PassageMaterializer;
use crate::ranking::{FusionEngine, MmrSelector};
use crate::search::{DenseSearcher, LexicalSearcher};

/// Backend output for one side of the request.
type SideResult = LexaiResult<Vec<Hit>>;

pub struct HybridRetriever<'a> {
    lexical: &'a dyn ILexicalIndex,
    dense: &'a dyn IDenseIndex,
    embedder: &'a dyn IEmbeddingProvider,
    detector: CitationDetector,
    fusion: FusionEngine,
    mmr: MmrSelector,
    passages: PassageMaterializer,
    config: LexaiConfig,
}

impl<'a> HybridRetriever<'a> {
    pub fn new(
        lexical: &'a dyn ILexicalIndex,
        dense: &'a dyn IDenseIndex,
        embedder: &'a dyn IEmbeddingProvider,
        config: LexaiConfig,
    ) -> Self {
        Self {
            lexical,
            dense,
            embedder,
            detector: CitationDetector::new(),
            fusion: FusionEngine::new(config.retrieval.fusion.clone()),
            mmr: MmrSelector::new(config.retrieval.mmr.clone()),
            passages: PassageMaterializer::new(config.passage.clone()),
            config,
        }
    }

    pub fn config(&self) -> &LexaiConfig {
        &self.config
    }

    /// Run both searches concurrently. Returns the query vector (if the
    /// embedding succeeded) with each side's result.
    fn gather(&self, query: &str, tags: &[String]) -> (Option<Vec<f32>>, SideResult, SideResult) {
        let retrieval = &self.config.retrieval;
        let lexical = LexicalSearcher::new(self.lexical, &self.config.lexical, &self.passages);
        let dense = DenseSearcher::new(self.dense, self.embedder, &self.passages);

        let (lexical_result, (query_vector, dense_result)) = rayon::join(
            || {
                let _span = search_span!(self.lexical.name(), retrieval.top_k_lexical).entered();
                lexical.search_with_tags(query, tags, retrieval.top_k_lexical)
            },
            || {
                let vector = {
                    let _span = embedding_span!(self.embedder.name(), 1usize).entered();
                    dense.embed_query(query)
                };
                match vector {
                    Ok(v) => {
                        let _span = search_span!(self.dense.name(), retrieval.top_k_dense).entered();
                        let hits = dense.search_vector(&v, retrieval.top_k_dense);
                        (Some(v), hits)
                    }
                    Err(e) => (None, Err(e)),
                }
            },
        );
        (query_vector, lexical_result, dense_result)
    }

    /// Passages for the selected hits, in selection order.
    pub fn retrieve_passages(&self, query: &str, topn: usize) -> LexaiResult<Vec<Passage>> {
        let hits = self.hybrid_search(query, topn)?;
        Ok(hits.iter().map(|h| self.passages.materialize(h)).collect())
    }
}

/// Keep a side's hits, or log its failure and continue with none.
fn settle(side: &str, result: SideResult) -> (Vec<Hit>, Option<LexaiError>) {
    match result {
        Ok(hits) => (hits, None),
        Err(e) => {
            warn!(side, error = %e, "search backend failed, continuing without it");
            (Vec::new(), Some(e))
        }
    }
}

impl<'a> IRetriever for HybridRetriever<'a> {
    fn hybrid_search(&self, query: &str, topn: usize) -> LexaiResult<Vec<Hit>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }
        let topn = self.config.retrieval.clamp_topn(topn);
        let _span = retrieval_span!(query.chars().count(), topn).entered();

        let tags = self.detector.detect(query);
        debug!(?tags, "citation detection");

        let (query_vector, lexical_result, dense_result) = self.gather(query, &tags);
        let (lexical_hits, lexical_err) = settle("lexical", lexical_result);
        let (dense_hits, dense_err) = settle("dense", dense_result);

        if let (Some(l), Some(d)) = (&lexical_err, &dense_err) {
            return Err(RetrievalError::RetrievalFailed {
                lexical: l.to_string(),
                dense: d.to_string(),
            }
            .into());
        }

        let fused = {
            let _span = fusion_span!(lexical_hits.len() + dense_hits.len(), !tags.is_empty()).entered();
            self.fusion.fuse(&lexical_hits, &dense_hits, &tags)
        };
        debug!(
            lexical = lexical_hits.len(),
            dense = dense_hits.len(),
            fused = fused.len(),
            "fusion complete"
        );

        let picked = {
            let _span = mmr_span!(fused.len(), topn).entered();
            self.mmr
                .select(self.embedder, query_vector.as_deref(), &fused, topn)
        };

        info!(
            hits = picked.len(),
            citation = !tags.is_empty(),
            degraded = lexical_err.is_some() || dense_err.is_some(),
            "hybrid search complete"
        );
        Ok(picked)
    }
}
