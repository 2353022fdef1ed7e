use serde::{Deserialize, Serialize};

use super::defaults;

/// Dense/lexical weight pair used by the fusion engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FusionWeights {
    pub dense: f64,
    pub lexical: f64,
}

impl FusionWeights {
    pub const fn new(dense: f64, lexical: f64) -> Self {
        Self { dense, lexical }
    }
}

/// Fusion engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Weights used when the query carries at least one citation tag.
    pub citation_weights: FusionWeights,
    /// Weights used for purely conceptual queries.
    pub default_weights: FusionWeights,
    /// Cap on the fused candidate pool.
    pub max_candidates: usize,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            citation_weights: FusionWeights::new(
                defaults::DEFAULT_CITATION_DENSE_WEIGHT,
                defaults::DEFAULT_CITATION_LEXICAL_WEIGHT,
            ),
            default_weights: FusionWeights::new(
                defaults::DEFAULT_DENSE_WEIGHT,
                defaults::DEFAULT_LEXICAL_WEIGHT,
            ),
            max_candidates: defaults::DEFAULT_FUSION_MAX_CANDIDATES,
        }
    }
}

/// MMR selector configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MmrConfig {
    /// Relevance/diversity trade-off: 1.0 is pure relevance, 0.0 pure diversity.
    pub lambda: f64,
    /// Working-set cap applied before the quadratic diversity pass.
    pub max_candidates: usize,
}

impl Default for MmrConfig {
    fn default() -> Self {
        Self {
            lambda: defaults::DEFAULT_MMR_LAMBDA,
            max_candidates: defaults::DEFAULT_MMR_MAX_CANDIDATES,
        }
    }
}

/// Retrieval pipeline configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Hits requested from the keyword index.
    pub top_k_lexical: usize,
    /// Hits requested from the vector index.
    pub top_k_dense: usize,
    /// Passages returned when the caller does not ask for a count.
    pub default_topn: usize,
    pub min_topn: usize,
    pub max_topn: usize,
    pub fusion: FusionConfig,
    pub mmr: MmrConfig,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            top_k_lexical: defaults::DEFAULT_TOP_K_LEXICAL,
            top_k_dense: defaults::DEFAULT_TOP_K_DENSE,
            default_topn: defaults::DEFAULT_TOPN,
            min_topn: defaults::DEFAULT_MIN_TOPN,
            max_topn: defaults::DEFAULT_MAX_TOPN,
            fusion: FusionConfig::default(),
            mmr: MmrConfig::default(),
        }
    }
}

impl RetrievalConfig {
    /// Clamp a requested passage count into `[min_topn, max_topn]`. An
    /// inverted range (unvalidated config) yields `max_topn`.
    pub fn clamp_topn(&self, topn: usize) -> usize {
        topn.max(self.min_topn).min(self.max_topn)
    }
}
