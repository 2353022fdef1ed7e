use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "ollama" or "tfidf".
    pub provider: String,
    /// Model name passed to the provider.
    pub model: String,
    /// Base URL of the embedding server.
    pub base_url: String,
    /// Embedding dimensions produced by the model.
    pub dimensions: usize,
    /// Maximum texts per provider call.
    pub batch_size: usize,
    /// L1 in-memory cache max entries.
    pub l1_cache_size: u64,
    /// Per-request timeout.
    pub timeout_ms: u64,
    /// Fall back to the TF-IDF provider when the primary fails. Off by
    /// default: TF-IDF vectors do not live in the dense index's space.
    pub fallback_to_tfidf: bool,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            base_url: defaults::DEFAULT_EMBEDDING_URL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            batch_size: defaults::DEFAULT_EMBEDDING_BATCH_SIZE,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            timeout_ms: defaults::DEFAULT_EMBEDDING_TIMEOUT_MS,
            fallback_to_tfidf: defaults::DEFAULT_FALLBACK_TO_TFIDF,
        }
    }
}
