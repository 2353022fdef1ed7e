//! EmbeddingEngine: the entry point for lexai-embeddings.
//!
//! Wraps the provider chain and the L1 cache behind `IEmbeddingProvider`,
//! so the retriever can embed a query for dense search and re-embed the
//! same text for MMR without a second provider round-trip.

use lexai_core::config::EmbeddingConfig;
use lexai_core::errors::{EmbeddingError, LexaiResult};
use lexai_core::models::DegradationEvent;
use lexai_core::traits::IEmbeddingProvider;
use tracing::{debug, info};

use crate::cache::{content_key, L1MemoryCache};
use crate::degradation::DegradationChain;
use crate::providers::{self, TfIdfFallback};

pub struct EmbeddingEngine {
    chain: DegradationChain,
    cache: L1MemoryCache,
    config: EmbeddingConfig,
}

impl EmbeddingEngine {
    /// Build the engine from configuration: the configured provider first,
    /// TF-IDF behind it only when `fallback_to_tfidf` is set.
    pub fn new(config: EmbeddingConfig) -> Self {
        let mut chain = DegradationChain::new();
        let primary = providers::create_provider(&config);
        let primary_is_tfidf = primary.name() == "tfidf-fallback";
        chain.push(primary);
        if config.fallback_to_tfidf && !primary_is_tfidf {
            chain.push(Box::new(TfIdfFallback::new(config.dimensions)));
        }
        Self::with_chain(chain, config)
    }

    /// Build the engine around an explicit chain.
    pub fn with_chain(chain: DegradationChain, config: EmbeddingConfig) -> Self {
        let cache = L1MemoryCache::new(config.l1_cache_size);
        info!(
            provider = chain.active_provider_name(),
            dims = config.dimensions,
            "EmbeddingEngine initialized"
        );
        Self {
            chain,
            cache,
            config,
        }
    }

    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.chain.drain_events()
    }

    pub fn active_provider(&self) -> &str {
        self.chain.active_provider_name()
    }

    pub fn cache(&self) -> &L1MemoryCache {
        &self.cache
    }

    fn check_dims(&self, vec: &[f32]) -> LexaiResult<()> {
        if vec.len() != self.config.dimensions {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.config.dimensions,
                actual: vec.len(),
            }
            .into());
        }
        Ok(())
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> LexaiResult<Vec<f32>> {
        let key = content_key(text);
        if let Some(vec) = self.cache.get(&key) {
            debug!("embedding cache hit");
            return Ok(vec);
        }

        let (vec, provider) = self.chain.embed(text)?;
        self.check_dims(&vec)?;
        debug!(provider, "embedded text");
        self.cache.insert(key, vec.clone());
        Ok(vec)
    }

    /// Cached texts are served from L1; the misses go to the chain in a
    /// single batched call. Output order matches input order.
    fn embed_batch(&self, texts: &[String]) -> LexaiResult<Vec<Vec<f32>>> {
        let keys: Vec<String> = texts.iter().map(|t| content_key(t)).collect();
        let mut out: Vec<Option<Vec<f32>>> = keys.iter().map(|k| self.cache.get(k)).collect();

        let miss_idx: Vec<usize> = (0..texts.len()).filter(|&i| out[i].is_none()).collect();
        if !miss_idx.is_empty() {
            let misses: Vec<String> = miss_idx.iter().map(|&i| texts[i].clone()).collect();
            let (vecs, provider) = self.chain.embed_batch(&misses)?;
            if vecs.len() != misses.len() {
                return Err(EmbeddingError::BatchMismatch {
                    sent: misses.len(),
                    received: vecs.len(),
                }
                .into());
            }
            debug!(
                provider,
                hits = texts.len() - misses.len(),
                misses = misses.len(),
                "embedded batch"
            );
            // Reject the whole batch before caching any of it.
            for vec in &vecs {
                self.check_dims(vec)?;
            }
            for (&i, vec) in miss_idx.iter().zip(vecs) {
                self.cache.insert(keys[i].clone(), vec.clone());
                out[i] = Some(vec);
            }
        }

        Ok(out.into_iter().flatten().collect())
    }

    fn dimensions(&self) -> usize {
        self.config.dimensions
    }

    fn name(&self) -> &str {
        "lexai-embedding-engine"
    }

    fn is_available(&self) -> bool {
        self.chain.active_provider_name() != "none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tfidf_engine() -> EmbeddingEngine {
        EmbeddingEngine::new(EmbeddingConfig {
            provider: "tfidf".to_string(),
            dimensions: 64,
            ..Default::default()
        })
    }

    #[test]
    fn embed_returns_configured_dims() {
        let engine = tfidf_engine();
        assert_eq!(engine.embed("nafaka").unwrap().len(), 64);
        assert_eq!(engine.active_provider(), "tfidf-fallback");
    }

    #[test]
    fn repeated_embed_is_served_from_cache() {
        let engine = tfidf_engine();
        let a = engine.embed("TMK 175").unwrap();
        let b = engine.embed("TMK 175").unwrap();
        assert_eq!(a, b);
        assert_eq!(engine.cache().get(&content_key("TMK 175")), Some(a));
    }

    #[test]
    fn batch_preserves_order_with_partial_cache() {
        let engine = tfidf_engine();
        let warm = engine.embed("ikinci").unwrap();
        let texts = vec!["birinci".to_string(), "ikinci".to_string(), "üçüncü".to_string()];
        let vecs = engine.embed_batch(&texts).unwrap();
        assert_eq!(vecs.len(), 3);
        assert_eq!(vecs[1], warm);
        assert_eq!(vecs[0], engine.embed("birinci").unwrap());
    }

    #[test]
    fn tfidf_primary_gets_no_second_tfidf() {
        let engine = EmbeddingEngine::new(EmbeddingConfig {
            provider: "tfidf".to_string(),
            fallback_to_tfidf: true,
            dimensions: 16,
            ..Default::default()
        });
        assert_eq!(engine.chain.len(), 1);
    }

    #[test]
    fn dimension_mismatch_is_rejected() {
        let mut chain = DegradationChain::new();
        chain.push(Box::new(TfIdfFallback::new(8)));
        let engine = EmbeddingEngine::with_chain(
            chain,
            EmbeddingConfig {
                dimensions: 16,
                ..Default::default()
            },
        );
        let err = engine.embed("nafaka").unwrap_err();
        assert!(err.to_string().contains("dimension mismatch"));
    }
}
