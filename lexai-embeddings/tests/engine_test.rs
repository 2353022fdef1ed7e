//! EmbeddingEngine behaviour through the public trait surface.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use lexai_core::config::EmbeddingConfig;
use lexai_core::errors::{EmbeddingError, LexaiResult};
use lexai_core::traits::IEmbeddingProvider;
use lexai_embeddings::{DegradationChain, EmbeddingEngine, TfIdfFallback};

/// Counts provider calls and texts, delegating to TF-IDF.
struct CountingProvider {
    inner: TfIdfFallback,
    calls: Arc<AtomicUsize>,
    texts: Arc<AtomicUsize>,
}

impl IEmbeddingProvider for CountingProvider {
    fn embed(&self, text: &str) -> LexaiResult<Vec<f32>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.fetch_add(1, Ordering::SeqCst);
        self.inner.embed(text)
    }
    fn embed_batch(&self, texts: &[String]) -> LexaiResult<Vec<Vec<f32>>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.texts.fetch_add(texts.len(), Ordering::SeqCst);
        self.inner.embed_batch(texts)
    }
    fn dimensions(&self) -> usize {
        self.inner.dimensions()
    }
    fn name(&self) -> &str {
        "counting"
    }
    fn is_available(&self) -> bool {
        true
    }
}

struct DownProvider;
impl IEmbeddingProvider for DownProvider {
    fn embed(&self, _: &str) -> LexaiResult<Vec<f32>> {
        Err(EmbeddingError::InferenceFailed {
            reason: "connection refused".into(),
        }
        .into())
    }
    fn embed_batch(&self, _: &[String]) -> LexaiResult<Vec<Vec<f32>>> {
        Err(EmbeddingError::InferenceFailed {
            reason: "connection refused".into(),
        }
        .into())
    }
    fn dimensions(&self) -> usize {
        32
    }
    fn name(&self) -> &str {
        "down"
    }
    fn is_available(&self) -> bool {
        true
    }
}

/// Returns one vector of the wrong width at the end of every batch.
struct RaggedProvider;
impl IEmbeddingProvider for RaggedProvider {
    fn embed(&self, _: &str) -> LexaiResult<Vec<f32>> {
        Ok(vec![0.5; 8])
    }
    fn embed_batch(&self, texts: &[String]) -> LexaiResult<Vec<Vec<f32>>> {
        let mut out = vec![vec![0.5; 8]; texts.len()];
        if let Some(last) = out.last_mut() {
            last.truncate(3);
        }
        Ok(out)
    }
    fn dimensions(&self) -> usize {
        8
    }
    fn name(&self) -> &str {
        "ragged"
    }
    fn is_available(&self) -> bool {
        true
    }
}

fn config(dims: usize) -> EmbeddingConfig {
    EmbeddingConfig {
        dimensions: dims,
        ..Default::default()
    }
}

#[test]
fn batch_sends_only_cache_misses_in_one_call() {
    let calls = Arc::new(AtomicUsize::new(0));
    let texts_sent = Arc::new(AtomicUsize::new(0));
    let mut chain = DegradationChain::new();
    chain.push(Box::new(CountingProvider {
        inner: TfIdfFallback::new(32),
        calls: calls.clone(),
        texts: texts_sent.clone(),
    }));
    let engine = EmbeddingEngine::with_chain(chain, config(32));

    engine.embed("boşanma davası").unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    let texts: Vec<String> = ["boşanma davası", "nafaka", "velayet", "nafaka"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let vecs = engine.embed_batch(&texts).unwrap();

    assert_eq!(vecs.len(), 4);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    assert_eq!(texts_sent.load(Ordering::SeqCst), 1 + 3);
    assert_eq!(vecs[1], vecs[3]);
}

#[test]
fn wrong_width_in_a_batch_caches_nothing() {
    let mut chain = DegradationChain::new();
    chain.push(Box::new(RaggedProvider));
    let engine = EmbeddingEngine::with_chain(chain, config(8));

    let texts: Vec<String> = ["nafaka", "velayet", "kira"].iter().map(|s| s.to_string()).collect();
    let err = engine.embed_batch(&texts).unwrap_err();
    assert!(matches!(
        err,
        lexai_core::errors::LexaiError::EmbeddingError(EmbeddingError::DimensionMismatch {
            expected: 8,
            actual: 3
        })
    ));
    assert!(engine.cache().is_empty());
}

#[test]
fn failing_primary_without_fallback_propagates() {
    let mut chain = DegradationChain::new();
    chain.push(Box::new(DownProvider));
    let engine = EmbeddingEngine::with_chain(chain, config(32));

    assert!(engine.embed("nafaka").is_err());
    assert!(engine.drain_degradation_events().is_empty());
}

#[test]
fn failing_primary_with_fallback_degrades() {
    let mut chain = DegradationChain::new();
    chain.push(Box::new(DownProvider));
    chain.push(Box::new(TfIdfFallback::new(32)));
    let engine = EmbeddingEngine::with_chain(chain, config(32));

    let vec = engine.embed("nafaka").unwrap();
    assert_eq!(vec.len(), 32);

    let events = engine.drain_degradation_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].fallback_used, "tfidf-fallback");
}

#[test]
fn engine_is_usable_as_trait_object_across_threads() {
    let engine: Arc<dyn IEmbeddingProvider> = Arc::new(EmbeddingEngine::new(EmbeddingConfig {
        provider: "tfidf".to_string(),
        dimensions: 16,
        ..Default::default()
    }));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.embed(&format!("sorgu {i}")).map(|v| v.len()))
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap().unwrap(), 16);
    }
}
