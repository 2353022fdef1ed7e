//! Ordered provider fallback.
//!
//! Providers are tried in push order; unavailable ones are skipped. When a
//! provider other than the first answers, a `DegradationEvent` is recorded.
//! Only the most recent [`MAX_RECORDED_EVENTS`] are kept until drained.

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use lexai_core::errors::{EmbeddingError, LexaiError, LexaiResult};
use lexai_core::models::DegradationEvent;
use lexai_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Bound on undrained degradation events; older ones are dropped first.
pub const MAX_RECORDED_EVENTS: usize = 256;

pub struct DegradationChain {
    providers: Vec<Box<dyn IEmbeddingProvider>>,
    events: Mutex<VecDeque<DegradationEvent>>,
}

impl Default for DegradationChain {
    fn default() -> Self {
        Self::new()
    }
}

impl DegradationChain {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            events: Mutex::new(VecDeque::new()),
        }
    }

    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.providers.push(provider);
    }

    /// Embed one text, returning the vector and the provider that produced it.
    pub fn embed(&self, text: &str) -> LexaiResult<(Vec<f32>, &str)> {
        self.run(|p| p.embed(text))
    }

    /// Embed a batch with a single provider; a batch is never split across
    /// providers.
    pub fn embed_batch(&self, texts: &[String]) -> LexaiResult<(Vec<Vec<f32>>, &str)> {
        self.run(|p| p.embed_batch(texts))
    }

    fn run<T, F>(&self, call: F) -> LexaiResult<(T, &str)>
    where
        F: Fn(&dyn IEmbeddingProvider) -> LexaiResult<T>,
    {
        let mut last_error: Option<LexaiError> = None;

        for (i, provider) in self.providers.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }
            match call(provider.as_ref()) {
                Ok(out) => {
                    if i > 0 {
                        self.record_fallback(provider.name());
                    }
                    return Ok((out, provider.name()));
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "embedding provider failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            EmbeddingError::ProviderUnavailable {
                provider: format!("all {} providers unavailable", self.providers.len()),
            }
            .into()
        }))
    }

    fn record_fallback(&self, fallback: &str) {
        let primary = self
            .providers
            .first()
            .map(|p| p.name())
            .unwrap_or("unknown");
        let event = DegradationEvent::now("embeddings", format!("{primary} unavailable"), fallback);
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        if events.len() == MAX_RECORDED_EVENTS {
            events.pop_front();
        }
        events.push_back(event);
    }

    /// Name of the first available provider.
    pub fn active_provider_name(&self) -> &str {
        self.providers
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Take the recorded events, oldest first.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        let mut events = self.events.lock().unwrap_or_else(PoisonError::into_inner);
        events.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}
