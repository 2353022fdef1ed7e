//! Ollama embedding provider.
//!
//! Talks to a local Ollama server over blocking HTTP. Texts are sent in
//! chunks of `batch_size` to `/api/embed`; reachability is probed on
//! `/api/tags`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use lexai_core::config::EmbeddingConfig;
use lexai_core::errors::{EmbeddingError, LexaiResult};
use lexai_core::traits::IEmbeddingProvider;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
    dimensions: usize,
    batch_size: usize,
    available: AtomicBool,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaProvider {
    pub fn new(config: &EmbeddingConfig) -> LexaiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("http client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            dimensions: config.dimensions,
            batch_size: config.batch_size.max(1),
            available: AtomicBool::new(false),
        })
    }

    /// Probe the server and record the outcome.
    pub fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        let ok = match self.client.get(&url).send() {
            Ok(resp) if resp.status().is_success() => {
                debug!(model = %self.model, "ollama health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "ollama health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "ollama unreachable");
                false
            }
        };
        self.available.store(ok, Ordering::Relaxed);
        ok
    }

    fn request_chunk(&self, texts: &[String]) -> LexaiResult<Vec<Vec<f32>>> {
        let url = format!("{}/api/embed", self.base_url);
        let request = EmbedRequest {
            model: &self.model,
            input: texts,
        };

        let response = self.client.post(&url).json(&request).send().map_err(|e| {
            self.available.store(false, Ordering::Relaxed);
            EmbeddingError::InferenceFailed {
                reason: format!("ollama http error: {e}"),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("ollama returned {status}: {body}"),
            }
            .into());
        }

        let decoded: EmbedResponse = response.json().map_err(|e| EmbeddingError::InferenceFailed {
            reason: format!("ollama response decode: {e}"),
        })?;

        if decoded.embeddings.len() != texts.len() {
            return Err(EmbeddingError::BatchMismatch {
                sent: texts.len(),
                received: decoded.embeddings.len(),
            }
            .into());
        }
        if let Some(bad) = decoded.embeddings.iter().find(|v| v.len() != self.dimensions) {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dimensions,
                actual: bad.len(),
            }
            .into());
        }
        Ok(decoded.embeddings)
    }
}

impl IEmbeddingProvider for OllamaProvider {
    fn embed(&self, text: &str) -> LexaiResult<Vec<f32>> {
        let mut vecs = self.request_chunk(&[text.to_string()])?;
        vecs.pop().ok_or_else(|| {
            EmbeddingError::BatchMismatch {
                sent: 1,
                received: 0,
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> LexaiResult<Vec<Vec<f32>>> {
        let mut out = Vec::with_capacity(texts.len());
        for chunk in texts.chunks(self.batch_size) {
            out.extend(self.request_chunk(chunk)?);
        }
        Ok(out)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "ollama"
    }

    /// A provider marked down re-probes the server, so a restarted Ollama
    /// is picked up without rebuilding the engine.
    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed) || self.health_check()
    }
}
