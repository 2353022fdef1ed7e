//! Provider registry.
//!
//! - `ollama`: local Ollama server (default)
//! - `tfidf`: hashing fallback, no external service

pub mod ollama_provider;
pub mod tfidf_fallback;

pub use ollama_provider::OllamaProvider;
pub use tfidf_fallback::TfIdfFallback;

use lexai_core::config::EmbeddingConfig;
use lexai_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

/// Build the configured provider.
///
/// An Ollama server that is down at startup still yields an Ollama
/// provider; it re-probes on use. Only a provider that cannot be constructed
/// at all, or an unknown name, falls back to TF-IDF.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "ollama" => match OllamaProvider::new(config) {
            Ok(provider) => {
                if provider.health_check() {
                    info!(provider = "ollama", model = %config.model, "embedding provider connected");
                } else {
                    warn!(url = %config.base_url, "ollama not reachable at startup");
                }
                Box::new(provider)
            }
            Err(e) => {
                warn!(error = %e, "ollama provider could not be built, using TF-IDF");
                Box::new(TfIdfFallback::new(config.dimensions))
            }
        },
        "tfidf" => {
            info!(provider = "tfidf", "using TF-IDF embedding provider");
            Box::new(TfIdfFallback::new(config.dimensions))
        }
        other => {
            warn!(provider = other, "unknown embedding provider, using TF-IDF");
            Box::new(TfIdfFallback::new(config.dimensions))
        }
    }
}
