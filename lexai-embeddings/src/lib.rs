//! # lexai-embeddings
//!
//! Turns query and passage text into dense vectors for the retrieval engine.
//!
//! - [`OllamaProvider`]: local Ollama server, batched `/api/embed` calls
//! - [`TfIdfFallback`]: deterministic hashing embedder, always available
//! - [`DegradationChain`]: ordered providers with degradation events
//! - [`EmbeddingEngine`]: chain + L1 cache, implements `IEmbeddingProvider`

pub mod cache;
pub mod degradation;
pub mod engine;
pub mod providers;

pub use cache::L1MemoryCache;
pub use degradation::DegradationChain;
pub use engine::EmbeddingEngine;
pub use providers::{create_provider, OllamaProvider, TfIdfFallback};
