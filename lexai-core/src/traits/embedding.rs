use crate::errors::LexaiResult;

/// Embedding generation provider.
///
/// Must be deterministic for a given model and return vectors of a fixed,
/// model-defined dimensionality.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> LexaiResult<Vec<f32>>;

    /// Embed a batch of texts in one call. Output order matches input order.
    fn embed_batch(&self, texts: &[String]) -> LexaiResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;

    /// Whether this provider is currently available.
    fn is_available(&self) -> bool;
}
