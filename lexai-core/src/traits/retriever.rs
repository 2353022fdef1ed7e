use crate::errors::LexaiResult;
use crate::models::Hit;

/// Query-to-passages retrieval, the single operation exposed to callers.
pub trait IRetriever: Send + Sync {
    /// Return up to `topn` diverse, relevant hits. An empty list is a valid
    /// answer; only unrecoverable backend failure is an error.
    fn hybrid_search(&self, query: &str, topn: usize) -> LexaiResult<Vec<Hit>>;
}
