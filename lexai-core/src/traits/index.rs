use crate::errors::LexaiResult;
use crate::models::{LexicalQuery, RawHit};

/// Keyword index client (BM25-style scoring).
pub trait ILexicalIndex: Send + Sync {
    /// Run a structured multi-field query, returning raw hits in index order.
    fn search(&self, query: &LexicalQuery) -> LexaiResult<Vec<RawHit>>;

    /// Backend label used in logs and errors.
    fn name(&self) -> &str;
}

/// Vector index client.
pub trait IDenseIndex: Send + Sync {
    /// Nearest-neighbour search by the index's native metric.
    fn search(&self, vector: &[f32], top_k: usize) -> LexaiResult<Vec<RawHit>>;

    /// Backend label used in logs and errors.
    fn name(&self) -> &str;
}
