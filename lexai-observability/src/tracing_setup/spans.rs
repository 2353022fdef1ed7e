//! Span definitions per pipeline stage: retrieval, search, embedding,
//! fusion, MMR.

/// Span for one `hybrid_search` request.
#[macro_export]
macro_rules! retrieval_span {
    ($query_len:expr, $topn:expr) => {
        tracing::info_span!("lexai.retrieval", query_len = $query_len, topn = $topn)
    };
}

/// Span for a single backend search.
#[macro_export]
macro_rules! search_span {
    ($backend:expr, $top_k:expr) => {
        tracing::debug_span!("lexai.search", backend = %$backend, top_k = $top_k)
    };
}

#[macro_export]
macro_rules! embedding_span {
    ($provider:expr, $count:expr) => {
        tracing::debug_span!("lexai.embedding", provider = %$provider, count = $count)
    };
}

#[macro_export]
macro_rules! fusion_span {
    ($candidates:expr, $citation:expr) => {
        tracing::debug_span!("lexai.fusion", candidates = $candidates, citation = $citation)
    };
}

#[macro_export]
macro_rules! mmr_span {
    ($candidates:expr, $topn:expr) => {
        tracing::debug_span!("lexai.mmr", candidates = $candidates, topn = $topn)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RETRIEVAL: &str = "lexai.retrieval";
    pub const SEARCH: &str = "lexai.search";
    pub const EMBEDDING: &str = "lexai.embedding";
    pub const FUSION: &str = "lexai.fusion";
    pub const MMR: &str = "lexai.mmr";
}
