//! Search adapters over the lexical and dense index clients.
//!
//! Both adapters return hits whose `score_norm` is the min-max rescale of
//! the full raw-score list of that call. Hits without a resolvable doc id
//! are dropped after normalization.

pub mod dense;
pub(crate) mod http;
pub mod lexical;
pub mod opensearch;
pub mod qdrant;

pub use dense::DenseSearcher;
pub use lexical::LexicalSearcher;
pub use opensearch::OpenSearchIndex;
pub use qdrant::QdrantIndex;

use lexai_core::errors::SearchError;
use lexai_core::models::{Hit, HitSource, RawHit};

use crate::normalize::normalize;
use crate::passage::PassageMaterializer;

pub(crate) fn check_top_k(top_k: usize) -> Result<(), SearchError> {
    if top_k == 0 {
        return Err(SearchError::InvalidTopK { top_k });
    }
    Ok(())
}

/// Normalize a raw result list and turn it into hits.
pub(crate) fn into_hits(
    raw: Vec<RawHit>,
    source: HitSource,
    passages: &PassageMaterializer,
) -> Vec<Hit> {
    let scores: Vec<f64> = raw.iter().map(|r| r.score).collect();
    let norms = normalize(&scores);

    raw.into_iter()
        .zip(norms)
        .filter_map(|(r, score_norm)| {
            let doc_id = r.doc_id().to_string();
            if doc_id.is_empty() {
                return None;
            }
            let (text_repr, text_full) = passages.text_fields(&r.payload);
            Some(Hit {
                doc_id,
                score_raw: r.score,
                score_norm,
                source,
                payload: r.payload,
                text_repr,
                text_full,
            })
        })
        .collect()
}
