//! # lexai-retrieval
//!
//! The query engine for court-decision search. Candidates come from a
//! keyword index and a vector index, their scores are rescaled to [0,1] and
//! fused with citation-aware weights, and a diverse top-N is picked with
//! Maximal Marginal Relevance.
//!
//! ## Architecture
//!
//! ```text
//! HybridRetriever (IRetriever)
//! ├── CitationDetector (statute alias table → "TMK 175" tags)
//! ├── search
//! │   ├── LexicalSearcher → ILexicalIndex (OpenSearchIndex)
//! │   ├── DenseSearcher   → IDenseIndex   (QdrantIndex)
//! │   └── normalize (per-list min-max)
//! ├── ranking
//! │   ├── FusionEngine (weighted by citation presence, top 100)
//! │   └── MmrSelector (relevance vs. redundancy, batched embeddings)
//! └── PassageMaterializer (text precedence + truncation)
//! ```

pub mod citation;
pub mod engine;
pub mod normalize;
pub mod passage;
pub mod ranking;
pub mod search;

pub use citation::CitationDetector;
pub use engine::HybridRetriever;
pub use passage::PassageMaterializer;
pub use ranking::{FusionEngine, MmrSelector};
pub use search::{DenseSearcher, LexicalSearcher, OpenSearchIndex, QdrantIndex};
