//! Ranking pipeline: weighted fusion of the two hit lists, then MMR
//! selection of the final set.

pub mod fusion;
pub mod mmr;

pub use fusion::FusionEngine;
pub use mmr::{cosine_similarity, MmrSelector};
