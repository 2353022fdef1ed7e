//! # lexai-core
//!
//! Foundation crate for the LexAI retrieval engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LexaiConfig;
pub use errors::{LexaiError, LexaiResult};
pub use models::{CasePayload, Hit, HitSource, Passage, RawHit};
