use std::fmt;

use serde::{Deserialize, Serialize};

use super::CasePayload;

/// Which retrieval path produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitSource {
    Lexical,
    Dense,
    /// Produced by the fusion engine from one or both of the above.
    Hybrid,
}

impl fmt::Display for HitSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Lexical => "lexical",
            Self::Dense => "dense",
            Self::Hybrid => "hybrid",
        };
        f.write_str(s)
    }
}

/// A candidate case document surfaced by one or more backends.
///
/// Hits are request-scoped and never mutated after construction: later
/// stages build new hits or pass existing ones through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hit {
    /// Stable external document identifier. Fusion join key.
    pub doc_id: String,
    /// Backend-native score; only meaningful within its backend.
    pub score_raw: f64,
    /// Score in [0, 1], comparable across backends.
    pub score_norm: f64,
    pub source: HitSource,
    pub payload: CasePayload,
    /// Short snippet for display and as MMR embedding input fallback.
    pub text_repr: String,
    /// Longer, length-bounded text for downstream consumption.
    pub text_full: String,
}

impl Hit {
    /// Text embedded by the MMR selector: the full text when present.
    pub fn embedding_text(&self) -> &str {
        if self.text_full.is_empty() {
            &self.text_repr
        } else {
            &self.text_full
        }
    }
}
