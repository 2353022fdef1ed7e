use serde::{Deserialize, Serialize};

use super::defaults;

/// Passage truncation limits, in characters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PassageConfig {
    /// Hard cap on `text_full`.
    pub max_passage_chars: usize,
    /// Soft cap on `text_repr`; cut at a sentence boundary when feasible.
    pub repr_max_chars: usize,
}

impl Default for PassageConfig {
    fn default() -> Self {
        Self {
            max_passage_chars: defaults::DEFAULT_MAX_PASSAGE_CHARS,
            repr_max_chars: defaults::DEFAULT_REPR_MAX_CHARS,
        }
    }
}
