use serde::{Deserialize, Serialize};

/// Canonical text projection of a selected hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passage {
    pub doc_id: String,
    pub text_repr: String,
    pub text_full: String,
}
