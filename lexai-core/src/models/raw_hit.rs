use serde::{Deserialize, Serialize};

use super::CasePayload;

/// A hit as returned by an index client, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawHit {
    /// Index-native id; the payload's `doc_id` takes precedence when set.
    pub id: String,
    pub score: f64,
    pub payload: CasePayload,
}

impl RawHit {
    pub fn new(id: impl Into<String>, score: f64, payload: CasePayload) -> Self {
        Self {
            id: id.into(),
            score,
            payload,
        }
    }

    /// External document id: `payload.doc_id`, else the index id.
    pub fn doc_id(&self) -> &str {
        match self.payload.doc_id.as_deref() {
            Some(id) if !id.trim().is_empty() => id.trim(),
            _ => self.id.trim(),
        }
    }
}
