/// Errors raised by the lexical and dense search adapters.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("{backend} unavailable: {reason}")]
    BackendUnavailable { backend: String, reason: String },

    #[error("{backend} rejected query: {reason}")]
    QuerySyntax { backend: String, reason: String },

    #[error("{backend} timed out after {timeout_ms} ms")]
    Timeout { backend: String, timeout_ms: u64 },

    #[error("{backend} returned a malformed response: {reason}")]
    MalformedResponse { backend: String, reason: String },

    #[error("invalid top_k {top_k}: must be >= 1")]
    InvalidTopK { top_k: usize },
}

impl SearchError {
    /// Connectivity-class failure: the backend could not be reached in time.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::BackendUnavailable { .. } | Self::Timeout { .. })
    }

    /// Name of the backend that produced the error, if any.
    pub fn backend(&self) -> Option<&str> {
        match self {
            Self::BackendUnavailable { backend, .. }
            | Self::QuerySyntax { backend, .. }
            | Self::Timeout { backend, .. }
            | Self::MalformedResponse { backend, .. } => Some(backend),
            Self::InvalidTopK { .. } => None,
        }
    }
}
