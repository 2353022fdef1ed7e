//! Error handling for LexAI.
//! One error enum per subsystem, `thiserror` only, folded into [`LexaiError`].

pub mod config_error;
pub mod embedding_error;
pub mod retrieval_error;
pub mod search_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;
pub use search_error::SearchError;

/// Top-level error for every fallible LexAI operation.
#[derive(Debug, thiserror::Error)]
pub enum LexaiError {
    #[error("search error: {0}")]
    SearchError(#[from] SearchError),

    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("retrieval error: {0}")]
    RetrievalError(#[from] RetrievalError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl LexaiError {
    /// Whether this error means the search backends could not serve the
    /// request. The API layer maps these to "search temporarily unavailable".
    pub fn is_backend_failure(&self) -> bool {
        match self {
            Self::SearchError(e) => e.is_unavailable(),
            Self::RetrievalError(RetrievalError::RetrievalFailed { .. }) => true,
            _ => false,
        }
    }
}

pub type LexaiResult<T> = Result<T, LexaiError>;
