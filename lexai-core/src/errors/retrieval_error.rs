/// Retrieval pipeline errors.
///
/// An empty candidate set is not an error; it yields an empty hit list.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("retrieval failed: lexical: {lexical}; dense: {dense}")]
    RetrievalFailed { lexical: String, dense: String },
}
