mod embedding;
mod index;
mod retriever;

pub use embedding::IEmbeddingProvider;
pub use index::{IDenseIndex, ILexicalIndex};
pub use retriever::IRetriever;
