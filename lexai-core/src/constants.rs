/// LexAI engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Backend label for the keyword index.
pub const LEXICAL_BACKEND: &str = "opensearch";

/// Backend label for the vector index.
pub const DENSE_BACKEND: &str = "qdrant";

/// Environment variable prefix for config overrides.
pub const ENV_PREFIX: &str = "LEXAI_";

/// Environment variable read by the tracing subscriber.
pub const LOG_ENV_VAR: &str = "LEXAI_LOG";
