//! Configuration for every LexAI subsystem.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`LEXAI_*`)
//! 2. Config file (`lexai.toml`)
//! 3. Compiled defaults (see [`defaults`])

pub mod defaults;
pub mod embedding_config;
pub mod index_config;
pub mod observability_config;
pub mod passage_config;
pub mod retrieval_config;

pub use embedding_config::EmbeddingConfig;
pub use index_config::{DenseIndexConfig, FieldBoost, LexicalIndexConfig};
pub use observability_config::ObservabilityConfig;
pub use passage_config::PassageConfig;
pub use retrieval_config::{FusionConfig, FusionWeights, MmrConfig, RetrievalConfig};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::ENV_PREFIX;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LexaiConfig {
    pub embedding: EmbeddingConfig,
    pub lexical: LexicalIndexConfig,
    pub dense: DenseIndexConfig,
    pub retrieval: RetrievalConfig,
    pub passage: PassageConfig,
    pub observability: ObservabilityConfig,
}

impl LexaiConfig {
    /// Load configuration: optional TOML file, then `LEXAI_*` environment
    /// overrides, then validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from an environment lookup. Unset keys are left alone;
    /// a set key with an unparseable value is an error.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(v) = var("OPENSEARCH_URL") {
            self.lexical.base_url = v;
        }
        if let Some(v) = var("OPENSEARCH_INDEX") {
            self.lexical.index = v;
        }
        if let Some(v) = var("OPENSEARCH_USER") {
            self.lexical.username = Some(v);
        }
        if let Some(v) = var("OPENSEARCH_PASSWORD") {
            self.lexical.password = Some(v);
        }
        if let Some(v) = var("QDRANT_URL") {
            self.dense.base_url = v;
        }
        if let Some(v) = var("QDRANT_COLLECTION") {
            self.dense.collection = v;
        }
        if let Some(v) = var("QDRANT_API_KEY") {
            self.dense.api_key = Some(v);
        }
        if let Some(v) = var("EMBEDDING_PROVIDER") {
            self.embedding.provider = v;
        }
        if let Some(v) = var("EMBEDDING_MODEL") {
            self.embedding.model = v;
        }
        if let Some(v) = var("EMBEDDING_URL") {
            self.embedding.base_url = v;
        }
        if let Some(v) = var("TOPN") {
            self.retrieval.default_topn = parse_env("TOPN", &v)?;
        }
        if let Some(v) = var("MMR_LAMBDA") {
            self.retrieval.mmr.lambda = parse_env("MMR_LAMBDA", &v)?;
        }
        if let Some(v) = var("MAX_PASSAGE_CHARS") {
            self.passage.max_passage_chars = parse_env("MAX_PASSAGE_CHARS", &v)?;
        }
        Ok(())
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let r = &self.retrieval;
        for (field, weight) in [
            ("retrieval.fusion.citation_weights.dense", r.fusion.citation_weights.dense),
            ("retrieval.fusion.citation_weights.lexical", r.fusion.citation_weights.lexical),
            ("retrieval.fusion.default_weights.dense", r.fusion.default_weights.dense),
            ("retrieval.fusion.default_weights.lexical", r.fusion.default_weights.lexical),
            ("retrieval.mmr.lambda", r.mmr.lambda),
        ] {
            check_unit_interval(field, weight)?;
        }

        for (field, value) in [
            ("retrieval.top_k_lexical", r.top_k_lexical),
            ("retrieval.top_k_dense", r.top_k_dense),
            ("retrieval.min_topn", r.min_topn),
            ("retrieval.fusion.max_candidates", r.fusion.max_candidates),
            ("retrieval.mmr.max_candidates", r.mmr.max_candidates),
            ("passage.max_passage_chars", self.passage.max_passage_chars),
            ("passage.repr_max_chars", self.passage.repr_max_chars),
            ("embedding.dimensions", self.embedding.dimensions),
            ("embedding.batch_size", self.embedding.batch_size),
        ] {
            if value == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }

        if !(r.min_topn <= r.default_topn && r.default_topn <= r.max_topn) {
            return Err(ConfigError::ValidationFailed {
                field: "retrieval.default_topn".to_string(),
                message: format!(
                    "must lie in [{}, {}], got {}",
                    r.min_topn, r.max_topn, r.default_topn
                ),
            });
        }
        Ok(())
    }
}

fn check_unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: "must be between 0.0 and 1.0".to_string(),
        });
    }
    Ok(())
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::ValidationFailed {
            field: format!("{ENV_PREFIX}{name}"),
            message: format!("cannot parse {value:?}"),
        })
}
