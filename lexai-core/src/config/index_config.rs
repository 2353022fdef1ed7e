use serde::{Deserialize, Serialize};

use super::defaults;

/// A boosted field in the multi-field keyword query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBoost {
    pub field: String,
    pub boost: f64,
}

impl FieldBoost {
    pub fn new(field: impl Into<String>, boost: f64) -> Self {
        Self {
            field: field.into(),
            boost,
        }
    }

    /// OpenSearch `field^boost` notation.
    pub fn to_query_field(&self) -> String {
        format!("{}^{}", self.field, self.boost)
    }
}

/// Keyword (BM25) index connection and query shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalIndexConfig {
    pub base_url: String,
    pub index: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout_ms: u64,
    /// Boosted fields searched by the multi-field query.
    pub fields: Vec<FieldBoost>,
    /// Term operator for the multi-field query ("and" / "or").
    pub operator: String,
    /// Keyword field holding normalized statute citations.
    pub citation_field: String,
    /// Boost applied to the citation clause when tags are detected.
    pub citation_boost: f64,
}

impl Default for LexicalIndexConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_LEXICAL_URL.to_string(),
            index: defaults::DEFAULT_INDEX_NAME.to_string(),
            username: None,
            password: None,
            timeout_ms: defaults::DEFAULT_LEXICAL_TIMEOUT_MS,
            fields: defaults::DEFAULT_FIELD_BOOSTS
                .iter()
                .map(|(field, boost)| FieldBoost::new(*field, *boost))
                .collect(),
            operator: defaults::DEFAULT_LEXICAL_OPERATOR.to_string(),
            citation_field: defaults::DEFAULT_CITATION_FIELD.to_string(),
            citation_boost: defaults::DEFAULT_CITATION_BOOST,
        }
    }
}

/// Vector index connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DenseIndexConfig {
    pub base_url: String,
    pub collection: String,
    pub api_key: Option<String>,
    pub timeout_ms: u64,
    /// Search the original vectors instead of the quantized ones.
    pub ignore_quantization: bool,
}

impl Default for DenseIndexConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_DENSE_URL.to_string(),
            collection: defaults::DEFAULT_COLLECTION_NAME.to_string(),
            api_key: None,
            timeout_ms: defaults::DEFAULT_DENSE_TIMEOUT_MS,
            ignore_quantization: defaults::DEFAULT_IGNORE_QUANTIZATION,
        }
    }
}
