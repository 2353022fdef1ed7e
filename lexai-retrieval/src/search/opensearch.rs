//! OpenSearch keyword index client.

use lexai_core::config::LexicalIndexConfig;
use lexai_core::constants::LEXICAL_BACKEND;
use lexai_core::errors::{LexaiResult, SearchError};
use lexai_core::models::{CasePayload, LexicalQuery, RawHit};
use lexai_core::traits::ILexicalIndex;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::http;

pub struct OpenSearchIndex {
    client: Client,
    config: LexicalIndexConfig,
}

#[derive(Deserialize)]
struct SearchResponse {
    hits: HitsEnvelope,
}

#[derive(Deserialize)]
struct HitsEnvelope {
    #[serde(default)]
    hits: Vec<SearchHit>,
}

#[derive(Deserialize)]
struct SearchHit {
    #[serde(rename = "_id", default)]
    id: String,
    #[serde(rename = "_score", default)]
    score: Option<f64>,
    #[serde(rename = "_source", default)]
    source: Value,
}

impl OpenSearchIndex {
    pub fn new(config: LexicalIndexConfig) -> LexaiResult<Self> {
        let client = http::build_client(LEXICAL_BACKEND, config.timeout_ms)?;
        Ok(Self { client, config })
    }

    /// Request body for a lexical query.
    ///
    /// The citation clause sits in `should` next to the `multi_match` in
    /// `must`: it lifts documents citing a detected statute without
    /// excluding the rest.
    pub fn request_body(query: &LexicalQuery) -> Value {
        let fields: Vec<String> = query.fields.iter().map(|f| f.to_query_field()).collect();
        let multi_match = json!({
            "multi_match": {
                "query": query.text,
                "fields": fields,
                "type": "best_fields",
                "operator": query.operator,
            }
        });

        let clause = match &query.citation {
            Some(citation) if !citation.terms.is_empty() => json!({
                "bool": {
                    "must": [multi_match],
                    "should": [{
                        "terms": {
                            citation.field.clone(): citation.terms,
                            "boost": citation.boost,
                        }
                    }],
                }
            }),
            _ => multi_match,
        };

        json!({ "size": query.size, "query": clause })
    }
}

impl ILexicalIndex for OpenSearchIndex {
    fn search(&self, query: &LexicalQuery) -> LexaiResult<Vec<RawHit>> {
        let url = format!(
            "{}/{}/_search",
            self.config.base_url.trim_end_matches('/'),
            self.config.index
        );
        let mut request = self.client.post(&url).json(&Self::request_body(query));
        if let Some(user) = &self.config.username {
            request = request.basic_auth(user, self.config.password.as_deref());
        }

        let response: SearchResponse =
            http::send_json(LEXICAL_BACKEND, self.config.timeout_ms, request)?;
        debug!(hits = response.hits.hits.len(), index = %self.config.index, "opensearch responded");

        response
            .hits
            .hits
            .into_iter()
            .map(|hit| {
                let payload = CasePayload::from_value(hit.source).map_err(|e| {
                    SearchError::MalformedResponse {
                        backend: LEXICAL_BACKEND.to_string(),
                        reason: format!("_source of {}: {e}", hit.id),
                    }
                })?;
                Ok(RawHit::new(hit.id, hit.score.unwrap_or(0.0), payload))
            })
            .collect()
    }

    fn name(&self) -> &str {
        LEXICAL_BACKEND
    }
}
