//! Qdrant vector index client.

use lexai_core::config::DenseIndexConfig;
use lexai_core::constants::DENSE_BACKEND;
use lexai_core::errors::{LexaiResult, SearchError};
use lexai_core::models::{CasePayload, RawHit};
use lexai_core::traits::IDenseIndex;
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::http;

pub struct QdrantIndex {
    client: Client,
    config: DenseIndexConfig,
}

#[derive(Deserialize)]
struct QueryResponse {
    result: QueryResult,
}

#[derive(Deserialize)]
struct QueryResult {
    #[serde(default)]
    points: Vec<ScoredPoint>,
}

#[derive(Deserialize)]
struct ScoredPoint {
    id: PointId,
    #[serde(default)]
    score: f64,
    #[serde(default)]
    payload: Value,
}

/// Qdrant point ids are unsigned integers or UUID strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum PointId {
    Num(u64),
    Uuid(String),
}

impl PointId {
    fn into_string(self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Uuid(s) => s,
        }
    }
}

impl QdrantIndex {
    pub fn new(config: DenseIndexConfig) -> LexaiResult<Self> {
        let client = http::build_client(DENSE_BACKEND, config.timeout_ms)?;
        Ok(Self { client, config })
    }

    pub fn request_body(&self, vector: &[f32], top_k: usize) -> Value {
        json!({
            "query": vector,
            "limit": top_k,
            "with_payload": true,
            "params": {
                "quantization": { "ignore": self.config.ignore_quantization }
            }
        })
    }
}

impl IDenseIndex for QdrantIndex {
    fn search(&self, vector: &[f32], top_k: usize) -> LexaiResult<Vec<RawHit>> {
        let url = format!(
            "{}/collections/{}/points/query",
            self.config.base_url.trim_end_matches('/'),
            self.config.collection
        );
        let mut request = self.client.post(&url).json(&self.request_body(vector, top_k));
        if let Some(key) = &self.config.api_key {
            request = request.header("api-key", key);
        }

        let response: QueryResponse = http::send_json(DENSE_BACKEND, self.config.timeout_ms, request)?;
        debug!(points = response.result.points.len(), collection = %self.config.collection, "qdrant responded");

        response
            .result
            .points
            .into_iter()
            .map(|point| {
                let id = point.id.into_string();
                let payload = CasePayload::from_value(point.payload).map_err(|e| {
                    SearchError::MalformedResponse {
                        backend: DENSE_BACKEND.to_string(),
                        reason: format!("payload of {id}: {e}"),
                    }
                })?;
                Ok(RawHit::new(id, point.score, payload))
            })
            .collect()
    }

    fn name(&self) -> &str {
        DENSE_BACKEND
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> QdrantIndex {
        QdrantIndex::new(DenseIndexConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_ms: 500,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn request_body_shape() {
        let body = index().request_body(&[0.5, 0.25], 50);
        assert_eq!(body["query"], json!([0.5, 0.25]));
        assert_eq!(body["limit"], 50);
        assert_eq!(body["with_payload"], true);
        assert_eq!(body["params"]["quantization"]["ignore"], true);
    }

    #[test]
    fn point_ids_may_be_numbers_or_strings() {
        let raw = json!({
            "result": {"points": [
                {"id": 42, "score": 0.9, "payload": {"doc_id": "D-1"}},
                {"id": "5c56c793-69f3-4fbf-87e6-c4bf54c28c26", "score": 0.4}
            ]},
            "status": "ok"
        });
        let decoded: QueryResponse = serde_json::from_value(raw).unwrap();
        let ids: Vec<String> = decoded
            .result
            .points
            .into_iter()
            .map(|p| p.id.into_string())
            .collect();
        assert_eq!(ids, vec!["42", "5c56c793-69f3-4fbf-87e6-c4bf54c28c26"]);
    }

    #[test]
    fn unreachable_server_is_a_search_error() {
        let err = index().search(&[0.1, 0.2], 5).unwrap_err();
        assert!(err.is_backend_failure());
    }
}
