//! Blocking HTTP plumbing shared by the index clients.
//!
//! Transport failures are mapped to `SearchError` here so callers only see
//! typed search failures.

use std::time::Duration;

use lexai_core::errors::SearchError;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

pub(crate) fn build_client(backend: &str, timeout_ms: u64) -> Result<Client, SearchError> {
    Client::builder()
        .timeout(Duration::from_millis(timeout_ms))
        .gzip(true)
        .build()
        .map_err(|e| SearchError::BackendUnavailable {
            backend: backend.to_string(),
            reason: format!("http client: {e}"),
        })
}

fn transport_error(backend: &str, timeout_ms: u64, e: reqwest::Error) -> SearchError {
    if e.is_timeout() {
        SearchError::Timeout {
            backend: backend.to_string(),
            timeout_ms,
        }
    } else {
        SearchError::BackendUnavailable {
            backend: backend.to_string(),
            reason: e.to_string(),
        }
    }
}

/// Send a request and decode a 2xx JSON body.
///
/// 400 is a query the backend rejected; any other non-2xx status means the
/// backend could not serve it.
pub(crate) fn send_json<T: DeserializeOwned>(
    backend: &str,
    timeout_ms: u64,
    request: RequestBuilder,
) -> Result<T, SearchError> {
    let response = request
        .send()
        .map_err(|e| transport_error(backend, timeout_ms, e))?;
    let status = response.status();
    let body = response
        .text()
        .map_err(|e| transport_error(backend, timeout_ms, e))?;

    if status == StatusCode::BAD_REQUEST {
        return Err(SearchError::QuerySyntax {
            backend: backend.to_string(),
            reason: excerpt(&body),
        });
    }
    if !status.is_success() {
        return Err(SearchError::BackendUnavailable {
            backend: backend.to_string(),
            reason: format!("HTTP {status}: {}", excerpt(&body)),
        });
    }

    serde_json::from_str(&body).map_err(|e| SearchError::MalformedResponse {
        backend: backend.to_string(),
        reason: e.to_string(),
    })
}

fn excerpt(body: &str) -> String {
    body.chars().take(300).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_connection_is_unavailable() {
        let client = build_client("opensearch", 500).unwrap();
        let err = send_json::<serde_json::Value>("opensearch", 500, client.get("http://127.0.0.1:9/"))
            .unwrap_err();
        assert!(err.is_unavailable());
        assert_eq!(err.backend(), Some("opensearch"));
    }

    #[test]
    fn excerpt_is_bounded_by_characters() {
        let body = "ş".repeat(1000);
        assert_eq!(excerpt(&body).chars().count(), 300);
    }
}
