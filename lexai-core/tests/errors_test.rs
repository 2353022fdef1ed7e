use lexai_core::errors::*;

#[test]
fn backend_unavailable_carries_backend_and_reason() {
    let err = SearchError::BackendUnavailable {
        backend: "opensearch".into(),
        reason: "connection refused".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("opensearch"));
    assert!(msg.contains("connection refused"));
    assert_eq!(err.backend(), Some("opensearch"));
}

#[test]
fn timeout_counts_as_unavailable() {
    let err = SearchError::Timeout {
        backend: "qdrant".into(),
        timeout_ms: 60_000,
    };
    assert!(err.is_unavailable());
    assert!(err.to_string().contains("60000"));
}

#[test]
fn query_syntax_is_not_unavailable() {
    let err = SearchError::QuerySyntax {
        backend: "opensearch".into(),
        reason: "parse_exception".into(),
    };
    assert!(!err.is_unavailable());
}

#[test]
fn retrieval_failed_carries_both_reasons() {
    let err = RetrievalError::RetrievalFailed {
        lexical: "lexical down".into(),
        dense: "dense down".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("lexical down"));
    assert!(msg.contains("dense down"));
}

// --- From impls ---

#[test]
fn search_error_converts_to_lexai_error() {
    let err: LexaiError = SearchError::InvalidTopK { top_k: 0 }.into();
    assert!(matches!(err, LexaiError::SearchError(_)));
}

#[test]
fn embedding_error_converts_to_lexai_error() {
    let err: LexaiError = EmbeddingError::DimensionMismatch {
        expected: 1024,
        actual: 384,
    }
    .into();
    assert!(matches!(err, LexaiError::EmbeddingError(_)));
}

#[test]
fn config_error_converts_to_lexai_error() {
    let err: LexaiError = ConfigError::ValidationFailed {
        field: "retrieval.mmr.lambda".into(),
        message: "must be between 0.0 and 1.0".into(),
    }
    .into();
    assert!(matches!(err, LexaiError::ConfigError(_)));
}

#[test]
fn serialization_error_converts_to_lexai_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: LexaiError = json_err.into();
    assert!(matches!(err, LexaiError::SerializationError(_)));
}

// --- Backend failure classification ---

#[test]
fn backend_failures_are_classified() {
    let unavailable: LexaiError = SearchError::BackendUnavailable {
        backend: "qdrant".into(),
        reason: "refused".into(),
    }
    .into();
    let failed: LexaiError = RetrievalError::RetrievalFailed {
        lexical: "a".into(),
        dense: "b".into(),
    }
    .into();
    let embedding: LexaiError = EmbeddingError::InferenceFailed {
        reason: "oom".into(),
    }
    .into();

    assert!(unavailable.is_backend_failure());
    assert!(failed.is_backend_failure());
    assert!(!embedding.is_backend_failure());
}
