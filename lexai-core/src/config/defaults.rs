// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "ollama";
pub const DEFAULT_EMBEDDING_MODEL: &str = "bge-m3";
pub const DEFAULT_EMBEDDING_URL: &str = "http://localhost:11434";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 1024;
pub const DEFAULT_EMBEDDING_BATCH_SIZE: usize = 32;
pub const DEFAULT_L1_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_EMBEDDING_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_FALLBACK_TO_TFIDF: bool = false;

// --- Lexical index ---
pub const DEFAULT_LEXICAL_URL: &str = "http://localhost:9200";
pub const DEFAULT_INDEX_NAME: &str = "lexai_cases";
pub const DEFAULT_LEXICAL_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_LEXICAL_OPERATOR: &str = "and";
pub const DEFAULT_CITATION_FIELD: &str = "laws_norm.kw";
pub const DEFAULT_CITATION_BOOST: f64 = 5.0;

/// Multi-field boosts for the keyword query.
pub const DEFAULT_FIELD_BOOSTS: &[(&str, f64)] = &[
    ("dava_turu", 4.0),
    ("laws_norm", 3.0),
    ("karar_metni", 3.0),
    ("karar_preview", 2.0),
    ("sonuc", 1.5),
];

// --- Dense index ---
pub const DEFAULT_DENSE_URL: &str = "http://localhost:6333";
pub const DEFAULT_COLLECTION_NAME: &str = "lexai_cases";
pub const DEFAULT_DENSE_TIMEOUT_MS: u64 = 60_000;
pub const DEFAULT_IGNORE_QUANTIZATION: bool = true;

// --- Retrieval ---
pub const DEFAULT_TOP_K_LEXICAL: usize = 50;
pub const DEFAULT_TOP_K_DENSE: usize = 50;
pub const DEFAULT_TOPN: usize = 8;
pub const DEFAULT_MIN_TOPN: usize = 1;
pub const DEFAULT_MAX_TOPN: usize = 20;

// --- Fusion ---
pub const DEFAULT_CITATION_DENSE_WEIGHT: f64 = 0.6;
pub const DEFAULT_CITATION_LEXICAL_WEIGHT: f64 = 0.4;
pub const DEFAULT_DENSE_WEIGHT: f64 = 0.7;
pub const DEFAULT_LEXICAL_WEIGHT: f64 = 0.3;
pub const DEFAULT_FUSION_MAX_CANDIDATES: usize = 100;

// --- MMR ---
pub const DEFAULT_MMR_LAMBDA: f64 = 0.5;
pub const DEFAULT_MMR_MAX_CANDIDATES: usize = 50;

// --- Passages ---
pub const DEFAULT_MAX_PASSAGE_CHARS: usize = 1_200;
pub const DEFAULT_REPR_MAX_CHARS: usize = 400;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
