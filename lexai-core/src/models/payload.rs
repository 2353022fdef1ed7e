//! Typed view over the per-document fields stored in both indexes.
//!
//! Field names on the wire follow the index mappings. Values written by the
//! ingestion scripts are loosely typed (a field may hold a string, a list of
//! strings, a number or null), so every known field is decoded leniently and
//! anything unrecognised lands in [`CasePayload::extra`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Structured payload of a court decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CasePayload {
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub doc_id: Option<String>,

    #[serde(
        rename = "dava_turu",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub case_type: Option<String>,

    #[serde(
        rename = "sonuc",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub outcome: Option<String>,

    #[serde(
        rename = "metin_esas_no",
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub docket_numbers: Vec<String>,

    #[serde(
        rename = "metin_karar_no",
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub decision_numbers: Vec<String>,

    /// Normalized statute citations, e.g. `"TMK 175"`.
    #[serde(default, deserialize_with = "lenient_list", skip_serializing_if = "Vec::is_empty")]
    pub laws_norm: Vec<String>,

    /// Section of the decision a dense segment was cut from.
    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    /// Cleaned full decision text.
    #[serde(
        rename = "karar_metni_meta",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub decision_text_meta: Option<String>,

    #[serde(
        rename = "karar_metni",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub decision_text: Option<String>,

    #[serde(
        rename = "karar_metni_raw",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub decision_text_raw: Option<String>,

    /// Operative part of the decision.
    #[serde(
        rename = "karar",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub ruling: Option<String>,

    #[serde(
        rename = "gerekce",
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub reasoning: Vec<String>,

    #[serde(
        rename = "hikaye",
        default,
        deserialize_with = "lenient_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub narrative: Vec<String>,

    #[serde(
        rename = "karar_preview",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub decision_preview: Option<String>,

    /// Raw segment text stored with a dense vector.
    #[serde(
        rename = "text",
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub segment_text: Option<String>,

    #[serde(default, deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub text_preview: Option<String>,

    /// Backend-specific fields with no typed counterpart.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CasePayload {
    /// Payload carrying only a document id.
    pub fn with_doc_id(doc_id: impl Into<String>) -> Self {
        Self {
            doc_id: Some(doc_id.into()),
            ..Self::default()
        }
    }

    /// Decode an index payload object.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        match value {
            Value::Null => Ok(Self::default()),
            other => serde_json::from_value(other),
        }
    }
}

/// Strings pass through, numbers are stringified, string lists are joined
/// with a space. Blank results and other shapes decode to `None`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let text = match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Array(items)) => strings_of(items).join(" "),
        _ => return Ok(None),
    };
    let trimmed = text.trim();
    Ok((!trimmed.is_empty()).then(|| trimmed.to_string()))
}

/// A single string becomes a one-element list; non-string list items and
/// blank entries are dropped.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => strings_of(vec![Value::String(s)]),
        Some(Value::Array(items)) => strings_of(items),
        _ => Vec::new(),
    })
}

fn strings_of(items: Vec<Value>) -> Vec<String> {
    items
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        })
        .collect()
}
