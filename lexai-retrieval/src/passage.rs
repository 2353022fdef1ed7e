//! Passage materialization: canonical short/full text for a case payload.
//!
//! `text_full` precedence, most processed first:
//! `karar_metni_meta` → `karar_metni` → `karar_metni_raw` → `karar` →
//! `gerekce` + `hikaye` → `text` → `karar_preview` → `text_preview` → "".

use lexai_core::config::PassageConfig;
use lexai_core::models::{CasePayload, Hit, Passage};

#[derive(Debug, Clone, Default)]
pub struct PassageMaterializer {
    config: PassageConfig,
}

impl PassageMaterializer {
    pub fn new(config: PassageConfig) -> Self {
        Self { config }
    }

    /// Full text for a payload, hard-cut at `max_passage_chars` characters.
    pub fn full_text(&self, payload: &CasePayload) -> String {
        let joined;
        let source = [
            payload.decision_text_meta.as_deref(),
            payload.decision_text.as_deref(),
            payload.decision_text_raw.as_deref(),
            payload.ruling.as_deref(),
        ]
        .into_iter()
        .flatten()
        .find(|s| !s.trim().is_empty());

        let text = match source {
            Some(s) => s,
            None => {
                joined = payload
                    .reasoning
                    .iter()
                    .chain(&payload.narrative)
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(" ");
                if !joined.trim().is_empty() {
                    joined.as_str()
                } else {
                    [
                        payload.segment_text.as_deref(),
                        payload.decision_preview.as_deref(),
                        payload.text_preview.as_deref(),
                    ]
                    .into_iter()
                    .flatten()
                    .find(|s| !s.trim().is_empty())
                    .unwrap_or("")
                }
            }
        };
        truncate_chars(text.trim(), self.config.max_passage_chars).to_string()
    }

    /// Short snippet: the decision preview when present, else the start of
    /// `full`, both cut to `repr_max_chars`.
    pub fn repr_text(&self, payload: &CasePayload, full: &str) -> String {
        let base = payload
            .decision_preview
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(full);
        cut_at_sentence(base.trim(), self.config.repr_max_chars).to_string()
    }

    /// `(text_repr, text_full)` for a payload.
    pub fn text_fields(&self, payload: &CasePayload) -> (String, String) {
        let full = self.full_text(payload);
        let repr = self.repr_text(payload, &full);
        (repr, full)
    }

    /// Project a selected hit to a passage. Fields the payload cannot supply
    /// fall back to the hit's own texts.
    pub fn materialize(&self, hit: &Hit) -> Passage {
        let (mut text_repr, mut text_full) = self.text_fields(&hit.payload);
        if text_full.is_empty() {
            text_full = truncate_chars(&hit.text_full, self.config.max_passage_chars).to_string();
        }
        if text_repr.is_empty() {
            text_repr = if hit.text_repr.is_empty() {
                cut_at_sentence(&text_full, self.config.repr_max_chars).to_string()
            } else {
                cut_at_sentence(&hit.text_repr, self.config.repr_max_chars).to_string()
            };
        }
        Passage {
            doc_id: hit.doc_id.clone(),
            text_repr,
            text_full,
        }
    }
}

/// First `max` characters of `s`.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// First `max` characters of `s`, ending at the last sentence boundary in
/// that window if the boundary lies in its second half.
pub fn cut_at_sentence(s: &str, max: usize) -> &str {
    let window = truncate_chars(s, max);
    if window.len() == s.len() {
        return s;
    }

    let rest = &s[window.len()..];
    let mut boundary = None;
    let mut chars = window.char_indices().peekable();
    let mut count = 0usize;
    while let Some((idx, c)) = chars.next() {
        count += 1;
        if matches!(c, '.' | '!' | '?' | '…') {
            let next = match chars.peek() {
                Some((_, n)) => Some(*n),
                None => rest.chars().next(),
            };
            if next.map_or(true, char::is_whitespace) {
                boundary = Some((idx + c.len_utf8(), count));
            }
        }
    }

    match boundary {
        Some((end, count)) if count * 2 >= max => &window[..end],
        _ => window,
    }
}
