//! Citation-aware weighted fusion of lexical and dense hits.
//!
//! fused = w_dense * dense_norm + w_lexical * lexical_norm, with a missing
//! side counted as 0. Citation-anchored queries use the citation weights.

use std::collections::HashMap;

use lexai_core::config::{FusionConfig, FusionWeights};
use lexai_core::models::{Hit, HitSource};

#[derive(Debug, Clone, Default)]
pub struct FusionEngine {
    config: FusionConfig,
}

/// Which input list a hit was read from.
#[derive(Clone, Copy)]
enum Side {
    Lexical,
    Dense,
}

/// Per-doc accumulator, in first-encounter order.
struct Entry<'h> {
    carrier: &'h Hit,
    lexical: Option<f64>,
    dense: Option<f64>,
}

impl FusionEngine {
    pub fn new(config: FusionConfig) -> Self {
        Self { config }
    }

    pub fn weights_for(&self, citation_tags: &[String]) -> FusionWeights {
        if citation_tags.is_empty() {
            self.config.default_weights
        } else {
            self.config.citation_weights
        }
    }

    /// Fuse both lists into at most `max_candidates` hybrid hits, sorted by
    /// fused score descending; equal scores keep encounter order (lexical
    /// list first, then dense).
    ///
    /// Payload and texts come from the first hit seen for a doc id, unless
    /// that hit has no full text and a later one does.
    pub fn fuse(&self, lexical: &[Hit], dense: &[Hit], citation_tags: &[String]) -> Vec<Hit> {
        let weights = self.weights_for(citation_tags);

        let mut entries: Vec<Entry<'_>> = Vec::with_capacity(lexical.len() + dense.len());
        let mut by_id: HashMap<&str, usize> = HashMap::new();

        let tagged = lexical
            .iter()
            .map(|h| (h, Side::Lexical))
            .chain(dense.iter().map(|h| (h, Side::Dense)));

        for (hit, side) in tagged {
            let idx = *by_id.entry(hit.doc_id.as_str()).or_insert_with(|| {
                entries.push(Entry {
                    carrier: hit,
                    lexical: None,
                    dense: None,
                });
                entries.len() - 1
            });
            let entry = &mut entries[idx];

            let slot = match side {
                Side::Lexical => &mut entry.lexical,
                Side::Dense => &mut entry.dense,
            };
            if slot.is_none() {
                *slot = Some(hit.score_norm);
            }

            if entry.carrier.text_full.is_empty() && !hit.text_full.is_empty() {
                entry.carrier = hit;
            }
        }

        let mut fused: Vec<Hit> = entries
            .into_iter()
            .map(|e| Hit {
                doc_id: e.carrier.doc_id.clone(),
                score_raw: 0.0,
                score_norm: weights.dense * e.dense.unwrap_or(0.0)
                    + weights.lexical * e.lexical.unwrap_or(0.0),
                source: HitSource::Hybrid,
                payload: e.carrier.payload.clone(),
                text_repr: e.carrier.text_repr.clone(),
                text_full: e.carrier.text_full.clone(),
            })
            .collect();

        fused.sort_by(|a, b| {
            b.score_norm
                .partial_cmp(&a.score_norm)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        fused.truncate(self.config.max_candidates);
        fused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexai_core::models::CasePayload;

    fn hit(id: &str, norm: f64, source: HitSource, full: &str) -> Hit {
        Hit {
            doc_id: id.to_string(),
            score_raw: norm,
            score_norm: norm,
            source,
            payload: CasePayload::with_doc_id(id),
            text_repr: String::new(),
            text_full: full.to_string(),
        }
    }

    fn ids(hits: &[Hit]) -> Vec<&str> {
        hits.iter().map(|h| h.doc_id.as_str()).collect()
    }

    #[test]
    fn nafaka_scenario_order_and_scores() {
        let lexical = vec![
            hit("A", 1.0, HitSource::Lexical, "a"),
            hit("B", 0.75, HitSource::Lexical, "b"),
            hit("C", 0.0, HitSource::Lexical, "c"),
        ];
        let dense = vec![
            hit("B", 1.0, HitSource::Dense, "b"),
            hit("D", 0.0, HitSource::Dense, "d"),
        ];
        let fused = FusionEngine::default().fuse(&lexical, &dense, &[]);

        assert_eq!(ids(&fused), vec!["B", "A", "C", "D"]);
        assert!((fused[0].score_norm - 0.925).abs() < 1e-12);
        assert!((fused[1].score_norm - 0.3).abs() < 1e-12);
        assert_eq!(fused[2].score_norm, 0.0);
        assert_eq!(fused[3].score_norm, 0.0);
        assert!(fused.iter().all(|h| h.source == HitSource::Hybrid && h.score_raw == 0.0));
    }

    #[test]
    fn citation_tags_switch_weights() {
        let lexical = vec![hit("A", 1.0, HitSource::Lexical, "a")];
        let dense = vec![hit("B", 1.0, HitSource::Dense, "b")];
        let engine = FusionEngine::default();

        let plain = engine.fuse(&lexical, &dense, &[]);
        assert_eq!(ids(&plain), vec!["B", "A"]);
        assert!((plain[0].score_norm - 0.7).abs() < 1e-12);

        let cited = engine.fuse(&lexical, &dense, &["TMK 175".to_string()]);
        assert_eq!(ids(&cited), vec!["B", "A"]);
        assert!((cited[0].score_norm - 0.6).abs() < 1e-12);
        assert!((cited[1].score_norm - 0.4).abs() < 1e-12);
    }

    #[test]
    fn richer_text_replaces_empty_carrier() {
        let lexical = vec![hit("A", 1.0, HitSource::Lexical, "")];
        let dense = vec![hit("A", 1.0, HitSource::Dense, "segment text")];
        let fused = FusionEngine::default().fuse(&lexical, &dense, &[]);
        assert_eq!(fused.len(), 1);
        assert_eq!(fused[0].text_full, "segment text");
        assert!((fused[0].score_norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn first_carrier_with_text_is_kept() {
        let lexical = vec![hit("A", 1.0, HitSource::Lexical, "full decision")];
        let dense = vec![hit("A", 1.0, HitSource::Dense, "segment")];
        let fused = FusionEngine::default().fuse(&lexical, &dense, &[]);
        assert_eq!(fused[0].text_full, "full decision");
    }

    #[test]
    fn pool_is_capped() {
        let lexical: Vec<Hit> = (0..150)
            .map(|i| hit(&format!("L{i}"), 1.0 - i as f64 / 150.0, HitSource::Lexical, "x"))
            .collect();
        let fused = FusionEngine::default().fuse(&lexical, &[], &[]);
        assert_eq!(fused.len(), 100);
        assert_eq!(fused[0].doc_id, "L0");
    }

    #[test]
    fn list_position_decides_the_side() {
        // Re-fusing already fused hits: the source tag must not move a
        // dense contribution into the lexical slot.
        let lexical = vec![hit("A", 1.0, HitSource::Hybrid, "a")];
        let dense = vec![hit("A", 0.5, HitSource::Hybrid, "a"), hit("B", 1.0, HitSource::Hybrid, "b")];
        let fused = FusionEngine::default().fuse(&lexical, &dense, &[]);

        assert_eq!(fused[0].doc_id, "B");
        assert!((fused[0].score_norm - 0.7).abs() < 1e-12);
        assert!((fused[1].score_norm - (0.3 + 0.7 * 0.5)).abs() < 1e-12);
    }

    #[test]
    fn empty_inputs_fuse_to_empty() {
        assert!(FusionEngine::default().fuse(&[], &[], &[]).is_empty());
    }
}
