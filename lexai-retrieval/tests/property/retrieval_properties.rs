use std::collections::HashSet;

use lexai_core::config::MmrConfig;
use lexai_core::models::{CasePayload, Hit, HitSource};
use lexai_retrieval::normalize::normalize;
use lexai_retrieval::passage::{cut_at_sentence, truncate_chars};
use lexai_retrieval::ranking::cosine_similarity;
use lexai_retrieval::{CitationDetector, FusionEngine, MmrSelector};
use proptest::prelude::*;

fn hit(id: &str, score: f64, source: HitSource) -> Hit {
    Hit {
        doc_id: id.to_string(),
        score_raw: score,
        score_norm: score,
        source,
        payload: CasePayload::with_doc_id(id),
        text_repr: String::new(),
        text_full: String::new(),
    }
}

fn side(entries: &[(u8, f64)], source: HitSource) -> Vec<Hit> {
    entries
        .iter()
        .map(|(id, score)| hit(&format!("D{id}"), *score, source))
        .collect()
}

// ── Normalization ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn normalized_scores_stay_in_unit_interval(
        scores in prop::collection::vec(-1e6f64..1e6, 0..60)
    ) {
        let out = normalize(&scores);
        prop_assert_eq!(out.len(), scores.len());
        for v in &out {
            prop_assert!((0.0..=1.0).contains(v), "out of range: {}", v);
        }
    }

    #[test]
    fn normalization_preserves_order(
        scores in prop::collection::vec(-1e3f64..1e3, 2..40)
    ) {
        let out = normalize(&scores);
        for i in 0..scores.len() {
            for j in 0..scores.len() {
                if scores[i] < scores[j] {
                    prop_assert!(out[i] <= out[j]);
                }
            }
        }
    }

    #[test]
    fn equal_scores_normalize_to_one(score in -1e3f64..1e3, n in 1usize..20) {
        prop_assert!(normalize(&vec![score; n]).iter().all(|&v| v == 1.0));
    }
}

// ── Fusion ────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn fusion_is_complete_unique_and_sorted(
        lexical in prop::collection::vec((0u8..30, 0.0f64..=1.0), 0..40),
        dense in prop::collection::vec((0u8..30, 0.0f64..=1.0), 0..40),
        cited in any::<bool>(),
    ) {
        let lexical = side(&lexical, HitSource::Lexical);
        let dense = side(&dense, HitSource::Dense);
        let tags = if cited { vec!["TMK 175".to_string()] } else { Vec::new() };

        let fused = FusionEngine::default().fuse(&lexical, &dense, &tags);

        let expected: HashSet<&str> = lexical.iter().chain(&dense).map(|h| h.doc_id.as_str()).collect();
        let got: Vec<&str> = fused.iter().map(|h| h.doc_id.as_str()).collect();
        let unique: HashSet<&str> = got.iter().copied().collect();
        prop_assert_eq!(unique.len(), got.len(), "duplicate doc ids in {:?}", got);
        prop_assert_eq!(unique, expected);

        for pair in fused.windows(2) {
            prop_assert!(pair[0].score_norm >= pair[1].score_norm);
        }
        for h in &fused {
            prop_assert_eq!(h.source, HitSource::Hybrid);
            prop_assert!(h.score_norm >= 0.0 && h.score_norm <= 1.0 + 1e-12);
        }
    }

    #[test]
    fn fusion_never_exceeds_its_cap(n in 0usize..250) {
        let lexical: Vec<Hit> = (0..n).map(|i| hit(&format!("L{i}"), 0.5, HitSource::Lexical)).collect();
        let fused = FusionEngine::default().fuse(&lexical, &[], &[]);
        prop_assert_eq!(fused.len(), n.min(100));
    }
}

// ── MMR ───────────────────────────────────────────────────────────────────

fn pool() -> impl Strategy<Value = (Vec<f32>, Vec<Vec<f32>>)> {
    (
        prop::collection::vec(-1.0f32..1.0, 4),
        prop::collection::vec(prop::collection::vec(-1.0f32..1.0, 4), 1..30),
    )
}

fn candidates(n: usize) -> Vec<Hit> {
    (0..n).map(|i| hit(&format!("D{i}"), 1.0 - i as f64 / 100.0, HitSource::Hybrid)).collect()
}

proptest! {
    #[test]
    fn mmr_returns_min_of_topn_and_pool_without_repeats(
        (query, embeddings) in pool(),
        top_n in 0usize..40,
        lambda in 0.0f64..=1.0,
    ) {
        let cands = candidates(embeddings.len());
        let selector = MmrSelector::new(MmrConfig { lambda, ..Default::default() });
        let picked = selector.select_with_embeddings(&query, &cands, &embeddings, top_n);

        prop_assert_eq!(picked.len(), top_n.min(cands.len()));
        let unique: HashSet<&str> = picked.iter().map(|h| h.doc_id.as_str()).collect();
        prop_assert_eq!(unique.len(), picked.len());
    }

    #[test]
    fn mmr_with_lambda_one_follows_relevance(
        (query, embeddings) in pool(),
    ) {
        let cands = candidates(embeddings.len());
        let selector = MmrSelector::new(MmrConfig { lambda: 1.0, ..Default::default() });
        let picked = selector.select_with_embeddings(&query, &cands, &embeddings, cands.len());

        let relevance: Vec<f64> = picked
            .iter()
            .map(|h| {
                let i = cands.iter().position(|c| c.doc_id == h.doc_id).unwrap();
                cosine_similarity(&embeddings[i], &query)
            })
            .collect();
        for pair in relevance.windows(2) {
            prop_assert!(pair[0] >= pair[1], "relevance not descending: {:?}", relevance);
        }
    }

    #[test]
    fn mmr_with_lambda_zero_minimizes_redundancy(
        (query, embeddings) in pool(),
    ) {
        let cands = candidates(embeddings.len());
        let selector = MmrSelector::new(MmrConfig { lambda: 0.0, ..Default::default() });
        let picked: Vec<usize> = selector
            .select_with_embeddings(&query, &cands, &embeddings, cands.len())
            .iter()
            .map(|h| cands.iter().position(|c| c.doc_id == h.doc_id).unwrap())
            .collect();

        let redundancy = |j: usize, chosen: &[usize]| {
            chosen
                .iter()
                .map(|&s| cosine_similarity(&embeddings[j], &embeddings[s]))
                .fold(f64::NEG_INFINITY, f64::max)
        };
        for k in 1..picked.len() {
            let chosen = &picked[..k];
            let own = redundancy(picked[k], chosen);
            for &other in &picked[k + 1..] {
                prop_assert!(
                    own <= redundancy(other, chosen),
                    "pick {} at step {} is more redundant than {}",
                    picked[k], k, other
                );
            }
        }
    }
}

// ── Citation detection and truncation ─────────────────────────────────────

proptest! {
    #[test]
    fn detection_never_repeats_a_tag(query in "\\PC{0,120}") {
        let tags = CitationDetector::new().detect(&query);
        let unique: HashSet<&String> = tags.iter().collect();
        prop_assert_eq!(unique.len(), tags.len());
    }

    #[test]
    fn article_citations_round_trip(article in 1u32..2000, code in prop::sample::select(vec!["TMK", "TBK", "HMK", "TCK", "CMK"])) {
        let tags = CitationDetector::new().detect(&format!("{code} {article} hakkında"));
        prop_assert_eq!(tags, vec![format!("{code} {article}")]);
    }

    #[test]
    fn truncation_is_a_bounded_prefix(text in "\\PC{0,300}", max in 1usize..200) {
        let cut = truncate_chars(&text, max);
        prop_assert!(cut.chars().count() <= max);
        prop_assert!(text.starts_with(cut));

        let sentence = cut_at_sentence(&text, max);
        prop_assert!(sentence.chars().count() <= max);
        prop_assert!(text.starts_with(sentence));
    }
}
