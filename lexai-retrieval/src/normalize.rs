//! Min-max score normalization.

/// Rescale `scores` into [0,1], preserving length and order.
///
/// When every score is equal (including a single score) all outputs are
/// 1.0, so a lone relevant hit is not zeroed out.
pub fn normalize(scores: &[f64]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }

    let (min, max) = scores
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &s| {
            (lo.min(s), hi.max(s))
        });

    if max <= min {
        return vec![1.0; scores.len()];
    }

    let range = max - min;
    scores.iter().map(|&s| (s - min) / range).collect()
}
