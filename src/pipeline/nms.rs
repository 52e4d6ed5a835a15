//! Greedy non-max suppression.

use crate::common::Detection;

/// Deduplicates overlapping candidates, keeping the highest-scoring
/// representative of each cluster.
///
/// The overlap test is a containment ratio, not an intersection-over-union:
/// a later candidate is eliminated when the intersection exceeds
/// `containment_threshold` of that candidate's own integer area. Small boxes
/// nested inside a larger, higher-scoring one are therefore suppressed
/// aggressively while the reverse nesting survives. Downstream consumers
/// depend on that behavior.
///
/// Suppressed candidates get their score zeroed and fall under `score_floor`
/// for all later comparisons. The returned boxes keep acceptance order,
/// which is descending score; ties keep their input order (stable sort).
pub fn suppress(
    mut candidates: Vec<Detection>,
    containment_threshold: f32,
    score_floor: f32,
) -> Vec<Detection> {
    candidates.sort_by(|a, b| b.score.total_cmp(&a.score));

    let mut results = Vec::new();
    for i in 0..candidates.len() {
        if candidates[i].score < score_floor {
            continue;
        }
        results.push(candidates[i].clone());

        let kept = candidates[i].rect;
        for j in (i + 1)..candidates.len() {
            if candidates[j].score < score_floor {
                continue;
            }
            let overlap = kept.intersect_area(&candidates[j].rect);
            if overlap as f32 > containment_threshold * candidates[j].rect.area() as f32 {
                candidates[j].score = 0.0;
            }
        }
    }

    results
}
