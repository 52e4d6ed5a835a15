use field_detect::common::{Detection, Rect};
use field_detect::pipeline::suppress;

const CONTAINMENT: f32 = 0.7;
const FLOOR: f32 = 0.1;

fn det(x: i32, y: i32, w: i32, h: i32, score: f32) -> Detection {
    Detection::new(Rect::new(x, y, w, h), score, 0)
}

#[test]
fn contained_lower_score_box_is_suppressed() {
    let big = det(0, 0, 100, 100, 0.9);
    let small = det(10, 10, 20, 20, 0.8);

    // The small box is fully inside the big one: intersection equals its own
    // area, far above the 0.7 containment cut.
    assert!(small.rect.containment_ratio(&big.rect) > CONTAINMENT);

    let results = suppress(vec![big.clone(), small], CONTAINMENT, FLOOR);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].rect, big.rect);
    assert_eq!(results[0].score, 0.9);
}

#[test]
fn containment_is_asymmetric_unlike_iou() {
    // A small high-scoring box overlapping a large low-scoring one: the
    // intersection is tiny relative to the large box's own area, so the
    // large box survives even though the small one would not in reverse.
    let small = det(10, 10, 20, 20, 0.9);
    let big = det(0, 0, 100, 100, 0.5);
    assert!(big.rect.containment_ratio(&small.rect) < CONTAINMENT);

    let results = suppress(vec![small, big], CONTAINMENT, FLOOR);
    assert_eq!(results.len(), 2);
}

#[test]
fn suppression_is_idempotent() {
    let candidates = vec![
        det(0, 0, 100, 100, 0.9),
        det(10, 10, 20, 20, 0.8),
        det(200, 200, 50, 50, 0.7),
        det(205, 205, 40, 40, 0.65),
    ];

    let once = suppress(candidates, CONTAINMENT, FLOOR);
    let twice = suppress(once.clone(), CONTAINMENT, FLOOR);
    assert_eq!(once, twice);
}

#[test]
fn score_floor_drops_candidates_even_without_overlap() {
    let results = suppress(
        vec![det(0, 0, 10, 10, 0.05), det(100, 100, 10, 10, 0.09)],
        CONTAINMENT,
        FLOOR,
    );
    assert!(results.is_empty());
}

#[test]
fn score_floor_is_strict_less_than() {
    let results = suppress(vec![det(0, 0, 10, 10, 0.1)], CONTAINMENT, FLOOR);
    assert_eq!(results.len(), 1);
}

#[test]
fn results_keep_descending_score_order_with_stable_ties() {
    let a = det(0, 0, 10, 10, 0.5);
    let b = det(100, 0, 10, 10, 0.9);
    let c = det(200, 0, 10, 10, 0.5);

    let results = suppress(vec![a.clone(), b.clone(), c.clone()], CONTAINMENT, FLOOR);

    let rects: Vec<Rect> = results.iter().map(|r| r.rect).collect();
    assert_eq!(rects, vec![b.rect, a.rect, c.rect]);
}

#[test]
fn suppressed_boxes_cannot_suppress_others() {
    // `middle` falls to `top` (intersection 2000 of its 2500 area), so it is
    // zeroed before it can eliminate `edge`, which barely touches `top`.
    let top = det(0, 0, 60, 50, 0.9);
    let middle = det(20, 0, 50, 50, 0.8);
    let edge = det(55, 0, 14, 50, 0.7);

    assert!(middle.rect.containment_ratio(&top.rect) > CONTAINMENT);
    assert!(edge.rect.containment_ratio(&middle.rect) > CONTAINMENT);
    assert!(edge.rect.containment_ratio(&top.rect) < CONTAINMENT);

    let results = suppress(vec![top.clone(), middle, edge.clone()], CONTAINMENT, FLOOR);

    let rects: Vec<Rect> = results.iter().map(|r| r.rect).collect();
    assert_eq!(rects, vec![top.rect, edge.rect]);
}

#[test]
fn overlap_below_the_containment_cut_is_kept() {
    // Intersection is 1000 against the later box's 2500 area, a 0.4 ratio.
    let first = det(0, 0, 50, 50, 0.9);
    let second = det(30, 0, 50, 50, 0.8);
    assert!(second.rect.containment_ratio(&first.rect) < CONTAINMENT);

    let results = suppress(vec![first, second], CONTAINMENT, FLOOR);
    assert_eq!(results.len(), 2);
}
