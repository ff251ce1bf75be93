use super::*;
use crate::test_support::{Scripted, assert_segments_valid, count, for_each_choice_path};
use rand::{SeedableRng, rngs::StdRng};

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

fn seg(orientation: Orientation, fixed: u32, start: u32, end: u32) -> Segment {
    Segment {
        orientation,
        fixed,
        span: Span { start, end },
    }
}

use crate::foundation::core::Orientation::{Horizontal as H, Vertical as V};

#[test]
fn target_attempts_rounds_up() {
    assert_eq!(target_attempts(canvas(3, 3), 0.0), 1);
    assert_eq!(target_attempts(canvas(3, 3), 1.0), 9);
    assert_eq!(target_attempts(canvas(4, 4), 1.0), 16);
    assert_eq!(target_attempts(canvas(10, 10), 0.25), 4);
}

#[test]
fn overflowing_density_is_capped_not_zeroed() {
    let c = canvas(10, 10);
    let cap = 100 * MAX_ATTEMPTS_PER_CELL as usize;
    assert_eq!(target_attempts(c, 1.0), 100);
    // 100^100 is finite, 100^200 overflows to infinity; both hit the cap.
    assert_eq!(target_attempts(c, 100.0), cap);
    assert_eq!(target_attempts(c, 200.0), cap);
    assert_eq!(target_attempts(c, f64::MAX), cap);
    assert_eq!(target_attempts(c, 1.5), cap);
    assert_eq!(target_attempts(c, 1.4), 631);
}

#[test]
fn endpoints_follow_orientation() {
    assert_eq!(
        seg(V, 4, 0, 5).endpoints(),
        (Point::new(4, 0), Point::new(4, 5))
    );
    assert_eq!(
        seg(H, 1, 1, 5).endpoints(),
        (Point::new(1, 1), Point::new(5, 1))
    );
}

#[test]
fn crowding_needs_parallel_neighbour_with_shared_span() {
    let a = seg(V, 3, 0, 4);
    assert!(a.crowds(&seg(V, 4, 4, 9)));
    assert!(a.crowds(&seg(V, 2, 1, 2)));
    assert!(a.crowds(&seg(V, 3, 0, 4)));
    assert!(!a.crowds(&seg(V, 5, 0, 4)));
    assert!(!a.crowds(&seg(V, 4, 5, 9)));
    assert!(!a.crowds(&seg(H, 3, 0, 4)));
}

#[test]
fn first_segment_spans_the_canvas() {
    let mut s = Scripted::new(vec![0, 0, 0, 1]);
    let placed = try_place(canvas(5, 4), &[], &mut s).unwrap();
    assert_eq!(placed, seg(V, 2, 0, 3));
    // orientation, start (edge only), end (edge only), coordinate in [1, 3]
    assert_eq!(s.lens, vec![2, 1, 1, 3]);
}

#[test]
fn start_bound_limits_coordinate_to_its_span() {
    let existing = [seg(H, 2, 0, 3)];
    let mut s = Scripted::new(vec![0, 1, 0, 1]);
    let placed = try_place(canvas(8, 6), &existing, &mut s).unwrap();
    assert_eq!(placed, seg(V, 2, 2, 5));
    assert_eq!(s.lens, vec![2, 2, 1, 2]);
}

#[test]
fn end_bounds_must_lie_beyond_start_and_overlap_it() {
    let existing = [
        seg(H, 2, 0, 9),
        seg(H, 5, 0, 4),
        seg(H, 7, 6, 9),
        seg(H, 1, 0, 9),
    ];
    // vertical, start at y=2, end at y=5, first free coordinate
    let mut s = Scripted::new(vec![0, 1, 1, 0]);
    let placed = try_place(canvas(10, 10), &existing, &mut s).unwrap();
    assert_eq!(placed, seg(V, 1, 2, 5));
    // ends offered: none, y=5, y=7; coordinates 1..=3 inside the y=5 segment
    assert_eq!(s.lens, vec![2, 5, 3, 3]);
}

#[test]
fn bound_too_short_to_touch_abandons() {
    let existing = [seg(H, 2, 3, 4)];
    let mut s = Scripted::new(vec![0, 1]);
    assert_eq!(
        try_place(canvas(8, 8), &existing, &mut s),
        Err(Abandoned::EmptyDomain)
    );
}

#[test]
fn crowded_parallel_coordinates_are_skipped() {
    let existing = [seg(V, 2, 0, 5)];
    let mut s = Scripted::new(vec![0, 0, 0, 0]);
    let placed = try_place(canvas(6, 6), &existing, &mut s).unwrap();
    assert_eq!(placed, seg(V, 4, 0, 5));
    assert_eq!(s.lens.last(), Some(&1));
}

#[test]
fn touching_spans_still_crowd() {
    // The vertical at x=2 ends on y=3, where the new segment would start.
    let existing = [seg(H, 3, 0, 5), seg(V, 2, 0, 3)];
    let mut s = Scripted::new(vec![0, 1, 0, 0]);
    let placed = try_place(canvas(6, 6), &existing, &mut s).unwrap();
    assert_eq!(placed, seg(V, 4, 3, 5));
    assert_eq!(s.lens, vec![2, 2, 1, 1]);

    // Once the lower vertical stops short, the whole interior is free again.
    let existing = [seg(H, 3, 0, 5), seg(V, 2, 0, 2)];
    let mut s = Scripted::new(vec![0, 1, 0, 0]);
    let placed = try_place(canvas(6, 6), &existing, &mut s).unwrap();
    assert_eq!(placed, seg(V, 1, 3, 5));
    assert_eq!(s.lens, vec![2, 2, 1, 4]);
}

#[test]
fn full_parallel_coverage_abandons() {
    let existing = [seg(V, 1, 0, 2)];
    let mut s = Scripted::new(vec![0]);
    assert_eq!(
        try_place(canvas(3, 3), &existing, &mut s),
        Err(Abandoned::NoFreeCoordinate)
    );
}

#[test]
fn abandoned_attempts_are_counted() {
    let mut s = Scripted::new(vec![0, 0, 0, 0, 0]);
    let (segments, stats) = place_segments(canvas(3, 3), 2, &mut s);
    assert_eq!(segments, vec![seg(V, 1, 0, 2)]);
    assert_eq!(
        stats,
        PlacementStats {
            target_attempts: 2,
            accepted: 1,
            abandoned: 1,
        }
    );
}

#[test]
fn three_by_three_single_attempt_always_places_one_line() {
    let paths = for_each_choice_path(|s| {
        let (segments, stats) = place_segments(canvas(3, 3), 1, s);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].fixed, 1);
        assert_eq!(segments[0].span, Span { start: 0, end: 2 });
        assert_eq!(stats.abandoned, 0);
    });
    assert_eq!(paths, 2);
}

#[test]
fn four_by_four_choice_tree_respects_invariants() {
    let c = canvas(4, 4);
    let paths = for_each_choice_path(|s| {
        let (segments, stats) = place_segments(c, 4, s);
        assert_eq!(stats.accepted + stats.abandoned, 4);
        assert_segments_valid(c, &segments);
        assert!(count(&segments, V) <= 2 && count(&segments, H) <= 2);
    });
    assert!(paths > 4);
}

#[test]
fn bounded_ends_touch_perpendicular_segments() {
    let c = canvas(16, 12);
    for seed in 0..40 {
        let mut rng = StdRng::seed_from_u64(seed);
        let (segments, _) = place_segments(c, 60, &mut rng);
        assert_segments_valid(c, &segments);
        for (i, s) in segments.iter().enumerate() {
            let earlier = &segments[..i];
            let edge = c.span_extent(s.orientation) - 1;
            for anchor in [s.span.start, s.span.end] {
                if anchor == 0 || anchor == edge {
                    continue;
                }
                assert!(
                    earlier.iter().any(|b| b.orientation != s.orientation
                        && b.fixed == anchor
                        && b.span.start < s.fixed
                        && s.fixed < b.span.end),
                    "seed {seed}: {s:?} has a loose end at {anchor}"
                );
            }
        }
    }
}

#[test]
fn seeded_placement_is_reproducible() {
    let c = canvas(20, 14);
    let a = place_segments(c, 40, &mut StdRng::seed_from_u64(99));
    let b = place_segments(c, 40, &mut StdRng::seed_from_u64(99));
    assert_eq!(a, b);
}
