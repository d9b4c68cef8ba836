//! Tests for interval merging.

use proptest::prelude::*;

use super::*;

fn set_of(spans: &[(u64, u64)]) -> IntervalSet {
    let mut set = IntervalSet::new();
    for &(min, max) in spans {
        set.add(min, max).unwrap();
    }
    set
}

fn bounds(set: &IntervalSet) -> Vec<(u64, u64)> {
    set.spans().iter().map(|s| (s.min(), s.max())).collect()
}

#[test]
fn test_transitive_chain_collapses() {
    let mut set = set_of(&[(1, 5), (4, 8), (7, 10)]);
    set.merge_all();
    assert_eq!(bounds(&set), vec![(1, 10)]);
}

#[test]
fn test_chain_in_reverse_order() {
    // [7,10] and [1,5] are kept apart on the first pass and only joined once
    // [4,8] has grown the first of them
    let mut set = set_of(&[(7, 10), (1, 5), (4, 8)]);
    set.merge_with(MergeStrategy::FixedPoint);
    assert_eq!(bounds(&set), vec![(1, 10)]);
}

#[test]
fn test_disjoint_spans_stay_apart() {
    let mut set = set_of(&[(1, 5), (10, 15)]);
    set.merge_all();
    assert_eq!(bounds(&set), vec![(1, 5), (10, 15)]);
    assert!(!set.contains(7));
    assert!(set.contains(5));
    assert!(set.contains(10));
}

#[test]
fn test_adjacent_spans_are_not_merged() {
    let mut set = set_of(&[(6, 10), (1, 5)]);
    set.merge_all();
    assert_eq!(bounds(&set), vec![(1, 5), (6, 10)]);
    assert_eq!(set.total_coverage().unwrap(), 10);
}

#[test]
fn test_nested_and_duplicate_spans() {
    let mut set = set_of(&[(1, 100), (20, 30), (20, 30), (100, 100)]);
    set.merge_all();
    assert_eq!(bounds(&set), vec![(1, 100)]);
    assert_eq!(set.total_coverage().unwrap(), 100);
}

#[test]
fn test_coverage_requires_merge() {
    let mut set = set_of(&[(3, 5), (4, 6)]);
    assert_eq!(set.total_coverage(), Err(IntervalError::NotMerged));
    set.merge_all();
    assert_eq!(set.total_coverage(), Ok(4));

    set.add(100, 100).unwrap();
    assert!(!set.is_merged());
    assert_eq!(set.total_coverage(), Err(IntervalError::NotMerged));
}

#[test]
fn test_add_rejects_inverted_range() {
    let mut set = IntervalSet::new();
    assert_eq!(
        set.add(9, 2),
        Err(IntervalError::InvalidRange { min: 9, max: 2 })
    );
    assert!(set.is_empty());
    assert!(set.is_merged());
}

#[test]
fn test_empty_set() {
    let set = IntervalSet::default();
    assert_eq!(set.total_coverage(), Ok(0));
    assert_eq!(set.bounding_span(), None);
    assert!(!set.contains(0));
}

#[test]
fn test_bounding_span_ignores_gaps() {
    let set = set_of(&[(10, 14), (3, 5), (16, 20)]);
    assert_eq!(set.bounding_span(), Some(Span::new(3, 20).unwrap()));
    assert_eq!(set.theoretical_max(), Some(18));
    assert_eq!(IntervalSet::new().theoretical_max(), None);
}

#[test]
fn test_full_domain_coverage() {
    let mut set = set_of(&[(0, u64::MAX / 2), (u64::MAX / 2, u64::MAX)]);
    set.merge_all();
    assert_eq!(set.total_coverage(), Ok(1u128 << 64));
}

#[test]
fn test_from_iterator() {
    let mut set: IntervalSet = [Span::single(4), Span::new(1, 4).unwrap()]
        .into_iter()
        .collect();
    assert!(!set.is_merged());
    set.merge_all();
    assert_eq!(bounds(&set), vec![(1, 4)]);
}

fn small_spans() -> impl Strategy<Value = Vec<(u64, u64)>> {
    prop::collection::vec((0u64..200, 0u64..30), 0..25)
        .prop_map(|raw| raw.into_iter().map(|(min, width)| (min, min + width)).collect())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_coverage_matches_brute_force(spans in small_spans()) {
        let mut set = set_of(&spans);
        let expected = (0u64..240).filter(|&id| set.contains(id)).count() as u128;
        set.merge_all();
        prop_assert_eq!(set.total_coverage().unwrap(), expected);
    }

    #[test]
    fn prop_merged_spans_are_disjoint_and_sorted(spans in small_spans()) {
        let mut set = set_of(&spans);
        set.merge_all();
        for pair in set.spans().windows(2) {
            prop_assert!(!pair[0].overlaps(&pair[1]));
            prop_assert!(pair[0].max() < pair[1].min());
        }
    }

    #[test]
    fn prop_merge_is_idempotent(spans in small_spans()) {
        let mut once = set_of(&spans);
        once.merge_all();

        // force a second real pass over already-merged spans
        let mut twice: IntervalSet = once.spans().iter().copied().collect();
        twice.merge_all();
        prop_assert_eq!(bounds(&once), bounds(&twice));
    }

    #[test]
    fn prop_merge_preserves_membership(spans in small_spans()) {
        let unmerged = set_of(&spans);
        let mut merged = unmerged.clone();
        merged.merge_all();
        for id in 0u64..240 {
            prop_assert_eq!(unmerged.contains(id), merged.contains(id), "id {}", id);
        }
    }

    #[test]
    fn prop_strategies_agree(spans in small_spans()) {
        let mut sweep = set_of(&spans);
        let mut fixed_point = sweep.clone();
        sweep.merge_with(MergeStrategy::Sweep);
        fixed_point.merge_with(MergeStrategy::FixedPoint);
        prop_assert_eq!(bounds(&sweep), bounds(&fixed_point));
    }

    #[test]
    fn prop_bounding_span_covers_everything(spans in small_spans()) {
        let set = set_of(&spans);
        match set.bounding_span() {
            Some(bound) => {
                for span in set.spans() {
                    prop_assert!(bound.min() <= span.min() && span.max() <= bound.max());
                }
            }
            None => prop_assert!(spans.is_empty()),
        }
    }

    #[test]
    fn prop_coverage_within_theoretical_max(spans in small_spans()) {
        let mut set = set_of(&spans);
        let limit = set.theoretical_max().unwrap_or(0);
        set.merge_all();
        prop_assert!(set.total_coverage().unwrap() <= limit);
    }
}
