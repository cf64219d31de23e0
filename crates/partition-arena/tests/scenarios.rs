//! Integration tests: end-to-end allocation scenarios.
//!
//! Each test drives the public API through a full init → allocate/release
//! → compact → report cycle and checks the layout and invariants along
//! the way.

use partition_arena::{Arena, Coalesced};
use partition_core::{ArenaError, Strategy};
use partition_test_utils::fixtures::{arena_with_holes, three_tenants};
use partition_test_utils::{
    assert_compacted, assert_no_adjacent_holes, assert_partitioned, layout, occupants, snapshot,
};

#[test]
fn fresh_arena_is_one_free_region() {
    let arena = Arena::init(100).unwrap();
    assert_eq!(snapshot(&arena), layout(&[(0, 99, None)]));
    assert_partitioned(&arena);
}

#[test]
fn first_allocation_takes_the_tail() {
    let mut arena = Arena::init(100).unwrap();
    arena.allocate(30, "P1", Strategy::FirstFit).unwrap();
    assert_eq!(
        snapshot(&arena),
        layout(&[(0, 69, None), (70, 99, Some("P1"))])
    );
    assert_partitioned(&arena);
}

#[test]
fn oversized_request_fails_without_side_effects() {
    let mut arena = Arena::init(100).unwrap();
    arena.allocate(30, "P1", Strategy::FirstFit).unwrap();
    let before = snapshot(&arena);

    let err = arena.allocate(80, "P2", Strategy::FirstFit).unwrap_err();
    assert!(matches!(err, ArenaError::OutOfMemory { requested: 80, .. }));
    assert_eq!(snapshot(&arena), before);
    assert_partitioned(&arena);
}

#[test]
fn release_then_compact_leaves_one_leading_hole() {
    let mut arena = three_tenants();
    let outcome = arena.release("B").unwrap();
    // B sits between C and A, both allocated.
    assert!(matches!(outcome, Coalesced::Standalone(_)));
    assert_partitioned(&arena);

    arena.compact();
    assert_compacted(&arena);
    assert_no_adjacent_holes(&arena);
    assert_eq!(
        snapshot(&arena),
        layout(&[(0, 59, None), (60, 79, Some("C")), (80, 99, Some("A"))])
    );
    assert_eq!(occupants(&arena), vec!["C", "A"]);
}

#[test]
fn best_and_worst_fit_pick_extreme_slack() {
    // Request 10 against holes of 60, 15 and 40 → slack 50, 5 and 30.
    let mut best = arena_with_holes(&[60, 15, 40], 2);
    let id = best.allocate(10, "R", Strategy::BestFit).unwrap();
    let r = best.get(id).unwrap();
    // The 15-unit hole starts at 62; its tail is [67, 76].
    assert_eq!((r.start(), r.end()), (67, 76));
    assert_partitioned(&best);

    let mut worst = arena_with_holes(&[60, 15, 40], 2);
    let id = worst.allocate(10, "R", Strategy::WorstFit).unwrap();
    let r = worst.get(id).unwrap();
    assert_eq!((r.start(), r.end()), (50, 59));
    assert_partitioned(&worst);
}

#[test]
fn slack_ties_go_to_the_lowest_address() {
    let mut best = arena_with_holes(&[30, 12, 30, 12], 1);
    let id = best.allocate(12, "R", Strategy::BestFit).unwrap();
    // Second hole: [31, 42].
    assert_eq!(best.get(id).unwrap().start(), 31);

    let mut worst = arena_with_holes(&[30, 12, 30, 12], 1);
    let id = worst.allocate(12, "R", Strategy::WorstFit).unwrap();
    // First hole: [0, 29], tail [18, 29].
    assert_eq!(worst.get(id).unwrap().start(), 18);
}

#[test]
fn first_fit_takes_the_first_hole_that_fits() {
    let mut arena = arena_with_holes(&[5, 60, 15], 2);
    let id = arena.allocate(10, "R", Strategy::FirstFit).unwrap();
    let r = arena.get(id).unwrap();
    // Second hole is [7, 66].
    assert_eq!((r.start(), r.end()), (57, 66));
}

#[test]
fn strategy_tags_are_validated_before_allocation() {
    let mut arena = Arena::init(100).unwrap();
    let before = snapshot(&arena);
    let err = "next-fit".parse::<Strategy>().unwrap_err();
    assert!(matches!(err, ArenaError::InvalidStrategy { .. }));
    assert_eq!(snapshot(&arena), before);

    let strategy: Strategy = "worst-fit".parse().unwrap();
    arena.allocate(10, "P1", strategy).unwrap();
    assert_partitioned(&arena);
}

#[test]
fn mebibyte_walkthrough_matches_expected_layout() {
    let mut arena = Arena::init(1_048_576).unwrap();
    let requests = [
        ("P1", 51_300),
        ("P2", 89_123),
        ("P6", 49_144),
        ("P3", 81_297),
        ("P4", 777_712),
    ];
    for (name, size) in requests {
        arena.allocate(size, name, Strategy::FirstFit).unwrap();
        assert_partitioned(&arena);
    }
    // 1_048_576 - 1_048_576 = 0: P4 consumed the last hole exactly.
    assert_eq!(arena.stats().free, 0);
    assert_eq!(arena.hole_count(), 0);

    arena.release("P6").unwrap();
    arena.release("P1").unwrap();
    assert_partitioned(&arena);
    assert_eq!(arena.hole_count(), 2);

    arena.compact();
    assert_compacted(&arena);
    assert_eq!(occupants(&arena), vec!["P4", "P3", "P2"]);
    let hole = arena.report().next().unwrap();
    assert_eq!((hole.start, hole.end), (0, 51_300 + 49_144 - 1));
}

#[test]
fn exact_fit_never_leaves_an_empty_block() {
    let mut arena = arena_with_holes(&[10, 20, 30], 3);
    arena.allocate(20, "X", Strategy::BestFit).unwrap();
    assert!(arena.report().all(|r| r.size() > 0));
    assert_eq!(arena.hole_count(), 2);
    assert_partitioned(&arena);
}

#[test]
fn teardown_counts_every_remaining_block() {
    let mut arena = three_tenants();
    arena.release("C").unwrap();
    let blocks = arena.block_count();
    assert_eq!(blocks, 3);
    assert_eq!(arena.teardown(), blocks);
}
