//! Test utilities for Partition development.
//!
//! Invariant checkers that panic with a readable layout dump, an owned
//! [`Layout`] snapshot for before/after comparisons, and fixture builders
//! for the arena shapes the tests keep coming back to.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use partition_arena::Arena;

/// Owned `(start, end, occupant)` triples in address order.
pub type Layout = Vec<(u32, u32, Option<String>)>;

/// Capture the arena layout as owned data.
pub fn snapshot(arena: &Arena) -> Layout {
    arena
        .report()
        .map(|r| (r.start, r.end, r.occupant.map(str::to_string)))
        .collect()
}

/// Build the expected layout from borrowed occupants.
pub fn layout(regions: &[(u32, u32, Option<&str>)]) -> Layout {
    regions
        .iter()
        .map(|&(s, e, o)| (s, e, o.map(str::to_string)))
        .collect()
}

/// Assert that the regions partition `[0, total_size - 1]` exactly, every
/// region is non-empty, and the list links agree with the addresses.
pub fn assert_partitioned(arena: &Arena) {
    let layout = snapshot(arena);
    let dump = arena.report().to_string();

    assert!(!layout.is_empty(), "arena has no blocks");
    assert_eq!(layout[0].0, 0, "first region must start at 0:\n{dump}");
    let mut expected_start = 0u32;
    for (start, end, _) in &layout {
        assert_eq!(*start, expected_start, "gap or overlap at {start}:\n{dump}");
        assert!(end >= start, "empty region at {start}:\n{dump}");
        expected_start = end + 1;
    }
    assert_eq!(
        expected_start,
        arena.total_size(),
        "regions do not reach the end of the arena:\n{dump}"
    );

    // Links must be symmetric and match what the report walked.
    let ids: Vec<_> = arena.blocks().map(|(id, _)| id).collect();
    assert_eq!(ids.len(), layout.len());
    assert_eq!(ids.len(), arena.block_count(), "slot accounting drifted");
    assert!(arena.get(ids[0]).unwrap().prev().is_none());
    for pair in ids.windows(2) {
        assert_eq!(arena.get(pair[0]).unwrap().next(), Some(pair[1]));
        assert_eq!(arena.get(pair[1]).unwrap().prev(), Some(pair[0]));
    }

    // Every live owner is unique and findable.
    let mut owners: Vec<&str> = layout.iter().filter_map(|(_, _, o)| o.as_deref()).collect();
    let live = owners.len();
    owners.sort_unstable();
    owners.dedup();
    assert_eq!(owners.len(), live, "duplicate owner names:\n{dump}");
    assert_eq!(arena.owners().count(), live, "owner index out of sync");
    for name in owners {
        assert!(arena.find(name).is_some(), "owner {name} not indexed");
    }
}

/// Assert that no two consecutive regions are both free.
pub fn assert_no_adjacent_holes(arena: &Arena) {
    let layout = snapshot(arena);
    for pair in layout.windows(2) {
        assert!(
            pair[0].2.is_some() || pair[1].2.is_some(),
            "adjacent holes at {} and {}:\n{}",
            pair[0].0,
            pair[1].0,
            arena.report()
        );
    }
}

/// Assert the post-compaction shape: at most one hole, at the head.
pub fn assert_compacted(arena: &Arena) {
    assert_partitioned(arena);
    let layout = snapshot(arena);
    let holes: Vec<usize> = layout
        .iter()
        .enumerate()
        .filter(|(_, (_, _, o))| o.is_none())
        .map(|(i, _)| i)
        .collect();
    assert!(
        holes.is_empty() || holes == [0],
        "compacted arena must hold at most one hole, at the head:\n{}",
        arena.report()
    );
}

/// Allocated names in address order.
pub fn occupants(arena: &Arena) -> Vec<String> {
    arena
        .report()
        .filter_map(|r| r.occupant.map(str::to_string))
        .collect()
}
