//! Reusable arena fixtures.
//!
//! - [`arena_with_holes`]: holes of chosen sizes separated by allocated blocks.
//! - [`three_tenants`]: `init(100)` with A, B and C of 20 units each.

use partition_arena::Arena;
use partition_core::Strategy;

/// Name of the `i`-th separator block in [`arena_with_holes`].
pub fn separator_name(i: usize) -> String {
    format!("sep{i}")
}

/// Build an arena whose holes have exactly `hole_sizes`, in address order.
///
/// Each hole is followed by an allocated separator of `separator` units
/// named by [`separator_name`]. The arena is sized to fit exactly, so the
/// holes are the only free space.
///
/// # Panics
///
/// Panics if any size is zero.
pub fn arena_with_holes(hole_sizes: &[u32], separator: u32) -> Arena {
    assert!(separator > 0, "separator must be non-empty");
    assert!(hole_sizes.iter().all(|&s| s > 0), "holes must be non-empty");

    let total: u32 = hole_sizes.iter().sum::<u32>() + separator * hole_sizes.len() as u32;
    let mut arena = Arena::init(total).expect("fixture arena size is non-zero");

    // Allocation carves from the tail, so lay the arena out back to front:
    // separator, then a placeholder for the hole in front of it.
    for (i, &size) in hole_sizes.iter().enumerate().rev() {
        arena
            .allocate(separator, &separator_name(i), Strategy::FirstFit)
            .expect("fixture separator fits");
        if i > 0 {
            arena
                .allocate(size, &format!("fill{i}"), Strategy::FirstFit)
                .expect("fixture placeholder fits");
        }
    }
    for i in 1..hole_sizes.len() {
        arena
            .release(&format!("fill{i}"))
            .expect("placeholder was allocated above");
    }
    arena
}

/// `init(100)` then A, B, C of 20 units each with first-fit.
///
/// Layout: hole `[0,39]`, C `[40,59]`, B `[60,79]`, A `[80,99]`.
pub fn three_tenants() -> Arena {
    let mut arena = Arena::init(100).expect("100 is a valid arena size");
    for name in ["A", "B", "C"] {
        arena
            .allocate(20, name, Strategy::FirstFit)
            .expect("three 20-unit blocks fit in 100");
    }
    arena
}
