//! Workload profiles for benchmarking the Partition allocator simulator.
//!
//! - [`churn_workload`]: seeded allocate/release mix over a bounded name pool
//! - [`run_workload`]: replay a workload against an arena and tally outcomes
//!
//! Workloads are generated with a fixed linear congruential step so that
//! the same seed always yields the same operation sequence on every
//! platform.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use partition_arena::Arena;
use partition_core::{ArenaError, Strategy};

/// One step of a workload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Request {
    /// Allocate `size` units to `name`.
    Allocate { name: String, size: u32 },
    /// Release whatever `name` owns.
    Release { name: String },
    /// Compact the arena.
    Compact,
}

/// Tally of how a workload played out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorkloadOutcome {
    /// Allocations that succeeded.
    pub placed: usize,
    /// Allocations refused for lack of a large enough hole.
    pub out_of_memory: usize,
    /// Requests rejected as malformed (duplicate names).
    pub rejected: usize,
    /// Releases that freed a block.
    pub released: usize,
    /// Releases of names that owned nothing.
    pub not_found: usize,
    /// Compactions performed.
    pub compactions: usize,
}

/// Deterministic 64-bit LCG step (Knuth's MMIX constants).
fn lcg(state: &mut u64) -> u64 {
    *state = state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407);
    *state >> 33
}

/// Generate `len` requests over `names` distinct process names.
///
/// Roughly 55% allocations (sizes in `1..=max_size`), 40% releases and 5%
/// compactions.
pub fn churn_workload(seed: u64, len: usize, names: usize, max_size: u32) -> Vec<Request> {
    assert!(names > 0 && max_size > 0, "workload needs names and sizes");
    let mut state = seed;
    (0..len)
        .map(|_| {
            let roll = lcg(&mut state) % 100;
            let name = format!("P{}", lcg(&mut state) % names as u64);
            match roll {
                0..=54 => Request::Allocate {
                    name,
                    size: (lcg(&mut state) % u64::from(max_size)) as u32 + 1,
                },
                55..=94 => Request::Release { name },
                _ => Request::Compact,
            }
        })
        .collect()
}

/// Replay `workload` against `arena` with `strategy`.
///
/// Failed requests are counted, not propagated; the arena is unchanged
/// by each of them.
pub fn run_workload(arena: &mut Arena, workload: &[Request], strategy: Strategy) -> WorkloadOutcome {
    let mut outcome = WorkloadOutcome::default();
    for request in workload {
        match request {
            Request::Allocate { name, size } => match arena.allocate(*size, name, strategy) {
                Ok(_) => outcome.placed += 1,
                Err(ArenaError::OutOfMemory { .. }) => outcome.out_of_memory += 1,
                Err(_) => outcome.rejected += 1,
            },
            Request::Release { name } => match arena.release(name) {
                Ok(_) => outcome.released += 1,
                Err(_) => outcome.not_found += 1,
            },
            Request::Compact => {
                arena.compact();
                outcome.compactions += 1;
            }
        }
    }
    outcome
}
