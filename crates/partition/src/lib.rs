//! Partition: a variable-partition memory allocation simulator.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Partition sub-crates. For most users, adding `partition` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use partition::prelude::*;
//!
//! let mut arena = Arena::init(100).unwrap();
//! arena.allocate(20, "A", Strategy::FirstFit).unwrap();
//! arena.allocate(20, "B", Strategy::FirstFit).unwrap();
//! arena.allocate(20, "C", Strategy::FirstFit).unwrap();
//! arena.release("B").unwrap();
//! arena.compact();
//!
//! let regions: Vec<_> = arena.report().collect();
//! assert_eq!(regions.len(), 3);
//! assert!(regions[0].is_free());
//! assert_eq!(regions[0].size(), 60);
//! assert_eq!(regions[1].occupant, Some("C"));
//! assert_eq!(regions[2].occupant, Some("A"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`arena`] | `partition-arena` | `Arena`, placement, release, compaction, reports, stats |
//! | [`types`] | `partition-core` | `BlockId`, `Strategy`, error types |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The arena and its operations (`partition-arena`).
///
/// Most users only need [`arena::Arena`] and the report types, which are
/// also in the [`prelude`].
pub use partition_arena as arena;

/// Identifiers, strategies and errors (`partition-core`).
pub use partition_core as types;

/// Common imports for typical Partition usage.
///
/// ```rust
/// use partition::prelude::*;
/// ```
pub mod prelude {
    // Arena
    pub use partition_arena::{Arena, ArenaConfig, ArenaStats, Coalesced, Region, Report};

    // Core types
    pub use partition_core::{BlockId, Strategy};

    // Errors
    pub use partition_core::{ArenaError, RequestDefect};
}
