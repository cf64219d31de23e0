//! Variable-partition arena for the Partition allocator simulator.
//!
//! Models a single contiguous address space as an address-ordered list of
//! blocks, each either a hole or owned by a named process. Allocation picks
//! a hole with a [`Strategy`](partition_core::Strategy), release coalesces
//! with one free neighbour, and compaction gathers every hole into a single
//! region at the front of the arena.
//!
//! # Architecture
//!
//! ```text
//! Arena
//! ├── slots: Vec<Option<Block>>   (owned node storage, recycled via free_slots)
//! ├── head: BlockId               (lowest-address block)
//! └── owners: IndexMap<String, BlockId>  (live names, allocation order)
//! ```
//!
//! Blocks are linked by `prev`/`next` [`BlockId`](partition_core::BlockId)
//! indices into the slot vector rather than by pointers. Split, merge and
//! compaction are index rewrites followed by explicit slot removal.
//!
//! # Invariants
//!
//! Between operations the linked blocks partition `[0, total_size - 1]`
//! exactly, every block has a non-zero size, and owner names are unique.
//! Every failed operation leaves the arena untouched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod block;
pub mod compact;
pub mod config;
pub mod placement;
pub mod release;
pub mod report;
mod split;
pub mod stats;

// Public re-exports for the primary API surface.
pub use arena::{Arena, Blocks};
pub use block::Block;
pub use config::ArenaConfig;
pub use placement::{Candidate, Fit};
pub use release::Coalesced;
pub use report::{Region, Report};
pub use stats::ArenaStats;
