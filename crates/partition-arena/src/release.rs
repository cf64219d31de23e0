//! Releasing named blocks and coalescing with a neighbour.
//!
//! A release merges at most once, and only in one direction: into the
//! next block if it is free, otherwise into the previous block if that is
//! free. A block freed between two holes therefore absorbs into the next
//! one and leaves the previous hole adjacent; [`Arena::compact`] is what
//! cleans that up.

use partition_core::{ArenaError, BlockId};
use tracing::debug;

use crate::arena::Arena;

/// How a released block was coalesced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coalesced {
    /// Absorbed into the following hole, which now starts earlier.
    IntoNext(BlockId),
    /// Absorbed into the preceding hole, which now ends later.
    IntoPrev(BlockId),
    /// No free neighbour; the block stays in place as a hole.
    Standalone(BlockId),
}

impl Coalesced {
    /// The hole that covers the released range afterwards.
    pub fn hole(self) -> BlockId {
        match self {
            Self::IntoNext(id) | Self::IntoPrev(id) | Self::Standalone(id) => id,
        }
    }
}

impl Arena {
    /// Free the block owned by `name` and coalesce it with one neighbour.
    ///
    /// # Errors
    ///
    /// [`ArenaError::NotFound`] if `name` owns no block.
    pub fn release(&mut self, name: &str) -> Result<Coalesced, ArenaError> {
        let Some(id) = self.owners.shift_remove(name) else {
            debug!(name, "release failed: not found");
            return Err(ArenaError::NotFound {
                name: name.to_string(),
            });
        };

        self.block_mut(id).owner = None;
        let outcome = self.merge(id);
        debug!(name, block = %id, ?outcome, "released");
        Ok(outcome)
    }

    /// Coalesce the freshly freed block `id` with at most one free neighbour.
    fn merge(&mut self, id: BlockId) -> Coalesced {
        let (start, size, prev, next) = {
            let b = self.block(id);
            (b.start, b.size, b.prev, b.next)
        };

        if let Some(n) = next.filter(|n| self.block(*n).is_free()) {
            let hole = self.block_mut(n);
            hole.start = start;
            hole.size += size;
            self.unlink(id);
            Coalesced::IntoNext(n)
        } else if let Some(p) = prev.filter(|p| self.block(*p).is_free()) {
            self.block_mut(p).size += size;
            self.unlink(id);
            Coalesced::IntoPrev(p)
        } else {
            Coalesced::Standalone(id)
        }
    }
}
