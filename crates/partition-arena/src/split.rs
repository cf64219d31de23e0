//! Carving allocated blocks out of holes.

use partition_core::BlockId;
use tracing::trace;

use crate::arena::Arena;
use crate::block::Block;

impl Arena {
    /// Carve `size` units for `name` from the tail of `hole`.
    ///
    /// The hole keeps its start and shrinks; the new block takes the
    /// vacated tail and is linked directly after it. An exact fit leaves
    /// nothing of the hole, so it is unlinked and the new block takes its
    /// place in the list.
    ///
    /// Callers must pass a hole with `size(hole) >= size`.
    pub(crate) fn split(&mut self, hole: BlockId, size: u32, name: &str) -> BlockId {
        let (start, next) = {
            let b = self.block_mut(hole);
            debug_assert!(b.is_free() && b.size >= size);
            b.size -= size;
            (b.start + b.size, b.next)
        };

        let id = self.insert_slot(Block {
            owner: Some(name.to_string()),
            start,
            size,
            prev: Some(hole),
            next,
        });
        if let Some(n) = next {
            self.block_mut(n).prev = Some(id);
        }
        self.block_mut(hole).next = Some(id);

        if self.block(hole).size == 0 {
            self.unlink(hole);
            trace!(hole = %hole, "exact fit consumed hole");
        }

        self.owners.insert(name.to_string(), id);
        id
    }
}
