//! In-place compaction.
//!
//! Walks the list from the head. Every hole is swapped leftward past the
//! allocated blocks in front of it until it meets another hole or reaches
//! the head. Once the walk finishes all holes form a run at the front of
//! the arena, which is then folded into a single hole. Allocated blocks
//! keep their relative order. No auxiliary list is built; each step is a
//! relink of two adjacent slots.

use partition_core::BlockId;
use tracing::{debug, trace};

use crate::arena::Arena;

impl Arena {
    /// Gather every hole into one free region at the front of the arena.
    ///
    /// Afterwards the arena holds at most one hole, at the head, followed
    /// by the allocated blocks in their original relative order. Calling
    /// `compact` on an already compacted arena changes nothing.
    pub fn compact(&mut self) {
        let mut swaps = 0usize;
        let mut cursor = Some(self.head);
        while let Some(id) = cursor {
            if self.block(id).is_free() {
                while let Some(prev) = self
                    .block(id)
                    .prev
                    .filter(|p| !self.block(*p).is_free())
                {
                    self.swap_with_next(prev);
                    swaps += 1;
                }
            }
            cursor = self.block(id).next;
        }

        let folded = self.fold_leading_holes();
        debug!(swaps, folded, blocks = self.block_count(), "compacted");
    }

    /// Exchange `a` with its immediate successor.
    ///
    /// The successor takes `a`'s start address and `a` moves up to follow
    /// it; the pair's outer neighbours are relinked to match.
    fn swap_with_next(&mut self, a: BlockId) {
        let (a_start, outer_prev, b) = {
            let blk = self.block(a);
            (
                blk.start,
                blk.prev,
                blk.next.expect("swap_with_next requires a successor"),
            )
        };
        let (b_size, outer_next) = {
            let blk = self.block(b);
            (blk.size, blk.next)
        };

        {
            let blk = self.block_mut(b);
            blk.start = a_start;
            blk.prev = outer_prev;
            blk.next = Some(a);
        }
        {
            let blk = self.block_mut(a);
            blk.start = a_start + b_size;
            blk.prev = Some(b);
            blk.next = outer_next;
        }
        match outer_prev {
            Some(p) => self.block_mut(p).next = Some(b),
            None => self.head = b,
        }
        if let Some(n) = outer_next {
            self.block_mut(n).prev = Some(a);
        }
        trace!(moved_down = %b, moved_up = %a, "swapped blocks");
    }

    /// Fold the run of holes following a free head into the head.
    ///
    /// Returns the number of holes absorbed.
    fn fold_leading_holes(&mut self) -> usize {
        let head = self.head;
        if !self.block(head).is_free() {
            return 0;
        }
        let mut folded = 0;
        while let Some(next) = self.block(head).next.filter(|n| self.block(*n).is_free()) {
            let absorbed = self.unlink(next);
            self.block_mut(head).size += absorbed.size;
            folded += 1;
        }
        folded
    }
}
